use clap::{Parser, Subcommand};
use pillbox_core::config::DataConfig;
use pillbox_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pillbox")]
#[command(about = "Daily medication and supplement tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all medications (default)
    List {
        /// Render as HTML list items
        #[arg(long)]
        html: bool,
    },

    /// Add a medication with its daily dose
    Add {
        /// Display name
        name: String,

        /// Doses per day (1 or more)
        daily_count: String,
    },

    /// Add a configured preset; lists presets when no name is given
    Quick {
        /// Preset name, e.g. "Omega-3"
        preset: Option<String>,
    },

    /// Record one dose taken
    Take { id: MedicationId },

    /// Set today's count back to zero
    Reset { id: MedicationId },

    /// Remove a medication
    Delete { id: MedicationId },

    /// Show reference information for a tracked medication
    Info { id: MedicationId },

    /// Show reference information for a supplement by name
    About { name: String },

    /// Show or switch the colour theme
    Theme {
        /// Switch between dark and light
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    pillbox_core::logging::init_with_level(&config.logging.level);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        // Informational only, nothing was rejected
        Err(e @ Error::InfoUnavailable(_)) => {
            eprintln!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_user_notice() => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| config.data.data_dir.clone());
    let kv = FileStore::new(DataConfig::store_path(&data_dir));

    match cli.command {
        None => cmd_list(kv, false),
        Some(Commands::List { html }) => cmd_list(kv, html),
        Some(Commands::Add { name, daily_count }) => cmd_add(kv, &name, &daily_count),
        Some(Commands::Quick { preset }) => cmd_quick(kv, preset, config),
        Some(Commands::Take { id }) => cmd_action(kv, Action::Take, id),
        Some(Commands::Reset { id }) => cmd_action(kv, Action::Reset, id),
        Some(Commands::Delete { id }) => cmd_action(kv, Action::Delete, id),
        Some(Commands::Info { id }) => cmd_action(kv, Action::Info, id),
        Some(Commands::About { name }) => {
            display_info(&name, reference::describe(&name)?);
            Ok(())
        }
        Some(Commands::Theme { toggle }) => cmd_theme(kv, toggle),
    }
}

fn cmd_list(kv: FileStore, html: bool) -> Result<()> {
    if html {
        let mut store = MedicationStore::new(kv, HtmlList::new());
        store.load_all()?;
        println!("{}", store.view().markup());
    } else {
        let mut store = MedicationStore::new(kv, TextList::new());
        store.load_all()?;
        display_list(store.view());
    }
    Ok(())
}

fn cmd_add(kv: FileStore, name: &str, daily_count: &str) -> Result<()> {
    let mut store = MedicationStore::new(kv, TextList::new());
    let id = store.create(name, daily_count)?;

    println!("✓ Added {} ({})", name.trim(), id);
    display_list(store.view());
    Ok(())
}

fn cmd_quick(kv: FileStore, preset: Option<String>, config: &Config) -> Result<()> {
    let Some(name) = preset else {
        println!("Quick add presets:");
        for preset in &config.quick_add.presets {
            println!("  {} × {}", preset.name, preset.dose);
        }
        return Ok(());
    };

    let preset = config
        .quick_add
        .find(&name)
        .ok_or_else(|| Error::Other(format!("Unknown preset: {}", name)))?;

    let mut store = MedicationStore::new(kv, TextList::new());
    let id = store.quick_add(preset)?;

    println!("✓ Added {} ({})", preset.name, id);
    display_list(store.view());
    Ok(())
}

fn cmd_action(kv: FileStore, action: Action, id: MedicationId) -> Result<()> {
    let mut store = MedicationStore::new(kv, TextList::new());

    match dispatch(&mut store, action, id)? {
        Outcome::Info { name, info } => {
            display_info(&name, info);
            return Ok(());
        }
        Outcome::Updated => {}
        Outcome::Unchanged if action == Action::Info => {
            println!("No medication with id {}.", id);
            return Ok(());
        }
        Outcome::Unchanged => {
            println!("Nothing to {} for {}.", action, id);
            store.load_all()?;
        }
    }

    display_list(store.view());
    Ok(())
}

fn cmd_theme(mut kv: FileStore, toggle: bool) -> Result<()> {
    let theme = if toggle {
        Theme::toggle(&mut kv)?
    } else {
        Theme::load(&kv)?
    };

    println!("Theme: {}", theme);
    println!("  Toggle: {}", theme.toggle_label());
    Ok(())
}

fn display_list(list: &TextList) {
    println!();
    if list.is_empty() {
        println!("  No medications yet.");
    }
    for line in list.lines() {
        println!("  {}", line);
    }
    println!();
}

fn display_info(name: &str, info: &PillInfo) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  When:   {}", info.time);
    println!("  Advice: {}", info.advice);
    println!();
    println!("  {}", info.description);
    println!();
}
