//! Projection of medication records into list-item views.
//!
//! [`render`] is pure. A [`ListView`] receives the projected items whenever
//! the store reloads; the text and HTML lists are the two built-in targets.

use crate::dispatch::Action;
use crate::reference;
use crate::types::{MedicationId, MedicationRecord};

/// Progress label colour once all doses are taken
pub const COMPLETED_COLOR: &str = "#4CAF50";

/// Progress label colour while doses remain
pub const IN_PROGRESS_COLOR: &str = "#7758ff";

/// Display model of a single record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PillView {
    pub id: MedicationId,
    pub name: String,
    pub progress_label: String,
    pub completed: bool,
    pub progress_color: &'static str,
    pub learn_more: bool,
}

impl PillView {
    pub fn take_enabled(&self) -> bool {
        !self.completed
    }

    /// Actions this item exposes, in display order
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(4);
        if self.learn_more {
            actions.push(Action::Info);
        }
        if self.take_enabled() {
            actions.push(Action::Take);
        }
        actions.push(Action::Reset);
        actions.push(Action::Delete);
        actions
    }
}

/// Project a record into its view
pub fn render(record: &MedicationRecord) -> PillView {
    let completed = record.is_complete();
    PillView {
        id: record.id,
        name: record.name.clone(),
        progress_label: format!("{} / {}", record.current_count, record.daily_count),
        completed,
        progress_color: if completed {
            COMPLETED_COLOR
        } else {
            IN_PROGRESS_COLOR
        },
        learn_more: reference::is_known(&record.name),
    }
}

/// Rendering collaborator kept in sync with the stored list
pub trait ListView {
    /// Remove every item
    fn clear(&mut self);

    /// Append one item at the end
    fn append(&mut self, item: PillView);
}

/// Plain collection of views, useful when the caller formats items itself
impl ListView for Vec<PillView> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, item: PillView) {
        self.push(item);
    }
}

/// Terminal rendering, one line per item
#[derive(Clone, Debug, Default)]
pub struct TextList {
    lines: Vec<String>,
}

impl TextList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl ListView for TextList {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn append(&mut self, item: PillView) {
        let status = if item.completed { "✓ done" } else { "…" };
        let actions: Vec<&str> = item.actions().iter().map(|a| a.as_str()).collect();
        self.lines.push(format!(
            "[{}] {}  {}  {}  ({})",
            item.id,
            item.name,
            item.progress_label,
            status,
            actions.join(", ")
        ));
    }
}

/// Markup rendering, one `pill-item` block per record
///
/// Buttons carry `data-action` and `data-id` attributes instead of inline
/// handlers so a single listener can route them through [`crate::dispatch`].
#[derive(Clone, Debug, Default)]
pub struct HtmlList {
    items: Vec<String>,
}

impl HtmlList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items joined as one fragment
    pub fn markup(&self) -> String {
        self.items.join("\n")
    }
}

impl ListView for HtmlList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, item: PillView) {
        let id = item.id;
        let info_button = if item.learn_more {
            format!(
                r#"        <button class="info-pill-btn" data-action="info" data-id="{id}">LEARN MORE</button>
"#
            )
        } else {
            String::new()
        };
        let disabled = if item.completed { " disabled" } else { "" };

        self.items.push(format!(
            r#"<div class="pill-item" data-id="{id}">
    <div class="pill-info">
        <span class="pill-name">{name}</span>
        <span class="pill-progress-text" style="color: {color};">{progress}</span>
    </div>
    <div class="pill-controls">
{info_button}        <button class="take-pill-btn" data-action="take" data-id="{id}"{disabled}>TAKE</button>
        <button class="reset-pill-btn" data-action="reset" data-id="{id}">RESET</button>
        <button class="delete-pill-btn" data-action="delete" data-id="{id}">DELETE</button>
    </div>
</div>"#,
            name = escape_html(&item.name),
            color = item.progress_color,
            progress = item.progress_label,
        ));
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
