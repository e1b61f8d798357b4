//! Routing of per-item actions to the store.
//!
//! Rendered items expose actions addressed by record id; a UI resolves a
//! user trigger into an [`Action`] and passes it here instead of calling
//! store methods directly.

use crate::kv::KeyValueStore;
use crate::reference;
use crate::render::ListView;
use crate::store::MedicationStore;
use crate::types::{MedicationId, PillInfo};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Per-item action kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Take,
    Reset,
    Delete,
    Info,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Take, Action::Reset, Action::Delete, Action::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Take => "take",
            Action::Reset => "reset",
            Action::Delete => "delete",
            Action::Info => "info",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// What a dispatched action did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The list was rewritten
    Updated,
    /// Nothing to do (unknown id, or dose target already reached)
    Unchanged,
    /// Reference entry for the record's name
    Info {
        name: String,
        info: &'static PillInfo,
    },
}

/// Apply `action` to the record `id`
///
/// Unknown ids are a silent no-op for every action. `Info` on a record whose
/// name has no reference entry returns [`Error::InfoUnavailable`].
pub fn dispatch<S: KeyValueStore, V: ListView>(
    store: &mut MedicationStore<S, V>,
    action: Action,
    id: MedicationId,
) -> Result<Outcome> {
    tracing::debug!("Dispatching {} for {}", action, id);

    let changed = match action {
        Action::Take => store.take(id)?,
        Action::Reset => store.reset(id)?,
        Action::Delete => store.delete(id)?,
        Action::Info => {
            return match store.find(id)? {
                Some(med) => {
                    let info = reference::describe(&med.name)?;
                    Ok(Outcome::Info {
                        name: med.name,
                        info,
                    })
                }
                None => Ok(Outcome::Unchanged),
            };
        }
    };

    Ok(if changed {
        Outcome::Updated
    } else {
        Outcome::Unchanged
    })
}
