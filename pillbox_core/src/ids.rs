//! Record identifier generation.
//!
//! Ids start from wall-clock milliseconds but never repeat: each new id is
//! greater than both the last one issued and every id already in the list.

use crate::types::{MedicationId, MedicationRecord};
use crate::{Error, Result};
use chrono::Utc;

/// Issues strictly increasing record ids
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last_issued: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a record appended to `existing`
    pub fn next_id(&mut self, existing: &[MedicationRecord]) -> Result<MedicationId> {
        self.next_id_at(Utc::now().timestamp_millis(), existing)
    }

    /// Next id given the current time in milliseconds
    ///
    /// Fails when a stored id is already `i64::MAX`.
    pub fn next_id_at(
        &mut self,
        now_millis: i64,
        existing: &[MedicationRecord],
    ) -> Result<MedicationId> {
        let mut candidate = now_millis;

        let floors = self
            .last_issued
            .into_iter()
            .chain(existing.iter().map(|r| r.id.0));
        for taken in floors {
            let above = taken.checked_add(1).ok_or_else(|| {
                Error::Store(format!("no record id available above {}", taken))
            })?;
            candidate = candidate.max(above);
        }

        if candidate != now_millis {
            tracing::debug!(
                "Id collision at {} ms, issuing {} instead",
                now_millis,
                candidate
            );
        }

        self.last_issued = Some(candidate);
        Ok(MedicationId(candidate))
    }
}
