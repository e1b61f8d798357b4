//! Core domain types for Pillbox.
//!
//! - Medication records and their identifiers
//! - Quick-add presets
//! - Reference (knowledge base) entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Medication Records
// ============================================================================

/// Identifier of a medication record (creation time in milliseconds)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MedicationId(pub i64);

impl fmt::Display for MedicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MedicationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(MedicationId)
    }
}

/// A tracked medication or supplement with its dose counter for today
///
/// Field names serialize in camelCase (`dailyCount`, `currentCount`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub id: MedicationId,
    pub name: String,
    pub daily_count: u32,
    pub current_count: u32,
}

impl MedicationRecord {
    /// New record with no doses taken
    pub fn new(id: MedicationId, name: impl Into<String>, daily_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            daily_count,
            current_count: 0,
        }
    }

    /// All doses for today have been taken
    pub fn is_complete(&self) -> bool {
        self.current_count >= self.daily_count
    }

    /// Record one dose. Returns false (and changes nothing) once complete.
    pub fn take_dose(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.current_count += 1;
        true
    }

    /// Clear today's counter
    pub fn reset(&mut self) {
        self.current_count = 0;
    }
}

// ============================================================================
// Quick-add presets
// ============================================================================

/// A fixed (name, dose) pair that bypasses manual entry validation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickAddPreset {
    pub name: String,
    pub dose: u32,
}

impl QuickAddPreset {
    pub fn new(name: impl Into<String>, dose: u32) -> Self {
        Self {
            name: name.into(),
            dose,
        }
    }
}

// ============================================================================
// Reference entries
// ============================================================================

/// Static reference information for a well-known supplement
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PillInfo {
    pub time: &'static str,
    pub advice: &'static str,
    pub description: &'static str,
}
