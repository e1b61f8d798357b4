//! Medication store: CRUD over the persisted list plus view synchronisation.
//!
//! Every mutation follows the same cycle: load the full list, change it in
//! memory, write the full list back under [`MEDS_KEY`], then reload so the
//! attached [`ListView`] is rebuilt from what was actually stored.

use crate::ids::IdGenerator;
use crate::kv::{KeyValueStore, MEDS_KEY};
use crate::render::{render, ListView};
use crate::types::{MedicationId, MedicationRecord, QuickAddPreset};
use crate::{Error, Result};

/// Check manual entry fields, returning the trimmed name and daily dose
pub fn validate_entry(name: &str, daily_count: &str) -> Result<(String, u32)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidEntry);
    }

    match daily_count.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok((name.to_string(), count)),
        _ => Err(Error::InvalidEntry),
    }
}

/// Decode a stored list; `null` is the empty list
fn parse_records(raw: &str) -> Result<Vec<MedicationRecord>> {
    serde_json::from_str::<Option<Vec<MedicationRecord>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::Store(format!("stored medication list is unreadable: {}", e)))
}

/// The medication list bound to a persistence store and a view
pub struct MedicationStore<S, V> {
    kv: S,
    view: V,
    ids: IdGenerator,
}

impl<S: KeyValueStore, V: ListView> MedicationStore<S, V> {
    pub fn new(kv: S, view: V) -> Self {
        Self {
            kv,
            view,
            ids: IdGenerator::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    /// Read the stored list without touching the view
    ///
    /// A missing or unparseable value reads as an empty list.
    pub fn records(&self) -> Result<Vec<MedicationRecord>> {
        let Some(raw) = self.kv.get(MEDS_KEY)? else {
            return Ok(Vec::new());
        };

        match parse_records(&raw) {
            Ok(meds) => Ok(meds),
            Err(e) => {
                tracing::warn!("{}. Treating as empty.", e);
                Ok(Vec::new())
            }
        }
    }

    /// Read the stored list before rewriting it
    ///
    /// Only a missing value counts as empty; anything unparseable is an error
    /// so a mutation never writes over records it could not read.
    fn records_for_update(&self) -> Result<Vec<MedicationRecord>> {
        match self.kv.get(MEDS_KEY)? {
            Some(raw) => parse_records(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Find one record by id
    pub fn find(&self, id: MedicationId) -> Result<Option<MedicationRecord>> {
        Ok(self.records()?.into_iter().find(|m| m.id == id))
    }

    /// Load the stored list and rebuild the view from it, in stored order
    pub fn load_all(&mut self) -> Result<Vec<MedicationRecord>> {
        let meds = self.records()?;

        self.view.clear();
        for med in &meds {
            self.view.append(render(med));
        }

        tracing::debug!("Rendered {} medications", meds.len());
        Ok(meds)
    }

    /// Persist the full list, then reload
    fn save_all(&mut self, meds: &[MedicationRecord]) -> Result<()> {
        let contents = serde_json::to_string(meds)?;
        self.kv.set(MEDS_KEY, &contents)?;
        self.load_all()?;
        Ok(())
    }

    /// Manual add: validates the entry fields before creating
    pub fn create(&mut self, name: &str, daily_count: &str) -> Result<MedicationId> {
        let (name, count) = validate_entry(name, daily_count).map_err(|e| {
            tracing::info!("Rejected manual entry {:?} / {:?}", name, daily_count);
            e
        })?;
        self.append_record(name, count)
    }

    /// Quick add from a preset; the preset is trusted and not re-validated
    pub fn quick_add(&mut self, preset: &QuickAddPreset) -> Result<MedicationId> {
        self.append_record(preset.name.clone(), preset.dose)
    }

    fn append_record(&mut self, name: String, daily_count: u32) -> Result<MedicationId> {
        let mut meds = self.records_for_update()?;
        let id = self.ids.next_id(&meds)?;

        tracing::info!("Adding {:?} ({} per day) as {}", name, daily_count, id);
        meds.push(MedicationRecord::new(id, name, daily_count));
        self.save_all(&meds)?;
        Ok(id)
    }

    /// Record one dose. Unknown ids and completed records are left untouched
    /// and nothing is written.
    pub fn take(&mut self, id: MedicationId) -> Result<bool> {
        let mut meds = self.records_for_update()?;
        let Some(med) = meds.iter_mut().find(|m| m.id == id) else {
            tracing::debug!("take: no medication {}", id);
            return Ok(false);
        };

        if !med.take_dose() {
            tracing::debug!("take: {} already complete", id);
            return Ok(false);
        }

        self.save_all(&meds)?;
        Ok(true)
    }

    /// Clear the dose counter. Unknown ids are ignored.
    pub fn reset(&mut self, id: MedicationId) -> Result<bool> {
        let mut meds = self.records_for_update()?;
        let Some(med) = meds.iter_mut().find(|m| m.id == id) else {
            tracing::debug!("reset: no medication {}", id);
            return Ok(false);
        };

        med.reset();
        self.save_all(&meds)?;
        Ok(true)
    }

    /// Remove a record. The remaining list is persisted even when nothing
    /// matched.
    pub fn delete(&mut self, id: MedicationId) -> Result<bool> {
        let mut meds = self.records_for_update()?;
        let before = meds.len();
        meds.retain(|m| m.id != id);
        let removed = meds.len() != before;

        if removed {
            tracing::info!("Deleted medication {}", id);
        }
        self.save_all(&meds)?;
        Ok(removed)
    }
}
