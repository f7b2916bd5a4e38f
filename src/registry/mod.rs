//! Appliance registry
//!
//! Ordered, in-memory collection of appliances. Insertion order is display
//! order. Every entry gets an [`ApplianceId`] when it is added, and removal
//! goes through that handle, so deleting one of two identical-looking
//! entries removes exactly the one that was selected.

use crate::core::{Appliance, ApplianceId};

#[derive(Debug, Clone)]
struct Entry {
    id: ApplianceId,
    appliance: Appliance,
}

/// Ordered appliance collection
#[derive(Debug, Clone, Default)]
pub struct ApplianceRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ApplianceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an appliance and return its handle
    pub fn add(&mut self, appliance: Appliance) -> ApplianceId {
        let id = ApplianceId(self.next_id);
        self.next_id += 1;

        log::debug!("Adding appliance {} as {}", appliance, id);
        self.entries.push(Entry { id, appliance });
        id
    }

    /// Remove the entry with the given handle.
    ///
    /// Returns the removed appliance, or `None` when the handle is unknown
    /// (already removed or issued by another registry).
    pub fn remove(&mut self, id: ApplianceId) -> Option<Appliance> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);

        log::debug!("Removed appliance {} ({})", entry.appliance, id);
        Some(entry.appliance)
    }

    /// Look up an entry by handle
    pub fn get(&self, id: ApplianceId) -> Option<&Appliance> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.appliance)
    }

    /// Snapshot of the current contents in order
    pub fn list(&self) -> Vec<Appliance> {
        self.appliances().cloned().collect()
    }

    /// Iterate entries with their handles, in order
    pub fn iter(&self) -> impl Iterator<Item = (ApplianceId, &Appliance)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.appliance))
    }

    /// Iterate appliances in order
    pub fn appliances(&self) -> impl Iterator<Item = &Appliance> + '_ {
        self.entries.iter().map(|e| &e.appliance)
    }

    /// Handle of the entry at display position `index`
    pub fn id_at(&self, index: usize) -> Option<ApplianceId> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Appliance> for ApplianceRegistry {
    fn from_iter<I: IntoIterator<Item = Appliance>>(iter: I) -> Self {
        let mut registry = Self::new();
        for appliance in iter {
            registry.add(appliance);
        }
        registry
    }
}
