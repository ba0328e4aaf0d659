use super::{CategorySummary, NoteStore};
use crate::error::{JotError, Result};
use crate::model::{Note, StoreKey};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory store for tests. Mirrors the file store's observable
/// behavior: a key with no entry reads as an empty store, and a store
/// emptied by `remove` is indistinguishable from one that never existed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    stores: HashMap<StoreKey, Vec<Note>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn notes(&self, key: &StoreKey) -> Result<Vec<Note>> {
        Ok(self.stores.get(key).cloned().unwrap_or_default())
    }

    fn count(&self, key: &StoreKey) -> Result<Option<usize>> {
        Ok(self
            .stores
            .get(key)
            .map(|notes| notes.len())
            .filter(|len| *len > 0))
    }

    fn append(&mut self, key: &StoreKey, note: &Note) -> Result<()> {
        self.stores
            .entry(key.clone())
            .or_default()
            .push(note.clone());
        Ok(())
    }

    fn rewrite(
        &mut self,
        key: &StoreKey,
        transform: &mut dyn FnMut(Note) -> Option<Note>,
    ) -> Result<()> {
        if let Some(notes) = self.stores.get_mut(key) {
            let kept = notes.drain(..).filter_map(|note| transform(note)).collect();
            *notes = kept;
        }
        Ok(())
    }

    fn remove(&mut self, key: &StoreKey) -> Result<()> {
        self.stores.remove(key);
        Ok(())
    }

    fn path(&self, _key: &StoreKey) -> Result<PathBuf> {
        Err(JotError::Store(
            "in-memory store has no backing path".to_string(),
        ))
    }

    fn categories(&self) -> Result<Vec<CategorySummary>> {
        let mut summaries: Vec<CategorySummary> = self
            .stores
            .iter()
            .filter_map(|(key, notes)| match key {
                StoreKey::Category(name) => Some(CategorySummary {
                    name: name.clone(),
                    count: Some(notes.len()).filter(|len| *len > 0),
                }),
                StoreKey::Notes => None,
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }
}
