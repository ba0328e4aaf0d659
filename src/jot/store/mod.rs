//! # Storage Layer
//!
//! The [`NoteStore`] trait abstracts the flat-file persistence so the
//! command layer can be tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. One newline-terminated record
//!   per note; reads stream the file sequentially, appends go to the end,
//!   and every other mutation is a whole-file rewrite committed by an
//!   atomic rename. No locking — a store is assumed to belong to a single
//!   interactive user, and two racing writers resolve as last-rename-wins.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! ## Keys
//!
//! All operations take a [`StoreKey`]: `Notes` is the single global,
//! status-bearing store; `Category(name)` is an independent plain store,
//! one file per name under the categories directory. A store that does
//! not exist reads as empty.

use crate::error::Result;
use crate::model::{Note, StoreKey};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// One row of the category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    /// `None` when the backing file holds no records at all.
    pub count: Option<usize>,
}

pub trait NoteStore {
    /// Every decodable record, in physical (append) order. Lines that fail
    /// to decode are skipped; a missing store reads as empty.
    fn notes(&self, key: &StoreKey) -> Result<Vec<Note>>;

    /// Number of newline-terminated records, or `None` when the store is
    /// missing or holds no newline at all.
    fn count(&self, key: &StoreKey) -> Result<Option<usize>>;

    /// Append one record at the end, creating the store if needed.
    fn append(&mut self, key: &StoreKey, note: &Note) -> Result<()>;

    /// Stream every record through `transform` and atomically replace the
    /// store with the result: `Some` keeps (possibly rewritten), `None`
    /// omits. Any failure leaves the original store untouched. Callers
    /// that need to know whether anything matched track it inside the
    /// transform.
    fn rewrite(
        &mut self,
        key: &StoreKey,
        transform: &mut dyn FnMut(Note) -> Option<Note>,
    ) -> Result<()>;

    /// Remove the whole store. Removing a missing store is a no-op.
    fn remove(&mut self, key: &StoreKey) -> Result<()>;

    /// Path of the backing file for `key`.
    fn path(&self, key: &StoreKey) -> Result<PathBuf>;

    /// All category stores: one entry per regular file in the categories
    /// directory, sorted by name. Subdirectories are ignored.
    fn categories(&self) -> Result<Vec<CategorySummary>>;
}
