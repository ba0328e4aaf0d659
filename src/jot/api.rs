//! # API Facade
//!
//! The single entry point for every jot operation, regardless of the UI
//! in front of it. The facade dispatches to the command layer and returns
//! structured `CmdResult` values — no business logic, no I/O, no
//! presentation. `JotApi<S: NoteStore>` is generic over the storage
//! backend so the same surface runs against `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::StoreKey;
use crate::store::NoteStore;
use std::path::PathBuf;

pub struct JotApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> JotApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_note(
        &mut self,
        key: &StoreKey,
        content: &str,
        date: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, key, content, date)
    }

    pub fn list_notes(&self, key: &StoreKey, filter: ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, key, filter)
    }

    pub fn latest_notes(&self, key: &StoreKey, count: i64) -> Result<commands::CmdResult> {
        commands::list::latest(&self.store, key, count)
    }

    pub fn notes_by_date(&self, key: &StoreKey) -> Result<commands::CmdResult> {
        commands::list::tree(&self.store, key)
    }

    pub fn search_notes(&self, key: &StoreKey, term: &str) -> Result<commands::CmdResult> {
        commands::search::substring(&self.store, key, term)
    }

    pub fn search_regexp(&self, key: &StoreKey, pattern: &str) -> Result<commands::CmdResult> {
        commands::search::regexp(&self.store, key, pattern)
    }

    pub fn mark_note(&mut self, key: &StoreKey, id: u32, mark: Mark) -> Result<commands::CmdResult> {
        commands::status::mark(&mut self.store, key, id, mark)
    }

    pub fn mark_all_done(&mut self, key: &StoreKey) -> Result<commands::CmdResult> {
        commands::status::mark_all_done(&mut self.store, key)
    }

    pub fn delete_note(&mut self, key: &StoreKey, id: u32) -> Result<commands::CmdResult> {
        commands::delete::one(&mut self.store, key, id)
    }

    pub fn delete_done_notes(&mut self, key: &StoreKey) -> Result<commands::CmdResult> {
        commands::delete::done(&mut self.store, key)
    }

    pub fn delete_all_notes(&mut self, key: &StoreKey) -> Result<commands::CmdResult> {
        commands::delete::all(&mut self.store, key)
    }

    pub fn replace_note(&mut self, key: &StoreKey, id: u32, data: &str) -> Result<commands::CmdResult> {
        commands::replace::run(&mut self.store, key, id, data)
    }

    pub fn export_html(&self, key: &StoreKey) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, key)
    }

    pub fn store_path(&self, key: &StoreKey) -> Result<PathBuf> {
        self.store.path(key)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }
}

pub use commands::list::ListFilter;
pub use commands::status::Mark;
pub use commands::{CmdMessage, CmdResult, DateGroup, MessageLevel};
