use super::helpers::require_status_schema;
use super::{CmdMessage, CmdResult};
use crate::error::{JotError, Result};
use crate::model::{Status, StoreKey};
use crate::store::NoteStore;

/// Delete one note by id. Unlike the status transitions, a missing id is
/// an error — though the rewrite has already run by then, it reproduced
/// the store verbatim, so nothing was lost.
pub fn one<S: NoteStore>(store: &mut S, key: &StoreKey, id: u32) -> Result<CmdResult> {
    let mut found = false;
    store.rewrite(key, &mut |note| {
        if note.id == id {
            found = true;
            None
        } else {
            Some(note)
        }
    })?;

    if !found {
        return Err(JotError::NoteNotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("note {} deleted", id)));
    Ok(result)
}

/// Omit every note currently marked done.
pub fn done<S: NoteStore>(store: &mut S, key: &StoreKey) -> Result<CmdResult> {
    require_status_schema(key)?;

    let mut removed = 0usize;
    store.rewrite(key, &mut |note| {
        if note.status == Some(Status::Done) {
            removed += 1;
            None
        } else {
            Some(note)
        }
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} done {} deleted",
        removed,
        if removed == 1 { "note" } else { "notes" }
    )));
    Ok(result)
}

/// Drop the whole store. The confirmation prompt lives at the CLI
/// boundary; by the time this runs the decision has been made.
pub fn all<S: NoteStore>(store: &mut S, key: &StoreKey) -> Result<CmdResult> {
    store.remove(key)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("all notes deleted"));
    Ok(result)
}
