use super::helpers::require_status_schema;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Status, StoreKey};
use crate::store::NoteStore;

/// Single-note status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Done,
    Undone,
    Postponed,
}

impl Mark {
    fn apply(self, status: Status) -> Status {
        match self {
            Mark::Done => status.marked_done(),
            Mark::Undone => status.marked_undone(),
            Mark::Postponed => status.marked_postponed(),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Mark::Done => "done",
            Mark::Undone => "undone",
            Mark::Postponed => "postponed",
        }
    }
}

/// Rewrite the store applying `mark` to the note with `id`. An unmatched
/// id is not an error; the store is rewritten unchanged and the caller
/// gets a warning message. A refused transition (postponing a done note)
/// also leaves the record as it was.
pub fn mark<S: NoteStore>(store: &mut S, key: &StoreKey, id: u32, mark: Mark) -> Result<CmdResult> {
    require_status_schema(key)?;

    let mut found = false;
    let mut changed = false;
    store.rewrite(key, &mut |mut note| {
        if note.id == id {
            found = true;
            let next = note.status.map(|status| mark.apply(status));
            changed = next != note.status;
            note.status = next;
        }
        Some(note)
    })?;

    let mut result = CmdResult::default();
    if !found {
        result.add_message(CmdMessage::warning(format!(
            "note {} not found, store unchanged",
            id
        )));
    } else if changed {
        result.add_message(CmdMessage::success(format!(
            "note {} marked {}",
            id,
            mark.verb()
        )));
    } else {
        result.add_message(CmdMessage::info(format!("note {} unchanged", id)));
    }
    Ok(result)
}

/// The bulk sweep: every undone note becomes done, postponed notes keep
/// their state.
pub fn mark_all_done<S: NoteStore>(store: &mut S, key: &StoreKey) -> Result<CmdResult> {
    require_status_schema(key)?;

    store.rewrite(key, &mut |mut note| {
        note.status = note.status.map(Status::swept_done);
        Some(note)
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("all undone notes marked done"));
    Ok(result)
}
