use super::{CmdResult, DateGroup};
use crate::error::Result;
use crate::model::{Status, StoreKey};
use crate::store::NoteStore;

/// Which slice of the store a listing shows. The default view hides
/// postponed notes; they only appear when asked for explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    Default,
    Undone,
    Postponed,
}

pub fn run<S: NoteStore>(store: &S, key: &StoreKey, filter: ListFilter) -> Result<CmdResult> {
    let listed = store
        .notes(key)?
        .into_iter()
        .filter(|note| match filter {
            ListFilter::Default => note.status != Some(Status::Postponed),
            ListFilter::Undone => note.status == Some(Status::Undone),
            ListFilter::Postponed => note.status == Some(Status::Postponed),
        })
        .collect();
    Ok(CmdResult::default().with_notes(listed))
}

/// The last `count` records, in original order. A negative count, or one
/// larger than the store, lists everything.
pub fn latest<S: NoteStore>(store: &S, key: &StoreKey, count: i64) -> Result<CmdResult> {
    let notes = store.notes(key)?;
    let total = notes.len() as i64;
    let skip = if count < 0 || count > total {
        0
    } else {
        (total - count) as usize
    };
    let listed = notes.into_iter().skip(skip).collect();
    Ok(CmdResult::default().with_notes(listed))
}

/// Group records by date. Headings appear in the order each distinct
/// date is first seen; under a heading, notes keep file order.
pub fn tree<S: NoteStore>(store: &S, key: &StoreKey) -> Result<CmdResult> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for note in store.notes(key)? {
        match groups.iter_mut().find(|group| group.date == note.date) {
            Some(group) => group.notes.push(note),
            None => groups.push(DateGroup {
                date: note.date.clone(),
                notes: vec![note],
            }),
        }
    }
    Ok(CmdResult::default().with_groups(groups))
}
