use super::CmdResult;
use crate::error::Result;
use crate::model::StoreKey;
use crate::store::NoteStore;
use regex::RegexBuilder;

/// Case-sensitive substring search over note content only — ids, dates
/// and status never match. Results keep store order; the match count is
/// the length of the returned list.
pub fn substring<S: NoteStore>(store: &S, key: &StoreKey, term: &str) -> Result<CmdResult> {
    let matched = store
        .notes(key)?
        .into_iter()
        .filter(|note| note.content.contains(term))
        .collect();
    Ok(CmdResult::default().with_notes(matched))
}

/// Case-insensitive regular-expression search over note content only.
/// A pattern that fails to compile aborts before any record is scanned.
pub fn regexp<S: NoteStore>(store: &S, key: &StoreKey, pattern: &str) -> Result<CmdResult> {
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;

    let matched = store
        .notes(key)?
        .into_iter()
        .filter(|note| re.is_match(&note.content))
        .collect();
    Ok(CmdResult::default().with_notes(matched))
}
