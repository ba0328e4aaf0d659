use super::helpers::next_id;
use super::{CmdMessage, CmdResult};
use crate::date;
use crate::error::{JotError, Result};
use crate::model::{sanitize_content, Note, StoreKey};
use crate::store::NoteStore;

/// Append one note. `date` must be a valid `yyyy-MM-dd` when given;
/// otherwise the note is dated today. Content is flattened to a single
/// line and an empty note is refused.
pub fn run<S: NoteStore>(
    store: &mut S,
    key: &StoreKey,
    content: &str,
    date: Option<&str>,
) -> Result<CmdResult> {
    let content = sanitize_content(content);
    if content.is_empty() {
        return Err(JotError::Malformed("refusing to add an empty note".to_string()));
    }

    let date = match date {
        Some(given) => {
            date::validate(given)?;
            given.to_string()
        }
        None => date::today(),
    };

    let id = next_id(&store.notes(key)?);
    let note = Note::new(id, key.schema(), date, content);
    store.append(key, &note)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("note {} added", id)));
    Ok(result.with_notes(vec![note]))
}
