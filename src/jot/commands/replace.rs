use super::{CmdMessage, CmdResult};
use crate::date;
use crate::error::{JotError, Result};
use crate::model::{sanitize_content, StoreKey};
use crate::store::NoteStore;

/// Replace one field of a note. `data` is silently probed as a date
/// first; if the probe fails it becomes the new content. Every other
/// field of the matched note is kept.
pub fn run<S: NoteStore>(store: &mut S, key: &StoreKey, id: u32, data: &str) -> Result<CmdResult> {
    let replacing_date = date::is_valid(data);
    let content = sanitize_content(data);
    if !replacing_date && content.is_empty() {
        return Err(JotError::Malformed(
            "replacement content is empty".to_string(),
        ));
    }

    let mut found = false;
    store.rewrite(key, &mut |mut note| {
        if note.id == id {
            found = true;
            if replacing_date {
                note.date = data.to_string();
            } else {
                note.content = content.clone();
            }
        }
        Some(note)
    })?;

    if !found {
        return Err(JotError::NoteNotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "note {} {} replaced",
        id,
        if replacing_date { "date" } else { "content" }
    )));
    Ok(result)
}
