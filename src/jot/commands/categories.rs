use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

/// List every category store with its note count.
pub fn run<S: NoteStore>(store: &S) -> Result<CmdResult> {
    let categories = store.categories()?;

    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("no categories"));
    }
    Ok(result.with_categories(categories))
}
