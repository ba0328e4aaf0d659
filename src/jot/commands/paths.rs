use super::CmdResult;
use crate::error::Result;
use crate::model::StoreKey;
use crate::store::NoteStore;

/// Report the backing path of a store.
pub fn run<S: NoteStore>(store: &S, key: &StoreKey) -> Result<CmdResult> {
    let path = store.path(key)?;
    Ok(CmdResult::default().with_paths(vec![path]))
}
