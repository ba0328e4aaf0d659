use crate::error::{JotError, Result};
use crate::model::{Note, Schema, StoreKey};

/// Next free identifier for a store: `1` when it is empty or missing,
/// otherwise one past the id of the last successfully decoded record.
/// Scans the whole store by design — there is no index to maintain, and
/// a corrupt final line simply falls back to the last decodable id.
pub fn next_id(notes: &[Note]) -> u32 {
    notes.last().map_or(1, |note| note.id + 1)
}

/// Status operations only make sense on the global store; category
/// records carry no status column.
pub fn require_status_schema(key: &StoreKey) -> Result<()> {
    if key.schema() != Schema::Status {
        return Err(JotError::Malformed(
            "notes in a category carry no status".to_string(),
        ));
    }
    Ok(())
}
