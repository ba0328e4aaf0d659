use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("note {0} not found")]
    NoteNotFound(u32),

    #[error("no notes matched")]
    NoMatches,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid input: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

impl JotError {
    /// Shell-visible status for the binary. Not-found conditions (unknown
    /// id, zero matches) exit 1 so scripts can tell them apart from
    /// malformed input and other failures, which exit 2 like clap's own
    /// usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            JotError::NoteNotFound(_) | JotError::NoMatches => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, JotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_malformed_codes_differ() {
        assert_eq!(JotError::NoteNotFound(7).exit_code(), 1);
        assert_eq!(JotError::NoMatches.exit_code(), 1);
        assert_eq!(JotError::InvalidDate("nope".into()).exit_code(), 2);
        assert_eq!(JotError::Malformed("bad".into()).exit_code(), 2);
    }
}
