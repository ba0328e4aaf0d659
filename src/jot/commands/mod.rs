use crate::model::Note;
use crate::store::CategorySummary;
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod replace;
pub mod search;
pub mod status;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Notes sharing one date heading of the grouped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: String,
    pub notes: Vec<Note>,
}

/// What a command hands back to its caller. Commands never print; the
/// CLI decides how each of these fields reaches the terminal.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Listed or affected notes, in store order.
    pub notes: Vec<Note>,
    /// Date-grouped view.
    pub groups: Vec<DateGroup>,
    /// Category listing.
    pub categories: Vec<CategorySummary>,
    /// A rendered export payload, when the command produces one.
    pub rendered: Option<String>,
    /// Store paths, for path-reporting commands.
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_groups(mut self, groups: Vec<DateGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategorySummary>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_rendered(mut self, rendered: String) -> Self {
        self.rendered = Some(rendered);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }
}
