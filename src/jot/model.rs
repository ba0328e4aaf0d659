/// Lifecycle flag carried by every note in the global store. Category
/// notes have no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Undone,
    Done,
    Postponed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Undone => "Undone",
            Status::Done => "Done",
            Status::Postponed => "Postponed",
        }
    }

    pub fn parse(token: &str) -> Option<Status> {
        match token {
            "Undone" => Some(Status::Undone),
            "Done" => Some(Status::Done),
            "Postponed" => Some(Status::Postponed),
            _ => None,
        }
    }

    /// Marking done always lands on `Done`, from any state.
    pub fn marked_done(self) -> Status {
        Status::Done
    }

    /// Marking undone always lands on `Undone`, from any state.
    pub fn marked_undone(self) -> Status {
        Status::Undone
    }

    /// Only undone notes may be postponed; any other state is kept as-is.
    pub fn marked_postponed(self) -> Status {
        match self {
            Status::Undone => Status::Postponed,
            other => other,
        }
    }

    /// The bulk "everything done" sweep flips undone notes only.
    /// Postponed notes keep their state.
    pub fn swept_done(self) -> Status {
        match self {
            Status::Undone => Status::Done,
            other => other,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field layout of a store: the global notes file carries a status
/// column, category files do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Status,
    Plain,
}

/// Selects which store a command operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The single global notes file.
    Notes,
    /// One independent store per category name.
    Category(String),
}

impl StoreKey {
    pub fn schema(&self) -> Schema {
        match self {
            StoreKey::Notes => Schema::Status,
            StoreKey::Category(_) => Schema::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u32,
    /// `Some` in the global store, `None` in category stores.
    pub status: Option<Status>,
    /// Canonical `yyyy-MM-dd` form.
    pub date: String,
    pub content: String,
}

impl Note {
    /// A fresh note in the given store layout; global-store notes start
    /// out undone.
    pub fn new(id: u32, schema: Schema, date: String, content: String) -> Self {
        let status = match schema {
            Schema::Status => Some(Status::Undone),
            Schema::Plain => None,
        };
        Note {
            id,
            status,
            date,
            content,
        }
    }
}

/// Notes are single-line records and tabs are the field delimiter, so
/// both are stripped from incoming content. Multi-line input collapses
/// to one line.
pub fn sanitize_content(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_is_reachable_from_every_state() {
        assert_eq!(Status::Undone.marked_done(), Status::Done);
        assert_eq!(Status::Postponed.marked_done(), Status::Done);
        assert_eq!(Status::Done.marked_done(), Status::Done);
    }

    #[test]
    fn marking_done_twice_is_marking_done_once() {
        let once = Status::Undone.marked_done();
        let twice = once.marked_done();
        assert_eq!(once, twice);
    }

    #[test]
    fn undone_is_reachable_from_every_state() {
        assert_eq!(Status::Done.marked_undone(), Status::Undone);
        assert_eq!(Status::Postponed.marked_undone(), Status::Undone);
        assert_eq!(Status::Undone.marked_undone(), Status::Undone);
    }

    #[test]
    fn only_undone_notes_can_be_postponed() {
        assert_eq!(Status::Undone.marked_postponed(), Status::Postponed);
        assert_eq!(Status::Done.marked_postponed(), Status::Done);
        assert_eq!(Status::Postponed.marked_postponed(), Status::Postponed);
    }

    #[test]
    fn bulk_sweep_skips_postponed() {
        assert_eq!(Status::Undone.swept_done(), Status::Done);
        assert_eq!(Status::Done.swept_done(), Status::Done);
        assert_eq!(Status::Postponed.swept_done(), Status::Postponed);
    }

    #[test]
    fn status_tokens_round_trip() {
        for status in [Status::Undone, Status::Done, Status::Postponed] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("U"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn sanitize_flattens_newlines_and_tabs() {
        assert_eq!(sanitize_content("buy\nmilk"), "buymilk");
        assert_eq!(sanitize_content("a\tb\r\n"), "ab");
        assert_eq!(sanitize_content("plain"), "plain");
    }

    #[test]
    fn new_note_status_follows_schema() {
        let global = Note::new(1, Schema::Status, "2024-01-01".into(), "x".into());
        assert_eq!(global.status, Some(Status::Undone));

        let plain = Note::new(1, Schema::Plain, "2024-01-01".into(), "x".into());
        assert_eq!(plain.status, None);
    }
}
