//! The line codec. One note is one UTF-8 line: fields joined by single
//! tabs, in fixed order `id [status] date content`, newline-terminated on
//! disk. Decoding is a pure function of the line and the store layout;
//! nothing is cached between calls.

use crate::model::{Note, Schema, Status};

/// Encode one note as its on-disk line: no trailing tab, no newline.
/// Content is assumed sanitized (no tabs or line breaks).
pub fn encode(note: &Note) -> String {
    match note.status {
        Some(status) => format!(
            "{}\t{}\t{}\t{}",
            note.id, status, note.date, note.content
        ),
        None => format!("{}\t{}\t{}", note.id, note.date, note.content),
    }
}

/// Decode one line. Returns `None` for anything short of the layout's
/// mandatory fields or with an unparsable id/status token; callers treat
/// such lines as absent and keep going. The content field is the verbatim
/// tail of the line after the last mandatory delimiter — if it somehow
/// contains further tabs they are kept, not re-split.
pub fn decode(line: &str, schema: Schema) -> Option<Note> {
    match schema {
        Schema::Status => {
            let mut fields = line.splitn(4, '\t');
            let id = parse_id(fields.next()?)?;
            let status = Status::parse(fields.next()?)?;
            let date = fields.next()?.to_string();
            let content = fields.next()?.to_string();
            Some(Note {
                id,
                status: Some(status),
                date,
                content,
            })
        }
        Schema::Plain => {
            let mut fields = line.splitn(3, '\t');
            let id = parse_id(fields.next()?)?;
            let date = fields.next()?.to_string();
            let content = fields.next()?.to_string();
            Some(Note {
                id,
                status: None,
                date,
                content,
            })
        }
    }
}

fn parse_id(field: &str) -> Option<u32> {
    // ids are positive; also reject the '+' prefix u32::parse tolerates
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|id| *id > 0)
}
