use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, StoreKey};
use crate::store::NoteStore;

/// Render the full listing as a static HTML table. The caller decides
/// where the bytes go; an empty store produces no payload at all.
pub fn run<S: NoteStore>(store: &S, key: &StoreKey) -> Result<CmdResult> {
    let notes = store.notes(key)?;
    if notes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("nothing to export"));
        return Ok(result);
    }

    Ok(CmdResult::default().with_rendered(render_html(key, &notes)))
}

fn render_html(key: &StoreKey, notes: &[Note]) -> String {
    let title = match key {
        StoreKey::Notes => "jot notes".to_string(),
        StoreKey::Category(name) => format!("jot notes: {}", name),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str("<style>td{font-family: monospace; white-space: pre;}</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&title)));
    html.push_str("<table>\n");

    for note in notes {
        html.push_str(&format!("<tr><td>{}</td>", note.id));
        if let Some(status) = note.status {
            html.push_str(&format!("<td>{}</td>", status));
        }
        html.push_str(&format!(
            "<td>{}</td><td>{}</td></tr>\n",
            escape(&note.date),
            escape(&note.content)
        ));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn renders_one_row_per_note() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &StoreKey::Notes, "buy milk", Some("2014-11-01")).unwrap();
        add::run(&mut store, &StoreKey::Notes, "pay rent", Some("2014-11-02")).unwrap();

        let result = run(&store, &StoreKey::Notes).unwrap();
        let html = result.rendered.unwrap();
        assert!(html.contains(
            "<tr><td>1</td><td>Undone</td><td>2014-11-01</td><td>buy milk</td></tr>"
        ));
        assert!(html.contains(
            "<tr><td>2</td><td>Undone</td><td>2014-11-02</td><td>pay rent</td></tr>"
        ));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn category_rows_have_no_status_cell() {
        let mut store = InMemoryStore::new();
        let key = StoreKey::Category("work".into());
        add::run(&mut store, &key, "meet bob", Some("2014-11-01")).unwrap();

        let html = run(&store, &key).unwrap().rendered.unwrap();
        assert!(html.contains("<tr><td>1</td><td>2014-11-01</td><td>meet bob</td></tr>"));
        assert!(html.contains("jot notes: work"));
    }

    #[test]
    fn markup_in_content_is_escaped() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &StoreKey::Notes, "a < b & c > d", None).unwrap();

        let html = run(&store, &StoreKey::Notes).unwrap().rendered.unwrap();
        assert!(html.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn an_empty_store_produces_no_payload() {
        let store = InMemoryStore::new();
        let result = run(&store, &StoreKey::Notes).unwrap();
        assert!(result.rendered.is_none());
        assert!(result.messages[0].content.contains("nothing to export"));
    }
}
