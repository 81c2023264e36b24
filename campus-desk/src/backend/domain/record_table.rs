//! Record table rendering for the dashboard views.
//!
//! Turns a projected record sequence into rows of HTML-escaped cells for an
//! explicit column list. The host receives the result through
//! [`Renderer::render_table`](crate::backend::io::Renderer::render_table); this
//! module only produces the data and stays independent of any UI toolkit.

use super::record_store::TableRecord;

/// Column layout of one table view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Record field names, in display order
    pub columns: &'static [&'static str],
    /// Header labels, one per column
    pub headers: &'static [&'static str],
    /// Field the view's filter selector compares against
    pub filter_field: &'static str,
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    /// Escaped cell content
    pub html: String,
    /// Optional styling class (e.g. attendance status)
    pub class: Option<String>,
}

impl RenderedCell {
    pub fn new(html: String) -> Self {
        Self { html, class: None }
    }
}

/// A table body ready for the host, plus its header row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RenderedCell>>,
    /// Message shown in place of the body when there are no rows
    pub placeholder: Option<String>,
}

impl RenderedTable {
    /// Render records for the given layout
    pub fn from_records<T: TableRecord>(records: &[&T], layout: &TableLayout) -> Self {
        Self {
            headers: layout.headers.iter().map(|h| h.to_string()).collect(),
            rows: render_rows(records, layout.columns),
            placeholder: None,
        }
    }

    /// Attach a placeholder message used when the body is empty
    pub fn with_placeholder(mut self, message: &str) -> Self {
        self.placeholder = Some(message.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Body markup (`<tr>` rows) for hosts that take raw HTML
    pub fn body_html(&self) -> String {
        if self.rows.is_empty() {
            if let Some(message) = &self.placeholder {
                return format!(
                    "<tr><td colspan=\"{}\" style=\"text-align:center;color:#64748b;\">{}</td></tr>",
                    self.headers.len(),
                    escape_html(message)
                );
            }
        }
        self.rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .map(|cell| match &cell.class {
                        Some(class) => format!("<td class=\"{}\">{}</td>", class, cell.html),
                        None => format!("<td>{}</td>", cell.html),
                    })
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect()
    }

    /// Cell text as displayed (entities decoded), header excluded
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| unescape_html(&cell.html)).collect())
            .collect()
    }
}

/// One row per record, one escaped cell per column. Missing fields render as "".
pub fn render_rows<T: TableRecord>(records: &[&T], columns: &[&str]) -> Vec<Vec<RenderedCell>> {
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| RenderedCell::new(escape_html(&record.field_text(column))))
                .collect()
        })
        .collect()
}

/// Entity-encode `& < > " '`
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inverse of [`escape_html`]
pub fn unescape_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::values::Scalar;

    struct Item {
        name: &'static str,
        qty: f64,
    }

    impl TableRecord for Item {
        fn field(&self, name: &str) -> Option<Scalar> {
            match name {
                "name" => Some(Scalar::from(self.name)),
                "qty" => Some(Scalar::from(self.qty)),
                _ => None,
            }
        }
    }

    const LAYOUT: TableLayout = TableLayout {
        columns: &["name", "qty", "location"],
        headers: &["Name", "Qty", "Location"],
        filter_field: "name",
    };

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
        assert_eq!(unescape_html("Tom &amp;lt; Jerry"), "Tom &lt; Jerry");
    }

    #[test]
    fn test_render_rows_escapes_and_fills_missing() {
        let items = [Item { name: "<Markers>", qty: 120.0 }];
        let refs: Vec<&Item> = items.iter().collect();
        let table = RenderedTable::from_records(&refs, &LAYOUT);

        assert_eq!(table.headers, vec!["Name", "Qty", "Location"]);
        assert_eq!(table.rows[0][0].html, "&lt;Markers&gt;");
        assert_eq!(table.rows[0][1].html, "120");
        assert_eq!(table.rows[0][2].html, "");
        assert_eq!(table.text_rows(), vec![vec!["<Markers>", "120", ""]]);
    }

    #[test]
    fn test_body_html() {
        let items = [Item { name: "Projector", qty: 4.0 }];
        let refs: Vec<&Item> = items.iter().collect();
        let table = RenderedTable::from_records(&refs, &LAYOUT);
        assert_eq!(table.body_html(), "<tr><td>Projector</td><td>4</td><td></td></tr>");
    }

    #[test]
    fn test_placeholder_row_when_empty() {
        let refs: Vec<&Item> = Vec::new();
        let table = RenderedTable::from_records(&refs, &LAYOUT).with_placeholder("Nothing here.");
        assert!(table.is_empty());
        assert_eq!(
            table.body_html(),
            "<tr><td colspan=\"3\" style=\"text-align:center;color:#64748b;\">Nothing here.</td></tr>"
        );
    }
}
