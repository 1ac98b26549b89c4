//! Render: project a collection onto row view-models.
//!
//! Rendering is a full rebuild. Row `i` of the collection becomes the row
//! displayed at position `i + 1`, and its edit/delete controls carry `i` as
//! their target index. Any mutation of the collection must be followed by a
//! fresh render before another row action is dispatched.

use core_suit_model::{escape_html, Field, Record};

/// One displayed row. All text fields are already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// 1-based display position.
    pub position: usize,
    /// 0-based index into the collection; the row-action target.
    pub index: usize,
    pub name: String,
    pub code: String,
    pub unit: String,
    pub size: String,
    pub year: String,
}

impl RowView {
    fn new(index: usize, record: &Record) -> Self {
        let escaped = |field| escape_html(record.get(field)).into_owned();
        Self {
            position: index + 1,
            index,
            name: escaped(Field::Name),
            code: escaped(Field::Code),
            unit: escaped(Field::Unit),
            size: escaped(Field::Size),
            year: escaped(Field::Year),
        }
    }

    /// Escaped cell texts in column order.
    pub fn cells(&self) -> [&str; 5] {
        [&self.name, &self.code, &self.unit, &self.size, &self.year]
    }

    /// Markup for one table row, with edit and delete controls.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tr>");
        html.push_str(&format!("<td>{}</td>", self.position));
        for cell in self.cells() {
            html.push_str("<td>");
            html.push_str(cell);
            html.push_str("</td>");
        }
        html.push_str(&format!(
            "<td><button data-idx=\"{idx}\" class=\"edit\">Edit</button>\
             <button data-idx=\"{idx}\" class=\"del\">Delete</button></td>",
            idx = self.index
        ));
        html.push_str("</tr>");
        html
    }
}

/// Rebuild the visible rows from the whole collection.
pub fn render(records: &[Record]) -> Vec<RowView> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| RowView::new(index, record))
        .collect()
}

/// Markup for the whole table body, one line per row.
pub fn render_table_body(rows: &[RowView]) -> String {
    rows.iter().map(|row| row.to_html() + "\n").collect()
}

/// Column headings, including the position and action columns.
pub fn column_headings() -> Vec<&'static str> {
    std::iter::once("No")
        .chain(Field::ALL.iter().map(|f| f.label()))
        .chain(std::iter::once("Actions"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records() -> Vec<Record> {
        vec![
            Record::builder("Suit A", "SA1")
                .unit("U1")
                .size("M")
                .year("2024")
                .build(),
            Record::builder("Suit B", "SB2").build(),
        ]
    }

    #[test]
    fn test_positions_and_indices() {
        let rows = render(&records());
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].index), (1, 0));
        assert_eq!((rows[1].position, rows[1].index), (2, 1));
        assert_eq!(rows[0].cells(), ["Suit A", "SA1", "U1", "M", "2024"]);
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        assert!(render(&[]).is_empty());
        assert_eq!(render_table_body(&[]), "");
    }

    #[test]
    fn test_script_renders_as_text() {
        let rows = render(&[Record::builder("<script>x</script>", "X1").build()]);
        let html = rows[0].to_html();

        assert_eq!(rows[0].name, "&lt;script&gt;x&lt;/script&gt;");
        assert!(html.contains("<td>&lt;script&gt;x&lt;/script&gt;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_attribute_breakout_is_escaped() {
        let rows = render(&[Record::builder("A", r#"" onclick="x'"#).build()]);
        assert_eq!(rows[0].code, "&quot; onclick=&quot;x&#39;");
    }

    #[test]
    fn test_row_html() {
        let rows = render(&records()[1..]);
        assert_eq!(
            rows[0].to_html(),
            "<tr><td>1</td><td>Suit B</td><td>SB2</td><td></td><td></td><td></td>\
             <td><button data-idx=\"0\" class=\"edit\">Edit</button>\
             <button data-idx=\"0\" class=\"del\">Delete</button></td></tr>"
        );
    }

    #[test]
    fn test_table_body_has_one_line_per_row() {
        let body = render_table_body(&render(&records()));
        assert_eq!(body.lines().count(), 2);
        assert!(body.lines().nth(1).unwrap().contains("data-idx=\"1\""));
    }

    #[test]
    fn test_column_headings() {
        assert_eq!(
            column_headings(),
            vec!["No", "Name", "Code", "Unit", "Size", "Year", "Actions"]
        );
    }

    proptest! {
        #[test]
        fn test_one_row_per_record(names in prop::collection::vec("[a-z<>&]{1,8}", 0..20)) {
            let records: Vec<Record> = names
                .iter()
                .map(|n| Record::builder(n.as_str(), "C").build())
                .collect();
            let rows = render(&records);

            prop_assert_eq!(rows.len(), records.len());
            for (i, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.index, i);
                prop_assert_eq!(row.position, i + 1);
                prop_assert!(!row.name.contains('<'));
            }
        }
    }
}
