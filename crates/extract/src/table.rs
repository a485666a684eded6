//! Conversion of an HTML `<table>` into a raw header/row grid.

use scraper::ElementRef;

use crate::consts;

/// Header labels plus data rows, exactly as they appear in the table.
///
/// Rows are ragged: a row can be shorter or longer than `headers`, so
/// consumers must index defensively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
impl RawTable {
    /// Builds the grid for a `<table>` element.
    ///
    /// Headers come from the `<thead>` rows when there are any, otherwise the
    /// first row is promoted to the header and dropped from the data. Rows made
    /// up entirely of `<th>` cells are skipped, since a few pages mix header
    /// markup into the body.
    pub fn from_element(table: ElementRef<'_>) -> Self {
        let rows = own_rows(table);
        let (head, body): (Vec<_>, Vec<_>) = rows.into_iter().partition(|row| in_thead(*row));
        let mut headers: Vec<String> = head.iter().flat_map(|row| cells(*row)).map(cell_text).collect();
        let mut body = body.as_slice();
        if headers.is_empty() {
            if let Some((first, rest)) = body.split_first() {
                headers = cells(*first).into_iter().map(cell_text).collect();
                body = rest;
            }
        }
        let rows = body
            .iter()
            .filter_map(|row| {
                let cells = cells(*row);
                let has_data = cells.iter().any(|cell| cell.value().name() == "td");
                has_data.then(|| cells.into_iter().map(cell_text).collect::<Vec<_>>())
            })
            .collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All `<tr>` rows that belong to this table (rows of nested tables excluded).
fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table
        .select(&consts::ROW_SELECTOR)
        .filter(|row| {
            row.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|ancestor| ancestor.value().name() == "table")
                .is_some_and(|owner| owner == table)
        })
        .collect()
}

fn in_thead(row: ElementRef<'_>) -> bool {
    row.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "thead")
}

/// Direct `<th>`/`<td>` children of a row, in order.
fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn parse(html: &str) -> RawTable {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("table").unwrap();
        RawTable::from_element(document.select(&selector).next().unwrap())
    }

    #[test]
    fn test_thead_headers() {
        let table = parse(
            r#"<table>
                <thead><tr><th>参数</th><th>说明</th></tr></thead>
                <tbody>
                    <tr><td> size </td><td>按钮大小</td></tr>
                    <tr><td>type</td><td>按钮类型</td></tr>
                </tbody>
            </table>"#,
        );
        assert_eq!(table.headers, vec!["参数", "说明"]);
        assert_eq!(table.rows, vec![vec!["size", "按钮大小"], vec!["type", "按钮类型"]]);
    }

    #[test]
    fn test_first_row_promoted_without_thead() {
        let table = parse(
            r#"<table>
                <tr><td>Property</td><td>Description</td></tr>
                <tr><td>loading</td><td>Set the loading status</td></tr>
            </table>"#,
        );
        assert_eq!(table.headers, vec!["Property", "Description"]);
        assert_eq!(table.rows, vec![vec!["loading", "Set the loading status"]]);
    }

    #[test]
    fn test_header_only_rows_in_body_are_skipped() {
        let table = parse(
            r#"<table>
                <thead><tr><th>Event</th><th>Callback</th></tr></thead>
                <tbody>
                    <tr><th>Group</th><th>Header</th></tr>
                    <tr><td>click</td><td>(event) => void</td></tr>
                </tbody>
            </table>"#,
        );
        assert_eq!(table.rows, vec![vec!["click", "(event) => void"]]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let table = parse(
            r#"<table>
                <thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>
                <tbody>
                    <tr><td>1</td></tr>
                    <tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>
                    <tr></tr>
                </tbody>
            </table>"#,
        );
        assert_eq!(table.rows, vec![vec!["1"], vec!["1", "2", "3", "4"]]);
    }

    #[test]
    fn test_nested_tables_are_ignored() {
        let table = parse(
            r#"<table>
                <thead><tr><th>Name</th><th>Type</th></tr></thead>
                <tbody>
                    <tr><td>columns</td><td><table><tr><td>inner</td></tr></table></td></tr>
                </tbody>
            </table>"#,
        );
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "columns");
    }

    #[test]
    fn test_empty_table() {
        let table = parse("<table></table>");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
