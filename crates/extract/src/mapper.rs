//! Mapping raw table rows onto [`ApiItem`]s.

use std::collections::HashMap;

use tracing::debug;

use crate::consts::EMPTY_PLACEHOLDER;
use crate::models::{ApiItem, ApiKind, DocVersion};
use crate::normalize::{self, Field};
use crate::table::RawTable;

/// What every item extracted from one page has in common.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContext {
    pub version: DocVersion,
    pub component_tag: String,
    pub source_url: String,
}

/// Column index of each canonical field. Built once per table.
#[derive(Debug, Default)]
struct ColumnMap(HashMap<Field, usize>);
impl ColumnMap {
    fn new(headers: &[String]) -> Self {
        // Later duplicates overwrite earlier ones.
        let columns = headers
            .iter()
            .enumerate()
            .filter_map(|(index, header)| normalize::normalize_header(header).field().map(|field| (field, index)))
            .collect();
        Self(columns)
    }

    /// Trimmed cell text for `field`, `None` when the table has no such column
    /// or the row is too short to reach it.
    fn cell<'r>(&self, row: &'r [String], field: Field) -> Option<&'r str> {
        self.0.get(&field).and_then(|index| row.get(*index)).map(|cell| cell.trim())
    }

    /// Like [`ColumnMap::cell`], but empty cells count as unspecified.
    fn text(&self, row: &[String], field: Field) -> Option<String> {
        self.cell(row, field).filter(|text| !text.is_empty()).map(str::to_string)
    }

    fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }
}

/// Converts every usable row of `table` into an item of `kind`.
///
/// Rows without a name (or named `-`) are dropped silently. Duplicate names
/// are kept as separate items.
pub fn map_rows(table: &RawTable, kind: ApiKind, context: &ItemContext) -> Vec<ApiItem> {
    let columns = ColumnMap::new(&table.headers);
    let items: Vec<_> = table
        .rows
        .iter()
        .filter_map(|row| map_row(&columns, row, kind, context))
        .collect();
    debug!(%kind, rows = table.rows.len(), items = items.len(), "mapped table rows");
    items
}

fn map_row(columns: &ColumnMap, row: &[String], kind: ApiKind, context: &ItemContext) -> Option<ApiItem> {
    let name = match columns.has(Field::Name) {
        true => columns.cell(row, Field::Name),
        false => row.first().map(|cell| cell.trim()),
    }?;
    if name.is_empty() || name == EMPTY_PLACEHOLDER {
        return None;
    }

    let type_name = columns.text(row, Field::Type);
    // An empty values cell falls back to the literals of the type expression.
    let enum_values = match columns.text(row, Field::Values) {
        Some(values) => normalize::split_values(&values),
        None => type_name.as_deref().map(normalize::parse_enum_values).unwrap_or_default(),
    };

    Some(ApiItem {
        version: context.version,
        component_tag: context.component_tag.clone(),
        kind,
        name: name.to_string(),
        required: columns.cell(row, Field::Required).is_some_and(normalize::parse_required_flag),
        default_value: columns.text(row, Field::Default),
        description: columns.text(row, Field::Description),
        enum_values: (!enum_values.is_empty()).then_some(enum_values),
        since: columns.text(row, Field::Since),
        deprecated: columns.text(row, Field::Deprecated),
        source_url: context.source_url.clone(),
        type_name,
    })
}
