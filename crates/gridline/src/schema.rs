//! Column schema and table definition types.
//!
//! A [`TableDefinition`] describes everything a table widget needs to know
//! about its shape before any data arrives: the ordered [`ColumnSchema`]
//! list, the initially active sort column, an optional pagination window,
//! and an optional row-click configuration. Row data itself is an opaque
//! mapping from column `data_property` keys to [`CellValue`]s, supplied
//! wholesale by the data store and never mutated by the widget.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::TableError;

/// The data type of a column, driving per-cell formatting.
///
/// Cell rendering dispatches exhaustively on this tag; see
/// [`render_cell`](crate::cell::render_cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Plain text, rendered as-is.
    String,
    /// Numeric value, rendered as-is.
    Number,
    /// Epoch-millisecond timestamp, reformatted with the column's
    /// `time_format` pattern.
    Time,
    /// Numeric value rendered with a `%` suffix.
    Percent,
    /// Elapsed-time indicator: a timestamp plus an online flag, rendered
    /// with an on/off status icon.
    Status,
}

/// A sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Immutable description of one table column.
///
/// `sort_direction` is the *default* direction applied when the column
/// becomes the active sort column; a column without one is not sortable.
///
/// # Example
///
/// ```
/// use gridline::schema::{ColumnSchema, DataType, SortDirection};
///
/// let col = ColumnSchema::new("last_seen", DataType::Time)
///     .with_sort_direction(SortDirection::Descending)
///     .with_time_format("%b %-d, %-I %p");
/// assert!(col.is_sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Key into each row's value map.
    pub data_property: String,
    /// Formatting tag for this column's cells.
    pub data_type: DataType,
    /// Optional key whose value supplies hover text for this column's cells.
    pub hover_property: Option<String>,
    /// Default sort direction; `None` makes the column unsortable.
    pub sort_direction: Option<SortDirection>,
    /// chrono strftime pattern for `Time` and `Status` columns.
    pub time_format: Option<String>,
    /// Whether this column opts in to the quick filter.
    pub quick_filter: bool,
}

impl ColumnSchema {
    /// Creates a new column schema for the given data property and type.
    pub fn new(data_property: impl Into<String>, data_type: DataType) -> Self {
        Self {
            data_property: data_property.into(),
            data_type,
            hover_property: None,
            sort_direction: None,
            time_format: None,
            quick_filter: false,
        }
    }

    /// Sets the hover property.
    pub fn with_hover_property(mut self, property: impl Into<String>) -> Self {
        self.hover_property = Some(property.into());
        self
    }

    /// Sets the default sort direction, making the column sortable.
    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    /// Sets the time format pattern.
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Opts the column in to (or out of) the quick filter.
    pub fn with_quick_filter(mut self, enabled: bool) -> Self {
        self.quick_filter = enabled;
        self
    }

    /// Returns `true` if the column has a configured sort direction.
    pub fn is_sortable(&self) -> bool {
        self.sort_direction.is_some()
    }
}

/// A pagination window over the full result count.
///
/// `cursor` is the index of the first visible row; `size` is the number of
/// rows per page and must be greater than zero (enforced by
/// [`TableDefinition::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Index of the first visible row within the full result count.
    pub cursor: usize,
    /// Number of rows per page.
    pub size: usize,
}

impl Pagination {
    /// Creates a new pagination window.
    pub fn new(cursor: usize, size: usize) -> Self {
        Self { cursor, size }
    }
}

type RowCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Row-activation configuration.
///
/// Declaring a `RowClick` makes rows clickable. The callback may be left
/// unbound (for instance while the embedding application is still wiring
/// handlers); activating a row through an unbound callback is a
/// configuration defect and fails with
/// [`TableError::RowClickNotCallable`](crate::error::TableError) rather
/// than silently doing nothing.
#[derive(Clone)]
pub struct RowClick {
    callback: Option<RowCallback>,
}

impl RowClick {
    /// Creates a row-click configuration with a bound callback.
    ///
    /// The callback receives the activated row's index.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// Creates a row-click configuration with no callback bound.
    pub fn unbound() -> Self {
        Self { callback: None }
    }

    /// Returns `true` if a callback is bound.
    pub fn is_bound(&self) -> bool {
        self.callback.is_some()
    }

    /// Invokes the callback with the given row index, if one is bound.
    pub fn invoke(&self, row_index: usize) {
        if let Some(callback) = &self.callback {
            callback(row_index);
        }
    }
}

impl fmt::Debug for RowClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowClick")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// The complete shape of a table: columns, initial sort, pagination, and
/// row-click configuration.
#[derive(Debug, Clone, Default)]
pub struct TableDefinition {
    /// Ordered column schemas.
    pub cols: Vec<ColumnSchema>,
    /// Initially active sort column index.
    pub sort_col_index: Option<usize>,
    /// Pagination window, if the table paginates.
    pub pagination: Option<Pagination>,
    /// Row-click configuration, if rows are clickable.
    pub row_click: Option<RowClick>,
}

impl TableDefinition {
    /// Creates a definition from an ordered set of columns.
    pub fn new(cols: Vec<ColumnSchema>) -> Self {
        Self {
            cols,
            sort_col_index: None,
            pagination: None,
            row_click: None,
        }
    }

    /// Sets the initially active sort column.
    pub fn with_sort_col_index(mut self, index: usize) -> Self {
        self.sort_col_index = Some(index);
        self
    }

    /// Sets the pagination window.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Sets the row-click configuration.
    pub fn with_row_click(mut self, row_click: RowClick) -> Self {
        self.row_click = Some(row_click);
        self
    }

    /// Validates the definition.
    ///
    /// Checks that:
    /// - at least one column is defined;
    /// - the pagination window, if present, has a non-zero page size;
    /// - the initial sort column index, if present, is in range;
    /// - `Time` and `Status` columns carry a time format.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.cols.is_empty() {
            return Err(TableError::NoColumns);
        }

        if let Some(pagination) = &self.pagination
            && pagination.size == 0
        {
            return Err(TableError::EmptyPage);
        }

        if let Some(index) = self.sort_col_index
            && index >= self.cols.len()
        {
            return Err(TableError::SortColumnOutOfRange {
                index,
                columns: self.cols.len(),
            });
        }

        for col in &self.cols {
            if matches!(col.data_type, DataType::Time | DataType::Status)
                && col.time_format.is_none()
            {
                return Err(TableError::MissingTimeFormat {
                    column: col.data_property.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A single cell value as supplied by the data store.
///
/// The widget only ever reads values; formatting happens in
/// [`render_cell`](crate::cell::render_cell) based on the owning column's
/// [`DataType`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value for this column.
    #[default]
    None,
    /// Text data.
    Text(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Epoch-millisecond timestamp.
    Timestamp(i64),
    /// Presence data: the last-seen timestamp plus an explicit online flag.
    Status {
        /// Last-seen epoch milliseconds.
        timestamp: i64,
        /// Whether the row is explicitly flagged online.
        online: bool,
    },
}

impl CellValue {
    /// Returns the plain-text rendering of this value, if it has one.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Text(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Timestamp(ts) => Some(ts.to_string()),
            Self::Status { timestamp, .. } => Some(timestamp.to_string()),
        }
    }

    /// Returns the timestamp carried by `Timestamp` and `Status` values.
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            Self::Timestamp(ts) | Self::Status { timestamp: ts, .. } => Some(*ts),
            _ => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One row of table data: an opaque mapping from column `data_property`
/// keys to values. Missing keys read as [`CellValue::None`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: HashMap<String, CellValue>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(property.into(), value.into());
    }

    /// Returns the value for a column's data property.
    pub fn get(&self, property: &str) -> &CellValue {
        static NONE: CellValue = CellValue::None;
        self.values.get(property).unwrap_or(&NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cols() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("name", DataType::String)
                .with_sort_direction(SortDirection::Ascending),
            ColumnSchema::new("count", DataType::Number)
                .with_sort_direction(SortDirection::Descending),
        ]
    }

    #[test]
    fn test_sort_direction_toggled() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn test_validate_accepts_well_formed_definition() {
        let definition = TableDefinition::new(sample_cols())
            .with_sort_col_index(1)
            .with_pagination(Pagination::new(0, 25));
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_columns() {
        let definition = TableDefinition::new(Vec::new());
        assert!(matches!(definition.validate(), Err(TableError::NoColumns)));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let definition = TableDefinition::new(sample_cols()).with_pagination(Pagination::new(0, 0));
        assert!(matches!(definition.validate(), Err(TableError::EmptyPage)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_sort_column() {
        let definition = TableDefinition::new(sample_cols()).with_sort_col_index(2);
        assert!(matches!(
            definition.validate(),
            Err(TableError::SortColumnOutOfRange { index: 2, columns: 2 })
        ));
    }

    #[test]
    fn test_validate_requires_time_format_for_time_columns() {
        let mut cols = sample_cols();
        cols.push(ColumnSchema::new("last_seen", DataType::Time));
        let definition = TableDefinition::new(cols);
        assert!(matches!(
            definition.validate(),
            Err(TableError::MissingTimeFormat { .. })
        ));
    }

    #[test]
    fn test_row_reads_missing_keys_as_none() {
        let row = Row::new().with("name", "aaa").with("count", 3i64);
        assert_eq!(row.get("name"), &CellValue::Text("aaa".to_string()));
        assert_eq!(row.get("count"), &CellValue::Int(3));
        assert_eq!(row.get("missing"), &CellValue::None);
    }

    #[test]
    fn test_cell_value_display_text() {
        assert_eq!(CellValue::None.display_text(), None);
        assert_eq!(CellValue::from(-2i64).display_text().unwrap(), "-2");
        assert_eq!(CellValue::from("b").display_text().unwrap(), "b");
        assert_eq!(
            CellValue::Status { timestamp: 5, online: true }.as_timestamp(),
            Some(5)
        );
    }

    #[test]
    fn test_row_click_bound_state() {
        let bound = RowClick::new(|_| {});
        assert!(bound.is_bound());
        let unbound = RowClick::unbound();
        assert!(!unbound.is_bound());
        // Invoking an unbound config is a no-op at this level; the widget is
        // responsible for surfacing the configuration error.
        unbound.invoke(0);
    }
}
