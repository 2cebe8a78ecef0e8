//! Error types for the table widget.

/// Errors that can occur when configuring or operating a table widget.
///
/// The validation variants are returned from
/// [`TableDefinition::validate`](crate::schema::TableDefinition::validate)
/// (and therefore from widget construction). `RowClickNotCallable` is the
/// one fatal-by-design condition: rows were declared clickable but no
/// callback was ever bound, which is a caller defect rather than a runtime
/// data condition, so it surfaces loudly instead of being swallowed.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The table definition has no columns.
    #[error("table definition has no columns")]
    NoColumns,

    /// The pagination window has a zero page size.
    #[error("pagination page size must be greater than zero")]
    EmptyPage,

    /// The initial sort column index does not refer to a column.
    #[error("sort column index {index} is out of range for {columns} columns")]
    SortColumnOutOfRange { index: usize, columns: usize },

    /// A time or status column is missing its time format pattern.
    #[error("column '{column}' requires a time format for its data type")]
    MissingTimeFormat { column: String },

    /// Rows are configured as clickable but the callback is not bound.
    #[error("row click callback is not bound for component '{component_id}'")]
    RowClickNotCallable { component_id: String },
}
