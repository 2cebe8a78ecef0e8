//! Widget view state.
//!
//! The table's lifecycle is a small state machine: `Loading` on creation
//! and on every fresh request, then `Ready` or `Error` when the store's
//! notification arrives. Each transition replaces the whole state with a
//! new snapshot; there are no partial field updates.

use crate::schema::{ColumnSchema, Pagination, Row, RowClick};
use crate::sort::ColumnSort;

/// Everything the widget knows about a successfully loaded view: the rows,
/// the full result count, and the definitions pulled from the store at
/// notification time.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    /// The current page of rows. May be empty, which is a valid "no
    /// results" state distinct from an error.
    pub rows: Vec<Row>,
    /// Total row count across all pages.
    pub total_count: usize,
    /// Column schemas as the store currently holds them.
    pub col_definitions: Vec<ColumnSchema>,
    /// The active sort column, if any.
    pub sort_col_index: Option<usize>,
    /// Pagination window, if the table paginates.
    pub pagination: Option<Pagination>,
    /// Row-click configuration, if rows are clickable.
    pub row_click: Option<RowClick>,
    /// Displayed sort state per column, derived via
    /// [`resolve_sort_directions`](crate::sort::resolve_sort_directions).
    pub col_sort_directions: Vec<ColumnSort>,
}

/// The widget's view state.
#[derive(Debug, Clone, Default)]
pub enum TableState {
    /// A request is outstanding; no rows to show.
    #[default]
    Loading,
    /// Data arrived and is displayable.
    Ready(TableSnapshot),
    /// The store reported a failure, or reported success without rows.
    Error,
}

impl TableState {
    /// Returns `true` while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` in the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the loaded snapshot, if any.
    pub fn snapshot(&self) -> Option<&TableSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Returns the loaded rows, if any.
    pub fn rows(&self) -> Option<&[Row]> {
        self.snapshot().map(|snapshot| snapshot.rows.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading() {
        let state = TableState::default();
        assert!(state.is_loading());
        assert!(!state.is_error());
        assert!(state.rows().is_none());
    }

    #[test]
    fn test_ready_state_exposes_rows() {
        let state = TableState::Ready(TableSnapshot {
            rows: vec![Row::new()],
            total_count: 1,
            col_definitions: Vec::new(),
            sort_col_index: None,
            pagination: None,
            row_click: None,
            col_sort_directions: Vec::new(),
        });
        assert_eq!(state.rows().map(<[Row]>::len), Some(1));
        assert!(state.snapshot().is_some());
    }

    #[test]
    fn test_error_state_has_no_rows() {
        let state = TableState::Error;
        assert!(state.is_error());
        assert!(state.rows().is_none());
    }
}
