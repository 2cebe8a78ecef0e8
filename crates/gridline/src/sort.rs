//! Sort direction resolution.
//!
//! The widget never sorts rows itself; the data store does. What the widget
//! derives is *display* state: which column is actively sorted, in which
//! direction, and what direction a header click should request next.

use crate::schema::{ColumnSchema, SortDirection};

/// The displayed sort state of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSort {
    /// Actively sorted, smallest first.
    Ascending,
    /// Actively sorted, largest first.
    Descending,
    /// Not driving row ordering.
    Off,
}

impl From<SortDirection> for ColumnSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Self::Ascending,
            SortDirection::Descending => Self::Descending,
        }
    }
}

/// Computes the displayed sort state for every column.
///
/// Returns exactly one entry per column, in order. The column at the active
/// index maps to its configured direction; every other column maps to
/// [`ColumnSort::Off`]. An absent or out-of-range active index, or an
/// active column with no configured direction, also yields `Off`.
pub fn resolve_sort_directions(
    cols: &[ColumnSchema],
    active: Option<usize>,
) -> Vec<ColumnSort> {
    cols.iter()
        .enumerate()
        .map(|(i, col)| match (active, col.sort_direction) {
            (Some(index), Some(direction)) if index == i => direction.into(),
            _ => ColumnSort::Off,
        })
        .collect()
}

/// Determines the direction a header click on `index` should request.
///
/// The emitted direction is the toggle of the column's currently stored
/// direction. For the active column the stored direction reflects the
/// current ordering, so successive clicks alternate; for an inactive column
/// the request is the complement of its configured default. Returns `None`
/// for unsortable or out-of-range columns, which emit nothing.
pub fn next_sort_direction(cols: &[ColumnSchema], index: usize) -> Option<SortDirection> {
    cols.get(index)
        .and_then(|col| col.sort_direction)
        .map(SortDirection::toggled)
}
