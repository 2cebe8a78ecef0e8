//! The external data store interface.
//!
//! The widget never fetches, caches, sorts, or filters data itself; all of
//! that belongs to a store implementing [`TableStore`]. The store is an
//! injected dependency (never a process-wide singleton) so tests can
//! substitute a scripted double. One store may serve many widgets, keyed by
//! a caller-supplied component identity.
//!
//! Commands are fire-and-forget: the widget emits its intent
//! (`request_data`, `sort_change`, `paginate`, `filter`) and the store is
//! expected to eventually answer with a `data_ready` or `data_error`
//! notification carrying the component identity. The store is responsible
//! for delivering only the latest request's outcome.

use std::collections::HashMap;
use std::sync::Arc;

use gridline_core::Signal;

use crate::schema::{ColumnSchema, Pagination, Row, RowClick, SortDirection, TableDefinition};

/// Identity of one widget instance at the store.
pub type ComponentId = String;

/// Opaque filter criteria handed to the store on each request.
pub type FilterCriteria = HashMap<String, String>;

/// Optional transform the store applies to incoming rows before storage.
pub type DataFormatter = Arc<dyn Fn(Vec<Row>) -> Vec<Row> + Send + Sync>;

/// Direction of a pagination command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Toward the beginning of the result set.
    Left,
    /// Toward the end of the result set.
    Right,
}

/// The store's notification channel.
///
/// Widgets connect to both signals on mount and disconnect on unmount;
/// each notification carries the component identity the outcome is for.
#[derive(Default)]
pub struct StoreSignals {
    /// Emitted when a fetch completed for a component.
    pub data_ready: Signal<ComponentId>,
    /// Emitted when a fetch failed for a component.
    pub data_error: Signal<ComponentId>,
}

impl StoreSignals {
    /// Creates a new set of store signals.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The interface a table data store exposes to widgets.
///
/// Getters describe the store's current view for one component and are
/// pulled by the widget when a `data_ready` notification arrives. `None`
/// from [`get_data`](TableStore::get_data) means the store holds no row
/// set at all for the component; the widget treats that as an error,
/// whereas an empty `Vec` is a valid empty result.
pub trait TableStore: Send + Sync {
    /// Current rows for the component, or `None` if the store has none.
    fn get_data(&self, component_id: &str) -> Option<Vec<Row>>;

    /// Total row count across all pages.
    fn get_data_count(&self, component_id: &str) -> usize;

    /// Column schemas as currently held (sort directions included).
    fn get_col_definitions(&self, component_id: &str) -> Vec<ColumnSchema>;

    /// The active sort column index, if any.
    fn get_sort_col_index(&self, component_id: &str) -> Option<usize>;

    /// Row-click configuration, if rows are clickable.
    fn get_row_click_data(&self, component_id: &str) -> Option<RowClick>;

    /// Pagination window, if the table paginates.
    fn get_pagination_data(&self, component_id: &str) -> Option<Pagination>;

    /// The store's notification channel.
    fn signals(&self) -> &StoreSignals;

    /// Requests (re-)fetching data for the component.
    fn request_data(
        &self,
        component_id: &str,
        definition: &TableDefinition,
        formatter: Option<DataFormatter>,
        filters: &FilterCriteria,
    );

    /// Requests re-sorting by the given column and direction.
    fn sort_change(&self, component_id: &str, col_index: usize, direction: SortDirection);

    /// Requests paging one step in the given direction.
    fn paginate(&self, component_id: &str, direction: PageDirection);

    /// Requests re-filtering with the given quick-filter text.
    fn filter(&self, component_id: &str, text: &str);
}
