//! The table widget controller.
//!
//! [`TableWidget`] owns the view state and orchestrates everything around
//! it: it requests data from the injected store, reacts to data-ready and
//! data-error notifications, derives the displayable view (headers, body,
//! pagination controls, quick filter), and translates user gestures into
//! outbound store commands. It never sorts, filters, or paginates rows
//! locally. Every gesture is sent to the store as a command, and the store
//! answers with a fresh notification.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gridline::prelude::*;
//!
//! let store: Arc<dyn TableStore> = Arc::new(MyStore::new());
//! let definition = TableDefinition::new(vec![
//!     ColumnSchema::new("name", DataType::String)
//!         .with_sort_direction(SortDirection::Ascending),
//! ]);
//!
//! let widget = Arc::new(TableWidget::new(store, "companies", definition)?);
//! TableWidget::mount(&widget);
//! ```

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use gridline_core::ConnectionId;

use crate::cell::{RenderedCell, render_cell};
use crate::error::TableError;
use crate::gesture::{ClickOutcome, GestureTracker};
use crate::icons::{DEFAULT_LOADING_ICON_CLASSES, IconClasses};
use crate::schema::{RowClick, SortDirection, TableDefinition};
use crate::sort::{ColumnSort, next_sort_direction, resolve_sort_directions};
use crate::state::{TableSnapshot, TableState};
use crate::store::{ComponentId, DataFormatter, FilterCriteria, PageDirection, TableStore};

/// Text shown in place of rows when a load succeeds with zero results.
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// A renderable header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column label (the data property).
    pub label: String,
    /// Sort icon class; absent for unsortable columns. Inactive columns
    /// show the icon for their configured default direction.
    pub sort_icon: Option<String>,
    /// Whether this column is actively driving row ordering.
    pub active: bool,
}

/// Renderable pagination controls.
///
/// Enablement is derived from the current window and total count on every
/// render; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// Whether the page-left control is enabled (`cursor > 0`).
    pub left_enabled: bool,
    /// Whether the page-right control is enabled
    /// (`cursor + size < total_count`).
    pub right_enabled: bool,
    /// Icon class for the page-left control.
    pub left_icon: String,
    /// Icon class for the page-right control.
    pub right_icon: String,
}

/// One renderable row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Index of the row within the current page.
    pub index: usize,
    /// Whether the row responds to clicks (a row-click config is present).
    pub clickable: bool,
    /// Rendered cells, one per column.
    pub cells: Vec<RenderedCell>,
}

/// The renderable body of the table, one variant per view state.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// A request is outstanding; show a spinner.
    Loading {
        /// Icon classes for the loading indicator.
        icon_classes: Vec<String>,
    },
    /// The load failed.
    Error,
    /// The load succeeded with zero rows; show [`NO_RESULTS_TEXT`].
    NoResults,
    /// Rows to display.
    Rows(Vec<RenderedRow>),
}

/// Mount-time signal connections, disconnected exactly once on unmount.
struct Subscriptions {
    ready: ConnectionId,
    error: ConnectionId,
}

/// A data-driven table widget.
///
/// Construction validates the [`TableDefinition`] and fixes
/// `quick_filter_enabled` from the column schemas. The widget is designed
/// to live in an `Arc` so the store's notification slots can hold a weak
/// reference back to it; see [`TableWidget::mount`].
pub struct TableWidget {
    component_id: ComponentId,
    definition: TableDefinition,
    data_formatter: Option<DataFormatter>,
    filters: FilterCriteria,
    icon_classes: IconClasses,
    loading_icon_classes: Vec<String>,
    quick_filter_enabled: bool,
    store: Arc<dyn TableStore>,
    state: Mutex<TableState>,
    tracker: Mutex<GestureTracker>,
    subscriptions: Mutex<Option<Subscriptions>>,
}

impl TableWidget {
    /// Creates a new table widget over the given store.
    ///
    /// Fails with a validation error if the definition is malformed. The
    /// widget starts in the loading state; call [`mount`](Self::mount) to
    /// subscribe to the store and issue the first request.
    pub fn new(
        store: Arc<dyn TableStore>,
        component_id: impl Into<ComponentId>,
        definition: TableDefinition,
    ) -> Result<Self, TableError> {
        definition.validate()?;
        let quick_filter_enabled = definition.cols.iter().any(|col| col.quick_filter);

        Ok(Self {
            component_id: component_id.into(),
            definition,
            data_formatter: None,
            filters: FilterCriteria::new(),
            icon_classes: IconClasses::default(),
            loading_icon_classes: DEFAULT_LOADING_ICON_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
            quick_filter_enabled,
            store,
            state: Mutex::new(TableState::Loading),
            tracker: Mutex::new(GestureTracker::new()),
            subscriptions: Mutex::new(None),
        })
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Sets the data formatter using builder pattern.
    pub fn with_data_formatter(mut self, formatter: DataFormatter) -> Self {
        self.data_formatter = Some(formatter);
        self
    }

    /// Sets the initial filter criteria using builder pattern.
    pub fn with_filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    /// Overrides the icon classes using builder pattern.
    pub fn with_icon_classes(mut self, icon_classes: IconClasses) -> Self {
        self.icon_classes = icon_classes;
        self
    }

    /// Overrides the loading icon classes using builder pattern.
    pub fn with_loading_icon_classes(mut self, classes: Vec<String>) -> Self {
        self.loading_icon_classes = classes;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The widget's identity at the store.
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Whether any column opted in to the quick filter. Fixed at
    /// construction.
    pub fn quick_filter_enabled(&self) -> bool {
        self.quick_filter_enabled
    }

    /// The configured icon classes.
    pub fn icon_classes(&self) -> &IconClasses {
        &self.icon_classes
    }

    /// A snapshot of the current view state.
    pub fn state(&self) -> TableState {
        self.state.lock().clone()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Subscribes to the store's data-ready and data-error notifications
    /// and issues the initial data request.
    ///
    /// Subscriptions are established exactly once; mounting an already
    /// mounted widget does nothing. The slots hold a weak reference, so
    /// dropping the widget without unmounting cannot keep it alive.
    ///
    /// Takes the owning `Arc` rather than `&self` so the slots can be
    /// handed a downgraded reference; call as `TableWidget::mount(&widget)`.
    pub fn mount(this: &Arc<Self>) {
        {
            let mut subscriptions = this.subscriptions.lock();
            if subscriptions.is_some() {
                tracing::debug!(
                    target: "gridline::widget",
                    component_id = %this.component_id,
                    "mount called on mounted widget, ignoring"
                );
                return;
            }

            let signals = this.store.signals();

            let widget = Arc::downgrade(this);
            let id = this.component_id.clone();
            let ready = signals.data_ready.connect(move |component_id| {
                if *component_id == id
                    && let Some(widget) = widget.upgrade()
                {
                    widget.on_data_received();
                }
            });

            let widget = Arc::downgrade(this);
            let id = this.component_id.clone();
            let error = signals.data_error.connect(move |component_id| {
                if *component_id == id
                    && let Some(widget) = widget.upgrade()
                {
                    widget.on_error();
                }
            });

            *subscriptions = Some(Subscriptions { ready, error });
        }

        this.request_data();
    }

    /// Disconnects both store subscriptions.
    ///
    /// Paired with [`mount`](Self::mount): each mount's subscriptions are
    /// torn down exactly once, and unmounting an unmounted widget does
    /// nothing.
    pub fn unmount(&self) {
        let Some(subscriptions) = self.subscriptions.lock().take() else {
            return;
        };
        let signals = self.store.signals();
        signals.data_ready.disconnect(subscriptions.ready);
        signals.data_error.disconnect(subscriptions.error);
    }

    // =========================================================================
    // Data flow
    // =========================================================================

    /// Flips to the loading state and asks the store to (re-)fetch.
    ///
    /// May be called repeatedly; each call supersedes any in-flight load.
    /// The request is fire-and-forget: the outcome arrives later as a
    /// data-ready or data-error notification.
    pub fn request_data(&self) {
        *self.state.lock() = TableState::Loading;
        tracing::debug!(
            target: "gridline::widget",
            component_id = %self.component_id,
            "requesting table data"
        );
        self.store.request_data(
            &self.component_id,
            &self.definition,
            self.data_formatter.clone(),
            &self.filters,
        );
    }

    /// Handles a data-ready notification: pulls the store's current view
    /// and replaces the widget state with a fresh snapshot.
    ///
    /// A store that signals ready but holds no rows at all is treated as an
    /// error; an empty row set is a valid no-results state.
    pub fn on_data_received(&self) {
        let id = self.component_id.as_str();

        let next = match self.store.get_data(id) {
            None => {
                tracing::warn!(
                    target: "gridline::widget",
                    component_id = id,
                    "store signaled ready but returned no row set"
                );
                TableState::Error
            }
            Some(rows) => {
                let col_definitions = self.store.get_col_definitions(id);
                let sort_col_index = self.store.get_sort_col_index(id);
                let col_sort_directions = resolve_sort_directions(&col_definitions, sort_col_index);
                tracing::debug!(
                    target: "gridline::widget",
                    component_id = id,
                    rows = rows.len(),
                    "table data received"
                );
                TableState::Ready(TableSnapshot {
                    total_count: self.store.get_data_count(id),
                    pagination: self.store.get_pagination_data(id),
                    row_click: self.store.get_row_click_data(id),
                    rows,
                    col_definitions,
                    sort_col_index,
                    col_sort_directions,
                })
            }
        };

        *self.state.lock() = next;
    }

    /// Handles a data-error notification: unconditionally enters the error
    /// state.
    pub fn on_error(&self) {
        tracing::debug!(
            target: "gridline::widget",
            component_id = %self.component_id,
            "table data request failed"
        );
        *self.state.lock() = TableState::Error;
    }

    // =========================================================================
    // Gesture handling
    // =========================================================================

    /// Handles a click on the header of the column at `index`.
    ///
    /// Emits a sort-change command requesting the toggle of the column's
    /// currently stored direction. The widget does not mutate sort state
    /// locally; the store applies the change and re-notifies. Clicks on
    /// unsortable or unknown columns emit nothing, as do clicks before any
    /// data has loaded.
    pub fn handle_sort_click(&self, index: usize) {
        let direction = {
            let state = self.state.lock();
            let Some(snapshot) = state.snapshot() else {
                return;
            };
            match next_sort_direction(&snapshot.col_definitions, index) {
                Some(direction) => direction,
                None => {
                    tracing::debug!(
                        target: "gridline::widget",
                        component_id = %self.component_id,
                        index,
                        "sort click on unsortable column ignored"
                    );
                    return;
                }
            }
        };
        self.store
            .sort_change(&self.component_id, index, direction);
    }

    /// Emits a page-left command.
    pub fn handle_page_left_click(&self) {
        self.store.paginate(&self.component_id, PageDirection::Left);
    }

    /// Emits a page-right command.
    pub fn handle_page_right_click(&self) {
        self.store
            .paginate(&self.component_id, PageDirection::Right);
    }

    /// Emits a filter command with the quick filter's current text.
    ///
    /// Called on every input change; debouncing, if wanted, belongs to the
    /// store.
    pub fn handle_quick_filter_change(&self, text: &str) {
        self.store.filter(&self.component_id, text);
    }

    /// Records the x-coordinate of a pointer press on a row, arming the
    /// click/drag tracker.
    pub fn on_mouse_down(&self, x: f32) {
        self.tracker.lock().press(x);
    }

    /// Handles a pointer release on the row at `row_index`.
    ///
    /// Does nothing when rows are not clickable. Fails with
    /// [`TableError::RowClickNotCallable`] when rows are clickable but the
    /// callback was never bound; that configuration defect is checked
    /// before the gesture is resolved. Otherwise the release resolves
    /// against the recorded press origin: within the drag threshold the
    /// callback fires with the row index, beyond it the click is treated
    /// as an accidental drag and suppressed.
    pub fn handle_row_click(&self, x: f32, row_index: usize) -> Result<(), TableError> {
        let row_click: Option<RowClick> = {
            let state = self.state.lock();
            state.snapshot().and_then(|snapshot| snapshot.row_click.clone())
        };

        let Some(row_click) = row_click else {
            return Ok(());
        };
        if !row_click.is_bound() {
            return Err(TableError::RowClickNotCallable {
                component_id: self.component_id.clone(),
            });
        }

        match self.tracker.lock().release(x) {
            ClickOutcome::Drag => {
                tracing::trace!(
                    target: "gridline::widget",
                    component_id = %self.component_id,
                    row_index,
                    "row activation suppressed: drag"
                );
                Ok(())
            }
            ClickOutcome::Click => {
                row_click.invoke(row_index);
                Ok(())
            }
        }
    }

    // =========================================================================
    // Render derivations
    // =========================================================================

    /// Derives the pagination controls for the current state.
    ///
    /// Controls are entirely absent unless data is loaded with at least
    /// one row, a pagination window is configured, and the total count is
    /// non-zero.
    pub fn pagination_controls(&self) -> Option<PaginationControls> {
        let state = self.state.lock();
        let snapshot = state.snapshot()?;
        if snapshot.rows.is_empty() || snapshot.total_count == 0 {
            return None;
        }
        let pagination = snapshot.pagination?;

        Some(PaginationControls {
            left_enabled: pagination.cursor > 0,
            // The window comes from the store unvalidated; a degenerate
            // cursor must not overflow the boundary check.
            right_enabled: pagination.cursor.saturating_add(pagination.size)
                < snapshot.total_count,
            left_icon: self.icon_classes.page_left.clone(),
            right_icon: self.icon_classes.page_right.clone(),
        })
    }

    /// Returns `true` when the quick filter input should be rendered:
    /// some column opted in and data is loaded (an empty result set still
    /// shows the filter, so the user can clear it).
    pub fn quick_filter_visible(&self) -> bool {
        self.quick_filter_enabled && self.state.lock().snapshot().is_some()
    }

    /// Derives the header cells for the current state: one per column,
    /// with the sort icon for the column's displayed (or default)
    /// direction and an active flag for the sorted column.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        let state = self.state.lock();
        let Some(snapshot) = state.snapshot() else {
            return Vec::new();
        };

        snapshot
            .col_definitions
            .iter()
            .zip(&snapshot.col_sort_directions)
            .map(|(col, sort)| {
                let icon_direction = match sort {
                    ColumnSort::Ascending => Some(SortDirection::Ascending),
                    ColumnSort::Descending => Some(SortDirection::Descending),
                    ColumnSort::Off => col.sort_direction,
                };
                HeaderCell {
                    label: col.data_property.clone(),
                    sort_icon: icon_direction
                        .map(|direction| self.icon_classes.sort_class(direction).to_string()),
                    active: *sort != ColumnSort::Off,
                }
            })
            .collect()
    }

    /// Derives the renderable body for the current state.
    pub fn body(&self) -> TableBody {
        let state = self.state.lock();
        match &*state {
            TableState::Loading => TableBody::Loading {
                icon_classes: self.loading_icon_classes.clone(),
            },
            TableState::Error => TableBody::Error,
            TableState::Ready(snapshot) if snapshot.rows.is_empty() => TableBody::NoResults,
            TableState::Ready(snapshot) => {
                let now_ms = Utc::now().timestamp_millis();
                TableBody::Rows(self.render_rows(snapshot, now_ms))
            }
        }
    }

    fn render_rows(&self, snapshot: &TableSnapshot, now_ms: i64) -> Vec<RenderedRow> {
        let clickable = snapshot.row_click.is_some();
        snapshot
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RenderedRow {
                index,
                clickable,
                cells: snapshot
                    .col_definitions
                    .iter()
                    .map(|col| {
                        let value = row.get(&col.data_property);
                        let hover = col
                            .hover_property
                            .as_deref()
                            .and_then(|property| row.get(property).display_text());
                        render_cell(value, col, hover, now_ms)
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnSchema, DataType};
    use crate::store::StoreSignals;

    /// A store that answers every getter with nothing and swallows all
    /// commands. The full behavioral matrix lives in the integration
    /// suite with a scripted store.
    struct NullStore {
        signals: StoreSignals,
    }

    impl NullStore {
        fn new() -> Self {
            Self {
                signals: StoreSignals::new(),
            }
        }
    }

    impl TableStore for NullStore {
        fn get_data(&self, _: &str) -> Option<Vec<crate::schema::Row>> {
            None
        }
        fn get_data_count(&self, _: &str) -> usize {
            0
        }
        fn get_col_definitions(&self, _: &str) -> Vec<ColumnSchema> {
            Vec::new()
        }
        fn get_sort_col_index(&self, _: &str) -> Option<usize> {
            None
        }
        fn get_row_click_data(&self, _: &str) -> Option<RowClick> {
            None
        }
        fn get_pagination_data(&self, _: &str) -> Option<crate::schema::Pagination> {
            None
        }
        fn signals(&self) -> &StoreSignals {
            &self.signals
        }
        fn request_data(
            &self,
            _: &str,
            _: &TableDefinition,
            _: Option<DataFormatter>,
            _: &FilterCriteria,
        ) {
        }
        fn sort_change(&self, _: &str, _: usize, _: SortDirection) {}
        fn paginate(&self, _: &str, _: PageDirection) {}
        fn filter(&self, _: &str, _: &str) {}
    }

    fn definition(quick_filter: bool) -> TableDefinition {
        TableDefinition::new(vec![
            ColumnSchema::new("name", DataType::String)
                .with_sort_direction(SortDirection::Ascending)
                .with_quick_filter(quick_filter),
        ])
    }

    #[test]
    fn test_new_starts_loading() {
        let widget =
            TableWidget::new(Arc::new(NullStore::new()), "t-1", definition(false)).unwrap();
        assert!(widget.state().is_loading());
        assert!(!widget.state().is_error());
        assert!(widget.state().rows().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_definition() {
        let result = TableWidget::new(
            Arc::new(NullStore::new()),
            "t-1",
            TableDefinition::new(Vec::new()),
        );
        assert!(matches!(result, Err(TableError::NoColumns)));
    }

    #[test]
    fn test_quick_filter_enabled_iff_any_column_opts_in() {
        let store = Arc::new(NullStore::new());
        let widget = TableWidget::new(store.clone(), "t-1", definition(false)).unwrap();
        assert!(!widget.quick_filter_enabled());

        let widget = TableWidget::new(store, "t-2", definition(true)).unwrap();
        assert!(widget.quick_filter_enabled());
    }

    #[test]
    fn test_mount_subscribes_once_and_unmount_disconnects() {
        let store = Arc::new(NullStore::new());
        let widget =
            Arc::new(TableWidget::new(store.clone(), "t-1", definition(false)).unwrap());

        TableWidget::mount(&widget);
        assert_eq!(store.signals.data_ready.connection_count(), 1);
        assert_eq!(store.signals.data_error.connection_count(), 1);

        // Re-mounting must not double-subscribe.
        TableWidget::mount(&widget);
        assert_eq!(store.signals.data_ready.connection_count(), 1);
        assert_eq!(store.signals.data_error.connection_count(), 1);

        widget.unmount();
        assert_eq!(store.signals.data_ready.connection_count(), 0);
        assert_eq!(store.signals.data_error.connection_count(), 0);

        // Unmounting an unmounted widget is a no-op.
        widget.unmount();
        assert_eq!(store.signals.data_ready.connection_count(), 0);
    }

    #[test]
    fn test_data_received_with_no_row_set_is_error() {
        let widget =
            TableWidget::new(Arc::new(NullStore::new()), "t-1", definition(false)).unwrap();
        widget.on_data_received();
        assert!(widget.state().is_error());
        assert!(widget.state().rows().is_none());
    }

    #[test]
    fn test_body_while_loading_carries_icon_classes() {
        let widget = TableWidget::new(Arc::new(NullStore::new()), "t-1", definition(false))
            .unwrap()
            .with_loading_icon_classes(vec!["spin".to_string()]);
        assert_eq!(
            widget.body(),
            TableBody::Loading {
                icon_classes: vec!["spin".to_string()]
            }
        );
    }

    #[test]
    fn test_derivations_empty_before_data() {
        let widget =
            TableWidget::new(Arc::new(NullStore::new()), "t-1", definition(true)).unwrap();
        assert!(widget.header_cells().is_empty());
        assert!(widget.pagination_controls().is_none());
        assert!(!widget.quick_filter_visible());
    }
}
