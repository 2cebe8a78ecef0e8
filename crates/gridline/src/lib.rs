//! Gridline - a data-driven table widget for Rust.
//!
//! A reusable table component: declare the columns once, inject a data
//! store, and the widget handles the rest: loading and error states,
//! sort indicators, pagination controls, a quick filter, per-type cell
//! formatting, and click-versus-drag disambiguation on rows.
//!
//! The widget holds no data of its own. It asks an injected
//! [`TableStore`](store::TableStore) for rows and emits every user gesture
//! back to it as a command; the store answers through its notification
//! signals and the widget re-derives its view.
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
//!         .with_sort_direction(SortDirection::Ascending)
//!         .with_quick_filter(true),
//!     ColumnSchema::new("last_seen", DataType::Time)
//!         .with_time_format("%Y-%m-%d %H:%M"),
//! ]);
//!
//! let table = Arc::new(TableWidget::new(store, "companies", definition)?);
//! TableWidget::mount(&table);
//! # Ok::<(), gridline::TableError>(())
//! ```

pub mod cell;
pub mod error;
pub mod gesture;
pub mod icons;
pub mod prelude;
pub mod schema;
pub mod sort;
pub mod state;
pub mod store;
pub mod widget;

pub use gridline_core::{ConnectionId, Signal};

pub use cell::{ONLINE_THRESHOLD_MS, RenderedCell, StatusIndicator, render_cell};
pub use error::TableError;
pub use gesture::{ClickOutcome, DRAG_THRESHOLD_PX, GestureTracker, classify_release};
pub use icons::{DEFAULT_LOADING_ICON_CLASSES, IconClasses};
pub use schema::{
    CellValue, ColumnSchema, DataType, Pagination, Row, RowClick, SortDirection, TableDefinition,
};
pub use sort::{ColumnSort, next_sort_direction, resolve_sort_directions};
pub use state::{TableSnapshot, TableState};
pub use store::{
    ComponentId, DataFormatter, FilterCriteria, PageDirection, StoreSignals, TableStore,
};
pub use widget::{
    HeaderCell, NO_RESULTS_TEXT, PaginationControls, RenderedRow, TableBody, TableWidget,
};
