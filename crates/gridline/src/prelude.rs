//! Prelude module for Gridline.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use gridline::prelude::*;
//! ```

// ============================================================================
// Table Definition
// ============================================================================

pub use crate::schema::{
    CellValue, ColumnSchema, DataType, Pagination, Row, RowClick, SortDirection, TableDefinition,
};

// ============================================================================
// Widget and View State
// ============================================================================

pub use crate::state::{TableSnapshot, TableState};
pub use crate::widget::{
    HeaderCell, PaginationControls, RenderedRow, TableBody, TableWidget,
};

// ============================================================================
// Store Interface
// ============================================================================

pub use crate::store::{
    ComponentId, DataFormatter, FilterCriteria, PageDirection, StoreSignals, TableStore,
};

// ============================================================================
// Rendering and Errors
// ============================================================================

pub use crate::cell::{RenderedCell, StatusIndicator};
pub use crate::error::TableError;
pub use crate::icons::IconClasses;
pub use crate::sort::ColumnSort;
