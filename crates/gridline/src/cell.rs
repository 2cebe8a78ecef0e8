//! Cell rendering: raw values to displayable cell descriptions.
//!
//! [`render_cell`] is a pure function; it takes the current time explicitly
//! so the status threshold can be tested deterministically. The widget
//! supplies wall-clock time when building its body.

use chrono::{TimeZone, Utc};

use crate::schema::{CellValue, ColumnSchema, DataType};

/// How long, in milliseconds, an online row's last-seen timestamp may lag
/// behind the current time and still show the on-indicator (15 minutes).
/// Elapsed time strictly below this renders on; at or above renders off.
pub const ONLINE_THRESHOLD_MS: i64 = 900_000;

/// The on/off state of a status cell's indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Row is online and recently seen.
    On,
    /// Row is offline, or its last-seen timestamp is stale.
    Off,
}

/// A renderable cell description: display text, optional hover text, and
/// an optional status indicator for status columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    /// The formatted display text.
    pub text: String,
    /// Hover text, when the column has a hover property with a value.
    pub hover: Option<String>,
    /// Status indicator; present only for status columns.
    pub indicator: Option<StatusIndicator>,
}

/// Renders one cell from its raw value and owning column schema.
///
/// Dispatches exhaustively on the column's [`DataType`]:
/// - `String`/`Number`: the value's display text, verbatim;
/// - `Time`: the timestamp reformatted with the column's time format;
/// - `Percent`: the value's display text with a `%` suffix;
/// - `Status`: the timestamp reformatted as for `Time`, plus an indicator
///   that is on only when the row is explicitly online and was seen within
///   [`ONLINE_THRESHOLD_MS`] of `now_ms`.
pub fn render_cell(
    value: &CellValue,
    col: &ColumnSchema,
    hover: Option<String>,
    now_ms: i64,
) -> RenderedCell {
    let (text, indicator) = match col.data_type {
        DataType::String | DataType::Number => (value.display_text().unwrap_or_default(), None),
        DataType::Time => (format_timestamp(value, col), None),
        DataType::Percent => (
            value
                .display_text()
                .map(|text| format!("{text}%"))
                .unwrap_or_default(),
            None,
        ),
        DataType::Status => (
            format_timestamp(value, col),
            Some(status_indicator(value, now_ms)),
        ),
    };

    RenderedCell {
        text,
        hover,
        indicator,
    }
}

/// Formats a timestamp value with the column's time format pattern.
///
/// Values without a timestamp, or columns without a pattern, fall back to
/// the value's plain display text.
fn format_timestamp(value: &CellValue, col: &ColumnSchema) -> String {
    let fallback = || value.display_text().unwrap_or_default();
    let Some(ts) = value.as_timestamp() else {
        return fallback();
    };
    match (&col.time_format, Utc.timestamp_millis_opt(ts).single()) {
        (Some(pattern), Some(datetime)) => datetime.format(pattern).to_string(),
        _ => fallback(),
    }
}

fn status_indicator(value: &CellValue, now_ms: i64) -> StatusIndicator {
    match value {
        CellValue::Status {
            timestamp,
            online: true,
        } if now_ms - timestamp < ONLINE_THRESHOLD_MS => StatusIndicator::On,
        _ => StatusIndicator::Off,
    }
}
