//! Icon class configuration.
//!
//! Controls and indicators are described by CSS-style class strings so the
//! embedding application can theme them. The defaults match the Font
//! Awesome / Ionicons classes the widget has always shipped with.

use crate::cell::StatusIndicator;
use crate::schema::SortDirection;

/// Default icon classes shown while the table is loading.
pub const DEFAULT_LOADING_ICON_CLASSES: [&str; 2] = ["icon", "ion-loading-c"];

/// Icon classes for the table's controls and indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconClasses {
    /// Page-left pagination control.
    pub page_left: String,
    /// Page-right pagination control.
    pub page_right: String,
    /// Ascending sort indicator.
    pub sort_asc: String,
    /// Descending sort indicator.
    pub sort_desc: String,
    /// Online status indicator.
    pub status_on: String,
    /// Offline status indicator.
    pub status_off: String,
}

impl Default for IconClasses {
    fn default() -> Self {
        Self {
            page_left: "fa fa-chevron-left".to_string(),
            page_right: "fa fa-chevron-right".to_string(),
            sort_asc: "fa fa-sort-asc".to_string(),
            sort_desc: "fa fa-sort-desc".to_string(),
            status_on: "fa fa-circle".to_string(),
            status_off: "fa fa-circle-o".to_string(),
        }
    }
}

impl IconClasses {
    /// Returns the sort icon class for a direction.
    pub fn sort_class(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Ascending => &self.sort_asc,
            SortDirection::Descending => &self.sort_desc,
        }
    }

    /// Composes the full class string for a status indicator, e.g.
    /// `after-icon fa fa-circle status-on`.
    pub fn status_class(&self, indicator: StatusIndicator) -> String {
        match indicator {
            StatusIndicator::On => format!("after-icon {} status-on", self.status_on),
            StatusIndicator::Off => format!("after-icon {} status-off", self.status_off),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let icons = IconClasses::default();
        assert_eq!(icons.page_left, "fa fa-chevron-left");
        assert_eq!(icons.sort_class(SortDirection::Ascending), "fa fa-sort-asc");
        assert_eq!(
            icons.status_class(StatusIndicator::On),
            "after-icon fa fa-circle status-on"
        );
        assert_eq!(
            icons.status_class(StatusIndicator::Off),
            "after-icon fa fa-circle-o status-off"
        );
    }

    #[test]
    fn test_overridden_status_class() {
        let icons = IconClasses {
            status_on: "test-status-on".to_string(),
            ..Default::default()
        };
        assert_eq!(
            icons.status_class(StatusIndicator::On),
            "after-icon test-status-on status-on"
        );
    }
}
