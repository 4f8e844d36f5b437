//! # Two-phase server filters
//!
//! Sidebar clicks only change the *pending* selection. The listing reads the
//! *applied* selection, which changes when the user presses "find server"
//! ([`FilterState::apply`]). A filter button is highlighted while its value is
//! either applied or pending.
//!
//! Rates are keyed by their number: the `x` of `"x5"` is stripped.

use crate::models::{rate_key, Chronicle, Rate, ServerFilter};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub rate: Option<String>,
    pub chronicle_id: Option<u64>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.rate.is_none() && self.chronicle_id.is_none()
    }

    /// Parameters for `GET /servers/grouped`.
    pub fn to_server_filter(&self) -> ServerFilter {
        ServerFilter {
            rate: self.rate.clone(),
            chronicle_id: self.chronicle_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub pending: FilterSelection,
    pub applied: FilterSelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a rate by label (`"x5"`) or key (`"5"`); `None` clears it.
    pub fn set_pending_rate(&mut self, rate: Option<&str>) {
        self.pending.rate = rate.map(rate_key).filter(|key| !key.is_empty());
    }

    pub fn set_pending_chronicle(&mut self, chronicle_id: Option<u64>) {
        self.pending.chronicle_id = chronicle_id;
    }

    /// Copy the pending selection into the applied one.
    pub fn apply(&mut self) {
        tracing::debug!(rate = ?self.pending.rate, chronicle = ?self.pending.chronicle_id, "filters applied");
        self.applied = self.pending.clone();
    }

    pub fn reset(&mut self) {
        self.pending = FilterSelection::default();
        self.applied = FilterSelection::default();
    }

    /// Pending differs from applied.
    pub fn is_dirty(&self) -> bool {
        self.pending != self.applied
    }

    pub fn is_rate_highlighted(&self, rate: &Rate) -> bool {
        let key = rate.key();
        self.applied.rate.as_deref() == Some(key.as_str())
            || self.pending.rate.as_deref() == Some(key.as_str())
    }

    pub fn is_chronicle_highlighted(&self, chronicle: &Chronicle) -> bool {
        self.applied.chronicle_id == Some(chronicle.id)
            || self.pending.chronicle_id == Some(chronicle.id)
    }

    pub fn server_filter(&self) -> ServerFilter {
        self.applied.to_server_filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(name: &str) -> Rate {
        Rate {
            id: 1,
            name: name.to_string(),
        }
    }

    fn chronicle(id: u64) -> Chronicle {
        Chronicle {
            id,
            name: format!("c{id}"),
            slug: None,
        }
    }

    #[test]
    fn test_pending_is_not_applied() {
        let mut filters = FilterState::new();
        filters.set_pending_rate(Some("x5"));
        filters.set_pending_chronicle(Some(3));

        assert_eq!(filters.pending.rate.as_deref(), Some("5"));
        assert!(filters.applied.is_empty());
        assert_eq!(filters.server_filter(), ServerFilter::default());
        assert!(filters.is_dirty());

        filters.apply();

        assert!(!filters.is_dirty());
        assert_eq!(
            filters.server_filter(),
            ServerFilter {
                rate: Some("5".to_string()),
                chronicle_id: Some(3),
            }
        );
    }

    #[test]
    fn test_highlight_applied_or_pending() {
        let mut filters = FilterState::new();
        filters.set_pending_rate(Some("x5"));
        filters.apply();
        filters.set_pending_rate(Some("x50"));

        assert!(filters.is_rate_highlighted(&rate("x5")));
        assert!(filters.is_rate_highlighted(&rate("x50")));
        assert!(!filters.is_rate_highlighted(&rate("x1200")));

        filters.set_pending_chronicle(Some(2));
        assert!(filters.is_chronicle_highlighted(&chronicle(2)));
        assert!(!filters.is_chronicle_highlighted(&chronicle(4)));
    }

    #[test]
    fn test_reset_clears_both() {
        let mut filters = FilterState::new();
        filters.set_pending_rate(Some("7"));
        filters.apply();
        filters.set_pending_chronicle(Some(1));

        filters.reset();

        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_clearing_rate() {
        let mut filters = FilterState::new();
        filters.set_pending_rate(Some("x5"));
        filters.set_pending_rate(None);
        assert!(filters.pending.rate.is_none());
        filters.set_pending_rate(Some("x"));
        assert!(filters.pending.rate.is_none());
    }
}
