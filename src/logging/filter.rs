//! Event log filtering

use super::{EventEntry, EventKind};

/// Which entries the event log shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// Everything
    #[default]
    All,
    /// Indicator state changes only
    Indicators,
    /// Feed visibility changes only
    Layout,
}

impl EventFilter {
    pub fn matches(self, entry: &EventEntry) -> bool {
        match (self, &entry.kind) {
            (Self::All, _) => true,
            (Self::Indicators, EventKind::Indicator { .. }) => true,
            (Self::Layout, EventKind::Feed { .. }) => true,
            _ => false,
        }
    }

    /// Next mode in the All → Indicators → Layout cycle
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Indicators,
            Self::Indicators => Self::Layout,
            Self::Layout => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Indicators => "Indicators",
            Self::Layout => "Layout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let indicator = EventEntry::indicator("Lamp", true);
        let feed = EventEntry::feed("DMS", false);
        let system = EventEntry::system("System ready.");

        assert!(EventFilter::All.matches(&system));
        assert!(EventFilter::Indicators.matches(&indicator));
        assert!(!EventFilter::Indicators.matches(&feed));
        assert!(EventFilter::Layout.matches(&feed));
        assert!(!EventFilter::Layout.matches(&system));
    }

    #[test]
    fn test_cycle_returns_to_all() {
        let filter = EventFilter::All.next().next().next();
        assert_eq!(filter, EventFilter::All);
    }
}
