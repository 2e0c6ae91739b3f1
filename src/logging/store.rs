//! Event log storage with filtering and scrolling
//!
//! Pure data structure with no I/O side effects.

use super::{EventEntry, EventFilter};
use crate::constants::AUTO_SCROLL_THRESHOLD;
use std::collections::VecDeque;

/// Ring buffer of console events.
///
/// - **Automatic rotation**: old entries are dropped at capacity
/// - **Filtering**: by event kind, with a cached match count
/// - **Scrolling**: manual scroll, auto-scroll to bottom on new entries
pub struct EventLog {
    entries: VecDeque<EventEntry>,
    max_entries: usize,
    scroll: usize,
    auto_scroll: bool,
    filter: EventFilter,
    /// Cached count of filtered entries
    filtered_cache: usize,
}

impl EventLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
            scroll: 0,
            auto_scroll: true,
            filter: EventFilter::All,
            filtered_cache: 0,
        }
    }

    // === Addition ===

    /// Add an entry, rotating out the oldest one at capacity
    pub fn add(&mut self, entry: EventEntry) {
        let entry_matches = self.filter.matches(&entry);

        if self.entries.len() >= self.max_entries {
            if let Some(removed) = self.entries.pop_front() {
                if self.filter.matches(&removed) {
                    self.filtered_cache = self.filtered_cache.saturating_sub(1);
                    if !self.auto_scroll {
                        self.scroll = self.scroll.saturating_sub(1);
                    }
                }
            }
        }
        self.entries.push_back(entry);

        if entry_matches {
            self.filtered_cache += 1;
            if self.auto_scroll {
                self.scroll = self.filtered_cache.saturating_sub(1);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll = 0;
        self.filtered_cache = 0;
        self.auto_scroll = true;
    }

    // === Scroll ===

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let last = self.filtered_cache.saturating_sub(1);
        if self.scroll < last {
            self.scroll += 1;
        }
        if self.scroll + AUTO_SCROLL_THRESHOLD >= last {
            self.auto_scroll = true;
            self.scroll = last;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
        self.scroll = self.filtered_cache.saturating_sub(1);
    }

    /// Index (among filtered entries) of the last visible line
    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    // === Filtering ===

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
        self.filtered_cache = self.entries.iter().filter(|e| filter.matches(e)).count();
        self.scroll_to_bottom();
    }

    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    // === Data access ===

    pub fn entries(&self) -> &VecDeque<EventEntry> {
        &self.entries
    }

    /// Entries passing the current filter, oldest first
    pub fn filtered(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.iter().filter(|e| self.filter.matches(e))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize, capacity: usize) -> EventLog {
        let mut log = EventLog::new(capacity);
        for i in 0..n {
            log.add(EventEntry::system(format!("event {}", i)));
        }
        log
    }

    #[test]
    fn test_rotation_drops_oldest() {
        let log = filled(5, 3);
        assert_eq!(log.entries().len(), 3);
        assert_eq!(log.entries()[0].message(), "event 2");
        assert_eq!(log.filtered_count(), 3);
    }

    #[test]
    fn test_auto_scroll_follows_new_entries() {
        let log = filled(10, 100);
        assert_eq!(log.scroll_position(), 9);
    }

    #[test]
    fn test_manual_scroll_holds_position() {
        let mut log = filled(10, 100);
        log.scroll_to_top();
        log.add(EventEntry::system("late"));
        assert_eq!(log.scroll_position(), 0);

        log.scroll_to_bottom();
        assert_eq!(log.scroll_position(), 10);
    }

    #[test]
    fn test_scroll_down_near_bottom_resumes_auto() {
        let mut log = filled(10, 100);
        log.scroll_up();
        log.scroll_up();
        log.scroll_down();
        log.add(EventEntry::system("new"));
        assert_eq!(log.scroll_position(), 10);
    }

    #[test]
    fn test_filter_recounts() {
        let mut log = EventLog::new(100);
        log.add(EventEntry::system("System ready."));
        log.add(EventEntry::indicator("Lamp", false));
        log.add(EventEntry::feed("DMS", false));
        log.add(EventEntry::indicator("Buzzer", true));

        log.set_filter(EventFilter::Indicators);
        assert_eq!(log.filtered_count(), 2);
        assert_eq!(log.scroll_position(), 1);

        // Non-matching entries don't move the count
        log.add(EventEntry::feed("DMS", true));
        assert_eq!(log.filtered_count(), 2);
    }

    #[test]
    fn test_filtered_keeps_insertion_order() {
        let mut log = EventLog::new(10);
        log.add(EventEntry::indicator("Lamp", true));
        log.add(EventEntry::feed("DMS", false));
        log.add(EventEntry::feed("DMS", true));
        log.set_filter(EventFilter::Layout);

        let messages: Vec<String> = log.filtered().map(EventEntry::message).collect();
        assert_eq!(messages, vec!["DMS hidden", "DMS shown"]);
    }

    #[test]
    fn test_clear() {
        let mut log = filled(4, 10);
        log.clear();
        assert!(log.entries().is_empty());
        assert_eq!(log.filtered_count(), 0);
        assert_eq!(log.scroll_position(), 0);
    }
}
