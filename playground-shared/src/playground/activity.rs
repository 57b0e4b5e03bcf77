//! Bounded logs for the effects and events demos.

use std::collections::VecDeque;

/// Entries kept by the nested-effects log.
pub const EFFECT_LOG_CAPACITY: usize = 10;
/// Entries kept by the event activity log.
pub const EVENT_LOG_CAPACITY: usize = 8;

/// Which end new entries go in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOrder {
    /// Append; the oldest entry is dropped first.
    OldestFirst,
    /// Prepend; the oldest entry (at the back) is dropped first.
    NewestFirst,
}

/// Fixed-capacity message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedLog {
    entries: VecDeque<String>,
    capacity: usize,
    order: LogOrder,
}

impl BoundedLog {
    #[must_use]
    pub fn new(capacity: usize, order: LogOrder) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            order,
        }
    }

    #[must_use]
    pub fn for_effects() -> Self {
        Self::new(EFFECT_LOG_CAPACITY, LogOrder::OldestFirst)
    }

    #[must_use]
    pub fn for_events() -> Self {
        Self::new(EVENT_LOG_CAPACITY, LogOrder::NewestFirst)
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        match self.order {
            LogOrder::OldestFirst => {
                if self.entries.len() == self.capacity {
                    self.entries.pop_front();
                }
                self.entries.push_back(message.into());
            }
            LogOrder::NewestFirst => {
                if self.entries.len() == self.capacity {
                    self.entries.pop_back();
                }
                self.entries.push_front(message.into());
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Messages written by the nested-effects demo.
pub mod effect_messages {
    #[must_use]
    pub fn outer(count: u32) -> String {
        format!("[Outer] outerCount changed to {count}")
    }

    #[must_use]
    pub fn inner_run(outer: u32) -> String {
        format!("  [Inner] Running inside outer (outer={outer})")
    }

    #[must_use]
    pub fn inner_cleanup(outer: u32) -> String {
        format!("  [Inner] Cleanup (outer was {outer})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_log_keeps_last_ten_oldest_first() {
        let mut log = BoundedLog::for_effects();
        for i in 0..15 {
            log.push(effect_messages::outer(i));
        }
        assert_eq!(log.len(), EFFECT_LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("[Outer] outerCount changed to 5"));
        assert_eq!(log.iter().last(), Some("[Outer] outerCount changed to 14"));
    }

    #[test]
    fn event_log_keeps_last_eight_newest_first() {
        let mut log = BoundedLog::for_events();
        for i in 0..12 {
            log.push(format!("event {i}"));
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("event 11"));
        assert_eq!(log.iter().last(), Some("event 4"));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = BoundedLog::for_effects();
        log.push("x");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn zero_capacity_drops_everything() {
        let mut log = BoundedLog::new(0, LogOrder::OldestFirst);
        log.push("ignored");
        assert!(log.is_empty());
    }

    #[test]
    fn inner_messages_are_indented() {
        assert_eq!(
            effect_messages::inner_run(2),
            "  [Inner] Running inside outer (outer=2)"
        );
        assert_eq!(
            effect_messages::inner_cleanup(2),
            "  [Inner] Cleanup (outer was 2)"
        );
    }
}
