//! Counters and copy for the event delegation demo.

/// Buttons handled by the single delegated listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventItem {
    pub label: &'static str,
    pub detail: &'static str,
}

pub const EVENT_ITEMS: [EventItem; 3] = [
    EventItem {
        label: "Primary action",
        detail: "Handles form submissions",
    },
    EventItem {
        label: "Secondary action",
        detail: "Opens a tooltip",
    },
    EventItem {
        label: "Tertiary action",
        detail: "Navigates to docs",
    },
];

/// Attribute the delegated listener looks for on click targets.
pub const ITEM_ATTRIBUTE: &str = "data-item";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounters {
    pub delegated: u32,
    pub native: u32,
    pub bubbled: u32,
}

impl EventCounters {
    /// Record a delegated click on `label` and return the log line.
    pub fn delegated_hit(&mut self, label: &str) -> String {
        self.delegated += 1;
        format!("Delegated onclick (shared) ➜ {label}")
    }

    /// Record a click handled on the button itself.
    pub fn native_hit(&mut self, label: &str, stopped: bool) -> String {
        self.native += 1;
        if stopped {
            format!("Native onclick ➜ {label} (stop_propagation)")
        } else {
            format!("Native onclick ➜ {label} (bubbles)")
        }
    }

    /// Record a click that bubbled up to the parent container.
    pub fn bubbled_hit(&mut self) -> String {
        self.bubbled += 1;
        "Parent onclick received bubbled event".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_each_path_separately() {
        let mut counters = EventCounters::default();
        let line = counters.delegated_hit(EVENT_ITEMS[0].label);
        assert_eq!(line, "Delegated onclick (shared) ➜ Primary action");

        counters.native_hit("Native (bubbles)", false);
        counters.bubbled_hit();
        let stopped = counters.native_hit("Native (stop_propagation)", true);
        assert!(stopped.ends_with("(stop_propagation)"));

        assert_eq!(
            counters,
            EventCounters {
                delegated: 1,
                native: 2,
                bubbled: 1,
            }
        );
    }
}
