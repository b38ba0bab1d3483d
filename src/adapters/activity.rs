//! Recent-activity pane.
//!
//! Keeps the last [`ACTIVITY_CAPACITY`] event lines in a fixed-size ring so
//! the front end can show what just happened without an unbounded log.
//! Table refreshes are not recorded; the tables themselves show them.

use heapless::HistoryBuffer;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;
use crate::config::ACTIVITY_CAPACITY;

/// Bounded, oldest-first record of rendered event lines.
pub struct ActivityLog {
    lines: HistoryBuffer<String, ACTIVITY_CAPACITY>,
    total: u64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            lines: HistoryBuffer::new(),
            total: 0,
        }
    }

    /// Retained lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.oldest_ordered().map(String::as_str)
    }

    /// Most recent line.
    pub fn latest(&self) -> Option<&str> {
        self.lines.recent().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 0
    }

    /// Lines recorded since startup, including those since evicted.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ActivityLog {
    fn emit(&mut self, event: &PanelEvent) {
        if matches!(event, PanelEvent::ReadingsRefreshed(_)) {
            return;
        }
        self.lines.write(event.to_string());
        self.total += 1;
    }
}
