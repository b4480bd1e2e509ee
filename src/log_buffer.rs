//! Bounded collision log
//!
//! Keeps the most recent `max_lines` whole lines, evicting the oldest first.
//! Renderers read it through `snapshot()`/`text()` and never mutate it.

use std::collections::VecDeque;

use crate::consts::LOG_MAX_LINES;

/// Line-oriented ring buffer for formatted collision records
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    max_lines: usize,
    /// Set when new lines arrived since the viewer last scrolled
    scroll_pending: bool,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_MAX_LINES)
    }
}

impl LogBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines,
            scroll_pending: false,
        }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Append a newline-joined batch; returns the number of lines added
    pub fn push_batch(&mut self, batch: &str) -> usize {
        let mut added = 0;
        for line in batch.lines() {
            self.lines.push_back(line.to_owned());
            added += 1;
        }
        self.evict();
        if added > 0 {
            self.scroll_pending = true;
        }
        added
    }

    /// Append a single line
    pub fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.push_batch(&line);
    }

    fn evict(&mut self) {
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }

    /// Change capacity, evicting immediately if needed
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines;
        self.evict();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_pending = false;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only view, oldest line first
    pub fn snapshot(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Newest line
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Whole log as text, one record per line
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// True once after new lines arrived; the viewer should scroll to the end
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
