//! Counter demo state for the interactivity page.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Plain integer counter. Negative values are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Heading text, also mirrored into the document title.
    pub fn label(self) -> String {
        format!("Count: {}", self.count)
    }
}
