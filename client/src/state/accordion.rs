//! Single-open selection over a fixed list (FAQ accordion, step selector).

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// At most one open index among `len` items.
///
/// Starts with the first item open so the panel never renders empty on
/// first paint. Indices outside `0..len` are ignored by every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
    len: usize,
}

impl AccordionState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { open: (len > 0).then_some(0), len }
    }

    #[must_use]
    pub fn open_index(self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it if it is already the open one.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// Open `index` without the close-on-repeat behavior of [`toggle`](Self::toggle).
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }
}
