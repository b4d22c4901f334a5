//! Circular index navigation for the testimonial carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Active slide among `len` slides, fixed at construction.
///
/// `next`/`prev` wrap modulo `len`. A zero-length carousel ignores every
/// operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    active: usize,
    len: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    #[must_use]
    pub fn active(self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}
