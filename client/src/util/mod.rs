//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (scroll sampling, smooth
//! scrolling) from page and component logic so the math stays testable
//! off-browser.

pub mod anchor;
pub mod scroll_motion;
