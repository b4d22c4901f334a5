//! Client-side UI state machines.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with synchronous transitions so it can be
//! unit tested without a browser. Each is wrapped in an `RwSignal` owned by
//! the one component that renders it.

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod nav;
pub mod savings;
pub mod slider;
