//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page arranges content sections and delegates interactive widgets to
//! `components`. `sections` holds the blocks shared by the multi-page site
//! and the tour.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub(crate) mod sections;
pub mod services;
pub mod tour;
