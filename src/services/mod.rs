//! Domain services used by the HTTP routes.

pub mod contact;
