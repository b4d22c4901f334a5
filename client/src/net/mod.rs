//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` forwards validated contact requests to the server's intake
//! endpoint. Nothing else on the site talks to the network.

pub mod api;
