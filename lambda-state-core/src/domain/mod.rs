//! Core domain types
//!
//! These types describe what the poller observes about a remote function.
//! They are shared between the transports (which produce them) and the
//! poller (which compares them).

pub mod state;
pub mod status;
