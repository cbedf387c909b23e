//! Data Transfer Objects
//!
//! Wire shapes returned by the function service. Transports decode these and
//! hand the domain types on to the poller.

pub mod function;
