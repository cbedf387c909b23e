//! Lambda State Core
//!
//! Core types shared by the lambda-state crates.
//!
//! This crate contains:
//! - Domain types: function lifecycle and update states, the status record
//! - DTOs: the GetFunction response shape as it arrives over the wire

pub mod domain;
pub mod dto;
