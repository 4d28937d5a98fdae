//! relata-core
//!
//! Pure domain types and artifact naming conventions.
//! No HTTP or document dependency — this is the shared vocabulary of the
//! Relata system.

pub mod error;
pub mod filenames;
pub mod models;
