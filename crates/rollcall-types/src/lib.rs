//! Shared type definitions for the Rollcall classroom picker.
//!
//! This crate is the single source of truth for the domain types used by
//! the storage layer and the HTTP layer.
//!
//! # Modules
//!
//! - [`name`] -- Validated student name newtype
//! - [`structs`] -- Roster entries, selection events, and operation outcomes

pub mod name;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use name::{NameError, StudentName};
pub use structs::{PickOutcome, ResetSummary, SelectionEvent, Student};
