//! Domain model for reading-log records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field-level parsing and validation for operator input.
//!
//! # Invariants
//! - Every stored book is identified by a stable ascending `BookId`.
//! - Optional fields are `None` when the operator left them blank.

pub mod book;
