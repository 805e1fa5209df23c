//! Domain model for the student registry.
//!
//! # Responsibility
//! - Define the value entities persisted by the repository layer.
//!
//! # Invariants
//! - Entities are immutable values: a change is a new value plus a
//!   repository replace, never an in-place mutation.

pub mod student;
