//! Domain model for students and their theses.
//!
//! # Responsibility
//! - Define the two persisted entities and their field rules.
//! - Keep validation independent from storage so every write path shares it.
//!
//! # Invariants
//! - `id == None` means the entity has never been persisted.
//! - Deletion is a hard delete; there are no tombstones.

pub mod student;
pub mod thesis;
pub mod validation;
