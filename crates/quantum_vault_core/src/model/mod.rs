//! Domain model for vault objects.
//!
//! # Responsibility
//! - Define the canonical object record and its per-kind behavior.
//! - Own the stability/danger clamping rules and collapse detection.
//!
//! # Invariants
//! - Every object is identified by a generated `ObjectId` that never changes.
//! - Stability is capped at 100 on every write and has no lower bound.
//! - Danger level always stays within `[1, 10]`.

pub mod collapse;
pub mod criticality;
pub mod object;
