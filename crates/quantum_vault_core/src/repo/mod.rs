//! Inventory storage abstractions.
//!
//! # Responsibility
//! - Define the storage contract the session controller works against.
//! - Keep lookup semantics (case-insensitive ID match) in one place.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Lookups return semantic `NotFound` errors rather than empty results.

pub mod inventory;
