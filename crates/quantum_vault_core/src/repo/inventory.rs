//! Inventory store contract and in-memory implementation.
//!
//! # Responsibility
//! - Append objects and list them in insertion order.
//! - Resolve user-entered IDs to stored objects.
//!
//! # Invariants
//! - No duplicate-ID check on `add`; IDs come from the session's generator.
//! - `find_by_id` returns the first case-insensitive exact match.

use crate::model::object::QuantumObject;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Inventory lookup error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No stored object matches the requested ID. Carries the ID as entered.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "object not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage interface for vault objects.
pub trait InventoryStore {
    fn add(&mut self, object: QuantumObject);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Objects in insertion order.
    fn objects(&self) -> &[QuantumObject];
    fn find_by_id(&self, id: &str) -> RepoResult<&QuantumObject>;
    fn find_by_id_mut(&mut self, id: &str) -> RepoResult<&mut QuantumObject>;

    /// Status lines in insertion order; empty when nothing is stored.
    fn list(&self) -> Vec<String> {
        self.objects().iter().map(QuantumObject::status_info).collect()
    }
}

/// Vec-backed inventory owned by one session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    objects: Vec<QuantumObject>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryStore for InMemoryInventory {
    fn add(&mut self, object: QuantumObject) {
        self.objects.push(object);
    }

    fn len(&self) -> usize {
        self.objects.len()
    }

    fn objects(&self) -> &[QuantumObject] {
        &self.objects
    }

    fn find_by_id(&self, id: &str) -> RepoResult<&QuantumObject> {
        self.objects
            .iter()
            .find(|object| object.id().matches(id))
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn find_by_id_mut(&mut self, id: &str) -> RepoResult<&mut QuantumObject> {
        self.objects
            .iter_mut()
            .find(|object| object.id().matches(id))
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }
}
