//! Core domain logic for the quantum vault simulator.
//! This crate owns every object invariant and session state transition;
//! terminal rendering and input handling live in the CLI crate.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_dir, default_log_level, init_logging, init_logging_with, logging_status,
    LoggingConfig, LoggingError,
};
pub use model::collapse::CollapseError;
pub use model::criticality::{Capability, CriticalObject, EMERGENCY_COOLDOWN_BOOST};
pub use model::object::{
    ObjectId, ObjectIdGenerator, ObjectKind, QuantumObject, MAX_DANGER_LEVEL, MAX_STABILITY,
    MIN_DANGER_LEVEL,
};
pub use repo::inventory::{InMemoryInventory, InventoryStore, RepoError, RepoResult};
pub use service::command::{Command, CommandError, MenuChoice};
pub use service::random::{RandomSource, StdRandomSource};
pub use service::session::{
    CommandOutcome, Session, SessionError, SessionState, INITIAL_STABILITY_RANGE,
    KIND_ROLL_RANGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
