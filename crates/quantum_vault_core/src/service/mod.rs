//! Session-level use cases.
//!
//! # Responsibility
//! - Turn validated menu commands into inventory and object operations.
//! - Keep the terminal layer decoupled from model and storage details.

pub mod command;
pub mod random;
pub mod session;
