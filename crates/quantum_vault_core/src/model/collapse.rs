//! Terminal failure raised when an object's stability is exhausted.

use crate::model::object::ObjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised by `QuantumObject::analyze` when stability ends at or below zero.
///
/// This error is fatal for the whole session. It is never retried; the
/// session controller turns it into a terminal state and a final report.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapseError {
    id: ObjectId,
    stability: f64,
}

impl CollapseError {
    pub(crate) fn new(id: ObjectId, stability: f64) -> Self {
        Self { id, stability }
    }

    /// ID of the object that collapsed.
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Stability value retained by the object after the failing analysis.
    pub fn stability(&self) -> f64 {
        self.stability
    }
}

impl Display for CollapseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "QUANTUM COLLAPSE! Object ID: {} has exploded!", self.id)
    }
}

impl Error for CollapseError {}

#[cfg(test)]
mod tests {
    use super::CollapseError;
    use crate::model::object::ObjectId;

    #[test]
    fn message_embeds_object_id() {
        let err = CollapseError::new(ObjectId::from_sequence(3), -5.0);
        assert_eq!(err.id().as_str(), "QN-0003");
        assert_eq!(
            err.to_string(),
            "QUANTUM COLLAPSE! Object ID: QN-0003 has exploded!"
        );
    }
}
