//! Criticality capability for dangerous object kinds.
//!
//! Only kinds listing `Capability::EmergencyCooldown` can hand out a
//! `CriticalObject`, so cooldown is unreachable for a `DataPacket`.

use crate::model::object::{ObjectId, ObjectKind, QuantumObject};

/// Stability restored by one emergency cooldown.
pub const EMERGENCY_COOLDOWN_BOOST: f64 = 50.0;

/// Capability granted per object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    EmergencyCooldown,
}

impl Capability {
    /// Stable string id used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmergencyCooldown => "emergency_cooldown",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::EmergencyCooldown => "Restore stability of a critical object by a fixed boost.",
        }
    }
}

/// Mutable view of an object that holds the criticality capability.
#[derive(Debug)]
pub struct CriticalObject<'a> {
    object: &'a mut QuantumObject,
}

impl<'a> CriticalObject<'a> {
    pub(crate) fn new(object: &'a mut QuantumObject) -> Self {
        Self { object }
    }

    pub fn id(&self) -> &ObjectId {
        self.object.id()
    }

    pub fn stability(&self) -> f64 {
        self.object.stability()
    }

    /// Raises stability by `EMERGENCY_COOLDOWN_BOOST`, capped at 100.
    ///
    /// Never fails. Returns the confirmation line for display.
    pub fn emergency_cooldown(&mut self) -> String {
        let boosted = self.object.stability() + EMERGENCY_COOLDOWN_BOOST;
        self.object.set_stability(boosted);
        let action = match self.object.kind() {
            ObjectKind::AntiMatter => "EMERGENCY cooldown",
            _ => "Emergency cooldown",
        };
        format!(
            "[{}] {action} applied! New stability: %{:.1}",
            self.object.id(),
            self.object.stability()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Capability, EMERGENCY_COOLDOWN_BOOST};
    use crate::model::object::{ObjectId, ObjectKind, QuantumObject};

    fn critical(kind: ObjectKind, stability: f64) -> QuantumObject {
        QuantumObject::new(ObjectId::from_sequence(2), kind, stability)
    }

    #[test]
    fn cooldown_adds_fixed_boost() {
        let mut object = critical(ObjectKind::DarkMatter, 30.0);
        let message = object
            .as_critical_mut()
            .expect("dark matter is critical")
            .emergency_cooldown();
        assert_eq!(object.stability(), 30.0 + EMERGENCY_COOLDOWN_BOOST);
        assert_eq!(
            message,
            "[QN-0002] Emergency cooldown applied! New stability: %80.0"
        );
    }

    #[test]
    fn cooldown_clamps_at_one_hundred() {
        let mut object = critical(ObjectKind::DarkMatter, 90.0);
        object
            .as_critical_mut()
            .expect("dark matter is critical")
            .emergency_cooldown();
        assert_eq!(object.stability(), 100.0);
    }

    #[test]
    fn repeated_cooldown_never_exceeds_cap() {
        let mut object = critical(ObjectKind::AntiMatter, 55.0);
        for _ in 0..4 {
            let mut handle = object.as_critical_mut().expect("anti matter is critical");
            handle.emergency_cooldown();
            assert!(handle.stability() <= 100.0);
        }
        assert_eq!(object.stability(), 100.0);
    }

    #[test]
    fn anti_matter_uses_loud_confirmation() {
        let mut object = critical(ObjectKind::AntiMatter, -10.0);
        let message = object
            .as_critical_mut()
            .expect("anti matter is critical")
            .emergency_cooldown();
        assert_eq!(
            message,
            "[QN-0002] EMERGENCY cooldown applied! New stability: %40.0"
        );
    }

    #[test]
    fn capability_table_excludes_data_packet() {
        assert!(!ObjectKind::DataPacket.has_capability(Capability::EmergencyCooldown));
        assert!(ObjectKind::DarkMatter.has_capability(Capability::EmergencyCooldown));
        assert!(ObjectKind::AntiMatter.has_capability(Capability::EmergencyCooldown));
        assert_eq!(Capability::EmergencyCooldown.as_str(), "emergency_cooldown");
        assert!(Capability::EmergencyCooldown
            .description()
            .contains("stability"));
    }
}
