//! Vault object model.
//!
//! # Responsibility
//! - Define `QuantumObject`, the single record shape shared by every kind.
//! - Keep kind-specific behavior (analysis delta, labels, danger level) in
//!   one `ObjectKind` table instead of per-kind types.
//!
//! # Invariants
//! - `stability` is clamped to at most `MAX_STABILITY` on every write and is
//!   allowed to reach or pass zero, which is how collapse is detected.
//! - `danger_level` is clamped to `[MIN_DANGER_LEVEL, MAX_DANGER_LEVEL]`.
//! - `id` and `kind` are fixed at construction.

use crate::model::collapse::CollapseError;
use crate::model::criticality::{Capability, CriticalObject};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Upper bound applied to every stability write.
pub const MAX_STABILITY: f64 = 100.0;
/// Lowest allowed danger level.
pub const MIN_DANGER_LEVEL: u8 = 1;
/// Highest allowed danger level.
pub const MAX_DANGER_LEVEL: u8 = 10;

const OBJECT_ID_PREFIX: &str = "QN-";

/// Stable identifier in `QN-%04d` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Formats the ID for the given sequence number.
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("{OBJECT_ID_PREFIX}{sequence:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact comparison used by inventory lookups.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate)
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic ID source; the first issued ID is `QN-0001`.
#[derive(Debug, Clone)]
pub struct ObjectIdGenerator {
    next: u32,
}

impl ObjectIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issues the next ID and advances the counter.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId::from_sequence(self.next);
        self.next += 1;
        id
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Object category. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Harmless payload; cannot be cooled.
    DataPacket,
    /// Dangerous; supports emergency cooldown.
    DarkMatter,
    /// Very dangerous; supports emergency cooldown.
    AntiMatter,
}

impl ObjectKind {
    /// All kinds in roll order (`1`, `2`, `3`).
    pub const ALL: [ObjectKind; 3] = [Self::DataPacket, Self::DarkMatter, Self::AntiMatter];

    /// Maps a kind roll in `[1, 3]` to a kind.
    pub fn from_roll(roll: u32) -> Option<Self> {
        match roll {
            1 => Some(Self::DataPacket),
            2 => Some(Self::DarkMatter),
            3 => Some(Self::AntiMatter),
            _ => None,
        }
    }

    /// Stable snake_case id used in logs and serialized snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DataPacket => "data_packet",
            Self::DarkMatter => "dark_matter",
            Self::AntiMatter => "anti_matter",
        }
    }

    /// Display name used in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DataPacket => "DataPacket",
            Self::DarkMatter => "DarkMatter",
            Self::AntiMatter => "AntiMatter",
        }
    }

    pub fn danger_level(self) -> u8 {
        match self {
            Self::DataPacket => 2,
            Self::DarkMatter => 7,
            Self::AntiMatter => 10,
        }
    }

    /// Stability removed by one analysis pass.
    pub fn analysis_delta(self) -> f64 {
        match self {
            Self::DataPacket => 5.0,
            Self::DarkMatter => 15.0,
            Self::AntiMatter => 25.0,
        }
    }

    pub fn safety_label(self) -> &'static str {
        match self {
            Self::DataPacket => "Safe",
            Self::DarkMatter => "DANGEROUS",
            Self::AntiMatter => "VERY DANGEROUS",
        }
    }

    /// Line printed while an analysis pass runs.
    pub fn analysis_narration(self) -> &'static str {
        match self {
            Self::DataPacket => "Data contents read.",
            Self::DarkMatter => "Analyzing dark matter... Be careful!",
            Self::AntiMatter => "THE FABRIC OF THE UNIVERSE IS TREMBLING...",
        }
    }

    /// Capabilities granted to this kind.
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::DataPacket => &[],
            Self::DarkMatter | Self::AntiMatter => &[Capability::EmergencyCooldown],
        }
    }

    pub fn has_capability(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Canonical vault object record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumObject {
    id: ObjectId,
    kind: ObjectKind,
    stability: f64,
    danger_level: u8,
}

impl QuantumObject {
    /// Creates an object of `kind` with the given initial stability.
    ///
    /// # Invariants
    /// - `stability` is capped at `MAX_STABILITY`; values at or below zero are
    ///   kept as-is.
    /// - `danger_level` is taken from `kind` and clamped to `[1, 10]`.
    pub fn new(id: ObjectId, kind: ObjectKind, stability: f64) -> Self {
        let mut object = Self {
            id,
            kind,
            stability: 0.0,
            danger_level: MIN_DANGER_LEVEL,
        };
        object.set_stability(stability);
        object.set_danger_level(kind.danger_level());
        object
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn stability(&self) -> f64 {
        self.stability
    }

    pub fn danger_level(&self) -> u8 {
        self.danger_level
    }

    /// Runs one analysis pass.
    ///
    /// The kind's delta is applied first and kept even when the pass fails.
    ///
    /// # Errors
    /// - Returns `CollapseError` when the resulting stability is `<= 0`.
    pub fn analyze(&mut self) -> Result<f64, CollapseError> {
        self.set_stability(self.stability - self.kind.analysis_delta());
        if self.stability <= 0.0 {
            return Err(CollapseError::new(self.id.clone(), self.stability));
        }
        Ok(self.stability)
    }

    /// One-line status report.
    pub fn status_info(&self) -> String {
        format!(
            "[{}] Stability: %{:.1} | Danger: {}/{} [{} - {}]",
            self.id,
            self.stability,
            self.danger_level,
            MAX_DANGER_LEVEL,
            self.kind.display_name(),
            self.kind.safety_label()
        )
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.kind.has_capability(capability)
    }

    /// Borrows this object through the criticality capability.
    ///
    /// Returns `None` for kinds without `Capability::EmergencyCooldown`.
    pub fn as_critical_mut(&mut self) -> Option<CriticalObject<'_>> {
        if self.has_capability(Capability::EmergencyCooldown) {
            Some(CriticalObject::new(self))
        } else {
            None
        }
    }

    pub(crate) fn set_stability(&mut self, value: f64) {
        self.stability = if value > MAX_STABILITY {
            MAX_STABILITY
        } else {
            value
        };
    }

    fn set_danger_level(&mut self, value: u8) {
        self.danger_level = value.clamp(MIN_DANGER_LEVEL, MAX_DANGER_LEVEL);
    }
}
