//! Session controller.
//!
//! # Responsibility
//! - Own the inventory, the ID counter and the random source for one shift.
//! - Run each command to completion and report the lines to display.
//! - Turn `CollapseError` into the terminal collapse state.
//!
//! # Invariants
//! - Only `Running` accepts commands; both terminal states are final.
//! - Every recoverable failure yields exactly one user-visible line.
//! - Collapse is the only failure that ends the session.

use crate::model::collapse::CollapseError;
use crate::model::object::{ObjectIdGenerator, ObjectKind, QuantumObject};
use crate::repo::inventory::{InMemoryInventory, InventoryStore};
use crate::service::command::{Command, CommandError, MenuChoice};
use crate::service::random::RandomSource;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds of the kind roll.
pub const KIND_ROLL_RANGE: (u32, u32) = (1, 3);
/// Inclusive bounds of the initial stability roll.
pub const INITIAL_STABILITY_RANGE: (u32, u32) = (50, 100);

const FAREWELL_MESSAGE: &str = "Shift is over. Goodbye!";
const EMPTY_INVENTORY_MESSAGE: &str = "Inventory is empty. No objects added yet.";
const INVENTORY_REPORT_HEADER: &str = "=== INVENTORY REPORT ===";
const COLLAPSE_BANNER: &str = "*** SYSTEM COLLAPSED! EVACUATION INITIATED... ***";
const GAME_OVER_MESSAGE: &str = "[GAME OVER]";

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    TerminatedNormal,
    TerminatedCollapse,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::TerminatedNormal => "terminated_normal",
            Self::TerminatedCollapse => "terminated_collapse",
        }
    }
}

/// Lines to display for one command plus the state after it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub state: SessionState,
}

/// Errors from calling into a session that no longer accepts commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Terminated(SessionState),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminated(state) => {
                write!(f, "session already terminated ({})", state.as_str())
            }
        }
    }
}

impl Error for SessionError {}

/// One shift at the vault control panel.
pub struct Session<G: RandomSource, S: InventoryStore = InMemoryInventory> {
    random: G,
    inventory: S,
    ids: ObjectIdGenerator,
    state: SessionState,
}

impl<G: RandomSource> Session<G> {
    /// Starts a running session with an empty in-memory inventory.
    pub fn new(random: G) -> Self {
        Self::with_inventory(random, InMemoryInventory::new())
    }
}

impl<G: RandomSource, S: InventoryStore> Session<G, S> {
    /// Starts a running session over the given inventory.
    ///
    /// IDs are issued from `QN-0001` regardless of what `inventory` holds.
    pub fn with_inventory(random: G, inventory: S) -> Self {
        Self {
            random,
            inventory,
            ids: ObjectIdGenerator::new(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn inventory(&self) -> &S {
        &self.inventory
    }

    /// Handles one raw menu token from the terminal.
    ///
    /// `read_target` is called with a prompt only when the chosen entry needs
    /// an object ID and the inventory is not empty. Returning `None` from it
    /// (input closed) abandons the command without output.
    ///
    /// # Errors
    /// - Returns `SessionError::Terminated` once the session has ended.
    pub fn handle_menu_input<F>(
        &mut self,
        choice: &str,
        read_target: F,
    ) -> Result<CommandOutcome, SessionError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.ensure_running()?;

        let choice = match choice.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => return Ok(self.reject(err)),
        };

        let Some(prompt) = choice.target_prompt() else {
            return self.execute(choice.into_command(""));
        };
        if self.inventory.is_empty() {
            return Ok(self.reject(CommandError::EmptyInventory(choice)));
        }
        match read_target(prompt) {
            Some(target) => self.execute(choice.into_command(target.trim())),
            None => Ok(self.outcome(Vec::new())),
        }
    }

    /// Runs one validated command to completion.
    ///
    /// # Errors
    /// - Returns `SessionError::Terminated` once the session has ended.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, SessionError> {
        self.ensure_running()?;

        let result = match &command {
            Command::AddObject => Ok(self.add_object()),
            Command::ListInventory => Ok(self.list_inventory()),
            Command::AnalyzeObject(id) => self.analyze_object(id),
            Command::EmergencyCooldown(id) => self.cool_object(id),
            Command::Exit => Ok(self.exit()),
        };

        match result {
            Ok(lines) => Ok(self.outcome(lines)),
            Err(err) => {
                warn!(
                    "event=command_rejected module=session status=error command={} reason={}",
                    command.name(),
                    err.kind()
                );
                Ok(self.outcome(vec![err.to_string()]))
            }
        }
    }

    fn ensure_running(&self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Terminated(self.state));
        }
        Ok(())
    }

    fn reject(&self, err: CommandError) -> CommandOutcome {
        warn!(
            "event=command_rejected module=session status=error reason={}",
            err.kind()
        );
        self.outcome(vec![err.to_string()])
    }

    fn outcome(&self, lines: Vec<String>) -> CommandOutcome {
        CommandOutcome {
            lines,
            state: self.state,
        }
    }

    fn add_object(&mut self) -> Vec<String> {
        let (kind_low, kind_high) = KIND_ROLL_RANGE;
        let (stability_low, stability_high) = INITIAL_STABILITY_RANGE;
        let kind = ObjectKind::from_roll(self.random.uniform_inclusive(kind_low, kind_high))
            .unwrap_or(ObjectKind::AntiMatter);
        let stability = f64::from(self.random.uniform_inclusive(stability_low, stability_high));
        let id = self.ids.next_id();

        let object = QuantumObject::new(id, kind, stability);
        let line = format!(
            "New {} added: {} (Stability: %{:.0})",
            kind.display_name(),
            object.id(),
            object.stability()
        );
        info!(
            "event=object_added module=session status=ok id={} kind={} stability={}",
            object.id(),
            kind.as_str(),
            object.stability()
        );
        self.inventory.add(object);
        vec![line]
    }

    fn list_inventory(&self) -> Vec<String> {
        if self.inventory.is_empty() {
            return vec![EMPTY_INVENTORY_MESSAGE.to_string()];
        }
        let mut lines = Vec::with_capacity(self.inventory.len() + 1);
        lines.push(INVENTORY_REPORT_HEADER.to_string());
        lines.extend(self.inventory.list());
        lines
    }

    fn analyze_object(&mut self, id: &str) -> Result<Vec<String>, CommandError> {
        if self.inventory.is_empty() {
            return Err(CommandError::EmptyInventory(MenuChoice::AnalyzeObject));
        }
        let object = self.inventory.find_by_id_mut(id)?;
        let mut lines = vec![
            format!("Analyzing {}...", object.id()),
            object.kind().analysis_narration().to_string(),
        ];
        match object.analyze() {
            Ok(stability) => {
                info!(
                    "event=object_analyzed module=session status=ok id={} stability={}",
                    object.id(),
                    stability
                );
                lines.push(format!("Analysis complete. New stability: %{stability:.1}"));
            }
            Err(collapse) => lines.extend(self.collapse(&collapse)),
        }
        Ok(lines)
    }

    fn collapse(&mut self, collapse: &CollapseError) -> Vec<String> {
        error!(
            "event=object_collapsed module=session status=error id={} stability={}",
            collapse.id(),
            collapse.stability()
        );
        self.state = SessionState::TerminatedCollapse;
        vec![
            COLLAPSE_BANNER.to_string(),
            collapse.to_string(),
            GAME_OVER_MESSAGE.to_string(),
        ]
    }

    fn cool_object(&mut self, id: &str) -> Result<Vec<String>, CommandError> {
        if self.inventory.is_empty() {
            return Err(CommandError::EmptyInventory(MenuChoice::EmergencyCooldown));
        }
        let object = self.inventory.find_by_id_mut(id)?;
        let Some(mut critical) = object.as_critical_mut() else {
            return Err(CommandError::CapabilityMissing(id.to_string()));
        };
        let line = critical.emergency_cooldown();
        info!(
            "event=object_cooled module=session status=ok id={} stability={}",
            critical.id(),
            critical.stability()
        );
        Ok(vec![line])
    }

    fn exit(&mut self) -> Vec<String> {
        info!(
            "event=session_end module=session status=ok objects={}",
            self.inventory.len()
        );
        self.state = SessionState::TerminatedNormal;
        vec![FAREWELL_MESSAGE.to_string()]
    }
}
