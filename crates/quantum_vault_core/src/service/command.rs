//! Menu commands and recoverable command errors.

use crate::repo::inventory::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One entry of the control-panel menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddObject,
    ListInventory,
    AnalyzeObject,
    EmergencyCooldown,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `n` is selected by token `n + 1`.
    pub const ALL: [MenuChoice; 5] = [
        Self::AddObject,
        Self::ListInventory,
        Self::AnalyzeObject,
        Self::EmergencyCooldown,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddObject => "Add New Object",
            Self::ListInventory => "List Full Inventory (Status Report)",
            Self::AnalyzeObject => "Analyze Object",
            Self::EmergencyCooldown => "Apply Emergency Cooldown",
            Self::Exit => "Exit",
        }
    }

    /// Prompt used to ask for a target ID, or `None` if the entry needs none.
    pub fn target_prompt(self) -> Option<&'static str> {
        match self {
            Self::AnalyzeObject => Some("Enter the ID of the object to analyze: "),
            Self::EmergencyCooldown => Some("Enter the ID of the object to cool: "),
            Self::AddObject | Self::ListInventory | Self::Exit => None,
        }
    }

    /// Builds the command for this entry. `target` is ignored by entries
    /// that take no ID.
    pub fn into_command(self, target: &str) -> Command {
        match self {
            Self::AddObject => Command::AddObject,
            Self::ListInventory => Command::ListInventory,
            Self::AnalyzeObject => Command::AnalyzeObject(target.to_string()),
            Self::EmergencyCooldown => Command::EmergencyCooldown(target.to_string()),
            Self::Exit => Command::Exit,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(Self::AddObject),
            "2" => Ok(Self::ListInventory),
            "3" => Ok(Self::AnalyzeObject),
            "4" => Ok(Self::EmergencyCooldown),
            "5" => Ok(Self::Exit),
            other => Err(CommandError::InvalidCommand(other.to_string())),
        }
    }
}

/// Validated command accepted by `Session::execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddObject,
    ListInventory,
    AnalyzeObject(String),
    EmergencyCooldown(String),
    Exit,
}

impl Command {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddObject => "add_object",
            Self::ListInventory => "list_inventory",
            Self::AnalyzeObject(_) => "analyze_object",
            Self::EmergencyCooldown(_) => "emergency_cooldown",
            Self::Exit => "exit",
        }
    }
}

/// Recoverable command failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    NotFound(String),
    CapabilityMissing(String),
    InvalidCommand(String),
    /// A targeted command was issued against an empty inventory.
    EmptyInventory(MenuChoice),
}

impl CommandError {
    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::CapabilityMissing(_) => "capability_missing",
            Self::InvalidCommand(_) => "invalid_command",
            Self::EmptyInventory(_) => "empty_inventory",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Object with ID '{id}' not found!"),
            Self::CapabilityMissing(id) => {
                write!(f, "This object cannot be cooled! '{id}' is not a critical object.")
            }
            Self::InvalidCommand(_) => {
                write!(f, "Invalid choice! Please enter a number between 1 and 5.")
            }
            Self::EmptyInventory(MenuChoice::EmergencyCooldown) => {
                write!(f, "Inventory is empty. Nothing to cool.")
            }
            Self::EmptyInventory(_) => write!(f, "Inventory is empty. Nothing to analyze."),
        }
    }
}

impl Error for CommandError {}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}
