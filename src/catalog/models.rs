/// Data models for catalog entries
///
/// All models map to entries in the catalog JSON file.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Privilege level a command requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    User,
    Moderator,
    Admin,
    Owner,
}

impl Permission {
    /// Every permission, lowest priority first
    pub const ALL: [Permission; 4] = [
        Permission::User,
        Permission::Moderator,
        Permission::Admin,
        Permission::Owner,
    ];

    /// Sort priority. Higher means more privileged.
    pub fn priority(&self) -> u8 {
        match self {
            Permission::User => 0,
            Permission::Moderator => 1,
            Permission::Admin => 2,
            Permission::Owner => 3,
        }
    }

    /// Human-readable badge label
    pub fn label(&self) -> &str {
        match self {
            Permission::User => "User",
            Permission::Moderator => "Moderator",
            Permission::Admin => "Admin",
            Permission::Owner => "Owner",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::User => "user",
            Permission::Moderator => "moderator",
            Permission::Admin => "admin",
            Permission::Owner => "owner",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Permission {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Permission::User),
            "moderator" | "mod" => Ok(Permission::Moderator),
            "admin" => Ok(Permission::Admin),
            "owner" => Ok(Permission::Owner),
            _ => Err(CatalogError::UnknownPermission(s.to_string())),
        }
    }
}

/// A single parameter of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

/// A named set of parameters, e.g. one usage form of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A bot command as listed on the commands page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permission: Permission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_groups: Option<Vec<ParameterGroup>>,
}

impl CommandRecord {
    /// Aliases, empty when none are declared
    pub fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or_default()
    }

    /// Command groups (tags), empty when none are declared
    pub fn command_groups(&self) -> &[String] {
        self.command_groups.as_deref().unwrap_or_default()
    }

    /// Parameter groups, empty when none are declared
    pub fn parameter_groups(&self) -> &[ParameterGroup] {
        self.parameter_groups.as_deref().unwrap_or_default()
    }

    /// Whether the card can be expanded. Needs at least one parameter group.
    pub fn is_focus_eligible(&self) -> bool {
        !self.parameter_groups().is_empty()
    }
}

/// A quote as listed on the quotes page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub number: u32,
    pub quote: String,
    pub game: String,
    pub timestamp: String,
}

/// On-disk shape of the catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub commands: Vec<CommandRecord>,
    #[serde(default)]
    pub quotes: Vec<QuoteRecord>,
}
