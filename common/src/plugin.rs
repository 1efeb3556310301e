//! Plugin metadata as distributed by the island.
//!
//! Manifests are read-only data; their lifecycle (packaging, distribution,
//! loading) belongs to the plugin subsystem, not to this crate.

use std::collections::HashSet;
use std::fmt;

use crate::operating_system::OperatingSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginType {
    Exploiter,
    CredentialsCollector,
    Fingerprinter,
    Payload,
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginType::Exploiter => write!(f, "exploiter"),
            PluginType::CredentialsCollector => write!(f, "credentials-collector"),
            PluginType::Fingerprinter => write!(f, "fingerprinter"),
            PluginType::Payload => write!(f, "payload"),
        }
    }
}

/// Static metadata describing one agent plugin.
///
/// `target_operating_systems` only carries meaning for exploiters; `None`
/// means the plugin declares no target-OS restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPluginManifest {
    pub name: String,
    pub plugin_type: PluginType,
    pub supported_operating_systems: HashSet<OperatingSystem>,
    pub target_operating_systems: Option<HashSet<OperatingSystem>>,
    pub title: String,
    pub version: String,
    pub link_to_documentation: Option<String>,
}

impl AgentPluginManifest {
    /// Whether the plugin can execute on an agent running `os`.
    pub fn supports(&self, os: OperatingSystem) -> bool {
        self.supported_operating_systems.contains(&os)
    }

    /// Whether the plugin may be used against a host running `os`.
    pub fn targets(&self, os: OperatingSystem) -> bool {
        match &self.target_operating_systems {
            Some(targets) => targets.contains(&os),
            None => true,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
