//! Manifests bundled with every agent build.
//!
//! These cover the exploiters the agent carries in its own binary, so they
//! resolve without a round trip to the island.

use std::collections::HashMap;

use raider_common::operating_system::OperatingSystem;
use raider_common::plugin::{AgentPluginManifest, PluginType};

const DOCS_BASE: &str = "https://docs.raider.local/exploiters";

pub fn hard_coded_exploiter_manifests() -> HashMap<String, AgentPluginManifest> {
    [ssh(), smb(), wmi(), log4shell()]
        .into_iter()
        .map(|manifest| (manifest.name.clone(), manifest))
        .collect()
}

fn ssh() -> AgentPluginManifest {
    AgentPluginManifest {
        name: "SSH".to_string(),
        plugin_type: PluginType::Exploiter,
        supported_operating_systems: [OperatingSystem::Linux, OperatingSystem::Windows]
            .into_iter()
            .collect(),
        target_operating_systems: Some([OperatingSystem::Linux].into_iter().collect()),
        title: "SSH Exploiter".to_string(),
        version: "1.0.0".to_string(),
        link_to_documentation: Some(format!("{DOCS_BASE}/ssh")),
    }
}

fn smb() -> AgentPluginManifest {
    AgentPluginManifest {
        name: "SMB".to_string(),
        plugin_type: PluginType::Exploiter,
        supported_operating_systems: [OperatingSystem::Linux, OperatingSystem::Windows]
            .into_iter()
            .collect(),
        target_operating_systems: Some([OperatingSystem::Windows].into_iter().collect()),
        title: "SMB Exploiter".to_string(),
        version: "1.0.0".to_string(),
        link_to_documentation: Some(format!("{DOCS_BASE}/smb")),
    }
}

fn wmi() -> AgentPluginManifest {
    AgentPluginManifest {
        name: "WMI".to_string(),
        plugin_type: PluginType::Exploiter,
        supported_operating_systems: [OperatingSystem::Windows].into_iter().collect(),
        target_operating_systems: Some([OperatingSystem::Windows].into_iter().collect()),
        title: "WMI Exploiter".to_string(),
        version: "1.0.0".to_string(),
        link_to_documentation: Some(format!("{DOCS_BASE}/wmi")),
    }
}

fn log4shell() -> AgentPluginManifest {
    AgentPluginManifest {
        name: "Log4Shell".to_string(),
        plugin_type: PluginType::Exploiter,
        supported_operating_systems: [OperatingSystem::Linux, OperatingSystem::Windows]
            .into_iter()
            .collect(),
        // Vulnerable services run anywhere a JVM does.
        target_operating_systems: None,
        title: "Log4Shell Exploiter".to_string(),
        version: "1.1.0".to_string(),
        link_to_documentation: Some(format!("{DOCS_BASE}/log4shell")),
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
