//! # Plugin Compatibility Verification
//!
//! The safety gate in front of exploitation: a plugin runs only if its
//! manifest says it can execute on this agent's platform and may be used
//! against the target host.
//!
//! Manifest lookup is two-tier (the bundled table first, the island as a
//! fallback) and the two verification entry points treat lookup failure
//! differently on purpose. [`verify_exploiter_compatibility`] gates closed:
//! a host is never exploited on unconfirmed compatibility. An unknown
//! *target OS*, on the other hand, gates open: fingerprinting often hasn't
//! run yet, and refusing every unfingerprinted host would stall
//! propagation.
//!
//! [`verify_exploiter_compatibility`]: PluginCompatibilityVerifier::verify_exploiter_compatibility

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use raider_common::network::host::TargetHost;
use raider_common::operating_system::OperatingSystem;
use raider_common::plugin::{AgentPluginManifest, PluginType};
use tracing::warn;

use crate::island::IslandApiClient;

pub struct PluginCompatibilityVerifier {
    island_client: Arc<dyn IslandApiClient>,
    local_operating_system: OperatingSystem,
    hard_coded_manifests: HashMap<String, AgentPluginManifest>,
}

impl PluginCompatibilityVerifier {
    pub fn new(
        island_client: Arc<dyn IslandApiClient>,
        local_operating_system: OperatingSystem,
        hard_coded_manifests: HashMap<String, AgentPluginManifest>,
    ) -> Self {
        Self {
            island_client,
            local_operating_system,
            hard_coded_manifests,
        }
    }

    /// Decides whether the named exploiter may be dispatched against
    /// `target_host`.
    ///
    /// Returns `false` when the manifest cannot be resolved or the plugin
    /// cannot execute locally; returns `true` for a target whose operating
    /// system is still unknown once local execution is confirmed.
    pub async fn verify_exploiter_compatibility(
        &self,
        name: &str,
        target_host: &TargetHost,
    ) -> bool {
        let manifest = match self.resolve_manifest(PluginType::Exploiter, name).await {
            Ok(manifest) => manifest,
            Err(err) => {
                warn!("Cannot confirm compatibility of exploiter {name}: {err:#}");
                return false;
            }
        };

        if !manifest.supports(self.local_operating_system) {
            return false;
        }

        match target_host.operating_system {
            Some(os) => manifest.targets(os),
            None => true,
        }
    }

    /// Precondition check: can the named plugin execute on this agent's
    /// platform at all?
    ///
    /// A manifest that cannot be resolved is an error here, not a verdict;
    /// callers filtering a plugin list need to distinguish "incompatible"
    /// from "unknown".
    pub async fn verify_local_operating_system_compatibility(
        &self,
        plugin_type: PluginType,
        name: &str,
    ) -> anyhow::Result<bool> {
        let manifest = self.resolve_manifest(plugin_type, name).await?;
        Ok(manifest.supports(self.local_operating_system))
    }

    /// Bundled table first, island second. Remote results are not cached;
    /// every miss is a fresh fetch.
    async fn resolve_manifest(
        &self,
        plugin_type: PluginType,
        name: &str,
    ) -> anyhow::Result<AgentPluginManifest> {
        if let Some(manifest) = self.hard_coded_manifests.get(name) {
            return Ok(manifest.clone());
        }

        self.island_client
            .get_agent_plugin_manifest(plugin_type, name)
            .await
            .with_context(|| format!("manifest for plugin '{name}' is unavailable"))
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
