use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use raider_common::network::host::TargetHost;
use raider_common::operating_system::OperatingSystem;
use raider_common::plugin::{AgentPluginManifest, PluginType};
use raider_plugins::compatibility::PluginCompatibilityVerifier;
use raider_plugins::island::{IslandApiClient, IslandApiError};
use raider_plugins::manifests;
use tracing::{info, warn};

use crate::commands::PluginArgs;

// RFC 5737 documentation address; the gate never dials it.
const PLACEHOLDER_TARGET: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 1);

/// Dry runs have no island: every remote lookup fails, so anything outside
/// the bundled table demonstrably gates closed.
struct OfflineIslandClient;

#[async_trait]
impl IslandApiClient for OfflineIslandClient {
    async fn get_agent_plugin_manifest(
        &self,
        _plugin_type: PluginType,
        name: &str,
    ) -> Result<AgentPluginManifest, IslandApiError> {
        Err(IslandApiError::Unreachable(format!(
            "offline dry run, cannot fetch '{name}'"
        )))
    }
}

pub async fn run(args: PluginArgs) -> anyhow::Result<()> {
    let local_os = OperatingSystem::current();
    let table = manifests::hard_coded_exploiter_manifests();

    let mut names: Vec<String> = match args.name {
        Some(name) => vec![name],
        None => table.keys().cloned().collect(),
    };
    names.sort();

    let verifier =
        PluginCompatibilityVerifier::new(Arc::new(OfflineIslandClient), local_os, table);

    let target_host = match args.target_os {
        Some(os) => TargetHost::with_operating_system(PLACEHOLDER_TARGET, os),
        None => TargetHost::new(PLACEHOLDER_TARGET),
    };
    let target_label = match target_host.operating_system {
        Some(os) => os.to_string(),
        None => "unknown".to_string(),
    };

    info!("Local platform: {local_os}");
    for name in names {
        match verifier
            .verify_local_operating_system_compatibility(PluginType::Exploiter, &name)
            .await
        {
            Ok(true) => info!("{name}: runs on this platform"),
            Ok(false) => {
                info!("{name}: not supported on this platform");
                continue;
            }
            Err(err) => {
                warn!("{name}: {err:#}");
                continue;
            }
        }

        let verdict = verifier
            .verify_exploiter_compatibility(&name, &target_host)
            .await;
        if verdict {
            info!("{name}: may engage a host with {target_label} fingerprint");
        } else {
            info!("{name}: blocked for a host with {target_label} fingerprint");
        }
    }

    Ok(())
}
