use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use raider_common::network::host::TargetHost;
use raider_common::operating_system::OperatingSystem;
use raider_common::plugin::{AgentPluginManifest, PluginType};
use raider_plugins::compatibility::PluginCompatibilityVerifier;
use raider_plugins::island::{IslandApiClient, IslandApiError};
use raider_plugins::manifests::hard_coded_exploiter_manifests;

/// Island stub serving a manifest catalog the way the real island does:
/// by plugin name, with unknown names rejected.
struct CatalogIslandClient {
    catalog: HashMap<String, AgentPluginManifest>,
}

#[async_trait]
impl IslandApiClient for CatalogIslandClient {
    async fn get_agent_plugin_manifest(
        &self,
        _plugin_type: PluginType,
        name: &str,
    ) -> Result<AgentPluginManifest, IslandApiError> {
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| IslandApiError::UnknownPlugin(name.to_string()))
    }
}

fn island_with(manifests: &[AgentPluginManifest]) -> Arc<CatalogIslandClient> {
    Arc::new(CatalogIslandClient {
        catalog: manifests
            .iter()
            .map(|m| (m.name.clone(), m.clone()))
            .collect(),
    })
}

fn remote_exploiter(name: &str) -> AgentPluginManifest {
    AgentPluginManifest {
        name: name.to_string(),
        plugin_type: PluginType::Exploiter,
        supported_operating_systems: [OperatingSystem::Linux, OperatingSystem::Windows]
            .into_iter()
            .collect(),
        target_operating_systems: Some([OperatingSystem::Windows].into_iter().collect()),
        title: format!("{name} exploiter"),
        version: "2.0.0".to_string(),
        link_to_documentation: None,
    }
}

fn unknown_host() -> TargetHost {
    TargetHost::new("10.9.9.9".parse().unwrap())
}

#[tokio::test]
async fn bundled_and_remote_manifests_gate_together() {
    let island = island_with(&[remote_exploiter("Phantom")]);
    let verifier = PluginCompatibilityVerifier::new(
        island,
        OperatingSystem::Linux,
        hard_coded_exploiter_manifests(),
    );

    // Bundled: SSH targets linux hosts and runs anywhere.
    let linux_host =
        TargetHost::with_operating_system("10.0.0.7".parse().unwrap(), OperatingSystem::Linux);
    assert!(verifier.verify_exploiter_compatibility("SSH", &linux_host).await);

    // Bundled: WMI only executes on windows agents; this agent is linux.
    assert!(!verifier.verify_exploiter_compatibility("WMI", &linux_host).await);

    // Remote: resolved through the island, then gated on target OS.
    assert!(!verifier.verify_exploiter_compatibility("Phantom", &linux_host).await);
    let windows_host =
        TargetHost::with_operating_system("10.0.0.8".parse().unwrap(), OperatingSystem::Windows);
    assert!(verifier.verify_exploiter_compatibility("Phantom", &windows_host).await);
}

#[tokio::test]
async fn unfingerprinted_hosts_are_optimistically_engaged() {
    let verifier = PluginCompatibilityVerifier::new(
        island_with(&[]),
        OperatingSystem::Linux,
        hard_coded_exploiter_manifests(),
    );

    assert!(verifier.verify_exploiter_compatibility("SSH", &unknown_host()).await);
}

#[tokio::test]
async fn unknown_plugins_gate_closed_but_error_on_precondition_checks() {
    let verifier = PluginCompatibilityVerifier::new(
        island_with(&[]),
        OperatingSystem::Linux,
        hard_coded_exploiter_manifests(),
    );

    // Safety gate: absorbed into a refusal, even for an unknown target OS.
    assert!(
        !verifier
            .verify_exploiter_compatibility("NoSuchPlugin", &unknown_host())
            .await
    );

    // Precondition check: the failure is the caller's to handle.
    let result = verifier
        .verify_local_operating_system_compatibility(PluginType::Exploiter, "NoSuchPlugin")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn verifier_is_shareable_across_concurrent_checks() {
    let verifier = Arc::new(PluginCompatibilityVerifier::new(
        island_with(&[remote_exploiter("Phantom")]),
        OperatingSystem::Linux,
        hard_coded_exploiter_manifests(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let verifier = Arc::clone(&verifier);
            tokio::spawn(async move {
                let name = if i % 2 == 0 { "SSH" } else { "Phantom" };
                verifier
                    .verify_exploiter_compatibility(name, &unknown_host())
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
