//! Client-side seam to the island control server.
//!
//! The island owns plugin distribution; this crate only ever asks it for
//! manifests. Implementations decide transport, authentication, and any
//! retry discipline; callers treat every fetch as independently fallible.

use async_trait::async_trait;
use raider_common::plugin::{AgentPluginManifest, PluginType};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IslandApiError {
    #[error("island is unreachable: {0}")]
    Unreachable(String),
    #[error("island request failed: {0}")]
    RequestFailed(String),
    #[error("plugin '{0}' is not known to the island")]
    UnknownPlugin(String),
}

#[async_trait]
pub trait IslandApiClient: Send + Sync {
    /// Fetches the manifest of one plugin from the island.
    async fn get_agent_plugin_manifest(
        &self,
        plugin_type: PluginType,
        name: &str,
    ) -> Result<AgentPluginManifest, IslandApiError>;
}
