//! Plugin gating for the raider agent.
//!
//! Before the exploitation orchestrator dispatches a plugin, two questions
//! must be answered: can the plugin run on this agent's platform, and may
//! it be used against the target host? Both answers come from the plugin's
//! manifest, resolved from the bundled table or fetched from the island.

pub mod compatibility;
pub mod island;
pub mod manifests;
