//! Data model shared by every part of the raider agent.
//!
//! Everything in here is plain, immutable data plus the pure functions that
//! operate on it. Network I/O, exploitation, and island communication live
//! in the crates that consume this one.

pub mod network;
pub mod operating_system;
pub mod plugin;
