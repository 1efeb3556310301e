//! Cross-crate scenario tests for the raider workspace.

#[cfg(test)]
mod compatibility;
#[cfg(test)]
mod resolution;
