pub mod plugins;
pub mod targets;

use std::net::Ipv4Addr;

use clap::{Args, Parser, Subcommand};
use raider_common::operating_system::OperatingSystem;

#[derive(Parser)]
#[command(name = "raider")]
#[command(about = "Breach and attack simulation agent.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile the address set the next propagation cycle would probe
    #[command(alias = "t")]
    Targets(TargetArgs),
    /// Dry-run the plugin compatibility gate over the bundled manifests
    #[command(alias = "p")]
    Plugins(PluginArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Address range to scan: CIDR, single address, or A-B interval
    #[arg(short, long = "range")]
    pub ranges: Vec<String>,

    /// Subnet that network segmentation is supposed to make unreachable
    #[arg(long = "inaccessible-subnet")]
    pub inaccessible_subnets: Vec<String>,

    /// Address that must never be scanned
    #[arg(long = "block")]
    pub blocklist: Vec<Ipv4Addr>,

    /// Also sweep the networks attached to local interfaces
    #[arg(long)]
    pub local_scan: bool,

    /// Resolve without enumerating local adapters (reproducible dry runs)
    #[arg(long)]
    pub no_local_interfaces: bool,
}

#[derive(Args)]
pub struct PluginArgs {
    /// Check a single plugin instead of the whole bundled table
    #[arg(short, long)]
    pub name: Option<String>,

    /// Operating system of the hypothetical target host, if fingerprinted
    #[arg(long)]
    pub target_os: Option<OperatingSystem>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
