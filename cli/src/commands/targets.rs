use raider_common::network::interface::{self, NetworkInterface};
use raider_core::targets;
use tracing::{info, warn};

use crate::commands::TargetArgs;

pub fn run(args: TargetArgs) -> anyhow::Result<()> {
    let interfaces: Vec<NetworkInterface> = if args.no_local_interfaces {
        Vec::new()
    } else {
        interface::local_interfaces()
    };
    info!("Resolving against {} local interface(s)", interfaces.len());

    let scan_targets = targets::compile_scan_targets(
        &interfaces,
        &args.ranges,
        &args.inaccessible_subnets,
        &args.blocklist,
        args.local_scan,
    )?;

    if scan_targets.is_empty() {
        warn!("No scan targets remain after exclusions");
        return Ok(());
    }

    info!("{} scan target(s)", scan_targets.len());
    for address in &scan_targets {
        println!("{address}");
    }

    Ok(())
}
