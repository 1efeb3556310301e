//! # Scan Target Compilation
//!
//! Turns the agent's view of the network (explicit ranges from
//! configuration, the subnets its own interfaces sit on, segmentation-test
//! subnets, and the blocklist) into the concrete set of addresses one
//! propagation cycle will probe.
//!
//! The computation is a pure set construction: every contribution is
//! unioned first, the exclusions (the agent's own addresses, the blocklist)
//! are applied once at the end, and the result is deduplicated and ordered.
//! Nothing here touches the network.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use anyhow::Context;
use raider_common::network::interface::NetworkInterface;
use raider_common::network::range::AddressRange;
use tracing::debug;

/// Compiles the address set for one propagation cycle.
///
/// `ranges_to_scan` and `inaccessible_subnets` are free-form range
/// specifications (CIDR, single address, or interval); a malformed entry
/// aborts the whole resolution, since it is a configuration defect rather
/// than something to scan around.
///
/// The returned list is ascending, duplicate-free, and never contains a
/// local interface's own address or a blocklisted address, no matter which
/// contribution nominated it.
pub fn compile_scan_targets(
    local_network_interfaces: &[NetworkInterface],
    ranges_to_scan: &[String],
    inaccessible_subnets: &[String],
    blocklisted_addresses: &[Ipv4Addr],
    enable_local_network_scan: bool,
) -> anyhow::Result<Vec<String>> {
    let mut targets: BTreeSet<Ipv4Addr> = BTreeSet::new();

    for spec in ranges_to_scan {
        let range: AddressRange = spec
            .parse()
            .with_context(|| format!("invalid scan range '{spec}'"))?;
        targets.extend(range.expand());
    }

    if enable_local_network_scan {
        for interface in local_network_interfaces {
            targets.extend(AddressRange::Cidr(interface.network()).expand());
        }
    }

    for spec in inaccessible_subnets {
        let subnet: AddressRange = spec
            .parse()
            .with_context(|| format!("invalid inaccessible subnet '{spec}'"))?;
        targets.extend(segmentation_probe_addresses(
            local_network_interfaces,
            subnet,
        ));
    }

    // Exclusions strictly follow the union so they cancel addresses from
    // every contribution, including the ones above.
    for interface in local_network_interfaces {
        targets.remove(&interface.address());
    }
    for blocked in blocklisted_addresses {
        targets.remove(blocked);
    }

    Ok(targets.iter().map(Ipv4Addr::to_string).collect())
}

/// Addresses one inaccessible subnet contributes to segmentation probing.
///
/// Per local interface the subnet falls into one of three classes:
/// * it covers the interface's own address: the agent is already attached
///   to that segment, so there is nothing to verify; skipped.
/// * it nests entirely inside the interface's network: the local network
///   encloses a segment that is supposed to be walled off, so its addresses
///   are probed to verify the wall holds.
/// * it is unrelated to the interface's network: out of scope; skipped.
///
/// A subnet participates if it qualifies for any interface. Self-overlap is
/// judged against the paired interface only, so a subnet shadowing one
/// interface can still be probed via another.
fn segmentation_probe_addresses(
    local_network_interfaces: &[NetworkInterface],
    subnet: AddressRange,
) -> Vec<Ipv4Addr> {
    for interface in local_network_interfaces {
        if subnet.contains(interface.address()) {
            debug!(
                "Skipping inaccessible subnet {subnet:?}: contains own address {}",
                interface.address()
            );
            continue;
        }

        let local_network = AddressRange::Cidr(interface.network());
        if local_network.contains(subnet.first_address())
            && local_network.contains(subnet.last_address())
        {
            return subnet.expand();
        }
    }

    Vec::new()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
