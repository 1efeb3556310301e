use std::net::Ipv4Addr;

use raider_common::network::interface::NetworkInterface;
use raider_core::targets::compile_scan_targets;

fn interface(addr: &str, prefix: u8) -> NetworkInterface {
    NetworkInterface::new(addr.parse().unwrap(), prefix).unwrap()
}

fn specs(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// End-to-end run of a realistic propagation-cycle configuration, checked
/// against the resolver's two hard invariants by exhaustive membership
/// scan: no local address and no blocklisted address may ever survive.
#[test]
fn exclusion_invariants_hold_across_all_contributions() {
    let interfaces = [
        interface("10.2.2.5", 24),
        interface("172.60.145.109", 24),
    ];
    let ranges = specs(&[
        "10.2.2.0/24",
        "10.2.2.5",
        "172.60.145.100-172.60.145.120",
    ]);
    let inaccessible = specs(&["172.60.145.144/30"]);
    let blocklist: Vec<Ipv4Addr> = vec![
        "10.2.2.17".parse().unwrap(),
        "172.60.145.144".parse().unwrap(),
    ];

    let targets =
        compile_scan_targets(&interfaces, &ranges, &inaccessible, &blocklist, true).unwrap();

    assert!(!targets.is_empty());
    for iface in &interfaces {
        assert!(
            !targets.contains(&iface.address().to_string()),
            "own address {} leaked into the target set",
            iface.address()
        );
    }
    for blocked in &blocklist {
        assert!(
            !targets.contains(&blocked.to_string()),
            "blocklisted address {blocked} leaked into the target set"
        );
    }

    // The segmentation probe minus its blocklisted member is still there.
    assert!(targets.contains(&"172.60.145.145".to_string()));
    assert!(targets.contains(&"172.60.145.146".to_string()));
}

#[test]
fn repeated_resolution_is_idempotent() {
    let interfaces = [interface("192.168.1.33", 24)];
    let ranges = specs(&["192.168.1.0/24", "10.0.0.1-10.0.0.16"]);
    let blocklist: Vec<Ipv4Addr> = vec!["10.0.0.4".parse().unwrap()];

    let runs: Vec<_> = (0..3)
        .map(|_| compile_scan_targets(&interfaces, &ranges, &[], &blocklist, false).unwrap())
        .collect();

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn documented_single_subnet_scenario() {
    let targets = compile_scan_targets(&[], &specs(&["10.0.0.0/24"]), &[], &[], false).unwrap();

    assert_eq!(targets.len(), 255);
    assert_eq!(targets.first().unwrap(), "10.0.0.0");
    assert_eq!(targets.last().unwrap(), "10.0.0.254");
}

#[test]
fn documented_segmentation_scenario() {
    let interfaces = [interface("172.60.145.109", 24)];
    let inaccessible = specs(&["172.60.145.108/30", "172.60.145.144/30"]);

    let targets = compile_scan_targets(&interfaces, &[], &inaccessible, &[], false).unwrap();

    assert_eq!(
        targets,
        vec![
            "172.60.145.144".to_string(),
            "172.60.145.145".to_string(),
            "172.60.145.146".to_string(),
        ]
    );
}
