//! # Network Interface Model
//!
//! A local adapter as the target resolver sees it: one IPv4 address and a
//! prefix length, from which the enclosing network is derived. The model is
//! immutable once constructed; [`local_interfaces`] is the one place that
//! reads the operating system's adapter tables.

use std::net::Ipv4Addr;

use pnet::datalink;
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("prefix length {0} is not valid for an IPv4 interface")]
pub struct InvalidPrefixLength(pub u8);

/// A local network adapter's IPv4 attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkInterface {
    address: Ipv4Addr,
    network: Ipv4Network,
}

impl NetworkInterface {
    pub fn new(address: Ipv4Addr, prefix_length: u8) -> Result<Self, InvalidPrefixLength> {
        let attached = Ipv4Network::new(address, prefix_length)
            .map_err(|_| InvalidPrefixLength(prefix_length))?;
        let network = Ipv4Network::new(attached.network(), prefix_length)
            .map_err(|_| InvalidPrefixLength(prefix_length))?;

        Ok(Self { address, network })
    }

    /// The interface's own address. Never a legal scan target.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.network.prefix()
    }

    /// The network this interface is attached to, with the address aligned
    /// down to the prefix boundary.
    pub fn network(&self) -> Ipv4Network {
        self.network
    }
}

/// Enumerates the machine's usable IPv4 attachments: every address of every
/// interface that is up and not a loopback.
///
/// This reads kernel tables only; no packets are sent.
pub fn local_interfaces() -> Vec<NetworkInterface> {
    datalink::interfaces()
        .into_iter()
        .filter(|interface| interface.is_up() && !interface.is_loopback())
        .flat_map(|interface| interface.ips)
        .filter_map(|net| match net {
            IpNetwork::V4(v4) => NetworkInterface::new(v4.ip(), v4.prefix()).ok(),
            IpNetwork::V6(_) => None,
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
