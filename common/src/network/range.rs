//! # Address Range Model
//!
//! Parses and expands the address specifications a scan can be pointed at:
//! * A CIDR block (e.g. `10.0.0.0/24`). Host bits in the base address are
//!   tolerated and aligned down to the prefix boundary.
//! * A single IPv4 address (e.g. `10.0.0.2`).
//! * An interval (e.g. `10.0.0.5-10.0.0.20`). Whitespace around the `-` is
//!   tolerated, the endpoints may be given in either order, and the end may
//!   abbreviate leading octets it shares with the start (`10.0.0.5-20`).
//!
//! Parsing and expansion are pure: the same specification always yields the
//! same addresses, and no network I/O happens here.

use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("empty address range specification")]
    Empty,
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("invalid CIDR block '{0}'")]
    InvalidCidr(String),
    #[error("invalid address interval '{0}'")]
    InvalidInterval(String),
}

/// One address specification, parsed but not yet expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressRange {
    Cidr(Ipv4Network),
    Single(Ipv4Addr),
    Interval { start: Ipv4Addr, end: Ipv4Addr },
}

impl AddressRange {
    /// Concrete addresses this range nominates for scanning, ascending.
    ///
    /// A CIDR block keeps its network (first) address but drops its
    /// broadcast (last) address. Blocks of prefix length 31 or 32 have no
    /// broadcast concept and expand verbatim, as do intervals.
    pub fn expand(&self) -> Vec<Ipv4Addr> {
        match self {
            AddressRange::Single(addr) => vec![*addr],
            AddressRange::Interval { start, end } => {
                (u32::from(*start)..=u32::from(*end))
                    .map(Ipv4Addr::from)
                    .collect()
            }
            AddressRange::Cidr(block) => {
                let first: u32 = block.network().into();
                let last: u32 = block.broadcast().into();
                if block.prefix() >= 31 {
                    (first..=last).map(Ipv4Addr::from).collect()
                } else {
                    (first..last).map(Ipv4Addr::from).collect()
                }
            }
        }
    }

    /// Lowest address covered by the range (the CIDR network address).
    pub fn first_address(&self) -> Ipv4Addr {
        match self {
            AddressRange::Single(addr) => *addr,
            AddressRange::Interval { start, .. } => *start,
            AddressRange::Cidr(block) => block.network(),
        }
    }

    /// Highest address covered by the range, broadcast included.
    ///
    /// Containment checks care about the whole block, not just the
    /// addresses [`expand`](Self::expand) would nominate.
    pub fn last_address(&self) -> Ipv4Addr {
        match self {
            AddressRange::Single(addr) => *addr,
            AddressRange::Interval { end, .. } => *end,
            AddressRange::Cidr(block) => block.broadcast(),
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr: u32 = addr.into();
        u32::from(self.first_address()) <= addr && addr <= u32::from(self.last_address())
    }
}

impl FromStr for AddressRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(RangeParseError::Empty);
        }
        if spec.contains('/') {
            return parse_cidr(spec);
        }
        if spec.contains('-') {
            return parse_interval(spec);
        }

        let addr = spec
            .parse::<Ipv4Addr>()
            .map_err(|_| RangeParseError::InvalidAddress(spec.to_string()))?;
        Ok(AddressRange::Single(addr))
    }
}

fn parse_cidr(spec: &str) -> Result<AddressRange, RangeParseError> {
    let invalid = || RangeParseError::InvalidCidr(spec.to_string());
    let (addr_str, prefix_str) = spec.split_once('/').ok_or_else(invalid)?;

    let addr = addr_str.trim().parse::<Ipv4Addr>().map_err(|_| invalid())?;
    let prefix = prefix_str.trim().parse::<u8>().map_err(|_| invalid())?;

    // Align the base address down so equal blocks compare equal no matter
    // how they were written.
    let block = Ipv4Network::new(addr, prefix).map_err(|_| invalid())?;
    let block = Ipv4Network::new(block.network(), prefix).map_err(|_| invalid())?;

    Ok(AddressRange::Cidr(block))
}

fn parse_interval(spec: &str) -> Result<AddressRange, RangeParseError> {
    let invalid = || RangeParseError::InvalidInterval(spec.to_string());
    let (start_str, end_str) = spec.split_once('-').ok_or_else(invalid)?;

    let start = start_str
        .trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| invalid())?;
    let end = parse_interval_end(end_str.trim(), start).ok_or_else(invalid)?;

    let (start, end) = if u32::from(start) <= u32::from(end) {
        (start, end)
    } else {
        (end, start)
    };

    Ok(AddressRange::Interval { start, end })
}

/// The end of an interval may be a full address or just its trailing
/// octets, in which case the missing leading octets come from the start
/// (`192.168.1.10-50` means `192.168.1.10-192.168.1.50`).
fn parse_interval_end(end_str: &str, start: Ipv4Addr) -> Option<Ipv4Addr> {
    if let Ok(addr) = end_str.parse::<Ipv4Addr>() {
        return Some(addr);
    }

    let partial: Vec<u8> = end_str
        .split('.')
        .map(|octet| octet.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    if partial.is_empty() || partial.len() >= 4 {
        return None;
    }

    let mut octets = start.octets();
    octets[4 - partial.len()..].copy_from_slice(&partial);
    Some(Ipv4Addr::from(octets))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
