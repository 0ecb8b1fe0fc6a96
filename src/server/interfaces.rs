//! Local network interface listing, logged when the server starts

use crate::errors::AppResult;
use std::net::IpAddr;
use tracing::{info, warn};

/// One address assigned to a local interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub ip: IpAddr,
}

/// Every address on every local interface, in the order the OS reports them
pub fn interface_addresses() -> AppResult<Vec<InterfaceAddress>> {
    let interfaces = if_addrs::get_if_addrs()?;
    Ok(interfaces
        .into_iter()
        .map(|iface| InterfaceAddress {
            ip: iface.ip(),
            name: iface.name,
        })
        .collect())
}

/// Log each interface address at INFO, returning how many were logged
///
/// Failing to enumerate interfaces is only a warning; the server still starts.
pub fn log_network_interfaces() -> usize {
    match interface_addresses() {
        Ok(addresses) => {
            for address in &addresses {
                info!(
                    interface = %address.name,
                    ip = %address.ip,
                    "Interface: {}, IP Address: {}",
                    address.name,
                    address.ip
                );
            }
            addresses.len()
        }
        Err(e) => {
            warn!("Failed to get network interfaces: {}", e);
            0
        }
    }
}
