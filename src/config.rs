//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use crate::error::HostError;

/// Listen address for the SSR host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional, each falling back to the matching half of `site_addr` (the
    /// Leptos `site-addr` setting):
    /// - `HOST`: IP address to bind
    /// - `PORT`: TCP port
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, HostError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref(), site_addr.ip())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref(), site_addr.port())?;
        Ok(Self { host, port })
    }

    pub fn socket_addr(self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| HostError::ConfigParse(format!("invalid PORT: {value}"))),
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<IpAddr>()
            .map_err(|_| HostError::ConfigParse(format!("invalid HOST: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
