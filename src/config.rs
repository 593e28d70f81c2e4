//! Host settings: Leptos options plus the bind address.
//!
//! `LEPTOS_SITE_ADDR` is honored by Leptos' own configuration loader; a bare
//! `PORT` (as set by most hosting platforms) overrides just the port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl Settings {
    /// Read the Leptos configuration and apply `PORT` from the environment.
    pub fn load() -> Result<Self, HostError> {
        let conf = get_configuration(None).map_err(|e| HostError::Config(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = resolve_addr(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// `site_addr` with its port replaced by `port`, when one is given.
pub fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, HostError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(site_addr);
    };
    let port = raw.parse::<u16>().map_err(|_| HostError::InvalidPort(raw.to_owned()))?;
    // Platform-assigned ports listen on all interfaces.
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}
