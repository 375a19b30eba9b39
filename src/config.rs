use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub history_limit: usize,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parse_or("HOST", lookup("HOST"), defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            history_limit: parse_or("HISTORY_LIMIT", lookup("HISTORY_LIMIT"), defaults.history_limit).max(1),
            page_size: parse_or("HISTORY_PAGE_SIZE", lookup("HISTORY_PAGE_SIZE"), defaults.page_size).max(1),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, fallback: T) -> T {
    match raw {
        None => fallback,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}", key, value);
            fallback
        }),
    }
}
