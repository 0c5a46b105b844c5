use std::net::SocketAddr;
use tracing::warn;

/// Environment variable holding the listen address.
pub const ADDR_ENV_VAR: &str = "EXPENSES_DEV_ADDR";

#[derive(Debug, Clone, PartialEq)]
pub struct DevServerConfig {
    pub addr: SocketAddr,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

impl DevServerConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ADDR_ENV_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Self::default(),
            Some(raw) => match raw.parse::<SocketAddr>() {
                Ok(addr) => Self { addr },
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}", ADDR_ENV_VAR, raw, e);
                    Self::default()
                }
            },
        }
    }
}
