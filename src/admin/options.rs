use std::fmt;
use std::time::Duration;

use crate::config::{Config, ConfigError};
use crate::constants::{DEFAULT_ADDRESS, DEFAULT_PORT, DEFAULT_TIMEOUT};

/// Where and how to reach an admin interface.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminOptions {
    pub address: String,
    pub port: u16,
    /// Shared secret. Empty means every call goes out unauthenticated.
    pub password: String,
    /// Receive timeout per exchange; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl AdminOptions {
    /// Builds options, falling back to the loopback address and the default
    /// admin port when `address` is empty or `port` is `None`.
    pub fn new(address: &str, port: Option<u16>, password: &str) -> Self {
        let address = if address.is_empty() {
            DEFAULT_ADDRESS
        } else {
            address
        };
        Self {
            address: address.to_string(),
            port: port.unwrap_or(DEFAULT_PORT),
            password: password.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Reads the admin bind address and password from a node config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let (address, port) = config.admin.endpoint()?;
        Ok(Self::new(&address, Some(port), &config.admin.password))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for AdminOptions {
    fn default() -> Self {
        Self::new("", None, "")
    }
}

impl fmt::Debug for AdminOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminOptions")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("timeout", &self.timeout)
            .finish()
    }
}
