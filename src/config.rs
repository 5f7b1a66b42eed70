//! Reading and writing the node configuration file (`cjdroute.conf`).
//!
//! The file is JSON with `//` and `/* */` comments. Comments are stripped
//! before parsing and are not written back. Keys this module does not model
//! are kept in each section's `extra` map, so reading a file and writing it
//! back preserves every value.
//!
//! ```
//! use cjdadmin::config::Config;
//!
//! let text = r#"{
//!     // generated by cjdroute --genconf
//!     "privateKey": "aa",
//!     "publicKey": "bb.k",
//!     "ipv6": "fc00::1",
//!     "authorizedPasswords": [{ "password": "p1" }],
//!     "admin": { "bind": "127.0.0.1:11234", "password": "secret" },
//!     "interfaces": { "UDPInterface": { "bind": "0.0.0.0:0" } }
//! }"#;
//!
//! let config: Config = text.parse().unwrap();
//! assert_eq!(config.admin.endpoint().unwrap(), ("127.0.0.1".to_string(), 11234));
//! ```

mod comments;
mod error;

use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

pub use comments::strip_comments;
pub use error::ConfigError;

/// Top-level node configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Node private key, hex.
    pub private_key: String,
    /// Node public key in `.k` form.
    pub public_key: String,
    /// Address derived from the public key.
    pub ipv6: String,
    /// Credentials peers may use to connect to this node.
    pub authorized_passwords: Vec<AuthorizedPassword>,
    /// Admin RPC endpoint.
    pub admin: AdminBlock,
    pub interfaces: InterfacesBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<RouterBlock>,
    /// Seconds of inactivity before a crypto session is reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_after_inactivity_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedPassword {
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminBlock {
    /// `host:port` the admin interface listens on.
    pub bind: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl AdminBlock {
    /// Splits `bind` into host and port.
    ///
    /// Accepts `1.2.3.4:11234`, `[::1]:11234` and `localhost:11234`.
    pub fn endpoint(&self) -> Result<(String, u16), ConfigError> {
        if let Ok(addr) = self.bind.parse::<SocketAddr>() {
            return Ok((addr.ip().to_string(), addr.port()));
        }

        let invalid = || ConfigError::InvalidBind(self.bind.clone());
        let (host, port) = self.bind.rsplit_once(':').ok_or_else(invalid)?;
        let port = port.parse().map_err(|_| invalid())?;
        if host.is_empty() || host.contains(':') {
            return Err(invalid());
        }
        Ok((host.to_string(), port))
    }
}

/// One interface block or a list of them; the file may use either form and
/// keeps it on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterfaceList<T> {
    Many(Vec<T>),
    Single(T),
}

impl<T> InterfaceList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            InterfaceList::Many(list) => list.iter(),
            InterfaceList::Single(one) => std::slice::from_ref(one).iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InterfaceList::Many(list) => list.len(),
            InterfaceList::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfacesBlock {
    #[serde(
        rename = "UDPInterface",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub udp: Option<InterfaceList<UdpInterface>>,
    #[serde(
        rename = "ETHInterface",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub eth: Option<InterfaceList<EthInterface>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UdpInterface {
    pub bind: String,
    /// Outgoing peers keyed by `host:port`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connect_to: BTreeMap<String, PeerCredentials>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthInterface {
    /// Device name, e.g. `eth0`.
    pub bind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon: Option<u64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connect_to: BTreeMap<String, PeerCredentials>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerCredentials {
    pub password: String,
    pub public_key: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterBlock {
    pub interface: RouterInterface,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterInterface {
    /// Usually `TUNInterface`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tun_device: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Config {
    /// Parses config text, comments allowed.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(&strip_comments(text))?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::parse(&text)?;
        debug!(path = %path.display(), ipv6 = %config.ipv6, "read node config");
        Ok(config)
    }

    /// Pretty-printed JSON, without comments.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let mut text = self.to_json_string()?;
        text.push('\n');
        fs::write(path, text)?;
        debug!(path = %path.display(), "wrote node config");
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests;
