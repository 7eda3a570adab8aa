//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// `host:port` the HTTP server binds to. The host may be a name
    /// (`localhost:8000`), resolved when the listener binds.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Whether `bind` has the `host:port` shape the listener accepts.
    ///
    /// Names are not resolved here.
    pub fn has_valid_bind(&self) -> bool {
        if self.bind.parse::<SocketAddr>().is_ok() {
            return true;
        }
        match self.bind.rsplit_once(':') {
            Some((host, port)) => {
                !host.is_empty()
                    && !host.contains(|c: char| c == ':' || c.is_whitespace())
                    && port.parse::<u16>().is_ok()
            }
            None => false,
        }
    }
}
