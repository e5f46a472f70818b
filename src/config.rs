use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// Fixed service path on every CUCM node.
pub const SERVICE_PATH: &str = "/realtimeservice2/services/RISService70";

/// Connection settings for one CUCM publisher.
///
/// Immutable after client construction: the basic-auth token and service
/// URL are derived exactly once in `RisPortClient::new`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RisPortConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Per-call request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Namespace prefix removed from responses.
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,
    /// Accept self-signed certificates. Off unless explicitly requested;
    /// most CUCM appliances ship with self-signed certs.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Also send a `SOAPAction` header naming the operation.
    #[serde(default)]
    pub send_soap_action: bool,
    /// Full endpoint override for nonstandard deployments. When unset the
    /// URL is derived from `host` with the fixed port and service path.
    #[serde(default)]
    pub service_url: Option<String>,
}

fn default_timeout_ms() -> u64 {
    8000
}

fn default_strip_prefix() -> String {
    "ns1:".to_string()
}

impl RisPortConfig {
    /// Minimal config with defaults for everything but the credentials.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            timeout_ms: default_timeout_ms(),
            strip_prefix: default_strip_prefix(),
            accept_invalid_certs: false,
            send_soap_action: false,
            service_url: None,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path.as_ref())?;

        let config: RisPortConfig = serde_yaml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse YAML configuration: {e}")))?;

        Ok(config)
    }

    /// Read connection settings from the environment.
    ///
    /// `CUCM`, `UCUSER` and `UCPASS` are required; `RIS_TIMEOUT_MS` and
    /// `RIS_INSECURE_TLS` (set to `1` or `true`) are optional.
    pub fn from_env() -> Result<Self, Error> {
        let host = std::env::var("CUCM")
            .map_err(|_| Error::Config("CUCM environment variable not set".into()))?;
        let username = std::env::var("UCUSER")
            .map_err(|_| Error::Config("UCUSER environment variable not set".into()))?;
        let password = std::env::var("UCPASS")
            .map_err(|_| Error::Config("UCPASS environment variable not set".into()))?;

        let mut config = Self::new(host, username, password);

        if let Ok(timeout) = std::env::var("RIS_TIMEOUT_MS") {
            config.timeout_ms = timeout
                .parse()
                .map_err(|_| Error::Config(format!("invalid RIS_TIMEOUT_MS: {timeout}")))?;
        }
        if let Ok(insecure) = std::env::var("RIS_INSECURE_TLS") {
            config.accept_invalid_certs = insecure == "1" || insecure.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    /// Resolved service endpoint.
    pub fn service_url(&self) -> String {
        self.service_url
            .clone()
            .unwrap_or_else(|| format!("https://{}:8443{}", self.host, SERVICE_PATH))
    }
}
