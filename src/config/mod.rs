//! Collector configuration loading
//!
//! Typed view of the collector's YAML config document. Only the keys this
//! tool consumes are modeled; anything else in the document is ignored.
//! No runtime mutation - configuration is immutable after load.

pub mod file;

pub use file::{load_from_path, read_onion_hostname};

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub main: MainConfig,
    pub helpers: HelpersConfig,
}

/// Collector-wide settings
#[derive(Debug, Clone, Deserialize)]
pub struct MainConfig {
    /// Tor data directory; the collector's onion hostname lives under it
    pub tor_datadir: PathBuf,
}

/// Per-helper records
///
/// All four known helpers must be present in the document. A helper whose
/// port is absent or null is simply not published.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpersConfig {
    #[serde(rename = "http-return-json-headers")]
    pub http_return_json_headers: HelperConfig,
    #[serde(rename = "tcp-echo")]
    pub tcp_echo: HelperConfig,
    pub dns: DnsHelperConfig,
    pub ssl: SslHelperConfig,
}

/// A helper exposed on a single TCP port
#[derive(Debug, Clone, Deserialize)]
pub struct HelperConfig {
    pub port: Option<u16>,
}

/// DNS helper. Only the TCP listener is published; the UDP port is not read.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsHelperConfig {
    pub tcp_port: Option<u16>,
}

/// SSL helper. The record's `address` field is not read.
#[derive(Debug, Clone, Deserialize)]
pub struct SslHelperConfig {
    pub port: Option<u16>,
}
