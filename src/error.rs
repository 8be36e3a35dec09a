//! Classed configuration failures
//!
//! These are the failures the binary reports as `ERROR: <message>` with exit
//! code 1. Subprocess and transport failures are not classed here; they
//! propagate through `anyhow` and abort the run with the default rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Failures originating in the configuration stages
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The collector config file could not be opened or read
    #[error("Couldn't read collector config file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The onion hostname file under the Tor data directory could not be read
    #[error("Couldn't read Tor hostname file {path:?}")]
    TorHostname {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse failure or a missing required key, reported as one class
    #[error("Collector config is not valid or is missing information")]
    Malformed {
        #[source]
        source: serde_yaml::Error,
    },
}
