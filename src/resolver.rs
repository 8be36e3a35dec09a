//! External address discovery
//!
//! The collector's externally reachable IPv4 address comes from a helper
//! program outside this tool. Whatever it prints on stdout is the address;
//! no syntactic validation is applied.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Default helper script that prints the collector's external IPv4 address
pub const DEFAULT_RESOLVER_SCRIPT: &str = "/home/mlab_ooni/bin/get_ipv4.sh";

/// Source of the collector's externally reachable IPv4 address
pub trait AddressSource {
    /// Return the external IPv4 address as trimmed text
    fn external_ipv4(&self) -> Result<String>;
}

/// Resolves the address by running an external script with no arguments
pub struct ScriptAddressSource {
    script: PathBuf,
}

impl ScriptAddressSource {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl AddressSource for ScriptAddressSource {
    fn external_ipv4(&self) -> Result<String> {
        let output = Command::new(&self.script)
            .output()
            .with_context(|| format!("Failed to run address helper {:?}", self.script))?;

        // The script's exit status is not inspected; stdout is the contract.
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
