//! collector-register - publish a collector's test-helper addresses
//!
//! Reads the collector's config document, resolves the collector's external
//! IPv4 address, and PUTs a bouncer config fragment describing the reachable
//! test helpers to the registration service. Single-shot: one run, one
//! registration, then exit.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use collector_register::cli::Cli;
use collector_register::error::ConfigError;
use collector_register::registration::{self, RegistrationClient, RegistrationPayload};
use collector_register::resolver::{self, AddressSource, ScriptAddressSource};
use collector_register::{config, directory, fragment, logging};

/// Fixed paths and endpoints for one run
struct Settings {
    config_path: PathBuf,
    resolver_script: PathBuf,
    endpoint: String,
}

impl Settings {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            config_path: cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(config::file::DEFAULT_CONFIG_PATH)),
            resolver_script: PathBuf::from(resolver::DEFAULT_RESOLVER_SCRIPT),
            endpoint: registration::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let settings = Settings::from_cli(&cli);

    match run(&settings).await {
        Ok(()) => Ok(()),
        Err(err) => {
            // Classed config failures get a short message and exit code 1;
            // anything else (subprocess, transport) propagates as-is.
            if let Some(config_err) = err.downcast_ref::<ConfigError>() {
                eprintln!("ERROR: {}", config_err);
                std::process::exit(1);
            }
            Err(err)
        }
    }
}

/// Drive the pipeline stages in order, stopping at the first failure
async fn run(settings: &Settings) -> Result<()> {
    info!(
        "collector-register v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let node_config = config::load_from_path(&settings.config_path)?;
    let onion_identity = config::read_onion_hostname(&node_config.main.tor_datadir)?;
    info!("Collector identity {}", onion_identity);

    let address_source = ScriptAddressSource::new(&settings.resolver_script);
    let external_addr = address_source.external_ipv4()?;
    info!("External address {}", external_addr);

    let endpoints = directory::helper_endpoints(&node_config.helpers, &external_addr);
    info!("Publishing {} test helpers", endpoints.len());

    let fragment = fragment::assemble(&onion_identity, endpoints);
    if let Ok(rendered) = serde_yaml::to_string(&fragment) {
        debug!("Assembled fragment:\n{}", rendered);
    }

    let client = RegistrationClient::new(settings.endpoint.clone())?;
    let payload = RegistrationPayload::now(fragment);
    client.register(&payload).await?;

    info!("Registration complete");
    Ok(())
}
