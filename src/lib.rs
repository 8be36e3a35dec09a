//! collector-register library crate
//!
//! Assembles the bouncer config fragment describing a collector's externally
//! reachable test helpers and publishes it to the registration service.
//!
//! # Modules
//!
//! - [`cli`] - Command-line surface
//! - [`config`] - Collector configuration loading
//! - [`directory`] - Helper endpoint mapping
//! - [`error`] - Classed configuration failures
//! - [`fragment`] - Bouncer fragment assembly
//! - [`logging`] - Logging setup
//! - [`registration`] - Registration payload and HTTP client
//! - [`resolver`] - External address discovery

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod fragment;
pub mod logging;
pub mod registration;
pub mod resolver;
