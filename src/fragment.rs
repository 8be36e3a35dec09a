//! Bouncer config fragment assembly
//!
//! Wraps the helper directory under the collector's onion identity, producing
//! the fragment the registration service merges into its own config.

use serde::Serialize;
use std::collections::BTreeMap;

/// Scheme prefix for the fragment's top-level key
const ONION_KEY_SCHEME: &str = "httpo://";

/// The published fragment: exactly one key, `httpo://<onion identity>`
pub type ConfigFragment = BTreeMap<String, FragmentEntry>;

/// Value under the fragment's single key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentEntry {
    #[serde(rename = "test-helpers")]
    pub test_helpers: BTreeMap<String, String>,
}

/// Assemble the fragment for one collector
pub fn assemble(onion_identity: &str, test_helpers: BTreeMap<String, String>) -> ConfigFragment {
    let mut fragment = BTreeMap::new();
    fragment.insert(
        format!("{}{}", ONION_KEY_SCHEME, onion_identity),
        FragmentEntry { test_helpers },
    );
    fragment
}
