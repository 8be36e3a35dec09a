//! Helper endpoint directory
//!
//! Maps each published helper to the address where it is reachable from
//! outside the collector, with the scheme its clients expect.

use crate::config::HelpersConfig;
use std::collections::BTreeMap;

/// Build the helper-name → external-endpoint mapping
///
/// Helpers with no configured port are left out. Only the DNS helper's TCP
/// listener is published.
pub fn helper_endpoints(helpers: &HelpersConfig, external_addr: &str) -> BTreeMap<String, String> {
    let mut endpoints = BTreeMap::new();

    if let Some(port) = helpers.http_return_json_headers.port {
        endpoints.insert(
            "http-return-json-headers".to_string(),
            format!("http://{}:{}", external_addr, port),
        );
    }

    if let Some(port) = helpers.tcp_echo.port {
        endpoints.insert(
            "tcp-echo".to_string(),
            format!("{}:{}", external_addr, port),
        );
    }

    if let Some(port) = helpers.dns.tcp_port {
        endpoints.insert("dns".to_string(), format!("{}:{}", external_addr, port));
    }

    if let Some(port) = helpers.ssl.port {
        endpoints.insert(
            "ssl".to_string(),
            format!("https://{}:{}", external_addr, port),
        );
    }

    endpoints
}
