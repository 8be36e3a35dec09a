//! Configuration file loading

use super::NodeConfig;
use crate::error::ConfigError;
use std::path::Path;

/// Default location of the collector config document
pub const DEFAULT_CONFIG_PATH: &str = "/home/mlab_ooni/oonib.conf";

/// Load and parse the collector config from path
pub fn load_from_path(path: &Path) -> Result<NodeConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let config: NodeConfig =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed { source })?;

    Ok(config)
}

/// Read the collector's onion hostname from under the Tor data directory
///
/// The hostname file holds the onion identity as its sole content; trailing
/// whitespace is stripped.
pub fn read_onion_hostname(tor_datadir: &Path) -> Result<String, ConfigError> {
    let path = tor_datadir.join("collector").join("hostname");
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::TorHostname {
        path: path.clone(),
        source,
    })?;

    Ok(contents.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const FULL_CONFIG: &str = r#"
main:
  tor_datadir: /var/lib/tor
helpers:
  http-return-json-headers:
    port: 57001
  tcp-echo:
    port: 57002
  dns:
    tcp_port: 57004
    udp_port: 57005
  ssl:
    port: 57006
    address: 127.0.0.1
"#;

    #[test]
    fn parses_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oonib.conf");
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.main.tor_datadir, PathBuf::from("/var/lib/tor"));
        assert_eq!(config.helpers.http_return_json_headers.port, Some(57001));
        assert_eq!(config.helpers.tcp_echo.port, Some(57002));
        assert_eq!(config.helpers.dns.tcp_port, Some(57004));
        assert_eq!(config.helpers.ssl.port, Some(57006));
    }

    #[test]
    fn null_port_parses_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oonib.conf");
        std::fs::write(&path, FULL_CONFIG.replace("port: 57002", "port: null")).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.helpers.tcp_echo.port, None);
    }

    #[test]
    fn missing_tor_datadir_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oonib.conf");
        std::fs::write(&path, FULL_CONFIG.replace("  tor_datadir: /var/lib/tor", "  {}")).unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err
            .to_string()
            .contains("not valid or is missing information"));
    }

    #[test]
    fn missing_helper_record_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oonib.conf");
        let without_dns = FULL_CONFIG
            .lines()
            .filter(|line| !line.contains("dns:") && !line.contains("_port: 5700"))
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&path, without_dns).unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn unreadable_file_is_unreadable_class() {
        let err = load_from_path(Path::new("/nonexistent/oonib.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn hostname_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let hostname_dir = dir.path().join("collector");
        std::fs::create_dir_all(&hostname_dir).unwrap();
        std::fs::write(hostname_dir.join("hostname"), "httpoexample1234.onion\n").unwrap();

        let onion = read_onion_hostname(dir.path()).unwrap();
        assert_eq!(onion, "httpoexample1234.onion");
    }

    #[test]
    fn missing_hostname_is_tor_hostname_class() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_onion_hostname(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TorHostname { .. }));
    }
}
