//! Config file loading

use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, File};
use voucherify::ClientConfig;

const DEFAULT_WORK_DIR: &str = ".voucherify";

fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(DEFAULT_WORK_DIR).join("config.toml"))
}

/// Client config from a TOML file
///
/// An explicit path must exist. The default `~/.voucherify/config.toml` is
/// optional; without it the defaults are used.
pub fn load(path: Option<&Path>) -> Result<ClientConfig> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(ClientConfig::default()),
        },
    };

    tracing::debug!("Reading config from {}", path.display());

    let config = Config::builder()
        .add_source(Config::try_from(&ClientConfig::default())?)
        .add_source(File::from(path).required(required))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use voucherify::{ApiVersion, LogLevel};

    use super::*;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            r#"
app_id = "app"
client_secret_key = "secret"
endpoint = "localhost:8080/v1"
secure = false
api_version = "v2018-08-01"
log_level = "headers"
"#
        )
        .expect("write config");

        let config = load(Some(file.path())).expect("valid config");
        assert_eq!(config.app_id, "app");
        assert_eq!(config.client_secret_key, "secret");
        assert_eq!(config.endpoint.as_deref(), Some("localhost:8080/v1"));
        assert!(!config.secure);
        assert_eq!(config.api_version, Some(ApiVersion::V2018_08_01));
        assert_eq!(config.log_level, Some(LogLevel::Headers));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, r#"app_id = "app""#).expect("write config");

        let config = load(Some(file.path())).expect("valid config");
        assert_eq!(config.app_id, "app");
        assert!(config.secure);
        assert_eq!(config.api_version, None);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        assert!(load(Some(Path::new("/nonexistent/voucherify.toml"))).is_err());
    }
}
