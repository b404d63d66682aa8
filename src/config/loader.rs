//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::error::LoadError;
use crate::config::schema::FileConfig;

/// Load configuration from an optional file.
///
/// No path yields an empty [`FileConfig`]. The format is picked from the
/// extension: `.json` is read as JSON, `.toml` or no extension as TOML.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, LoadError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let config: FileConfig = match extension.as_deref() {
        None | Some("toml") => toml::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|source| LoadError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?,
        Some(_) => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    tracing::debug!(path = %path.display(), "Config file loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn write_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_path_is_empty_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let file = write_file(
            ".toml",
            r#"
port = 9090
secret_key = "s3cret"

[[oauth2]]
name = "doreamon"
client_id = "id"
client_secret = "secret"
redirect_uri = "https://gw.local/login/callback"

[upstream]
host = "x"
port = 9000
"#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.port, Some(9090));
        assert_eq!(config.secret_key.as_deref(), Some("s3cret"));
        assert_eq!(config.session_max_age, None);
        assert_eq!(config.oauth2.as_ref().map(Vec::len), Some(1));
        let upstream = config.upstream.unwrap();
        assert_eq!(upstream.host.as_deref(), Some("x"));
        assert_eq!(upstream.port, Some(9000));
        assert!(upstream.protocol.is_none());
    }

    #[test]
    fn test_load_json() {
        let file = write_file(".json", r#"{"port": 7000, "session_max_age": 1000}"#);

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.port, Some(7000));
        assert_eq!(config.session_max_age, Some(1000));
    }

    #[test]
    fn test_auth_and_services_keys_are_ignored() {
        let file = write_file(
            ".toml",
            r#"
[auth]
mode = "password"

[services.app]
mode = "local"
"#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_frontend_backend_keys_are_ignored() {
        let file = write_file(
            ".toml",
            r#"
[frontend]
host = "a.com"
port = 80

[backend]
host = "b.com"
port = 81
"#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config(Some(Path::new("/nonexistent/connect.toml"))).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_file(".toml", "port = \"not a number\"");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let file = write_file(".json", "{ port: ");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::ParseJson { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_file(".yaml", "port: 8080");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }
}
