use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};
use crate::output::RenderOptions;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".identity-output.toml";

/// Top-level configuration from `.identity-output.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderOptions,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load config from a path the user named. A missing file is an error.
    pub fn load_explicit(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OutputError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load(path)
    }

    /// Write the starter file. Returns `false` without writing if the file
    /// exists and `force` is not set.
    pub fn write_starter(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        std::fs::write(path, Self::starter_toml())?;
        Ok(true)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# identity-output configuration

[render]
# Pretty-print JSON output.
pretty = false

# Encoding for byte fields such as `id` and `publicKey` (array, hex, base64).
bytes = "array"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ByteEncoding;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.bytes, ByteEncoding::Array);
    }

    #[test]
    fn starter_toml_parses_to_default() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_render_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[render]\npretty = true\nbytes = \"base64\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert!(config.render.pretty);
        assert_eq!(config.render.bytes, ByteEncoding::Base64);
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_explicit(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, OutputError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn explicit_existing_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[render]\nbytes = \"hex\"\n").unwrap();
        let config = Config::load_explicit(&path).unwrap();
        assert_eq!(config.render.bytes, ByteEncoding::Hex);
    }

    #[test]
    fn write_starter_refuses_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(Config::write_starter(&path, false).unwrap());

        std::fs::write(&path, "# edited\n").unwrap();
        assert!(!Config::write_starter(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited\n");

        assert!(Config::write_starter(&path, true).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), Config::starter_toml());
    }

    #[test]
    fn rejects_unknown_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[render]\nbytes = \"octal\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(OutputError::Toml(_))));
    }
}
