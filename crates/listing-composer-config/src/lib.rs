//! User settings for the `listing-composer` command.
//!
//! Stored as TOML at `~/.config/listing-composer/config.toml`:
//!
//! ```toml
//! output_dir = "~/listings"
//! default_extension = "html"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/listing-composer";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file already exists at {0}")]
    AlreadyExists(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where rendered listings go when `render` gets no output path.
    pub output_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_extension() -> String {
    "html".to_string()
}

impl Config {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            default_extension: default_extension(),
        }
    }

    /// Location of the per-user config file.
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Reads the per-user config; `None` when it has not been created yet.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Reads `path`, expanding `~` and `$VAR` in `output_dir`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.output_dir = expand(&config.output_dir);
        Ok(Some(config))
    }

    /// Writes a starter config pointing at `output_dir`.
    ///
    /// An existing file is left alone and reported as
    /// [`ConfigError::AlreadyExists`].
    pub fn init(path: &Path, output_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let config = Self::new(output_dir);
        config.write_to(path)?;
        Ok(config)
    }

    /// Writes pretty TOML to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)
    }

    /// Output file for a generated `file_name`.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Shell expansion of `path`; left as written when a variable is undefined.
fn expand(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::debug!("leaving {} unexpanded: {e}", path.display());
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write(dir: &TempDir, toml: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn default_path_is_expanded() {
        let path = Config::default_path();

        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with(".config/listing-composer/config.toml"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from(&dir.path().join("absent.toml")).unwrap(), None);
    }

    #[test]
    fn extension_defaults_to_html() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "output_dir = \"/srv/out\"\n");

        let config = Config::load_from(&path).unwrap().unwrap();

        assert_eq!(config, Config::new("/srv/out"));
        assert_eq!(config.output_path("a.html"), PathBuf::from("/srv/out/a.html"));
    }

    #[rstest]
    #[case("/srv/listings", "/srv/listings")]
    #[case("relative/out", "relative/out")]
    #[case("$LISTING_COMPOSER_UNSET_VAR_XYZ/out", "$LISTING_COMPOSER_UNSET_VAR_XYZ/out")]
    fn output_dir_expansion(#[case] written: &str, #[case] expected: &str) {
        assert_eq!(expand(Path::new(written)), PathBuf::from(expected));
    }

    #[test]
    fn output_dir_expands_tilde_and_env() {
        unsafe {
            std::env::set_var("LISTING_COMPOSER_TEST_ROOT", "/data");
        }
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "output_dir = \"$LISTING_COMPOSER_TEST_ROOT/shop\"\n");

        let config = Config::load_from(&path).unwrap().unwrap();
        let home_relative = expand(Path::new("~/listings"));

        unsafe {
            std::env::remove_var("LISTING_COMPOSER_TEST_ROOT");
        }
        assert_eq!(config.output_dir, PathBuf::from("/data/shop"));
        assert!(!home_relative.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "output_dir = [");

        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn init_writes_a_loadable_starter_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/listing-composer/config.toml");

        let created = Config::init(&path, "/tmp/listings").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Some(created));
    }

    #[test]
    fn init_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "output_dir = \"/keep/me\"\n");

        let err = Config::init(&path, "/other").unwrap_err();

        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        let kept = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(kept.output_dir, PathBuf::from("/keep/me"));
    }
}
