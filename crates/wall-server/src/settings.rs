//! Server configuration, layered from an optional TOML file and `WALL_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// SQLite file holding the walls; `~/` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 5233 }

fn default_store_path() -> PathBuf { PathBuf::from("walls.db") }

impl ServerConfig {
  /// Read `path` (if it exists) and overlay environment variables such as
  /// `WALL_PORT`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("WALL"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn from_toml(src: &str) -> ServerConfig {
    config::Config::builder()
      .add_source(config::File::from_str(src, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_file_uses_defaults() {
    let cfg = from_toml("");
    assert_eq!(cfg.address(), "127.0.0.1:5233");
    assert_eq!(cfg.store_path, PathBuf::from("walls.db"));
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml("host = \"0.0.0.0\"\nport = 8080\nstore_path = \"/var/lib/walls.db\"\n");
    assert_eq!(cfg.address(), "0.0.0.0:8080");
    assert_eq!(cfg.resolved_store_path(), PathBuf::from("/var/lib/walls.db"));
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/wall-config.toml")).unwrap();
    assert!(cfg.port > 0);
  }

  #[test]
  fn tilde_is_left_alone_without_prefix() {
    assert_eq!(expand_tilde(Path::new("data/walls.db")), PathBuf::from("data/walls.db"));
  }
}
