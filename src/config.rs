//! Credentials configuration.
//!
//! The judge login lives in a small TOML file:
//!
//! ```toml
//! [user]
//! username = "jdoe"
//! password = "hunter2"
//! ```
//!
//! Resolution order: an explicit `--config` path (error if missing), then
//! `ojcli.toml` in the current directory, then `~/.ojrc.toml`.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub user: UserConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserConfig {
    pub username: String,
    pub password: String,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, no
    /// config file can be found, the file cannot be read, or the TOML
    /// content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = match path {
            Some(p) => {
                if p.exists() {
                    p.to_path_buf()
                } else {
                    return Err(format!("Config file not found: {}", p.display()));
                }
            }
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    return Err(
                        "No config file found. Create ojcli.toml in this directory or \
                         ~/.ojrc.toml with a [user] section holding username and password."
                            .to_string(),
                    )
                }
            },
        };

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config {}: {}", config_path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", config_path.display(), e))
    }

    fn default_path() -> Option<PathBuf> {
        let local = Path::new("ojcli.toml");
        if local.exists() {
            return Some(local.to_path_buf());
        }
        let home = std::env::var_os("HOME")?;
        let dotfile = Path::new(&home).join(".ojrc.toml");
        dotfile.exists().then_some(dotfile)
    }
}
