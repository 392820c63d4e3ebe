//! Location settings for the database file and the media root.

use crate::error::{PlayerError, Result};
use std::path::PathBuf;

pub const DATABASE_ENV_VAR: &str = "FOOTBALL_PLAYERS_DB";
pub const MEDIA_ROOT_ENV_VAR: &str = "FOOTBALL_PLAYERS_MEDIA_ROOT";

const APP_DIR: &str = "football-players";

/// Where records and uploaded images live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_path: PathBuf,
    pub media_root: PathBuf,
}

impl Settings {
    /// Resolve settings from explicit overrides, then environment variables,
    /// then the platform data directory.
    pub fn resolve(database_path: Option<PathBuf>, media_root: Option<PathBuf>) -> Result<Self> {
        let database_path = match database_path.or_else(|| env_path(DATABASE_ENV_VAR)) {
            Some(path) => path,
            None => default_base_dir()?.join("players.db"),
        };

        let media_root = match media_root.or_else(|| env_path(MEDIA_ROOT_ENV_VAR)) {
            Some(path) => path,
            None => default_base_dir()?.join("media"),
        };

        Ok(Self {
            database_path,
            media_root,
        })
    }

    /// Settings from environment variables and defaults only
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Path: ~/.local/share/football-players (platform equivalent elsewhere)
fn default_base_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .ok_or_else(|| PlayerError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
    Ok(base.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_take_precedence() {
        let settings = Settings::resolve(
            Some(PathBuf::from("/tmp/custom.db")),
            Some(PathBuf::from("/tmp/custom-media")),
        )
        .unwrap();

        assert_eq!(settings.database_path, PathBuf::from("/tmp/custom.db"));
        assert_eq!(settings.media_root, PathBuf::from("/tmp/custom-media"));
    }

    #[test]
    fn test_env_path_ignores_unset_variable() {
        assert!(env_path("FOOTBALL_PLAYERS_TEST_UNSET_VARIABLE").is_none());
    }
}
