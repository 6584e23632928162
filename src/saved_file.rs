use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::ConfigError;

/// A JSON file kept under the user's home directory.
#[async_trait]
pub trait SavedFile: DeserializeOwned + Default + Send {
    /// Location relative to the home directory.
    const PATH: &'static str;

    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(Self::PATH))
    }

    /// Loads the file, falling back to `Default` when it does not exist.
    async fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(path).await,
            None => Ok(Self::default()),
        }
    }

    async fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }
}
