use std::path::PathBuf;

use crate::{ConfigError, MasterConfig, SavedFile};

pub const TOKEN_VAR: &str = "SAVE_TOKEN";
pub const TARGET_VAR: &str = "SAVE_TARGET";
pub const PORT_VAR: &str = "SAVE_PORT";

/// Everything the server needs, resolved once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Settings {
    pub token: String,
    pub target: PathBuf,
    pub host: String,
    pub port: u16,
    pub reverse_proxy: bool,
    pub max_body_bytes: Option<usize>,
}

impl Settings {
    pub fn new(token: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        let master = MasterConfig::default();

        Self {
            token: token.into(),
            target: target.into(),
            host: master.host,
            port: master.port,
            reverse_proxy: master.reverse_proxy,
            max_body_bytes: master.max_body_bytes,
        }
    }

    /// Reads the master file, then applies the process environment on top.
    pub async fn load() -> Result<Self, ConfigError> {
        let master = MasterConfig::load().await?;
        Self::from_parts(master, |key| std::env::var(key).ok())
    }

    pub fn from_parts(
        master: MasterConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match env(PORT_VAR).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => master.port,
        };

        let target = env(TARGET_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(master.target);

        Ok(Self {
            token: env(TOKEN_VAR).unwrap_or_default(),
            target,
            host: master.host,
            port,
            reverse_proxy: master.reverse_proxy,
            max_body_bytes: master.max_body_bytes,
        })
    }

    /// Saving is refused outright without a secret.
    pub fn can_save(&self) -> bool {
        !self.token.is_empty()
    }
}
