mod backend;
pub mod log;

pub use backend::Backend;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use log::Log;
use serde::Deserialize;

use crate::constant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub backend: Backend,
    pub log: Log,
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(constant::ENV_PREFIX).split("__"))
            .join(Serialized::default("backend", Backend::default()))
            .join(Serialized::default("log", Log::default()))
    }

    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self::figment().extract()?)
    }

    /// Extracts only the `log` section, so a bad backend setting does not
    /// stop commands that never reach the backend.
    pub fn log() -> color_eyre::Result<Log> {
        Ok(Self::figment().extract_inner("log")?)
    }

    pub fn backend() -> color_eyre::Result<Backend> {
        Ok(Self::figment().extract_inner("backend")?)
    }
}
