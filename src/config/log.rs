use concat_string::concat_string;
use educe::Educe;
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::constant;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Log {
    #[educe(Default(expression = true))]
    pub time: bool,
    pub format: Format,
}

impl Log {
    fn default_filter() -> EnvFilter {
        EnvFilter::new(concat_string!(constant::APP_NAME, "=info,song_client=info"))
    }

    /// Installs the global subscriber. Events go to stderr so that stdout only
    /// carries the rendered song.
    pub fn init(&self) -> Result<(), TryInitError> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| Self::default_filter());
        let registry = tracing_subscriber::registry().with(filter);
        let layer = fmt::layer().with_writer(std::io::stderr);

        match (self.format, self.time) {
            (Format::Plain, true) => registry.with(layer).try_init(),
            (Format::Plain, false) => registry.with(layer.without_time()).try_init(),
            (Format::Json, true) => registry.with(layer.json()).try_init(),
            (Format::Json, false) => registry.with(layer.json().without_time()).try_init(),
        }
    }
}
