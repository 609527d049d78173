//! `POST /generate`: turn a theme, style and genre into a song.

use serde::{Deserialize, Serialize};

use crate::error::GenerationFailed;
use crate::genre::Genre;
use crate::{client, Client};

pub const VERSES: u8 = 3;
pub const CHORUS: bool = true;
pub const MODEL: &str = "V4";

/// Wire body of a generation request.
///
/// `style` falls back to the genre id when no style label is given, so the
/// body always has the same five fields.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub theme: &'a str,
    pub style: &'a str,
    pub verses: u8,
    pub chorus: bool,
    pub model: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResult {
    pub title: String,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl<'a> Request<'a> {
    pub fn new(theme: &'a str, style: &'a str, genre: Genre) -> Self {
        Self {
            theme,
            style: if style.trim().is_empty() { genre.id() } else { style },
            verses: VERSES,
            chorus: CHORUS,
            model: MODEL,
        }
    }
}

impl client::Request for Request<'_> {
    type Response = SongResult;
    const PATH: &'static str = "/generate";
}

impl Client {
    /// Issues exactly one request. The caller is expected to have rejected
    /// input where both `theme` and `style` are blank.
    #[tracing::instrument(skip(self, theme, style), fields(base_url = %self.base_url()))]
    pub async fn generate(
        &self,
        theme: &str,
        style: &str,
        genre: Genre,
    ) -> Result<SongResult, GenerationFailed> {
        let request = Request::new(theme, style, genre);
        tracing::debug!(?request, "sending generation request");
        self.send(&request)
            .await
            .inspect(|song| tracing::info!(title = %song.title, "song generated"))
            .map_err(|error| {
                tracing::error!(%error, "could not generate song");
                GenerationFailed
            })
    }
}
