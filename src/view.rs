//! Plain-text screens printed by the binary.

use std::fmt;

use song_client::{Genre, SongResult};
use strum::IntoEnumIterator;

use crate::constant;

pub struct Home;

pub struct Genres;

pub struct Song<'a>(pub &'a SongResult);

impl fmt::Display for Home {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to Song Generator")?;
        writeln!(f, "Turn Your Ideas into Music")?;
        writeln!(f)?;
        writeln!(
            f,
            "Create unique and personalized songs based on your theme and preferred genre."
        )?;
        writeln!(f, "Let AI help you bring your musical vision to life.")?;
        writeln!(f)?;
        write!(f, "Start creating your song with `{} generate --theme <THEME>`.", constant::APP_NAME)
    }
}

impl fmt::Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = Genre::iter()
            .map(|genre| format!("{:<8}{}", genre.id(), genre.label()))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Display for Song<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let song = self.0;
        writeln!(f, "{}", song.title)?;
        writeln!(f)?;
        writeln!(f, "Lyrics")?;
        writeln!(f, "{}", song.lyrics)?;
        // An empty url is treated as missing audio.
        if let Some(audio_url) = song.audio_url.as_deref().filter(|url| !url.is_empty()) {
            writeln!(f)?;
            writeln!(f, "Audio Preview")?;
            writeln!(f, "{audio_url}")?;
        }
        writeln!(f)?;
        write!(f, "Create another song with `{} generate`.", constant::APP_NAME)
    }
}
