use clap::{Args, Parser, Subcommand};
use song_client::Genre;
use url::Url;

use crate::constant;
use crate::form::Form;

#[derive(Debug, Parser)]
#[command(name = constant::APP_NAME, version = constant::APP_VERSION, about = "Turn your ideas into songs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the welcome screen
    Home,
    /// List the genres a song can be generated in
    Genres,
    /// Generate a song from a theme and/or a style
    Generate(Generate),
}

#[derive(Debug, Args)]
pub struct Generate {
    /// Theme or idea for the song
    #[arg(short, long, default_value = "")]
    pub theme: String,
    /// Musical style, sent instead of the genre when present
    #[arg(short, long, default_value = "")]
    pub style: String,
    #[arg(short, long, default_value_t = Genre::default())]
    pub genre: Genre,
    /// Backend address, overrides the configured one
    #[arg(long)]
    pub backend: Option<Url>,
    /// Print the song as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&Generate> for Form {
    fn from(value: &Generate) -> Self {
        Self { theme: value.theme.clone(), style: value.style.clone(), genre: value.genre }
    }
}
