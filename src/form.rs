use song_client::{Client, GenerationFailed, Genre, SongResult};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter a theme or style for your song")]
    Empty,
    #[error("Failed to generate song. Please try again.")]
    Generation(#[from] GenerationFailed),
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub theme: String,
    pub style: String,
    pub genre: Genre,
}

impl Form {
    pub fn validate(&self) -> Result<(), Error> {
        if self.theme.trim().is_empty() && self.style.trim().is_empty() {
            Err(Error::Empty)
        } else {
            Ok(())
        }
    }

    /// An invalid form never reaches the network.
    pub async fn submit(&self, client: &Client) -> Result<SongResult, Error> {
        self.validate()?;
        client.generate(&self.theme, &self.style, self.genre).await.map_err(Error::from)
    }
}
