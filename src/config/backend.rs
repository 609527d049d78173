use educe::Educe;
use serde::{Deserialize, Serialize};
use song_client::Client;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Backend {
    #[educe(Default(expression = Url::parse(Client::DEFAULT_BASE_URL).expect("Could not parse default backend url")))]
    pub url: Url,
}

impl Backend {
    pub fn client(&self) -> Client {
        Client::new(self.url.clone())
    }
}
