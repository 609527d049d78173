use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

pub(crate) trait Request: Serialize {
    type Response: DeserializeOwned;
    const PATH: &'static str;
}

impl Client {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    pub fn new(base_url: Url) -> Self {
        Self { http: Default::default(), base_url }
    }

    pub fn new_with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `R::PATH` after the base path, keeping any query of the base.
    fn build_url<R: Request>(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(R::PATH.split('/').filter(|s| !s.is_empty()));
        }
        url
    }

    pub(crate) async fn send<R: Request>(&self, request: &R) -> Result<R::Response, reqwest::Error> {
        self.http
            .post(self.build_url::<R>())
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<R::Response>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Serialize)]
    struct Ping {
        value: u32,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        value: u32,
    }

    impl Request for Ping {
        type Response = Pong;
        const PATH: &'static str = "/ping";
    }

    #[rstest]
    #[case("http://localhost:5000", "http://localhost:5000/ping")]
    #[case("http://localhost:5000/", "http://localhost:5000/ping")]
    #[case("https://songs.example.com/api", "https://songs.example.com/api/ping")]
    #[case("https://songs.example.com/api/", "https://songs.example.com/api/ping")]
    #[case("http://h/api?k=1", "http://h/api/ping?k=1")]
    #[case("http://h/api/?k=1#top", "http://h/api/ping?k=1#top")]
    fn test_build_url(#[case] base_url: &str, #[case] url: &str) {
        let client = Client::new(base_url.parse().unwrap());
        assert_eq!(client.build_url::<Ping>().as_str(), url);
    }

    #[tokio::test]
    async fn test_send_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ping"))
            .and(body_json(json!({ "value": 7 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 8 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(server.uri().parse().unwrap());
        assert_eq!(client.send(&Ping { value: 7 }).await.unwrap(), Pong { value: 8 });
    }

    #[tokio::test]
    async fn test_send_keeps_base_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ping"))
            .and(query_param("k", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(format!("{}/api?k=1", server.uri()).parse().unwrap());
        assert_eq!(client.send(&Ping { value: 0 }).await.unwrap(), Pong { value: 1 });
    }

    #[tokio::test]
    async fn test_send_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "value": 8 })))
            .mount(&server)
            .await;

        let client = Client::new(server.uri().parse().unwrap());
        let error = client.send(&Ping { value: 7 }).await.unwrap_err();
        assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }
}
