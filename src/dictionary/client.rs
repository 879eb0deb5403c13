use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, trace};

use crate::framework::config::DictionaryConfig;

use super::{response, DefinitionSource, Entry, Error, Result};

#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DictionaryClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_USER_AGENT: &'static str = concat!("dictle/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: Url, timeout: Duration, user_agent: &str) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBase(base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), config.timeout(), &config.user_agent)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{word}`, with the word percent-encoded as a single path segment.
    pub fn lookup_url(&self, word: &str) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidBase(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    /// Looks up a word, returning the first entry the service knows for it.
    ///
    /// A 404 is how the service says it has no definitions, so it's `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn lookup(&self, word: &str) -> Result<Option<Entry>> {
        let url = self.lookup_url(word)?;
        debug!(%url, "looking up word");

        // the url contains the word, keep it out of errors shown to players
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("no definitions found");
            return Ok(None);
        }

        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;
        let entry = response::first_entry(&body)?;
        trace!(found = entry.is_some(), "decoded response");

        Ok(entry)
    }
}

#[async_trait]
impl DefinitionSource for DictionaryClient {
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<String>> {
        let definitions = self
            .lookup(word)
            .await?
            .map(Entry::into_definitions)
            .unwrap_or_default();

        Ok(definitions)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use reqwest::{StatusCode, Url};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };
    use tracing_test::traced_test;

    use super::DictionaryClient;
    use crate::dictionary::{DefinitionSource, Error};

    const GAIN: &str = r#"[{
        "word": "gain",
        "meanings": [
            { "partOfSpeech": "verb", "definitions": [{ "definition": "to increase" }] },
            { "partOfSpeech": "verb", "definitions": [{ "definition": "to obtain" }] }
        ]
    }]"#;

    /// Serves a single canned response and hands back the request line it saw.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0; 1024];
            loop {
                let read = stream.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..read]);

                if read == 0 || request.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_owned()
        });

        let base = Url::parse(&format!("http://{addr}/api/v2/entries/en")).unwrap();
        (base, server)
    }

    fn client(base: Url) -> DictionaryClient {
        DictionaryClient::new(base, Duration::from_secs(5), "dictle-tests").unwrap()
    }

    #[test]
    fn lookup_url_encodes_word() {
        let client = client(Url::parse(DictionaryClient::DEFAULT_BASE_URL).unwrap());

        assert_eq!(
            client.lookup_url("chair").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/chair"
        );
        assert_eq!(
            client.lookup_url("ice cream").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
        assert_eq!(
            client.lookup_url("a/b").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/a%2Fb"
        );
    }

    #[test]
    fn lookup_url_tolerates_trailing_slash() {
        let client = client(Url::parse("https://example.com/entries/en/").unwrap());

        assert_eq!(
            client.lookup_url("gain").unwrap().as_str(),
            "https://example.com/entries/en/gain"
        );
    }

    #[test]
    fn rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();

        assert!(matches!(
            DictionaryClient::new(base, Duration::from_secs(1), "dictle-tests"),
            Err(Error::InvalidBase(_))
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn fetches_flattened_definitions() {
        let (base, server) = serve_once("200 OK", GAIN).await;

        let definitions = client(base).fetch_definitions("gain").await.unwrap();
        assert_eq!(definitions, ["to increase", "to obtain"]);

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /api/v2/entries/en/gain HTTP/1.1");
    }

    #[tokio::test]
    #[traced_test]
    async fn not_found_is_empty() {
        let body = r#"{"title":"No Definitions Found","message":"","resolution":""}"#;
        let (base, server) = serve_once("404 Not Found", body).await;

        let definitions = client(base).fetch_definitions("qzxv").await.unwrap();
        assert!(definitions.is_empty());

        server.await.unwrap();
    }

    #[tokio::test]
    async fn no_meanings_is_empty() {
        let (base, server) = serve_once("200 OK", r#"[{"word":"qzxv"}]"#).await;

        let definitions = client(base).fetch_definitions("qzxv").await.unwrap();
        assert!(definitions.is_empty());

        server.await.unwrap();
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client(base).fetch_definitions("gain").await.unwrap_err();
        assert!(matches!(err, Error::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;

        let err = client(base).fetch_definitions("gain").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // accepts, then never answers
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let base = Url::parse(&format!("http://{addr}/entries")).unwrap();
        let client = DictionaryClient::new(base, Duration::from_millis(100), "dictle-tests").unwrap();

        let err = client.fetch_definitions("gain").await.unwrap_err();
        assert!(err.is_timeout(), "expected a timeout, got {err}");

        server.abort();
    }
}
