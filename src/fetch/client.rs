//! HTTP client for the verse lookup endpoint.

use reqwest::header;
use reqwest::Client;
use tracing::debug;

use crate::common::error::FetchError;
use crate::fetch::response::VerseResponse;

/// Default host of the verse API.
pub const DEFAULT_API_HOST: &str = "getbible.net";

/// User-Agent sent with every lookup; the API rejects unidentified clients.
const USER_AGENT: &str = "Mozilla/5.0";

/// Source of verse data keyed by passage and translation.
///
/// `VerseFetcher` is the production implementation; tests substitute a fake
/// to exercise the scan pipeline without a network.
#[allow(async_fn_in_trait)]
pub trait PassageSource {
    async fn lookup(&self, passage: &str, translation: &str)
        -> Result<VerseResponse, FetchError>;
}

/// Fetcher for the getbible-style JSON API.
#[derive(Debug, Clone)]
pub struct VerseFetcher {
    client: Client,
    host: String,
}

impl VerseFetcher {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
        }
    }
}

impl Default for VerseFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}

impl PassageSource for VerseFetcher {
    async fn lookup(
        &self,
        passage: &str,
        translation: &str,
    ) -> Result<VerseResponse, FetchError> {
        let url = format!("http://{}/json?p={}&v={}", self.host, passage, translation);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        // The API declares text/html even though the body is JSON-ish;
        // anything else means we did not reach the verse endpoint.
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("text/html") {
            return Err(FetchError::UnexpectedContentType { url, content_type });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        let inner =
            strip_jsonp_wrapper(&body).ok_or_else(|| FetchError::TruncatedBody { url: url.clone() })?;
        let parsed: VerseResponse =
            serde_json::from_slice(inner).map_err(|source| FetchError::MalformedBody {
                url,
                source,
            })?;

        Ok(parsed.normalize())
    }
}

/// Strip the JSONP wrapper the API puts around its payload: one leading
/// `(` and a trailing `);`.
fn strip_jsonp_wrapper(body: &[u8]) -> Option<&[u8]> {
    if body.len() < 3 {
        return None;
    }
    Some(&body[1..body.len() - 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_jsonp_wrapper() {
        let body = br#"({"version": "kjv"});"#;
        assert_eq!(strip_jsonp_wrapper(body), Some(&br#"{"version": "kjv"}"#[..]));
    }

    #[test]
    fn test_strip_rejects_short_bodies() {
        assert!(strip_jsonp_wrapper(b"").is_none());
        assert!(strip_jsonp_wrapper(b"()").is_none());
        assert_eq!(strip_jsonp_wrapper(b"();"), Some(&b""[..]));
    }

    #[test]
    fn test_wrapped_payload_parses_end_to_end() {
        let body = br#"({"book": [{"chapter": {"1": {"verse": "In the beginning"}}}]});"#;
        let inner = strip_jsonp_wrapper(body).unwrap();
        let response: VerseResponse = serde_json::from_slice(inner).unwrap();
        assert_eq!(response.verse_count(), 1);
    }
}
