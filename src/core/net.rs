// src/core/net.rs

// HTTPS GET over a blocking reqwest client

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// A response body and the URL that finally served it (after redirects).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    pub url: Url,
    pub body: Vec<u8>,
}

impl Fetched {
    /// Decode the body as UTF-8 (strict).
    pub fn into_text(self) -> Result<String, FetchError> {
        let url = self.url;
        String::from_utf8(self.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Anything that can turn a URL into the full response body.
/// The runner only talks to this, so tests can hand it canned documents.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;

    /// `fetch` plus the final URL. Transports that follow redirects override
    /// this; the default assumes the requested URL answered.
    fn fetch_located(&self, url: &Url) -> Result<Fetched, FetchError> {
        let body = self.fetch(url)?;
        Ok(Fetched { url: url.clone(), body })
    }

    /// Fetch and decode as UTF-8 (strict).
    fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        self.fetch_located(url)?.into_text()
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        Ok(self.fetch_located(url)?.body)
    }

    fn fetch_located(&self, url: &Url) -> Result<Fetched, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url.clone()).send().map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: resp.url().to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = resp.url().clone();
        if final_url != *url {
            debug!(from = %url, to = %final_url, "redirected");
        }
        let body = resp.bytes().map_err(transport)?;
        debug!(url = %final_url, bytes = body.len(), "fetched");
        Ok(Fetched { url: final_url, body: body.to_vec() })
    }
}
