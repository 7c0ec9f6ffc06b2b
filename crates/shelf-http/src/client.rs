//! REST HTTP client.

use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use shelf_core::error::{Error, ProtocolError, TransportError};
use shelf_core::types::StoreUrl;

use crate::endpoints::ErrorResponse;

/// HTTP client bound to one book store.
///
/// No request timeout is configured: a hung store leaves the call pending
/// until the caller gives up on it.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: StoreUrl,
}

impl RestClient {
    /// Create a new client for the given store.
    pub fn new(base: StoreUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("shelfkeep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        Ok(Self { client, base })
    }

    /// Returns the store URL this client is configured for.
    pub fn base(&self) -> &StoreUrl {
        &self.base
    }

    /// GET a JSON resource, bypassing any intermediate cache.
    #[instrument(skip(self), fields(store = %self.base))]
    pub async fn get_fresh<R>(&self, segments: &[&str]) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments)?;
        debug!(%url, "GET (no-store)");

        let response = self
            .client
            .get(url)
            .headers(no_cache_headers())
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// GET a JSON resource.
    #[instrument(skip(self), fields(store = %self.base))]
    pub async fn get<R>(&self, segments: &[&str]) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(transport)?;

        self.handle_response(response).await
    }

    /// Send a JSON body and ignore the response body.
    #[instrument(skip(self), fields(store = %self.base))]
    pub async fn send_json<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(), Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.base.endpoint(segments)?;
        debug!(%method, %url, "sending JSON body");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_empty_response(response).await
    }

    /// Send a bodiless request and ignore the response body.
    #[instrument(skip(self), fields(store = %self.base))]
    pub async fn send(&self, method: Method, segments: &[&str]) -> Result<(), Error> {
        let url = self.base.endpoint(segments)?;
        debug!(%method, %url, "sending request");

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport)?;

        self.handle_empty_response(response).await
    }

    /// Handle a response, decoding the body or the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            message: e.to_string(),
        })
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Parse the store's `{"error": ...}` body, if there is one.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

/// Map a reqwest failure onto the transport error taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
