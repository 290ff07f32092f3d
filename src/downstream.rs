//! Client for the chained call to another instance of this service.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use crate::error::DownstreamError;
use crate::identity::IdentityResponse;

/// Plain-HTTP client for the downstream echo service.
///
/// Cheap to clone; clones share one connection pool. No timeout, no retry:
/// the call either completes or fails once.
#[derive(Clone)]
pub struct EchoClient {
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl EchoClient {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client }
    }

    /// `GET url` and decode the reply as an [`IdentityResponse`].
    ///
    /// The downstream status code is not inspected; only the body matters.
    /// The response body is owned by this call and is released on every
    /// path out of it, collected on success and dropped on early return.
    pub async fn fetch_identity(&self, url: &str) -> Result<IdentityResponse, DownstreamError> {
        let uri: http::Uri = url.parse()?;
        let res = self.client.get(uri).await?;

        let body = res
            .into_body()
            .collect()
            .await
            .map_err(DownstreamError::Read)?
            .to_bytes();

        // A bare `null` body decodes as an empty report.
        serde_json::from_slice::<Option<IdentityResponse>>(&body)
            .map(Option::unwrap_or_default)
            .map_err(DownstreamError::Parse)
    }
}

impl Default for EchoClient {
    fn default() -> Self { Self::new() }
}
