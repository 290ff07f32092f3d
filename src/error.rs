//! Error types.

use thiserror::Error;

/// Infrastructure failures: parsing the listen address, binding the port or
/// accepting a connection.
///
/// Request-level failures (404, 502, ...) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid listen address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a chained call to the downstream service failed.
///
/// The `Display` text is sent verbatim as the 502 response body.
#[derive(Debug, Error)]
pub enum DownstreamError {
    /// The URL was unusable or the request could not be sent or answered.
    #[error("Failed to call echo-service: {0}")]
    Call(String),

    #[error("Failed to read echo response: {0}")]
    Read(#[source] hyper::Error),

    #[error("Failed to parse echo response: {0}")]
    Parse(#[source] serde_json::Error),
}

impl From<http::uri::InvalidUri> for DownstreamError {
    fn from(e: http::uri::InvalidUri) -> Self {
        Self::Call(e.to_string())
    }
}

impl From<hyper_util::client::legacy::Error> for DownstreamError {
    fn from(e: hyper_util::client::legacy::Error) -> Self {
        Self::Call(describe_chain(&e))
    }
}

/// Renders an error followed by its sources, `outer: inner: root`.
///
/// The legacy client's own message is just "client error (Connect)"; the
/// useful part (e.g. "Connection refused") lives further down the chain.
fn describe_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_error_message() {
        let e = DownstreamError::from("not a url".parse::<http::Uri>().unwrap_err());
        assert!(e.to_string().starts_with("Failed to call echo-service: "));
        assert!(e.to_string().len() > "Failed to call echo-service: ".len());
    }

    #[test]
    fn parse_error_message() {
        let e = DownstreamError::Parse(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(e.to_string().starts_with("Failed to parse echo response: "));
    }

    #[test]
    fn addr_error_names_the_address() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let e = Error::Addr { addr: "0.0.0.0:http".into(), source };
        assert!(e.to_string().contains("0.0.0.0:http"));
    }
}
