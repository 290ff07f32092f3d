//! Incoming HTTP request type.

use std::borrow::Cow;

use http::HeaderMap;

use crate::headers::header_text;

/// An incoming HTTP request.
///
/// Only the request head is kept; none of the endpoints read a body.
pub struct Request {
    method: http::Method,
    path: String,
    headers: HeaderMap,
}

impl Request {
    pub fn method(&self) -> &http::Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Case-insensitive header lookup. Returns the first value when the
    /// header is repeated, or `None` if it is absent. Non-UTF-8 bytes are
    /// replaced, never rejected.
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.get(name).map(header_text)
    }
}

impl<B> From<http::Request<B>> for Request {
    fn from(req: http::Request<B>) -> Self {
        let (parts, _body) = req.into_parts();
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
        }
    }
}
