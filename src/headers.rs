//! Mesh header extraction.
//!
//! Linkerd's proxy injects `l5d-*` headers (most importantly
//! `l5d-client-id`, the mTLS identity of the calling workload) into
//! requests it forwards. This module pulls them out of a request.

use std::borrow::Cow;
use std::collections::BTreeMap;

use http::{HeaderMap, HeaderValue};

/// Prefix shared by every mesh-injected header.
pub const MESH_HEADER_PREFIX: &str = "l5d-";

/// Identity of the calling workload, set by the proxy on meshed mTLS traffic.
pub const CLIENT_ID_HEADER: &str = "l5d-client-id";

/// Lowercase header name to its comma-joined values.
///
/// Ordered so identical requests always serialize identically.
pub type MeshHeaderSet = BTreeMap<String, String>;

/// Header value as text. Bytes that are not UTF-8 become U+FFFD.
///
/// Every place that reads a header value goes through this, so the caller
/// fields and the header map always agree.
pub fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

/// Collects every `l5d-` header, joining repeated values with `", "` in the
/// order they were received.
pub fn extract_mesh_headers(headers: &HeaderMap) -> MeshHeaderSet {
    headers
        .keys()
        // `HeaderName` is always stored lowercase.
        .filter(|name| name.as_str().starts_with(MESH_HEADER_PREFIX))
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(header_text)
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_owned(), joined)
        })
        .collect()
}
