//! Identity reports and their JSON wire shape.
//!
//! Decoding is lenient: every field defaults when absent or `null` and
//! unknown fields are ignored, so a peer running an older or newer build
//! still decodes. Anything present must still have the right JSON type.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Config;
use crate::headers::MeshHeaderSet;

/// Who is answering.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct SelfInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub app_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
}

impl SelfInfo {
    pub fn new(app_name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self { app_name: app_name.into(), hostname: hostname.into() }
    }

    /// Identity of this process. A failed hostname lookup leaves `hostname` empty.
    pub fn current(config: &Config) -> Self {
        Self::new(config.app_name.clone(), local_hostname())
    }
}

fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}

/// Who is calling, as reported by the mesh proxy.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct CallerInfo {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub l5d_client_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub raw_header: String,
}

impl CallerInfo {
    /// Both fields carry the `l5d-client-id` header value verbatim.
    pub fn from_client_id(client_id: Option<&str>) -> Self {
        let id = client_id.unwrap_or_default().to_owned();
        Self { l5d_client_id: id.clone(), raw_header: id }
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct IdentityResponse {
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    pub self_info: SelfInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub caller: CallerInfo,
    #[serde(deserialize_with = "mesh_headers")]
    pub linkerd_headers: MeshHeaderSet,
}

/// Body of `GET /call-echo`: our identity plus what the downstream reported.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ChainedCallResponse {
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    pub self_info: SelfInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub echo_response: IdentityResponse,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`], and a `null` header value becomes `""`.
fn mesh_headers<'de, D>(deserializer: D) -> Result<MeshHeaderSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<std::collections::BTreeMap<String, Option<String>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}
