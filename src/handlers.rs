//! Identity report and chained-call endpoints.

use std::sync::Arc;

use crate::config::Config;
use crate::downstream::EchoClient;
use crate::headers::{CLIENT_ID_HEADER, extract_mesh_headers};
use crate::identity::{CallerInfo, ChainedCallResponse, IdentityResponse, SelfInfo};
use crate::response::{IntoResponse, Json, Response};
use crate::{Request, Status};

/// Read-only state shared by every request.
pub struct AppState {
    pub config: Config,
    pub echo: EchoClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config, echo: EchoClient::new() }
    }
}

/// `GET /`: who we are, who called, and which mesh headers arrived.
pub async fn identity_report(state: Arc<AppState>, req: Request) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        self_info: SelfInfo::current(&state.config),
        caller: CallerInfo::from_client_id(req.header(CLIENT_ID_HEADER).as_deref()),
        linkerd_headers: extract_mesh_headers(req.headers()),
    })
}

/// `GET /call-echo`: one hop to the downstream echo service.
///
/// Any downstream failure is a `502` whose text body describes it.
pub async fn call_echo(state: Arc<AppState>, _req: Request) -> Response {
    let url = &state.config.echo_service_url;
    match state.echo.fetch_identity(url).await {
        Ok(echo_response) => Json(ChainedCallResponse {
            self_info: SelfInfo::current(&state.config),
            echo_response,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(url = %url, "chained call failed: {e}");
            Response::builder()
                .status(Status::BadGateway)
                .text(format!("{e}\n"))
        }
    }
}
