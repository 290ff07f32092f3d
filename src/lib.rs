//! # mesh-echo
//!
//! A diagnostic HTTP service for checking that a service mesh (linkerd)
//! propagates workload identity. Deploy two instances, mesh them, and ask one
//! to call the other.
//!
//! Every endpoint answers any method; `HEAD` gets the headers without a body.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | this instance's identity, the caller's `l5d-client-id` and every `l5d-*` header seen |
//! | GET | `/call-echo` | this instance's identity plus the `/` report of `ECHO_SERVICE_URL`, or `502` |
//! | GET | `/health` | `{"status":"healthy"}` |
//!
//! Options come from the environment: `APP_NAME` (default `unknown`),
//! `PORT` (default `8080`) and `ECHO_SERVICE_URL` (default
//! `http://echo-service`).
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use mesh_echo::{Config, Env, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mesh_echo::Error> {
//!     let config = Config::from_env(&Env::from_process());
//!     Server::bind(&config.bind_addr())?.serve(mesh_echo::app(config)).await
//! }
//! ```
//!
//! TLS is the sidecar's job; this crate only speaks plain HTTP, inbound and
//! outbound.

mod config;
mod downstream;
mod env;
mod error;
mod handler;
mod handlers;
mod headers;
mod identity;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod health;

use std::future::Future;
use std::sync::Arc;

pub use config::Config;
pub use downstream::EchoClient;
pub use env::Env;
pub use error::{DownstreamError, Error};
pub use handler::Handler;
pub use handlers::AppState;
pub use headers::{CLIENT_ID_HEADER, MESH_HEADER_PREFIX, MeshHeaderSet, extract_mesh_headers};
pub use identity::{CallerInfo, ChainedCallResponse, IdentityResponse, SelfInfo};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;

/// Builds the service's router.
pub fn app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));

    Router::new()
        .any("/", with_state(Arc::clone(&state), handlers::identity_report))
        .any("/call-echo", with_state(state, handlers::call_echo))
        .any("/health", health::liveness)
}

/// Adapts a handler that also takes the shared state into a plain [`Handler`].
fn with_state<F, Fut, R>(state: Arc<AppState>, f: F) -> impl Handler
where
    F: Fn(Arc<AppState>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    move |req: Request| f(Arc::clone(&state), req)
}
