//! Liveness probe.
//!
//! If the process can answer HTTP at all it is alive, so the handler has no
//! dependencies and no failure mode. Point the pod's `livenessProbe` (and
//! `readinessProbe`) at `/health`.

use serde::Serialize;

use crate::Request;
use crate::response::Json;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// `GET /health` → `200 {"status":"healthy"}`.
pub async fn liveness(_req: Request) -> Json<Health> {
    Json(Health { status: "healthy" })
}
