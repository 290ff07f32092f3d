//! Environment resolver.
//!
//! The process environment is captured once at startup into an [`Env`]
//! snapshot. Everything downstream resolves options against that snapshot,
//! never against `std::env` directly, so the values a handler sees cannot
//! change for the lifetime of the process.

use std::collections::HashMap;

/// Read-only snapshot of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Builds a snapshot from explicit pairs. Later pairs win on duplicate names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { vars }
    }

    /// Returns the value of `name`, or `fallback` when it is unset or empty.
    pub fn resolve(&self, name: &str, fallback: &str) -> String {
        match self.vars.get(name) {
            Some(v) if !v.is_empty() => v.clone(),
            _ => fallback.to_owned(),
        }
    }
}
