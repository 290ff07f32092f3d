//! Recognized runtime options.

use crate::env::Env;

pub const APP_NAME: &str = "APP_NAME";
pub const PORT: &str = "PORT";
pub const ECHO_SERVICE_URL: &str = "ECHO_SERVICE_URL";

const DEFAULT_APP_NAME: &str = "unknown";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_ECHO_SERVICE_URL: &str = "http://echo-service";

/// Options resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub app_name: String,
    /// Kept as text; an unusable value surfaces when the server binds.
    pub port: String,
    pub echo_service_url: String,
}

impl Config {
    pub fn from_env(env: &Env) -> Self {
        Self {
            app_name: env.resolve(APP_NAME, DEFAULT_APP_NAME),
            port: env.resolve(PORT, DEFAULT_PORT),
            echo_service_url: env.resolve(ECHO_SERVICE_URL, DEFAULT_ECHO_SERVICE_URL),
        }
    }

    /// Listen address on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env(&Env::default())
    }
}
