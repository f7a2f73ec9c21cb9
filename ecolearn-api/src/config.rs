use std::{env, time::Duration};

use tracing::warn;

use crate::DEFAULT_TIMEOUT;

const BASE_URL_KEY: &str = "ECOLEARN_BASE_URL";
const TIMEOUT_KEY: &str = "ECOLEARN_TIMEOUT_SECS";

// The Flask development server's default address.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where the EcoLearn server lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load the configuration from `ECOLEARN_BASE_URL` and
    /// `ECOLEARN_TIMEOUT_SECS`.
    ///
    /// Anything missing or unparseable falls back to the default with a
    /// logged warning; a bad environment never takes the client down.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_KEY).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match env::var(TIMEOUT_KEY) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(err) => {
                    warn!("invalid {TIMEOUT_KEY} value {raw:?}: {err}, using default");
                    DEFAULT_TIMEOUT
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };
        Self { base_url, timeout }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
