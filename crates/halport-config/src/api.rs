//! API family configuration.

use halport_core::conventions::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Function-name prefix that distinguishes API functions (e.g. "tkl", "tal").
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}
