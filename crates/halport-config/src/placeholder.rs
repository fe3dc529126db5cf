//! Placeholder body configuration for functions without an implementation.

use serde::{Deserialize, Serialize};

fn default_status_type() -> String {
    "OPERATE_RET".to_string()
}

fn default_status_statement() -> String {
    "return OPRT_NOT_SUPPORTED;".to_string()
}

fn default_pointer_statement() -> String {
    "return NULL;".to_string()
}

fn default_value_statement() -> String {
    "return 0;".to_string()
}

fn default_void_types() -> Vec<String> {
    ["void", "VOID", "VOID_T"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    /// Return type of status-returning functions.
    #[serde(default = "default_status_type")]
    pub status_type: String,

    /// Statement placed in status-returning stubs.
    #[serde(default = "default_status_statement")]
    pub status_statement: String,

    /// Statement placed in pointer-returning stubs.
    #[serde(default = "default_pointer_statement")]
    pub pointer_statement: String,

    /// Statement placed in every other non-void stub.
    #[serde(default = "default_value_statement")]
    pub value_statement: String,

    /// Return types whose stubs get an empty marker region.
    #[serde(default = "default_void_types")]
    pub void_types: Vec<String>,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            status_type: default_status_type(),
            status_statement: default_status_statement(),
            pointer_statement: default_pointer_statement(),
            value_statement: default_value_statement(),
            void_types: default_void_types(),
        }
    }
}
