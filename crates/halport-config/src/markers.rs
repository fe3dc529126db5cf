//! Sentinel marker configuration.

use halport_core::conventions::{
    DEFAULT_BODY_BEGIN, DEFAULT_BODY_END, DEFAULT_USER_BLOCK_BEGIN, DEFAULT_USER_BLOCK_END,
};
use serde::{Deserialize, Serialize};

fn default_user_block_begin() -> String {
    DEFAULT_USER_BLOCK_BEGIN.to_string()
}

fn default_user_block_end() -> String {
    DEFAULT_USER_BLOCK_END.to_string()
}

fn default_body_begin() -> String {
    DEFAULT_BODY_BEGIN.to_string()
}

fn default_body_end() -> String {
    DEFAULT_BODY_END.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkerConfig {
    #[serde(default = "default_user_block_begin")]
    pub user_block_begin: String,

    #[serde(default = "default_user_block_end")]
    pub user_block_end: String,

    #[serde(default = "default_body_begin")]
    pub body_begin: String,

    #[serde(default = "default_body_end")]
    pub body_end: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            user_block_begin: default_user_block_begin(),
            user_block_end: default_user_block_end(),
            body_begin: default_body_begin(),
            body_end: default_body_end(),
        }
    }
}
