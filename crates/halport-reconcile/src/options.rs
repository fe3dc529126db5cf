//! Everything the emitter needs besides the two parse results.

use halport_config::{OutputConfig, PlaceholderConfig, PortConfig};
use halport_core::Conventions;

#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    pub conventions: Conventions,
    pub placeholder: PlaceholderConfig,
    pub output: OutputConfig,
    /// File name of the generated file, used in a synthesized banner.
    pub file_name: Option<String>,
    /// File name of the interface header, used in a synthesized banner and
    /// to seed a new user block with its `#include`.
    pub interface_header: Option<String>,
}

impl EmitOptions {
    #[must_use]
    pub fn from_config(config: &PortConfig) -> Self {
        Self {
            conventions: config.conventions(),
            placeholder: config.placeholder.clone(),
            output: config.output.clone(),
            file_name: None,
            interface_header: None,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_interface_header(mut self, name: impl Into<String>) -> Self {
        self.interface_header = Some(name.into());
        self
    }
}
