use anyhow::Context;
use halport_config::PortConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigArgs;
use crate::output::output;

/// Print the configuration after all layers were merged.
pub fn handle(args: &ConfigArgs, flags: &GlobalFlags, config: &PortConfig) -> anyhow::Result<()> {
    if args.toml {
        print!("{}", to_toml(config)?);
        return Ok(());
    }
    output(config, flags.format)
}

fn to_toml(config: &PortConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("failed to serialize configuration as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_output_has_every_section() {
        let text = to_toml(&PortConfig::default()).expect("toml");
        for section in ["[api]", "[markers]", "[placeholder]", "[output]"] {
            assert!(text.contains(section), "missing {section} in:\n{text}");
        }
        assert!(text.contains("prefix = \"tkl\""), "got:\n{text}");
    }

    #[test]
    fn toml_output_loads_back() {
        let mut config = PortConfig::default();
        config.api.prefix = "tal".to_string();
        let text = to_toml(&config).expect("toml");
        let parsed: PortConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.api.prefix, "tal");
        assert_eq!(parsed.markers.body_begin, config.markers.body_begin);
    }
}
