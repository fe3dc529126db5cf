pub mod config;
pub mod generate;
pub mod inspect;

use halport_config::PortConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, flags: &GlobalFlags, config: &PortConfig) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => generate::handle(args, flags, config),
        Commands::Inspect(args) => inspect::handle(args, flags, config),
        Commands::Config(args) => config::handle(args, flags, config),
    }
}
