use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `halport` binary.
#[derive(Debug, Parser)]
#[command(
    name = "halport",
    version,
    about = "Regenerate HAL porting stubs without losing hand-written code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above `.halport/config.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::FileKind;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_paths() {
        let cli = Cli::try_parse_from([
            "halport",
            "generate",
            "--interface",
            "include/tkl_queue.h",
            "--implementation",
            "src/tkl_queue.c",
        ])
        .expect("cli should parse");

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.interface, Path::new("include/tkl_queue.h"));
        assert_eq!(args.implementation.as_deref(), Some(Path::new("src/tkl_queue.c")));
        assert!(args.output.is_none());
        assert!(!args.check);
    }

    #[test]
    fn check_and_stdout_conflict() {
        let parsed = Cli::try_parse_from([
            "halport", "generate", "-i", "a.h", "-o", "a.c", "--check", "--stdout",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["halport", "config", "--format", "json", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config(ref args) if !args.toml));
    }

    #[test]
    fn inspect_accepts_explicit_kind() {
        let cli = Cli::try_parse_from(["halport", "inspect", "tkl_queue.c", "--as", "interface"])
            .expect("cli should parse");
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.kind, Some(FileKind::Interface));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["halport", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["halport", "--config", "/tmp/halport.toml", "config"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/halport.toml")));
        assert_eq!(flags.format, OutputFormat::Table);
    }
}
