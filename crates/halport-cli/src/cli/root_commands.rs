use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Regenerate an implementation file from its interface header.
    Generate(GenerateArgs),
    /// Show what the extractors see in one file.
    Inspect(InspectArgs),
    /// Print the effective configuration.
    Config(ConfigArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Interface header declaring the API.
    #[arg(short, long)]
    pub interface: PathBuf,

    /// Existing implementation file (defaults to the output path).
    #[arg(short = 'm', long)]
    pub implementation: Option<PathBuf>,

    /// Where to write the regenerated file (defaults to the implementation path).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write nothing; fail if the output file is not up to date.
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the regenerated file instead of writing it.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// File to inspect.
    pub path: PathBuf,

    /// How to read the file (defaults from the extension: `.h` is an interface).
    #[arg(long = "as", value_enum)]
    pub kind: Option<FileKind>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FileKind {
    Interface,
    Implementation,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Print TOML suitable for `.halport/config.toml` instead of the output format.
    #[arg(long)]
    pub toml: bool,
}
