use std::path::Path;

use anyhow::{Context, bail};
use halport_config::PortConfig;
use halport_core::{FileParseResult, FunctionRecord};
use halport_parser::{extract_implementation, extract_interface, read_implementation, read_interface};
use serde::Serialize;

use crate::cli::root_commands::{FileKind, InspectArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct FunctionRow<'a> {
    function: &'a str,
    line: u32,
    returns: &'a str,
    body: &'static str,
}

impl<'a> From<&'a FunctionRecord> for FunctionRow<'a> {
    fn from(record: &'a FunctionRecord) -> Self {
        Self {
            function: &record.name,
            line: record.line,
            returns: &record.return_type,
            body: record.body.as_ref().map_or("-", |body| body.source.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
struct WarningRow {
    kind: &'static str,
    detail: String,
}

pub fn handle(args: &InspectArgs, flags: &GlobalFlags, config: &PortConfig) -> anyhow::Result<()> {
    let kind = args.kind.unwrap_or_else(|| kind_from_extension(&args.path));
    let result = parse(&args.path, kind, config)?;

    if flags.format != OutputFormat::Table {
        return output(&result, flags.format);
    }

    let rows: Vec<FunctionRow<'_>> = result.functions.iter().map(FunctionRow::from).collect();
    output(&rows, flags.format)?;
    if !result.warnings.is_empty() {
        let warnings: Vec<WarningRow> = result
            .warnings
            .iter()
            .map(|warning| WarningRow {
                kind: warning.kind(),
                detail: warning.to_string(),
            })
            .collect();
        println!();
        output(&warnings, flags.format)?;
    }
    Ok(())
}

fn parse(path: &Path, kind: FileKind, config: &PortConfig) -> anyhow::Result<FileParseResult> {
    let conventions = config.conventions();
    match kind {
        FileKind::Interface => {
            let text = read_interface(path)?;
            Ok(extract_interface(&text, &conventions))
        }
        FileKind::Implementation => {
            let Some(text) = read_implementation(path)? else {
                bail!("{} does not exist", path.display());
            };
            extract_implementation(&text, &conventions)
                .with_context(|| format!("cannot recover {}", path.display()))
        }
    }
}

/// Headers are interfaces; everything else is an implementation file.
fn kind_from_extension(path: &Path) -> FileKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("h" | "hpp" | "hh") => FileKind::Interface,
        _ => FileKind::Implementation,
    }
}
