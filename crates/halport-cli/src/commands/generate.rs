use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use halport_config::PortConfig;
use halport_parser::{read_implementation, read_interface};
use halport_reconcile::{EmitOptions, ReconcileReport, regenerate};
use serde::Serialize;
use tracing::info;

use crate::atomic_write::write_atomic;
use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// A regenerated file that has not been written anywhere yet.
#[derive(Debug)]
struct Generated {
    output: PathBuf,
    text: String,
    report: ReconcileReport,
    /// The output file already holds exactly `text`.
    up_to_date: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResponse<'a> {
    output: String,
    written: bool,
    /// Functions were added, dropped or changed their signature.
    api_changed: bool,
    report: &'a ReconcileReport,
}

impl<'a> GenerateResponse<'a> {
    fn new(generated: &'a Generated, written: bool) -> Self {
        Self {
            output: generated.output.display().to_string(),
            written,
            api_changed: generated.report.changes_api(),
            report: &generated.report,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusRow<'a> {
    function: &'a str,
    status: &'static str,
    detail: String,
}

pub fn handle(args: &GenerateArgs, flags: &GlobalFlags, config: &PortConfig) -> anyhow::Result<()> {
    let generated = execute(args, config)?;
    log_report(&generated);

    if args.stdout {
        print!("{}", generated.text);
        return Ok(());
    }

    if args.check {
        if !generated.up_to_date {
            bail!(
                "{} is out of date with {}",
                generated.output.display(),
                args.interface.display()
            );
        }
    } else if !generated.up_to_date {
        write_atomic(&generated.output, &generated.text)?;
    }

    let written = !args.check && !generated.up_to_date;
    if flags.format == OutputFormat::Table {
        return output(&status_rows(&generated.report), flags.format);
    }
    output(&GenerateResponse::new(&generated, written), flags.format)
}

/// Read both inputs and render the regenerated file in memory.
fn execute(args: &GenerateArgs, config: &PortConfig) -> anyhow::Result<Generated> {
    let Some(output) = args.output.as_ref().or(args.implementation.as_ref()) else {
        bail!("pass --implementation or --output to name the generated file");
    };
    // Without --implementation the output file itself holds the previous bodies.
    let previous_path = args.implementation.as_ref().unwrap_or(output);

    let interface_text = read_interface(&args.interface)?;
    let previous = read_implementation(previous_path)?;

    let mut options = EmitOptions::from_config(config);
    if let Some(name) = file_name(output) {
        options = options.with_file_name(name);
    }
    if let Some(name) = file_name(&args.interface) {
        options = options.with_interface_header(name);
    }

    let reconciliation = regenerate(&interface_text, previous.as_deref(), &options)
        .with_context(|| {
            format!(
                "refusing to regenerate: {} cannot be recovered intact",
                previous_path.display()
            )
        })?;

    let on_disk = if previous_path == output {
        previous
    } else {
        read_implementation(output)?
    };
    let up_to_date = on_disk.as_deref() == Some(reconciliation.text.as_str());

    Ok(Generated {
        output: output.clone(),
        text: reconciliation.text,
        report: reconciliation.report,
        up_to_date,
    })
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn log_report(generated: &Generated) {
    let report = &generated.report;
    info!(
        output = %generated.output.display(),
        matched = report.matched.len(),
        added = report.added.len(),
        dropped = report.dropped.len(),
        up_to_date = generated.up_to_date,
        "regenerated"
    );
    if !report.dropped.is_empty() {
        info!(functions = ?report.dropped, "implementations dropped from the output");
    }
}

/// One row per function in report order, then one per warning.
fn status_rows(report: &ReconcileReport) -> Vec<StatusRow<'_>> {
    let mut rows = Vec::new();
    for name in &report.matched {
        let status = if report.signature_changed.contains(name) {
            "signature_changed"
        } else if report.upgraded.contains(name) {
            "upgraded"
        } else {
            "matched"
        };
        rows.push(StatusRow {
            function: name,
            status,
            detail: String::new(),
        });
    }
    for name in &report.added {
        rows.push(StatusRow {
            function: name,
            status: "added",
            detail: String::new(),
        });
    }
    for name in &report.dropped {
        rows.push(StatusRow {
            function: name,
            status: "dropped",
            detail: String::new(),
        });
    }
    for warning in &report.warnings {
        rows.push(StatusRow {
            function: "-",
            status: "warning",
            detail: warning.to_string(),
        });
    }
    rows
}
