//! Merging interface declarations with recovered implementations.

use halport_core::FileParseResult;
use tracing::{debug, info};

use crate::emit::{Emitter, Rendered};
use crate::options::EmitOptions;
use crate::report::ReconcileReport;

/// The regenerated file text and what happened to each function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub text: String,
    pub report: ReconcileReport,
}

/// Merge `interface` with `implementation` by normalized function name.
///
/// The interface decides which functions exist, in which order, and with
/// which documentation and head. The implementation only contributes bodies,
/// the user block and the banner. Pass [`FileParseResult::empty`] for a first
/// generation.
#[must_use]
pub fn reconcile(
    interface: &FileParseResult,
    implementation: &FileParseResult,
    options: &EmitOptions,
) -> Reconciliation {
    let mut report = ReconcileReport {
        warnings: interface
            .warnings
            .iter()
            .chain(&implementation.warnings)
            .cloned()
            .collect(),
        ..ReconcileReport::default()
    };

    let mut emitter = Emitter::new(options);
    emitter.banner(implementation.banner.as_deref());
    emitter.user_block(implementation.user_block.as_ref());

    for declared in &interface.functions {
        let existing = implementation
            .find(&declared.name)
            .and_then(|record| record.body.as_ref().map(|body| (record, body)));

        let Some((existing, body)) = existing else {
            debug!(name = %declared.name, "placeholder for new function");
            emitter.placeholder(declared);
            report.added.push(declared.name.clone());
            continue;
        };

        if existing.normalized_head() != declared.normalized_head() {
            info!(
                name = %declared.name,
                previous = %existing.head,
                current = %declared.head,
                "signature changed, body kept"
            );
            report.signature_changed.push(declared.name.clone());
        }
        if emitter.function(declared, body) == Rendered::Upgraded {
            report.upgraded.push(declared.name.clone());
        }
        debug!(name = %declared.name, source = %body.source, "body carried over");
        report.matched.push(declared.name.clone());
    }

    for record in &implementation.functions {
        if interface.find(&record.name).is_none() {
            info!(name = %record.name, line = record.line, "dropping function no longer in the interface");
            report.dropped.push(record.name.clone());
        }
    }

    debug!(
        matched = report.matched.len(),
        added = report.added.len(),
        dropped = report.dropped.len(),
        "reconciled"
    );
    Reconciliation {
        text: emitter.finish(),
        report,
    }
}
