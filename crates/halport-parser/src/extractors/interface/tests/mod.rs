use halport_core::{Conventions, ExtractWarning, FileParseResult, FunctionRecord};

use super::*;

mod noise_tests;
mod sentinel_tests;

const QUEUE_HEADER: &str = include_str!("../../../../tests/fixtures/tkl_queue.h");
const SYSTEM_HEADER: &str = include_str!("../../../../tests/fixtures/tkl_system.h");
const WIFI_HEADER: &str = include_str!("../../../../tests/fixtures/tkl_wifi.h");

fn extract_default(source: &str) -> FileParseResult {
    extract(source, &Conventions::default())
}

/// Wrap declarations in the extern-C sentinels.
fn header(body: &str) -> String {
    format!(
        "#include \"tuya_cloud_types.h\"\n\n#ifdef __cplusplus\nextern \"C\" {{\n#endif\n\n{body}\n#ifdef __cplusplus\n}}\n#endif /* __cplusplus */\n"
    )
}

fn find<'a>(result: &'a FileParseResult, name: &str) -> &'a FunctionRecord {
    result.find(name).unwrap_or_else(|| {
        panic!(
            "no function named {name}; available: {:?}",
            result.names()
        )
    })
}

fn malformed_reasons(result: &FileParseResult) -> Vec<&str> {
    result
        .warnings
        .iter()
        .filter_map(|w| match w {
            ExtractWarning::MalformedDeclaration { reason, .. } => Some(reason.as_str()),
            _ => None,
        })
        .collect()
}
