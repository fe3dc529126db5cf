use halport_core::{BodySource, Conventions, ExtractWarning, FileParseResult, FunctionBody, FunctionRecord};

use super::*;

mod fixture_parsing;
mod fragment_tests;

const QUEUE_IMPL: &str = include_str!("../../../../tests/fixtures/tkl_queue.c");
const LEGACY_IMPL: &str = include_str!("../../../../tests/fixtures/tkl_legacy_system.c");

fn extract_default(source: &str) -> FileParseResult {
    extract(source, &Conventions::default()).expect("extraction should succeed")
}

fn extract_err(source: &str) -> ParserError {
    match extract(source, &Conventions::default()) {
        Ok(result) => panic!("expected an error, got {:?}", result.names()),
        Err(err) => err,
    }
}

fn find<'a>(result: &'a FileParseResult, name: &str) -> &'a FunctionRecord {
    result.find(name).unwrap_or_else(|| {
        panic!(
            "no function named {name}; available: {:?}",
            result.names()
        )
    })
}

fn body_of<'a>(result: &'a FileParseResult, name: &str) -> &'a FunctionBody {
    find(result, name)
        .body
        .as_ref()
        .unwrap_or_else(|| panic!("{name} has no body"))
}
