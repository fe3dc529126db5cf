use pretty_assertions::assert_eq;

use super::*;

#[test]
fn missing_sentinel_is_a_warning_not_an_error() {
    let result = extract_default("/** a */\nint tkl_a(void);\n");
    assert!(result.functions.is_empty());
    assert_eq!(result.warnings, vec![ExtractWarning::MissingSentinel]);
}

#[test]
fn declarations_outside_region_are_ignored() {
    let source = format!("/** outside */\nint tkl_outside(void);\n{}", header("/** inside */\nint tkl_inside(void);\n"));
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_inside"]);
}

#[test]
fn empty_region_yields_nothing() {
    let result = extract_default(&header(""));
    assert_eq!(result, FileParseResult::default());
}

#[test]
fn line_numbers_count_from_file_start() {
    let source = header("/** a */\nint tkl_a(void);\n");
    let result = extract_default(&source);
    // Six lines of preamble precede the body.
    assert_eq!(find(&result, "tkl_a").line, 8);
}

#[test]
fn region_is_exposed_for_callers() {
    let source = header("int x;\n");
    let region = locate_linkage_region(&source).expect("region");
    assert_eq!(source[region].trim(), "int x;");
}
