use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_file_yields_empty_result() {
    assert_eq!(extract_default(""), FileParseResult::default());
}

#[test]
fn doc_comment_inside_a_body_does_not_split() {
    let source = "/** a */\nint tkl_a(void)\n{\n    /** inner */\n    return 0;\n}\n";
    let result = extract_default(source);
    assert_eq!(result.names(), vec!["tkl_a"]);
    assert!(body_of(&result, "tkl_a").text.contains("/** inner */"));
}

#[test]
fn undocumented_functions_in_one_fragment_are_all_recovered() {
    let source = "int tkl_a(void)\n{\n    return 1;\n}\n\nint tkl_b(void)\n{\n    return 2;\n}\n";
    let result = extract_default(source);
    assert_eq!(result.names(), vec!["tkl_a", "tkl_b"]);
    assert_eq!(body_of(&result, "tkl_b").text, "\n    return 2;\n");
    assert_eq!(find(&result, "tkl_b").line, 6);
}

#[test]
fn code_before_the_head_is_discarded_with_a_warning() {
    let source = "/** a */\nstatic int counter;\nint tkl_a(void)\n{\n}\n";
    let result = extract_default(source);
    assert_eq!(find(&result, "tkl_a").head, "int tkl_a(void)");
    assert_eq!(
        result.warnings,
        vec![ExtractWarning::DiscardedFragment {
            line: 2,
            excerpt: "static int counter;".to_string(),
        }]
    );
}

#[test]
fn helper_calling_api_in_body_is_not_an_api_function() {
    let source = "/** helper */\nstatic void helper(void)\n{\n    tkl_system_sleep(1);\n}\n\n/** a */\nvoid tkl_a(void)\n{\n    helper();\n}\n";
    let result = extract_default(source);
    assert_eq!(result.names(), vec!["tkl_a"]);
    assert!(matches!(
        result.warnings.as_slice(),
        [ExtractWarning::DiscardedFragment { line: 2, .. }]
    ));
}

#[test]
fn comment_only_fragment_is_discarded_silently() {
    let source = "/** just a note */\n// nothing here\n\n/** a */\nvoid tkl_a(void)\n{\n}\n";
    let result = extract_default(source);
    assert_eq!(result.names(), vec!["tkl_a"]);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn multi_line_head_and_pointer_return() {
    let source = "/** a */\nstatic VOID_T *\ntkl_alloc(SIZE_T size,\n          UINT_T flags)\n{\n    // --- BEGIN: user implements ---\n    return malloc(size);\n    // --- END: user implements ---\n}\n";
    let result = extract_default(source);
    let record = find(&result, "tkl_alloc");
    assert_eq!(record.head, "static VOID_T *\ntkl_alloc(SIZE_T size,\n          UINT_T flags)");
    assert_eq!(record.return_type, "staticVOID_T*");
    assert!(record.returns_pointer());
    assert_eq!(
        record.body,
        Some(FunctionBody::marked("    return malloc(size);\n"))
    );
}

#[test]
fn attribute_between_head_and_body_is_allowed() {
    let source = "/** a */\nint tkl_a(void) __attribute__((weak))\n{\n    return 0;\n}\n";
    let result = extract_default(source);
    assert_eq!(find(&result, "tkl_a").head, "int tkl_a(void)");
}

#[test]
fn ambiguous_markers_warn_and_keep_first_pair() {
    let source = "/** a */\nint tkl_a(void)\n{\n    // --- BEGIN: user implements ---\n    one();\n    // --- END: user implements ---\n    // --- BEGIN: user implements ---\n    two();\n    // --- END: user implements ---\n}\n";
    let result = extract_default(source);
    assert_eq!(body_of(&result, "tkl_a").text, "    one();\n");
    assert_eq!(
        result.warnings,
        vec![ExtractWarning::AmbiguousBodyMarkers {
            name: "tkl_a".to_string()
        }]
    );
}

#[test]
fn custom_prefix_and_markers() {
    let conventions = Conventions {
        prefix: "tal".to_string(),
        body_begin: "/* USER CODE BEGIN */".to_string(),
        body_end: "/* USER CODE END */".to_string(),
        ..Conventions::default()
    };
    let source = "/** a */\nint tal_a(void)\n{\n    /* USER CODE BEGIN */\n    return 7;\n    /* USER CODE END */\n}\n/** b */\nint tkl_b(void)\n{\n}\n";
    let result = extract(source, &conventions).expect("valid");
    assert_eq!(result.names(), vec!["tal_a"]);
    assert_eq!(body_of(&result, "tal_a").text, "    return 7;\n");
}

#[test]
fn code_outside_body_markers_warns_with_its_line() {
    let source = "/** a */\nint tkl_a(void)\n{\n    int unused;\n    // --- BEGIN: user implements ---\n    work();\n    // --- END: user implements ---\n}\n";
    let result = extract_default(source);
    assert_eq!(body_of(&result, "tkl_a").text, "    work();\n");
    assert_eq!(
        result.warnings,
        vec![ExtractWarning::CodeOutsideBodyMarkers {
            name: "tkl_a".to_string(),
            line: 4,
            excerpt: "int unused;".to_string(),
        }]
    );
}

#[test]
fn marker_text_in_a_string_literal_is_not_a_marker() {
    let source = "/** a */\nvoid tkl_a(void)\n{\n    puts(\"// --- BEGIN: user implements ---\");\n}\n";
    let result = extract_default(source);
    let body = body_of(&result, "tkl_a");
    assert_eq!(body.source, BodySource::Raw);
    assert!(body.text.contains("puts("));
    assert!(result.warnings.is_empty());
}
