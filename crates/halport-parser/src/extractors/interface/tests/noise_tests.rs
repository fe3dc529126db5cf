use pretty_assertions::assert_eq;

use super::*;

#[test]
fn documented_function_pointer_typedef_consumes_its_doc() {
    let source = header(
        "/** callback */\ntypedef void (*TKL_CB)(int tkl_arg);\n\nint tkl_after(void);\n",
    );
    let result = extract_default(&source);
    assert!(result.functions.is_empty());
    assert_eq!(
        malformed_reasons(&result),
        vec!["API declaration without a documentation comment"]
    );
}

#[test]
fn documented_struct_typedef_is_not_a_function() {
    let source = header(
        "/** config */\ntypedef struct {\n    int (*tkl_hook)(void);\n    int depth;\n} TKL_CFG_T;\n\n/** real */\nint tkl_real(void);\n",
    );
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_real"]);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn untypedefed_aggregate_is_stripped() {
    let source = header("/** flags */\nenum tkl_flags { TKL_A = 1, TKL_B = 2 };\n/** f */\nvoid tkl_f(void);\n");
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_f"]);
}

#[test]
fn documented_macro_consumes_doc() {
    let source = header("/** max */\n#define TKL_MAX(a, b) ((a) > (b) ? (a) : (b))\nint tkl_max_of(int a, int b);\n");
    let result = extract_default(&source);
    assert!(result.functions.is_empty());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn multi_line_macro_with_api_call_is_stripped() {
    let source = header(
        "/** lock */\n#define TKL_LOCK() \\\n    do { tkl_mutex_lock(g); } \\\n    while (0)\n\n/** unlock */\nvoid tkl_unlock(void);\n",
    );
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_unlock"]);
}

#[test]
fn conditional_directive_keeps_pending_doc() {
    let source = header("/** guarded */\n#if TKL_ENABLE_X\nvoid tkl_guarded(void);\n#endif\n");
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_guarded"]);
}

#[test]
fn includes_inside_region_are_noise() {
    let source = header("/** types */\n#include <tkl_types.h>\nvoid tkl_next(void);\n");
    let result = extract_default(&source);
    assert!(result.functions.is_empty());
}

#[test]
fn inline_definition_is_skipped() {
    let source = header(
        "/** inline */\nstatic inline int tkl_inline(void) { return 1; }\n\n/** decl */\nint tkl_decl(void);\n",
    );
    let result = extract_default(&source);
    assert_eq!(result.names(), vec!["tkl_decl"]);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}
