use pretty_assertions::assert_eq;

use super::*;

#[test]
fn generated_queue_file_yields_marked_bodies() {
    let result = extract_default(QUEUE_IMPL);
    assert_eq!(
        result.names(),
        vec![
            "tkl_queue_create_init",
            "tkl_queue_post",
            "tkl_queue_fetch",
            "tkl_queue_free"
        ]
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert!(
        result
            .functions
            .iter()
            .all(|f| !f.is_new && f.body.as_ref().is_some_and(|b| b.source == BodySource::Marked))
    );
}

#[test]
fn generated_queue_file_user_block_is_verbatim() {
    let result = extract_default(QUEUE_IMPL);
    let block = result.user_block.as_ref().expect("user block");
    assert!(block.as_str().starts_with("#include \"tkl_queue.h\"\n#include <pthread.h>\n"));
    assert!(block.as_str().ends_with("    int msgsize;\n} TKL_QUEUE_T;\n"));
    assert!(block.as_str().contains("static void set_timeout(struct timespec *abstime, int wait_ms)"));
}

#[test]
fn generated_queue_file_banner() {
    let result = extract_default(QUEUE_IMPL);
    let banner = result.banner.as_deref().expect("banner");
    assert!(banner.starts_with("/**\n * @file tkl_queue.c"));
    assert!(banner.ends_with("*/"));
}

#[test]
fn generated_queue_file_body_text() {
    let result = extract_default(QUEUE_IMPL);
    assert_eq!(
        body_of(&result, "tkl_queue_free").text,
        "    if (NULL == queue) {\n        return;\n    }\n\n    TKL_QUEUE_T *tkl_queue = (TKL_QUEUE_T *)queue;\n    rpa_queue_destroy(tkl_queue->queue);\n    free(tkl_queue);\n\n    return;\n"
    );
    let create = find(&result, "tkl_queue_create_init");
    assert_eq!(create.line, 333);
    assert_eq!(create.return_type, "OPERATE_RET");
    assert_eq!(
        create.head,
        "OPERATE_RET tkl_queue_create_init(TKL_QUEUE_HANDLE *queue, int msgsize, int msgcount)"
    );
}

#[test]
fn legacy_file_bodies_are_raw() {
    let result = extract_default(LEGACY_IMPL);
    assert_eq!(
        result.names(),
        vec![
            "tkl_system_enter_critical",
            "tkl_system_reset",
            "tkl_system_get_random"
        ]
    );
    assert_eq!(
        body_of(&result, "tkl_system_enter_critical"),
        &FunctionBody::raw("\n    return 0;\n")
    );
    assert!(result.user_block.is_none());
}

#[test]
fn legacy_braces_in_literals_and_comments_do_not_end_the_body() {
    let result = extract_default(LEGACY_IMPL);
    assert_eq!(
        body_of(&result, "tkl_system_reset").text,
        "\n    const char *msg = \"reset {now}\";\n    if (msg[0] == '}') {\n        return;\n    }\n    /* } not a real brace */\n    exit(0);\n"
    );
}

#[test]
fn legacy_file_warnings() {
    let result = extract_default(LEGACY_IMPL);
    assert_eq!(
        result.warnings,
        vec![
            ExtractWarning::DiscardedFragment {
                line: 6,
                excerpt: "#include \"tkl_system.h\" #include <stdlib.h> #include <unistd.h>".to_string(),
            },
            ExtractWarning::UnpairedBodyMarker {
                name: "tkl_system_get_random".to_string(),
            },
            ExtractWarning::DiscardedFragment {
                line: 40,
                excerpt: "static void delay_helper(uint32_t ms) { usleep(ms * 1000); }".to_string(),
            },
        ]
    );
    assert_eq!(
        body_of(&result, "tkl_system_get_random").source,
        BodySource::Raw
    );
}

#[test]
fn legacy_banner_is_kept_even_when_code_follows() {
    let result = extract_default(LEGACY_IMPL);
    let banner = result.banner.as_deref().expect("banner");
    assert!(banner.contains("@file tkl_system.c"));
}
