use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::detect()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) => render_array(&items, options),
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            table::render_rows(&["key", "value"], &rows, options)
        }
        scalar => table::render_rows(&["value"], &[vec![value_to_cell(&scalar)]], options),
    };
    Ok(rendered)
}

/// Arrays of objects become one column per key, sorted by key.
fn render_array(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        function: &'static str,
        line: u32,
    }

    #[test]
    fn json_is_pretty_and_raw_is_compact() {
        let row = Row {
            function: "tkl_queue_free",
            line: 62,
        };
        assert_eq!(
            render(&row, OutputFormat::Json).expect("json"),
            "{\n  \"function\": \"tkl_queue_free\",\n  \"line\": 62\n}"
        );
        assert_eq!(
            render(&row, OutputFormat::Raw).expect("raw"),
            r#"{"function":"tkl_queue_free","line":62}"#
        );
    }

    #[test]
    fn arrays_render_one_column_per_field() {
        let rows = vec![
            Row {
                function: "tkl_queue_create_init",
                line: 31,
            },
            Row {
                function: "tkl_queue_free",
                line: 62,
            },
        ];
        let rendered = render_table(&rows, table::TableOptions::plain()).expect("table");
        let header = rendered.lines().next().expect("header");
        assert!(header.starts_with("function"), "got: {header}");
        assert!(header.ends_with("line"), "got: {header}");
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn objects_render_as_sorted_key_value_rows() {
        let value = serde_json::json!({ "prefix": "tkl", "indent": "    " });
        let rendered = render_table(&value, table::TableOptions::plain()).expect("table");
        let keys: Vec<&str> = rendered
            .lines()
            .skip(2)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(keys, vec!["indent", "prefix"]);
    }

    #[test]
    fn empty_arrays_say_so() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(
            render_table(&rows, table::TableOptions::plain()).expect("table"),
            "(no rows)"
        );
    }

    #[test]
    fn string_lists_join_into_one_cell() {
        let value = serde_json::json!(["tkl_a", "tkl_b"]);
        assert_eq!(value_to_cell(&value), "tkl_a, tkl_b");
    }
}
