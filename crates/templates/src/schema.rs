//! Type-definition generation.
//!
//! Infers an interface from a JSON-shaped value: arrays take the type of
//! their first element, nested objects become inline record types.

use serde_json::{Map, Value};

use crate::error::{Result, TemplateError};
use crate::markdown::infer_markdown_structure;

/// Decode a schema source into a JSON-shaped value.
///
/// `json` sources must parse; `markdown` sources go through structure
/// inference; `text` sources are read as `key: value` lines.
pub fn parse_schema_source(source_type: &str, data: &str) -> Result<Value> {
    match source_type {
        "json" => Ok(serde_json::from_str(data)?),
        "markdown" => Ok(serde_json::to_value(infer_markdown_structure(data))?),
        "text" => Ok(infer_structure_from_text(data)),
        other => Err(TemplateError::invalid_source(format!(
            "unsupported source type: {other}"
        ))),
    }
}

/// Render a type definition for `data`. The root must be an object.
pub fn render_type_definition(name: &str, data: &Value) -> Result<String> {
    let Value::Object(map) = data else {
        return Err(TemplateError::NonObjectRoot(value_kind(data)));
    };
    let body = interface_body(map, 1);
    Ok(format!(
        concat!(
            "/**\n",
            " * {name} type definition (generated)\n",
            " */\n",
            "export interface {name} {{\n",
            "{body}\n",
            "}}\n",
        ),
        name = name,
        body = body,
    ))
}

fn interface_body(map: &Map<String, Value>, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    map.iter()
        .map(|(key, value)| format!("{pad}{key}: {};", infer_type(value, depth + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn infer_type(value: &Value, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    match value {
        Value::Null => "any".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => match items.first() {
            None => "any[]".to_string(),
            Some(Value::Object(first)) => {
                format!("{{\n{}\n{pad}}}[]", interface_body(first, depth + 1))
            }
            Some(first) => format!("{}[]", infer_type(first, depth)),
        },
        Value::Object(map) => format!("{{\n{}\n{pad}}}", interface_body(map, depth + 1)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Infer a flat structure from `key: value` text lines. Values map to their
/// detected type names.
#[must_use]
pub fn infer_structure_from_text(text: &str) -> Value {
    let mut structure = Map::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        structure.insert(
            key.trim().to_string(),
            Value::String(detect_type(value.trim()).to_string()),
        );
    }
    Value::Object(structure)
}

fn detect_type(value: &str) -> &'static str {
    if value.parse::<f64>().is_ok() {
        return "number";
    }
    if value == "true" || value == "false" {
        return "boolean";
    }
    if value.starts_with('[') && value.ends_with(']') {
        return "array";
    }
    if value.starts_with('{') && value.ends_with('}') {
        return "object";
    }
    "string"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn flat_object_renders_one_field_per_line() {
        let data = json!({ "ttl": "Title", "count": 3, "published": true });
        let rendered = render_type_definition("PageData", &data).unwrap();
        assert!(rendered.contains("export interface PageData {"));
        assert!(rendered.contains("  ttl: string;"));
        assert!(rendered.contains("  count: number;"));
        assert!(rendered.contains("  published: boolean;"));
    }

    #[test]
    fn arrays_take_the_type_of_their_first_element() {
        let data = json!({
            "tags": ["a", "b"],
            "empty": [],
            "items": [{ "name": "x", "score": 1 }],
        });
        let rendered = render_type_definition("ListData", &data).unwrap();
        assert!(rendered.contains("  tags: string[];"));
        assert!(rendered.contains("  empty: any[];"));
        assert!(rendered.contains("  items: {\n"));
        assert!(rendered.contains("    name: string;"));
        assert!(rendered.contains("  }[];"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let error = render_type_definition("Bad", &json!([1, 2])).unwrap_err();
        assert!(matches!(error, TemplateError::NonObjectRoot("array")));
    }

    #[test]
    fn schema_sources_route_by_type() {
        assert!(parse_schema_source("json", "{\"a\": 1}").is_ok());
        assert!(matches!(
            parse_schema_source("json", "{not json"),
            Err(TemplateError::Json(_))
        ));
        assert!(matches!(
            parse_schema_source("excel", "ignored"),
            Err(TemplateError::InvalidSource(_))
        ));
        let markdown = parse_schema_source("markdown", "## Features\n- one\n").unwrap();
        assert!(markdown.get("sections").is_some());
    }

    #[test]
    fn text_structure_detects_value_shapes() {
        let structure = infer_structure_from_text("ttl: Hello\ncount: 42\nflag: true\n");
        assert_eq!(
            structure,
            json!({ "ttl": "string", "count": "number", "flag": "boolean" })
        );
    }
}
