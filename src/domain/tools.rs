//! Tools exposed via Model Context Protocol
//!
//! Provides the `generate_uuid` descriptor and its `tools/call` handler. UUIDs come
//! from the `UuidSource` held in `AppState`.

use rust_mcp_sdk::schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::domain::utils::{format_uuid, resolve_params, GenerateParams, MAX_COUNT};
use crate::mcp::rpc::{app_error_to_json_rpc, json_rpc_error, json_rpc_result};
use crate::uuid_source::UuidSource;
use crate::{
    errors::{AppError, GenerateError},
    AppState,
};

pub const GENERATE_UUID_TOOL: &str = "generate_uuid";

/// Descriptors are kept as raw JSON so the published schema, including the
/// empty `required` list, goes out exactly as written here.
pub fn build_tools_list() -> Vec<Value> {
    vec![generate_uuid_tool()]
}

fn generate_uuid_tool() -> Value {
    json!({
        "name": GENERATE_UUID_TOOL,
        "description": "Generate a UUID v4",
        "inputSchema": {
            "type": "object",
            "properties": {
                "count": {
                    "type": "number",
                    "description": "Number of UUIDs to generate (default: 1)",
                    "minimum": 1,
                    "maximum": MAX_COUNT,
                },
                "uppercase": {
                    "type": "boolean",
                    "description": "Whether to return UUIDs in uppercase (default: false)",
                },
                "hyphens": {
                    "type": "boolean",
                    "description": "Whether to include hyphens in the UUIDs (default: true)",
                },
            },
            "required": [],
        },
    })
}

/// Generates `params.count` UUIDs in generation order.
pub fn generate_uuids(
    source: &dyn UuidSource,
    params: GenerateParams,
) -> Result<Vec<String>, GenerateError> {
    (0..params.count)
        .map(|_| {
            source
                .next_uuid()
                .map(|uuid| format_uuid(&uuid, params.format))
        })
        .collect()
}

/// A single UUID is rendered as a JSON string, more than one as a JSON array.
pub fn render_uuids(mut uuids: Vec<String>) -> Result<String, GenerateError> {
    let payload = if uuids.len() == 1 {
        Value::String(uuids.remove(0))
    } else {
        Value::from(uuids)
    };

    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn run_generate_uuid(
    source: &dyn UuidSource,
    arguments: &Map<String, Value>,
) -> Result<String, GenerateError> {
    let params = resolve_params(arguments)?;
    render_uuids(generate_uuids(source, params)?)
}

pub fn generate_uuid_result(source: &dyn UuidSource, arguments: &Map<String, Value>) -> CallToolResult {
    match run_generate_uuid(source, arguments) {
        Ok(text) => CallToolResult {
            content: vec![ContentBlock::from(TextContent::new(text, None, None))],
            is_error: None,
            meta: None,
            structured_content: None,
        },
        Err(err) => {
            warn!(tool = GENERATE_UUID_TOOL, error = %err, "tool run failed");
            CallToolResult {
                content: vec![ContentBlock::from(TextContent::new(
                    format!("Error generating UUID: {err}"),
                    None,
                    None,
                ))],
                is_error: Some(true),
                meta: None,
                structured_content: None,
            }
        }
    }
}

pub fn handle_tools_call(state: &AppState, id: Option<Value>, params: Option<Value>) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    match tool_call.name.as_str() {
        GENERATE_UUID_TOOL => {
            let arguments = tool_call.arguments.unwrap_or_default();
            let result = generate_uuid_result(state.uuid_source.as_ref(), &arguments);

            json_rpc_result(
                id,
                serde_json::to_value(result).expect("generate_uuid tool result serialization"),
            )
        }
        _ => app_error_to_json_rpc(id, AppError::tool_not_found(tool_call.name)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::utils::FormatOptions;
    use crate::uuid_source::RandomUuidSource;

    struct FailingSource;

    impl UuidSource for FailingSource {
        fn next_uuid(&self) -> Result<Uuid, GenerateError> {
            Err(GenerateError::Source("entropy source unavailable".to_string()))
        }
    }

    fn params(count: usize) -> GenerateParams {
        GenerateParams {
            count,
            format: FormatOptions::default(),
        }
    }

    #[test]
    fn descriptor_matches_published_schema() {
        let tools = Value::from(build_tools_list());

        assert_eq!(tools.as_array().map(Vec::len), Some(1));
        assert_eq!(tools[0]["name"], "generate_uuid");
        assert_eq!(tools[0]["description"], "Generate a UUID v4");
        let schema = &tools[0]["inputSchema"];
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["count"]["type"], "number");
        assert_eq!(schema["properties"]["count"]["minimum"], 1);
        assert_eq!(schema["properties"]["count"]["maximum"], 100);
        assert_eq!(schema["properties"]["uppercase"]["type"], "boolean");
        assert_eq!(schema["properties"]["hyphens"]["type"], "boolean");
        assert_eq!(schema["required"], json!([]));
    }

    #[test]
    fn single_uuid_renders_as_scalar_string() {
        let text = render_uuids(vec!["abc".to_string()]).expect("render");
        assert_eq!(text, "\"abc\"");
    }

    #[test]
    fn multiple_uuids_render_as_indented_array() {
        let text = render_uuids(vec!["a".to_string(), "b".to_string()]).expect("render");
        assert_eq!(text, "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn generates_requested_count() {
        let uuids = generate_uuids(&RandomUuidSource::new(), params(7)).expect("uuids");
        assert_eq!(uuids.len(), 7);
        for uuid in uuids {
            assert_eq!(uuid.len(), 36);
            assert!(Uuid::parse_str(&uuid).is_ok());
        }
    }

    #[test]
    fn no_collisions_across_large_sample() {
        let source = RandomUuidSource::new();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            for uuid in generate_uuids(&source, params(MAX_COUNT)).expect("uuids") {
                assert!(seen.insert(uuid), "duplicate uuid generated");
            }
        }
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn source_failure_becomes_error_result() {
        let result = generate_uuid_result(&FailingSource, &Map::new());
        let value = serde_json::to_value(result).expect("result serialization");

        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(
            value["content"][0]["text"],
            "Error generating UUID: entropy source unavailable"
        );
    }

    #[test]
    fn invalid_argument_type_becomes_error_result() {
        let arguments = json!({"uppercase": "yes"});
        let result = generate_uuid_result(
            &RandomUuidSource::new(),
            arguments.as_object().expect("object"),
        );

        assert_eq!(result.is_error, Some(true));
        let value = serde_json::to_value(result).expect("result serialization");
        assert_eq!(
            value["content"][0]["text"],
            "Error generating UUID: uppercase must be a boolean"
        );
    }
}
