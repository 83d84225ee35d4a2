mod common;

use common::*;
use flowcanvas::taxonomy::{
    FunctionParameter, NodeConfig, SchemaField, TYPE_ANY, TYPE_NUMBER, TYPE_STRING, path_params,
};
use flowcanvas::types::{TransferMode, Visibility};
use serde_json::json;

fn declarations(config: &NodeConfig) -> Vec<flowcanvas::types::VariableDeclaration> {
    let mut out = Vec::new();
    config.declare_into("origin", Visibility::Local, &mut out);
    out
}

#[test]
fn math_and_stats_declare_numeric_results() {
    let math = declarations(&math("m", "sum").config);
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].name, "sum");
    assert_eq!(math[0].value_type, TYPE_NUMBER);

    let stats = declarations(&NodeConfig::DataStats {
        collection: "rows".to_string(),
        op: "avg".to_string(),
        result_var: "mean".to_string(),
    });
    assert_eq!(stats[0].value_type, TYPE_NUMBER);
}

#[test]
fn blank_names_declare_nothing() {
    assert!(declarations(&math("m", "").config).is_empty());
    assert!(declarations(&math("m", "   ").config).is_empty());
    assert!(declarations(&variable("v", "", false).config).is_empty());
}

#[test]
fn database_and_code_declare_any_results() {
    let db = declarations(&database("d", "rows").config);
    assert_eq!(db[0].name, "rows");
    assert_eq!(db[0].value_type, TYPE_ANY);

    let code = declarations(&NodeConfig::CodeExec {
        language: "javascript".to_string(),
        code: "return 1".to_string(),
        result_var: "out".to_string(),
    });
    assert_eq!(code[0].value_type, TYPE_ANY);
}

#[test]
fn json_variable_expands_nested_paths() {
    let config = json_variable("v", "cfg", json!({"retries": {"max": 3}, "tags": ["a"]})).config;
    let scope = declarations(&config);
    let got = names(&scope);
    assert_eq!(
        got,
        vec!["cfg", "cfg.retries", "cfg.retries.max", "cfg.tags", "cfg.tags.0"]
    );
}

#[test]
fn string_payload_is_parsed_as_json() {
    let config = NodeConfig::Variable {
        name: "cfg".to_string(),
        value_type: "json".to_string(),
        value: json!(r#"{"a": {"b": 1}}"#),
        is_private: false,
    };
    let scope = declarations(&config);
    assert_eq!(names(&scope), vec!["cfg", "cfg.a", "cfg.a.b"]);
}

#[test]
fn malformed_payload_degrades_to_no_children() {
    let config = NodeConfig::Variable {
        name: "cfg".to_string(),
        value_type: "json".to_string(),
        value: json!("definitely { not json"),
        is_private: false,
    };
    let scope = declarations(&config);
    assert_eq!(names(&scope), vec!["cfg"]);
}

#[test]
fn scalar_variable_does_not_expand() {
    let config = NodeConfig::Variable {
        name: "count".to_string(),
        value_type: "number".to_string(),
        value: json!({"looks": "structured"}),
        is_private: false,
    };
    // Declared type gates expansion, not the payload shape.
    assert_eq!(names(&declarations(&config)), vec!["count"]);
}

#[test]
fn function_start_declares_one_per_parameter() {
    let config = NodeConfig::FunctionStart {
        function_name: "calc".to_string(),
        parameters: vec![
            FunctionParameter {
                name: "rate".to_string(),
                value_type: "number".to_string(),
            },
            FunctionParameter {
                name: "input".to_string(),
                value_type: String::new(),
            },
        ],
    };
    let scope = declarations(&config);
    assert_eq!(find(&scope, "rate").value_type, "number");
    assert_eq!(find(&scope, "input").value_type, TYPE_ANY);
}

#[test]
fn interface_fields_are_prefixed_by_transfer_mode() {
    let config = NodeConfig::InterfaceSchema {
        transfer_mode: TransferMode::Query,
        fields: vec![SchemaField {
            name: "filter".to_string(),
            value_type: "object".to_string(),
            children: vec![SchemaField {
                name: "status".to_string(),
                value_type: "string".to_string(),
                children: Vec::new(),
            }],
        }],
    };
    let scope = declarations(&config);
    assert_eq!(names(&scope), vec!["query.filter", "query.filter.status"]);
}

#[test]
fn api_declares_path_params_and_body_fields() {
    let config = NodeConfig::ApiEndpoint {
        method: "POST".to_string(),
        path: "/users/:id/orders/:orderId".to_string(),
        validation_fields: vec![SchemaField {
            name: "amount".to_string(),
            value_type: "number".to_string(),
            children: Vec::new(),
        }],
    };
    let scope = declarations(&config);
    assert_eq!(find(&scope, "params.id").value_type, TYPE_STRING);
    assert_eq!(find(&scope, "params.orderId").value_type, TYPE_STRING);
    assert_eq!(find(&scope, "body.amount").value_type, TYPE_ANY);
}

#[test]
fn path_params_tokenizes_on_non_word_characters() {
    assert_eq!(path_params("/users/:id/orders/:orderId"), vec!["id", "orderId"]);
    assert_eq!(path_params("/a/:x_1-suffix"), vec!["x_1"]);
    assert!(path_params("/plain/route").is_empty());
    assert!(path_params("/trailing/:").is_empty());
}

#[test]
fn subworkflow_always_declares_func_result() {
    let scope = declarations(&NodeConfig::SubWorkflowCall {
        function_id: "wf-2".to_string(),
        param_mappings: json!({}),
    });
    assert_eq!(names(&scope), vec!["func_result"]);
}

#[test]
fn silent_kinds_declare_nothing() {
    for kind in ["logic", "response", "function_return", "file"] {
        let scope = declarations(&NodeConfig::default_for_kind(kind));
        assert!(scope.is_empty(), "kind '{kind}' should declare nothing");
    }
}

#[test]
fn unknown_kind_round_trips_from_wire() {
    let config: NodeConfig =
        serde_json::from_str(r#"{"type": "webhook_v2", "data": {"url": "x"}}"#).unwrap();
    assert_eq!(config, NodeConfig::Unknown);
    assert!(declarations(&config).is_empty());
    assert!(!config.is_globally_exposed());

    let wire = serde_json::to_value(&config).unwrap();
    assert_eq!(wire["type"], "unknown");
    let back: NodeConfig = serde_json::from_value(wire).unwrap();
    assert_eq!(back, NodeConfig::Unknown);
}

#[test]
fn unknown_kind_tolerates_any_payload_shape() {
    for raw in [
        r#"{"type": "webhook_v2"}"#,
        r#"{"type": "webhook_v2", "data": null}"#,
        r#"{"type": "webhook_v2", "data": [1, 2]}"#,
        r#"{"type": "webhook_v2", "data": {"nested": {"deep": true}}}"#,
    ] {
        let config: NodeConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config, NodeConfig::Unknown, "payload: {raw}");
    }
}

#[test]
fn wire_form_uses_document_field_names() {
    let config: NodeConfig = serde_json::from_str(
        r#"{"type": "math", "data": {"valA": "a", "valB": "b", "op": "mul", "resultVar": "p"}}"#,
    )
    .unwrap();
    match &config {
        NodeConfig::Math { result_var, op, .. } => {
            assert_eq!(result_var, "p");
            assert_eq!(op, "mul");
        }
        other => panic!("unexpected config: {other:?}"),
    }

    let back = serde_json::to_value(&config).unwrap();
    assert_eq!(back["type"], "math");
    assert_eq!(back["data"]["resultVar"], "p");
}

#[test]
fn missing_payload_fields_take_defaults() {
    let config: NodeConfig =
        serde_json::from_str(r#"{"type": "api", "data": {"path": "/ping"}}"#).unwrap();
    match &config {
        NodeConfig::ApiEndpoint { method, path, .. } => {
            assert_eq!(method, "GET");
            assert_eq!(path, "/ping");
        }
        other => panic!("unexpected config: {other:?}"),
    }
}

#[test]
fn global_exposure_covers_exactly_four_kinds() {
    let exposed = ["database", "code", "subworkflow", "function_start"];
    for kind in [
        "variable", "math", "data_op", "database", "code", "loop", "function_start", "interface",
        "api", "subworkflow", "logic", "response", "function_return", "file",
    ] {
        let config = NodeConfig::default_for_kind(kind);
        assert_eq!(
            config.is_globally_exposed(),
            exposed.contains(&kind),
            "wrong exposure for '{kind}'"
        );
    }
}
