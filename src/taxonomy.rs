//! The closed registry of node kinds and their declaration rules.
//!
//! Every node in a workflow graph carries a [`NodeConfig`]: a tagged union
//! with one variant per node kind, each holding that kind's attribute
//! payload. The taxonomy answers two questions for the resolver:
//!
//! - which named values does a node declare, given its current attributes?
//! - how do structured attribute values expand into nested dotted paths?
//!
//! Kinds the editor does not know about deserialize to [`NodeConfig::Unknown`]
//! and declare nothing; an out-of-date document never breaks resolution.
//!
//! # Wire format
//!
//! The serialized form matches the workflow document exchanged with the
//! backend service: a `type` tag plus a `data` payload, with the document's
//! original camelCase field names (`resultVar`, `isPrivate`, ...).
//!
//! ```rust
//! use flowcanvas::taxonomy::NodeConfig;
//!
//! let json = r#"{"type": "math", "data": {"op": "add", "resultVar": "sum"}}"#;
//! let config: NodeConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.kind(), "math");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{TransferMode, VariableDeclaration, Visibility};
use crate::utils::json_ext::{flatten_paths, join_path, parse_structured};

/// Type hint attached to declarations whose value shape is not statically
/// known.
pub const TYPE_ANY: &str = "any";
/// Type hint for numeric result variables.
pub const TYPE_NUMBER: &str = "number";
/// Type hint for extracted path parameters.
pub const TYPE_STRING: &str = "string";
/// Type hint for the ambient context containers (`body`, `params`, ...).
pub const TYPE_OBJECT: &str = "object";

/// A parameter accepted by a reusable function workflow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: String,
}

/// One field of a recursive schema (interface definitions and API body
/// validation). Object-typed fields act as containers via `children`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaField>,
}

/// Kind-specific configuration for a workflow graph node.
///
/// This is a closed set: the resolver dispatches on it with an exhaustive
/// match, so adding a kind is a compile-time-visible change everywhere it
/// matters. Unrecognized kinds land in [`NodeConfig::Unknown`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", remote = "Self")]
pub enum NodeConfig {
    /// A named value, optionally private (hidden from the graph-wide pass).
    #[serde(rename = "variable")]
    Variable {
        #[serde(default)]
        name: String,
        #[serde(rename = "type", default)]
        value_type: String,
        #[serde(default)]
        value: Value,
        #[serde(rename = "isPrivate", default)]
        is_private: bool,
    },

    /// Arithmetic over two operands, storing into `result_var`.
    #[serde(rename = "math")]
    Math {
        #[serde(rename = "valA", default)]
        val_a: String,
        #[serde(rename = "valB", default)]
        val_b: String,
        #[serde(default)]
        op: String,
        #[serde(rename = "resultVar", default)]
        result_var: String,
    },

    /// Aggregate statistics over a collection, storing into `result_var`.
    #[serde(rename = "data_op")]
    DataStats {
        #[serde(default)]
        collection: String,
        #[serde(default)]
        op: String,
        #[serde(rename = "resultVar", default)]
        result_var: String,
    },

    /// A database query whose rows land in `result_var`.
    #[serde(rename = "database")]
    Database {
        #[serde(default)]
        query: String,
        #[serde(rename = "queryType", default)]
        query_type: String,
        #[serde(rename = "resultVar", default)]
        result_var: String,
    },

    /// An inline code snippet whose return value lands in `result_var`.
    #[serde(rename = "code")]
    CodeExec {
        #[serde(default)]
        language: String,
        #[serde(default)]
        code: String,
        #[serde(rename = "resultVar", default)]
        result_var: String,
    },

    /// A loop over a collection binding each item to `variable`.
    ///
    /// The iteration variable is conceptually scoped to the loop's `do`
    /// branch, but the resolver deliberately does not special-case it; see
    /// the resolver docs.
    #[serde(rename = "loop")]
    LoopIterator {
        #[serde(default)]
        collection: String,
        #[serde(default)]
        variable: String,
    },

    /// Entry point of a reusable function workflow; declares one value per
    /// parameter.
    #[serde(rename = "function_start")]
    FunctionStart {
        #[serde(rename = "functionName", default)]
        function_name: String,
        #[serde(default)]
        parameters: Vec<FunctionParameter>,
    },

    /// A reusable schema whose fields are exposed under a transfer-mode
    /// prefix when attached to an API trigger.
    #[serde(rename = "interface")]
    InterfaceSchema {
        #[serde(rename = "transferMode", default)]
        transfer_mode: TransferMode,
        #[serde(default)]
        fields: Vec<SchemaField>,
    },

    /// The HTTP trigger: method, path (with `:param` tokens), and body
    /// validation fields.
    #[serde(rename = "api")]
    ApiEndpoint {
        #[serde(default = "default_method")]
        method: String,
        #[serde(default)]
        path: String,
        #[serde(rename = "validationFields", default)]
        validation_fields: Vec<SchemaField>,
    },

    /// A call into another workflow; its result is always surfaced as
    /// `func_result`.
    #[serde(rename = "subworkflow")]
    SubWorkflowCall {
        #[serde(rename = "functionId", default)]
        function_id: String,
        #[serde(rename = "paramMappings", default)]
        param_mappings: Value,
    },

    /// A branch with `true`/`false` exits. Declares nothing.
    #[serde(rename = "logic")]
    Condition {
        #[serde(default)]
        condition: String,
    },

    /// Terminal HTTP response. Declares nothing.
    #[serde(rename = "response")]
    Response {
        #[serde(rename = "statusCode", default)]
        status_code: Value,
        #[serde(rename = "responseType", default)]
        response_type: String,
        #[serde(default)]
        body: String,
    },

    /// Terminal return from a function workflow. Declares nothing.
    #[serde(rename = "function_return")]
    FunctionReturn {
        #[serde(rename = "returnType", default)]
        return_type: String,
        #[serde(rename = "returnValue", default)]
        return_value: String,
    },

    /// Filesystem side effects. Declares nothing.
    #[serde(rename = "file")]
    FileSystem {
        #[serde(default)]
        operation: String,
        #[serde(default)]
        path: String,
        #[serde(default)]
        content: String,
        #[serde(rename = "resultVar", default)]
        result_var: String,
    },

    /// Any kind this build does not recognize. Declares nothing.
    #[serde(rename = "unknown")]
    Unknown,
}

fn default_method() -> String {
    "GET".to_string()
}

/// Every tag the derived wire form can dispatch on.
const WIRE_TAGS: [&str; 14] = [
    "variable",
    "math",
    "data_op",
    "database",
    "code",
    "loop",
    "function_start",
    "interface",
    "api",
    "subworkflow",
    "logic",
    "response",
    "function_return",
    "file",
];

// The derived form handles every known kind. An unknown tag arrives with an
// arbitrary `data` payload that a `#[serde(other)]` unit variant would
// reject, so deserialization inspects the tag before delegating.
impl Serialize for NodeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Self::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for NodeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = Value::deserialize(deserializer)?;
        let tag = wire.get("type").and_then(Value::as_str).unwrap_or_default();
        if WIRE_TAGS.contains(&tag) {
            Self::deserialize(wire).map_err(serde::de::Error::custom)
        } else {
            Ok(Self::Unknown)
        }
    }
}

impl NodeConfig {
    /// The wire tag for this kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Variable { .. } => "variable",
            Self::Math { .. } => "math",
            Self::DataStats { .. } => "data_op",
            Self::Database { .. } => "database",
            Self::CodeExec { .. } => "code",
            Self::LoopIterator { .. } => "loop",
            Self::FunctionStart { .. } => "function_start",
            Self::InterfaceSchema { .. } => "interface",
            Self::ApiEndpoint { .. } => "api",
            Self::SubWorkflowCall { .. } => "subworkflow",
            Self::Condition { .. } => "logic",
            Self::Response { .. } => "response",
            Self::FunctionReturn { .. } => "function_return",
            Self::FileSystem { .. } => "file",
            Self::Unknown => "unknown",
        }
    }

    /// Default attribute payload for a kind tag, used when the editor drops
    /// a new node onto the canvas. Unrecognized tags produce
    /// [`NodeConfig::Unknown`].
    #[must_use]
    pub fn default_for_kind(kind: &str) -> Self {
        match kind {
            "variable" => Self::Variable {
                name: String::new(),
                value_type: TYPE_ANY.to_string(),
                value: Value::Null,
                is_private: false,
            },
            "math" => Self::Math {
                val_a: String::new(),
                val_b: String::new(),
                op: "add".to_string(),
                result_var: String::new(),
            },
            "data_op" => Self::DataStats {
                collection: String::new(),
                op: "sum".to_string(),
                result_var: String::new(),
            },
            "database" => Self::Database {
                query: String::new(),
                query_type: "select".to_string(),
                result_var: String::new(),
            },
            "code" => Self::CodeExec {
                language: "javascript".to_string(),
                code: String::new(),
                result_var: String::new(),
            },
            "loop" => Self::LoopIterator {
                collection: String::new(),
                variable: "item".to_string(),
            },
            "function_start" => Self::FunctionStart {
                function_name: String::new(),
                parameters: Vec::new(),
            },
            "interface" => Self::InterfaceSchema {
                transfer_mode: TransferMode::Body,
                fields: Vec::new(),
            },
            "api" => Self::ApiEndpoint {
                method: default_method(),
                path: "/".to_string(),
                validation_fields: Vec::new(),
            },
            "subworkflow" => Self::SubWorkflowCall {
                function_id: String::new(),
                param_mappings: Value::Null,
            },
            "logic" => Self::Condition {
                condition: String::new(),
            },
            "response" => Self::Response {
                status_code: Value::from(200),
                response_type: "json".to_string(),
                body: String::new(),
            },
            "function_return" => Self::FunctionReturn {
                return_type: TYPE_ANY.to_string(),
                return_value: String::new(),
            },
            "file" => Self::FileSystem {
                operation: "read".to_string(),
                path: String::new(),
                content: String::new(),
                result_var: String::new(),
            },
            _ => Self::Unknown,
        }
    }

    /// True for the kinds whose declarations are exposed graph-wide without
    /// any reachability or privacy requirement.
    ///
    /// This set (database, code, subworkflow, function_start) is broader
    /// than the opt-in model used for variables. The asymmetry is a
    /// compatibility contract with existing workflow documents; do not
    /// normalize it.
    #[must_use]
    pub fn is_globally_exposed(&self) -> bool {
        matches!(
            self,
            Self::Database { .. }
                | Self::CodeExec { .. }
                | Self::SubWorkflowCall { .. }
                | Self::FunctionStart { .. }
        )
    }

    /// Emits every declaration this node contributes, given its current
    /// attributes, into `out`.
    ///
    /// Nested expansion happens here: structured variable values and schema
    /// fields expand into dotted paths at the point of emission. Attribute
    /// content that fails to parse degrades to "no children"; emission is
    /// total over arbitrary payloads.
    pub fn declare_into(
        &self,
        origin: &str,
        visibility: Visibility,
        out: &mut Vec<VariableDeclaration>,
    ) {
        match self {
            Self::Variable {
                name,
                value_type,
                value,
                ..
            } => declare_variable(name, value_type, value, origin, visibility, out),

            Self::Math { result_var, .. } | Self::DataStats { result_var, .. } => {
                declare_named(result_var, TYPE_NUMBER, origin, visibility, out);
            }

            Self::Database { result_var, .. }
            | Self::CodeExec { result_var, .. } => {
                declare_named(result_var, TYPE_ANY, origin, visibility, out);
            }

            Self::LoopIterator { variable, .. } => {
                declare_named(variable, TYPE_ANY, origin, visibility, out);
            }

            Self::FunctionStart { parameters, .. } => {
                for param in parameters {
                    let value_type = if param.value_type.trim().is_empty() {
                        TYPE_ANY
                    } else {
                        param.value_type.as_str()
                    };
                    declare_named(&param.name, value_type, origin, visibility, out);
                }
            }

            Self::InterfaceSchema {
                transfer_mode,
                fields,
            } => {
                for path in flatten_fields(fields, "") {
                    out.push(VariableDeclaration::new(
                        join_path(transfer_mode.prefix(), &path),
                        TYPE_ANY,
                        origin,
                        visibility,
                    ));
                }
            }

            Self::ApiEndpoint {
                path,
                validation_fields,
                ..
            } => {
                for token in path_params(path) {
                    out.push(VariableDeclaration::new(
                        format!("params.{token}"),
                        TYPE_STRING,
                        origin,
                        visibility,
                    ));
                }
                for field_path in flatten_fields(validation_fields, "") {
                    out.push(VariableDeclaration::new(
                        format!("body.{field_path}"),
                        TYPE_ANY,
                        origin,
                        visibility,
                    ));
                }
            }

            Self::SubWorkflowCall { .. } => {
                out.push(VariableDeclaration::new(
                    "func_result",
                    TYPE_ANY,
                    origin,
                    visibility,
                ));
            }

            Self::Condition { .. }
            | Self::Response { .. }
            | Self::FunctionReturn { .. }
            | Self::FileSystem { .. }
            | Self::Unknown => {}
        }
    }
}

/// Emits a single declaration, skipping blank names (the editor creates
/// nodes before the user has typed one).
fn declare_named(
    name: &str,
    value_type: &str,
    origin: &str,
    visibility: Visibility,
    out: &mut Vec<VariableDeclaration>,
) {
    if name.trim().is_empty() {
        return;
    }
    out.push(VariableDeclaration::new(name, value_type, origin, visibility));
}

/// Emits a variable declaration plus its nested dotted-path expansion when
/// the variable holds structured data.
pub(crate) fn declare_variable(
    name: &str,
    value_type: &str,
    value: &Value,
    origin: &str,
    visibility: Visibility,
    out: &mut Vec<VariableDeclaration>,
) {
    if name.trim().is_empty() {
        return;
    }
    let declared_type = if value_type.trim().is_empty() {
        TYPE_ANY
    } else {
        value_type
    };
    out.push(VariableDeclaration::new(name, declared_type, origin, visibility));

    if matches!(declared_type, "json" | "object" | "array") {
        if let Some(parsed) = parse_structured(value) {
            for path in flatten_paths(&parsed, name) {
                out.push(VariableDeclaration::new(path, TYPE_ANY, origin, visibility));
            }
        }
    }
}

/// Flattens a recursive schema into dotted paths, emitting intermediate
/// object fields alongside their leaves.
fn flatten_fields(fields: &[SchemaField], prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    collect_fields(fields, prefix, &mut paths);
    paths
}

fn collect_fields(fields: &[SchemaField], prefix: &str, out: &mut Vec<String>) {
    for field in fields {
        if field.name.trim().is_empty() {
            continue;
        }
        let path = join_path(prefix, &field.name);
        out.push(path.clone());
        if !field.children.is_empty() {
            collect_fields(&field.children, &path, out);
        }
    }
}

/// Extracts `:name` tokens from a route path.
///
/// A token is `:` followed by one or more ASCII alphanumeric or underscore
/// characters; anything else terminates it. `/users/:id/orders/:orderId`
/// yields `["id", "orderId"]`.
#[must_use]
pub fn path_params(path: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = path;
    while let Some(colon) = rest.find(':') {
        let tail = &rest[colon + 1..];
        let end = tail
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(tail.len());
        if end > 0 {
            params.push(tail[..end].to_string());
        }
        rest = &tail[end..];
    }
    params
}
