//! Schema document → [`CompiledSchema`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use sheet_core::{ErrorSeverity, SheetError};

use super::{Bounds, CompiledSchema, NodeKind, SchemaNode};

/// Errors raised while loading or compiling a schema.
///
/// Paths are pointers into the schema document, rooted at `#`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to load schema {origin}: {message}")]
    Load { origin: String, message: String },

    #[error("schema node at {path} must be a mapping")]
    NotAMapping { path: String },

    #[error("unknown type '{name}' at {path}")]
    UnknownType { path: String, name: String },

    #[error("keyword '{keyword}' at {path} must be {expected}")]
    InvalidKeyword {
        path: String,
        keyword: &'static str,
        expected: &'static str,
    },

    #[error("unresolved reference '{reference}' at {path}")]
    UnresolvedReference { path: String, reference: String },

    #[error("reference '{reference}' at {path} refers back to itself")]
    ReferenceCycle { path: String, reference: String },

    #[error("required property '{name}' at {path} is not declared in properties")]
    UndeclaredRequired { path: String, name: String },

    #[error("keyword '{keyword}' at {path} is not supported for {node_type} schemas")]
    UnsupportedKeyword {
        path: String,
        keyword: String,
        node_type: &'static str,
    },
}

impl SheetError for SchemaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "SCHEMA_COMPILE"
    }
}

/// Annotations accepted on any node; they never affect validation.
const ANNOTATIONS: &[&str] = &[
    "$id",
    "$schema",
    "$comment",
    "title",
    "description",
    "default",
    "examples",
];

/// Keywords only meaningful on the document root.
const ROOT_KEYWORDS: &[&str] = &["$defs", "definitions"];

/// Keywords understood on every typed or untyped node.
const COMMON_KEYWORDS: &[&str] = &["type", "enum"];

const OBJECT_KEYWORDS: &[&str] = &["properties", "required", "additionalProperties"];
const ARRAY_KEYWORDS: &[&str] = &["items"];
const STRING_KEYWORDS: &[&str] = &["minLength"];
const NUMERIC_KEYWORDS: &[&str] = &["minimum", "maximum"];
const REFERENCE_KEYWORDS: &[&str] = &["$ref"];
const NO_KEYWORDS: &[&str] = &[];

pub(super) fn compile_document(document: &Value) -> Result<CompiledSchema, SchemaError> {
    let root = as_mapping(document, "#")?;

    let id = match root.get("$id") {
        None => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(_) => return Err(invalid("#", "$id", "a string")),
    };

    let defs = match root.get("$defs").or_else(|| root.get("definitions")) {
        None => None,
        Some(Value::Object(defs)) => Some(defs),
        Some(_) => return Err(invalid("#", "$defs", "a mapping")),
    };

    let mut compiler = Compiler {
        defs,
        resolving: Vec::new(),
    };
    let root = compiler.node(document, "#")?;

    // Unreferenced definitions are compiled too.
    if let Some(defs) = defs {
        for (name, definition) in defs {
            compiler.enter(name, |compiler| {
                compiler.node(definition, &format!("#/$defs/{name}"))
            })?;
        }
    }

    Ok(CompiledSchema { id, root })
}

struct Compiler<'a> {
    defs: Option<&'a Map<String, Value>>,
    /// Definitions currently being expanded, innermost last.
    resolving: Vec<String>,
}

impl<'a> Compiler<'a> {
    fn node(&mut self, schema: &Value, path: &str) -> Result<SchemaNode, SchemaError> {
        let map = as_mapping(schema, path)?;

        if let Some(reference) = map.get("$ref") {
            supported_keywords(map, path, "reference", &[REFERENCE_KEYWORDS])?;
            return self.reference(reference, path);
        }

        let allowed = match map.get("enum") {
            None => None,
            Some(Value::Array(values)) => Some(values.clone()),
            Some(_) => return Err(invalid(path, "enum", "a sequence")),
        };

        let type_name = match map.get("type") {
            None => None,
            Some(Value::String(name)) => Some(name.as_str()),
            Some(_) => return Err(invalid(path, "type", "a string")),
        };

        let untyped_object = OBJECT_KEYWORDS.iter().any(|keyword| map.contains_key(*keyword));
        let (node_type, keywords) = match type_name {
            None if untyped_object => ("object", OBJECT_KEYWORDS),
            None => ("untyped", NO_KEYWORDS),
            Some("object") => ("object", OBJECT_KEYWORDS),
            Some("array") => ("array", ARRAY_KEYWORDS),
            Some("string") => ("string", STRING_KEYWORDS),
            Some("integer") => ("integer", NUMERIC_KEYWORDS),
            Some("number") => ("number", NUMERIC_KEYWORDS),
            Some("boolean") => ("boolean", NO_KEYWORDS),
            Some("null") => ("null", NO_KEYWORDS),
            Some(other) => {
                return Err(SchemaError::UnknownType {
                    path: path.to_string(),
                    name: other.to_string(),
                });
            }
        };
        supported_keywords(map, path, node_type, &[COMMON_KEYWORDS, keywords])?;

        let kind = match node_type {
            "object" => self.object(map, path)?,
            "array" => {
                let items = match map.get("items") {
                    None => None,
                    Some(items) => Some(Box::new(self.node(items, &format!("{path}/items"))?)),
                };
                NodeKind::Array { items }
            }
            "string" => NodeKind::String {
                min_length: min_length(map, path)?,
            },
            "integer" => NodeKind::Integer(bounds(map, path)?),
            "number" => NodeKind::Number(bounds(map, path)?),
            "boolean" => NodeKind::Boolean,
            "null" => NodeKind::Null,
            _ => NodeKind::Any,
        };

        Ok(SchemaNode { kind, allowed })
    }

    fn object(&mut self, map: &Map<String, Value>, path: &str) -> Result<NodeKind, SchemaError> {
        let mut properties = BTreeMap::new();
        match map.get("properties") {
            None => {}
            Some(Value::Object(declared)) => {
                for (name, property) in declared {
                    let node = self.node(property, &format!("{path}/properties/{name}"))?;
                    properties.insert(name.clone(), node);
                }
            }
            Some(_) => return Err(invalid(path, "properties", "a mapping")),
        }

        let required = match map.get("required") {
            None => Vec::new(),
            Some(Value::Array(names)) => names
                .iter()
                .map(|name| {
                    name.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| invalid(path, "required", "a sequence of strings"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(invalid(path, "required", "a sequence of strings")),
        };
        if let Some(name) = required.iter().find(|name| !properties.contains_key(*name)) {
            return Err(SchemaError::UndeclaredRequired {
                path: path.to_string(),
                name: name.clone(),
            });
        }

        let additional = match map.get("additionalProperties") {
            None => true,
            Some(Value::Bool(allowed)) => *allowed,
            Some(_) => return Err(invalid(path, "additionalProperties", "a boolean")),
        };

        Ok(NodeKind::Object {
            properties,
            required,
            additional,
        })
    }

    fn reference(&mut self, reference: &Value, path: &str) -> Result<SchemaNode, SchemaError> {
        let reference = reference
            .as_str()
            .ok_or_else(|| invalid(path, "$ref", "a string"))?;
        let unresolved = || SchemaError::UnresolvedReference {
            path: path.to_string(),
            reference: reference.to_string(),
        };

        let name = reference
            .strip_prefix("#/$defs/")
            .or_else(|| reference.strip_prefix("#/definitions/"))
            .ok_or_else(unresolved)?;
        let target = self
            .defs
            .and_then(|defs| defs.get(name))
            .ok_or_else(unresolved)?;

        if self.resolving.iter().any(|active| active == name) {
            return Err(SchemaError::ReferenceCycle {
                path: path.to_string(),
                reference: reference.to_string(),
            });
        }

        self.enter(name, |compiler| {
            compiler.node(target, &format!("#/$defs/{name}"))
        })
    }

    fn enter<T>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> Result<T, SchemaError>,
    ) -> Result<T, SchemaError> {
        self.resolving.push(name.to_string());
        let result = f(self);
        self.resolving.pop();
        result
    }
}

fn as_mapping<'v>(schema: &'v Value, path: &str) -> Result<&'v Map<String, Value>, SchemaError> {
    schema.as_object().ok_or_else(|| SchemaError::NotAMapping {
        path: path.to_string(),
    })
}

/// Reject any keyword outside `allowed`, the annotations and (on the root) `$defs`.
fn supported_keywords(
    map: &Map<String, Value>,
    path: &str,
    node_type: &'static str,
    allowed: &[&[&str]],
) -> Result<(), SchemaError> {
    let root: &[&str] = if path == "#" { ROOT_KEYWORDS } else { &[] };
    let unsupported = map.keys().find(|keyword| {
        !allowed
            .iter()
            .copied()
            .chain([ANNOTATIONS, root])
            .any(|list| list.contains(&keyword.as_str()))
    });

    match unsupported {
        Some(keyword) => Err(SchemaError::UnsupportedKeyword {
            path: path.to_string(),
            keyword: keyword.clone(),
            node_type,
        }),
        None => Ok(()),
    }
}

fn invalid(path: &str, keyword: &'static str, expected: &'static str) -> SchemaError {
    SchemaError::InvalidKeyword {
        path: path.to_string(),
        keyword,
        expected,
    }
}

fn bounds(map: &Map<String, Value>, path: &str) -> Result<Bounds, SchemaError> {
    let number = |keyword: &'static str| -> Result<Option<f64>, SchemaError> {
        map.get(keyword)
            .map(|value| value.as_f64().ok_or_else(|| invalid(path, keyword, "a number")))
            .transpose()
    };

    let bounds = Bounds {
        minimum: number("minimum")?,
        maximum: number("maximum")?,
    };
    match (bounds.minimum, bounds.maximum) {
        (Some(minimum), Some(maximum)) if maximum < minimum => {
            Err(invalid(path, "maximum", "at least the minimum"))
        }
        _ => Ok(bounds),
    }
}

fn min_length(map: &Map<String, Value>, path: &str) -> Result<Option<usize>, SchemaError> {
    map.get("minLength")
        .map(|value| {
            value
                .as_u64()
                .and_then(|length| usize::try_from(length).ok())
                .ok_or_else(|| invalid(path, "minLength", "a non-negative integer"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_local_references() {
        let schema = CompiledSchema::compile(&json!({
            "$id": "test:refs",
            "type": "object",
            "properties": { "score": { "$ref": "#/$defs/score" } },
            "$defs": { "score": { "type": "integer", "minimum": 0, "maximum": 30 } }
        }))
        .unwrap();

        assert_eq!(schema.id(), Some("test:refs"));
        let NodeKind::Object { properties, .. } = &schema.root.kind else {
            panic!("root should compile to an object");
        };
        assert_eq!(
            properties["score"].kind,
            NodeKind::Integer(Bounds {
                minimum: Some(0.0),
                maximum: Some(30.0),
            })
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = CompiledSchema::compile(&json!({
            "type": "object",
            "properties": { "level": { "type": "int" } }
        }))
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownType {
                path: "#/properties/level".into(),
                name: "int".into(),
            }
        );
    }

    #[test]
    fn rejects_missing_and_cyclic_references() {
        let missing = CompiledSchema::compile(&json!({
            "properties": { "a": { "$ref": "#/$defs/nowhere" } }
        }))
        .unwrap_err();
        assert!(matches!(missing, SchemaError::UnresolvedReference { .. }));

        let cyclic = CompiledSchema::compile(&json!({
            "properties": { "a": { "$ref": "#/$defs/loop" } },
            "$defs": { "loop": { "properties": { "next": { "$ref": "#/$defs/loop" } } } }
        }))
        .unwrap_err();
        assert!(matches!(cyclic, SchemaError::ReferenceCycle { .. }));
    }

    #[test]
    fn rejects_undeclared_required_property() {
        let err = CompiledSchema::compile(&json!({
            "type": "object",
            "required": ["basics"],
            "properties": {}
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "required property 'basics' at # is not declared in properties"
        );
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn rejects_keywords_outside_the_subset() {
        let err = CompiledSchema::compile(&json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "maxLength": 3, "pattern": "^[a-z]+$" }
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedKeyword { ref path, node_type: "string", .. }
                if path == "#/properties/name"
        ));

        for keyword in ["oneOf", "not", "const", "exclusiveMaximum"] {
            let mut schema = json!({ "type": "integer" });
            schema[keyword] = json!(1);
            let err = CompiledSchema::compile(&schema).unwrap_err();
            assert_eq!(
                err,
                SchemaError::UnsupportedKeyword {
                    path: "#".into(),
                    keyword: keyword.into(),
                    node_type: "integer",
                },
                "{keyword}"
            );
        }
    }

    #[test]
    fn bounds_require_a_numeric_type() {
        let err = CompiledSchema::compile(&json!({
            "properties": {
                "score": { "maximum": 10 }
            }
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "keyword 'maximum' at #/properties/score is not supported for untyped schemas"
        );

        assert!(matches!(
            CompiledSchema::compile(&json!({ "type": "string", "minimum": 0 })),
            Err(SchemaError::UnsupportedKeyword { node_type: "string", .. })
        ));
    }

    #[test]
    fn references_take_no_sibling_keywords() {
        let err = CompiledSchema::compile(&json!({
            "properties": { "a": { "$ref": "#/$defs/a", "minimum": 1 } },
            "$defs": { "a": { "type": "integer" } }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedKeyword { node_type: "reference", .. }
        ));
    }

    #[test]
    fn definitions_only_on_the_root() {
        let err = CompiledSchema::compile(&json!({
            "properties": { "a": { "type": "object", "$defs": {} } }
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedKeyword { .. }));
    }

    #[test]
    fn untyped_enum_is_enforced() {
        let schema = CompiledSchema::compile(&json!({
            "properties": { "tier": { "enum": [1, 2, "gold"] } }
        }))
        .unwrap();
        assert!(schema.validate(&json!({ "tier": "gold" })).is_ok());
        let report = schema.validate(&json!({ "tier": 3 })).unwrap_err();
        assert!(report.contains_path("/tier"));
    }

    #[test]
    fn rejects_malformed_keywords() {
        assert!(matches!(
            CompiledSchema::compile(&json!(["not", "a", "mapping"])),
            Err(SchemaError::NotAMapping { .. })
        ));
        assert!(matches!(
            CompiledSchema::compile(&json!({ "type": "integer", "minimum": "low" })),
            Err(SchemaError::InvalidKeyword {
                keyword: "minimum",
                ..
            })
        ));
        assert!(matches!(
            CompiledSchema::compile(&json!({ "type": "integer", "minimum": 5, "maximum": 1 })),
            Err(SchemaError::InvalidKeyword {
                keyword: "maximum",
                ..
            })
        ));
    }
}
