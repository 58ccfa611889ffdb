//! Structural schemas for character documents.
//!
//! Schemas are written in a subset of JSON Schema (YAML or JSON syntax):
//!
//! | Keyword | Meaning |
//! |---------|---------|
//! | `type` | `object`, `array`, `string`, `integer`, `number`, `boolean`, `null` |
//! | `properties`, `required`, `additionalProperties` | object shape |
//! | `items` | element schema of an array |
//! | `minimum`, `maximum` | inclusive numeric bounds |
//! | `minLength` | minimum string length in characters |
//! | `enum` | closed set of allowed values |
//! | `$defs`, `$ref` | local definitions, referenced as `#/$defs/<name>` |
//!
//! `$id`, `$schema`, `$comment`, `title`, `description`, `default` and
//! `examples` are accepted as annotations. Any other keyword, or a keyword
//! placed on a node whose type does not support it, fails compilation.
//!
//! A schema is compiled once into a [`CompiledSchema`]; references are
//! resolved at that point, so validation never looks anything up.

mod compile;
mod validate;

pub use compile::SchemaError;
pub use validate::{Violation, ViolationKind, ViolationReport};

use std::collections::BTreeMap;

use serde_json::Value;

/// Identifier of the schema bundled with this crate.
pub const BUNDLED_SCHEMA_ID: &str = "ledgr:character/v1";

/// Source text of the bundled schema (YAML).
pub const BUNDLED_SCHEMA: &str = include_str!("../../assets/character_v1.schema.yaml");

/// A schema with all references resolved, ready to validate instances.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledSchema {
    id: Option<String>,
    root: SchemaNode,
}

impl CompiledSchema {
    /// Compile a schema document that has already been parsed into a tree.
    pub fn compile(document: &Value) -> Result<Self, SchemaError> {
        compile::compile_document(document)
    }

    /// The schema's `$id`, if declared.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check an instance, collecting every violation.
    pub fn validate(&self, instance: &Value) -> Result<(), ViolationReport> {
        let mut violations = Vec::new();
        validate::check(&self.root, instance, "", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ViolationReport::new(violations))
        }
    }
}

/// One compiled schema node.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SchemaNode {
    pub(crate) kind: NodeKind,
    /// Values allowed by `enum`, if declared.
    pub(crate) allowed: Option<Vec<Value>>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NodeKind {
    Any,
    Object {
        properties: BTreeMap<String, SchemaNode>,
        required: Vec<String>,
        additional: bool,
    },
    Array {
        items: Option<Box<SchemaNode>>,
    },
    String {
        min_length: Option<usize>,
    },
    Integer(Bounds),
    Number(Bounds),
    Boolean,
    Null,
}

/// Inclusive numeric bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
}

impl NodeKind {
    pub(crate) const fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::String { .. } => "string",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

// A compiled schema is immutable and must stay shareable across threads.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledSchema>();
};
