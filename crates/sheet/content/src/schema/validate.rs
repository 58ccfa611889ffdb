//! Instance validation against a compiled schema.

use std::fmt;

use serde_json::Value;

use super::{Bounds, NodeKind, SchemaNode};

/// Why an instance node failed its schema.
#[derive(Clone, Debug, PartialEq)]
pub enum ViolationKind {
    MissingProperty,
    UnexpectedProperty,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    BelowMinimum {
        minimum: f64,
    },
    AboveMaximum {
        maximum: f64,
    },
    TooShort {
        min_length: usize,
    },
    NotInEnum {
        allowed: Vec<Value>,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty => write!(f, "required property is missing"),
            Self::UnexpectedProperty => write!(f, "property is not allowed by the schema"),
            Self::WrongType { expected, found } => write!(f, "expected {expected}, found {found}"),
            Self::BelowMinimum { minimum } => write!(f, "value is below the minimum of {minimum}"),
            Self::AboveMaximum { maximum } => write!(f, "value is above the maximum of {maximum}"),
            Self::TooShort { min_length } => {
                write!(f, "string is shorter than {min_length} character(s)")
            }
            Self::NotInEnum { allowed } => {
                let allowed: Vec<String> = allowed.iter().map(Value::to_string).collect();
                write!(f, "value must be one of [{}]", allowed.join(", "))
            }
        }
    }
}

/// A single schema violation at a JSON-pointer path (e.g. `/attributes/strength/score`).
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{path}: {}", self.kind)
    }
}

/// Every violation found in one instance, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolationReport {
    violations: Vec<Violation>,
}

impl ViolationReport {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if some violation sits exactly at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.violations.iter().any(|violation| violation.path == path)
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => write!(f, "no violations"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
        }
    }
}

pub(super) fn check(node: &SchemaNode, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let violation = |kind| Violation {
        path: path.to_string(),
        kind,
    };

    if !type_matches(&node.kind, value) {
        out.push(violation(ViolationKind::WrongType {
            expected: node.kind.type_name(),
            found: value_type_name(value),
        }));
        return;
    }

    match &node.allowed {
        Some(allowed) if !allowed.contains(value) => {
            out.push(violation(ViolationKind::NotInEnum {
                allowed: allowed.clone(),
            }));
        }
        _ => {}
    }

    match &node.kind {
        NodeKind::Integer(bounds) | NodeKind::Number(bounds) => {
            if let Some(kind) = bounds_violation(bounds, value) {
                out.push(violation(kind));
            }
        }
        NodeKind::String {
            min_length: Some(min_length),
        } => {
            let length = value.as_str().map_or(0, |text| text.chars().count());
            if length < *min_length {
                out.push(violation(ViolationKind::TooShort {
                    min_length: *min_length,
                }));
            }
        }
        NodeKind::Object {
            properties,
            required,
            additional,
        } => {
            let Some(map) = value.as_object() else {
                return;
            };
            for name in required {
                if !map.contains_key(name) {
                    out.push(Violation {
                        path: child_path(path, name),
                        kind: ViolationKind::MissingProperty,
                    });
                }
            }
            for (name, child) in map {
                match properties.get(name) {
                    Some(schema) => check(schema, child, &child_path(path, name), out),
                    None if !additional => out.push(Violation {
                        path: child_path(path, name),
                        kind: ViolationKind::UnexpectedProperty,
                    }),
                    None => {}
                }
            }
        }
        NodeKind::Array { items: Some(items) } => {
            if let Some(elements) = value.as_array() {
                for (index, element) in elements.iter().enumerate() {
                    check(items, element, &format!("{path}/{index}"), out);
                }
            }
        }
        _ => {}
    }
}

fn type_matches(kind: &NodeKind, value: &Value) -> bool {
    match kind {
        NodeKind::Any => true,
        NodeKind::Object { .. } => value.is_object(),
        NodeKind::Array { .. } => value.is_array(),
        NodeKind::String { .. } => value.is_string(),
        NodeKind::Integer(_) => is_integer(value),
        NodeKind::Number(_) => value.is_number(),
        NodeKind::Boolean => value.is_boolean(),
        NodeKind::Null => value.is_null(),
    }
}

/// Only integer literals count; `14.0` does not deserialize into an integer field.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.is_i64() || number.is_u64(),
        _ => false,
    }
}

fn bounds_violation(bounds: &Bounds, value: &Value) -> Option<ViolationKind> {
    let number = value.as_f64()?;
    match (bounds.minimum, bounds.maximum) {
        (Some(minimum), _) if number < minimum => Some(ViolationKind::BelowMinimum { minimum }),
        (_, Some(maximum)) if number > maximum => Some(ViolationKind::AboveMaximum { maximum }),
        _ => None,
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if is_integer(value) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Append an escaped JSON-pointer segment.
fn child_path(parent: &str, name: &str) -> String {
    format!("{parent}/{}", name.replace('~', "~0").replace('/', "~1"))
}
