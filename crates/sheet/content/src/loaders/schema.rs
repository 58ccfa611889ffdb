//! Schema loader.

use std::path::Path;

use tracing::debug;

use crate::error::PipelineError;
use crate::format::DocumentFormat;
use crate::loaders::{LoadResult, read_file};
use crate::schema::{BUNDLED_SCHEMA, BUNDLED_SCHEMA_ID, CompiledSchema, SchemaError};

/// Loader for structural schemas.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Compile the schema shipped with this crate.
    pub fn bundled() -> LoadResult<CompiledSchema> {
        Self::compile_text(BUNDLED_SCHEMA, DocumentFormat::Yaml, BUNDLED_SCHEMA_ID)
    }

    /// Resolve a schema reference: the bundled identifier or a file path.
    pub fn resolve(reference: &str) -> LoadResult<CompiledSchema> {
        if reference == BUNDLED_SCHEMA_ID {
            Self::bundled()
        } else {
            Self::load(Path::new(reference))
        }
    }

    /// Load and compile a schema file (YAML unless the extension says JSON or TOML).
    pub fn load(path: &Path) -> LoadResult<CompiledSchema> {
        let origin = path.display().to_string();
        let text = read_file(path).map_err(|err| match err {
            PipelineError::Io { source, .. } => PipelineError::SchemaCompile(SchemaError::Load {
                origin: origin.clone(),
                message: source.to_string(),
            }),
            other => other,
        })?;
        let format = DocumentFormat::from_path(path).unwrap_or_default();
        Self::compile_text(&text, format, &origin)
    }

    fn compile_text(text: &str, format: DocumentFormat, origin: &str) -> LoadResult<CompiledSchema> {
        let document = format.parse_value(text).map_err(|message| SchemaError::Load {
            origin: origin.to_string(),
            message,
        })?;
        let schema = CompiledSchema::compile(&document)?;
        debug!(schema = origin, id = schema.id(), "compiled schema");
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_schema_compiles() {
        let schema = SchemaLoader::bundled().unwrap();
        assert_eq!(schema.id(), Some(BUNDLED_SCHEMA_ID));
        assert_eq!(SchemaLoader::resolve(BUNDLED_SCHEMA_ID).unwrap(), schema);
    }

    #[test]
    fn unreachable_schema_is_a_compile_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaLoader::load(&dir.path().join("nowhere.yaml")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::SchemaCompile(SchemaError::Load { .. })
        ));
    }

    #[test]
    fn loads_json_schema_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.json");
        std::fs::write(&path, r#"{ "type": "object", "required": [] }"#).unwrap();

        let schema = SchemaLoader::load(&path).unwrap();
        assert_eq!(schema.id(), None);
        assert!(schema.validate(&serde_json::json!({ "any": 1 })).is_ok());
    }
}
