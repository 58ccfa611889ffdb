//! Character sheet loader and writer.

use std::path::Path;

use serde_json::Value;
use sheet_core::CharacterSheet;

use crate::error::PipelineError;
use crate::format::DocumentFormat;
use crate::loaders::{LoadResult, format_for, read_file, write_file};

/// Origin reported for documents that did not come from a file.
const INLINE_ORIGIN: &str = "<inline>";

/// Loader for character sheet documents in any [`DocumentFormat`].
pub struct SheetLoader;

impl SheetLoader {
    /// Parse document text into a generic instance, without any schema check.
    pub fn parse_instance(text: &str, format: DocumentFormat) -> LoadResult<Value> {
        Self::parse_with_origin(text, format, INLINE_ORIGIN)
    }

    /// Read a file and parse it into a generic instance.
    ///
    /// The format comes from the file extension unless `format` is given.
    pub fn load_instance(path: &Path, format: Option<DocumentFormat>) -> LoadResult<Value> {
        let format = format_for(path, format)?;
        let text = read_file(path)?;
        Self::parse_with_origin(&text, format, &path.display().to_string())
    }

    /// Convert a generic instance into a typed record.
    pub fn to_record(instance: Value) -> LoadResult<CharacterSheet> {
        serde_json::from_value(instance).map_err(|e| PipelineError::Parse {
            origin: INLINE_ORIGIN.to_string(),
            message: e.to_string(),
        })
    }

    /// Convert a typed record back into the generic instance the schema sees.
    pub fn to_instance(sheet: &CharacterSheet) -> LoadResult<Value> {
        serde_json::to_value(sheet).map_err(|e| PipelineError::Render {
            format: DocumentFormat::Json,
            message: e.to_string(),
        })
    }

    /// Load a typed record from a file without validating it.
    pub fn load(path: &Path) -> LoadResult<CharacterSheet> {
        let instance = Self::load_instance(path, None)?;
        Self::to_record(instance).map_err(|err| match err {
            PipelineError::Parse { message, .. } => PipelineError::Parse {
                origin: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Serialize a record as document text.
    pub fn render(sheet: &CharacterSheet, format: DocumentFormat) -> LoadResult<String> {
        format
            .render(sheet)
            .map_err(|message| PipelineError::Render { format, message })
    }

    /// Write a record to `path` in the format implied by its extension.
    pub fn write(sheet: &CharacterSheet, path: &Path) -> LoadResult<()> {
        Self::write_as(sheet, path, None)
    }

    /// Write a record to `path`, optionally forcing the output format.
    pub fn write_as(
        sheet: &CharacterSheet,
        path: &Path,
        format: Option<DocumentFormat>,
    ) -> LoadResult<()> {
        let format = format_for(path, format)?;
        let text = Self::render(sheet, format)?;
        write_file(path, &text)
    }

    fn parse_with_origin(text: &str, format: DocumentFormat, origin: &str) -> LoadResult<Value> {
        format
            .parse_value(text)
            .map_err(|message| PipelineError::Parse {
                origin: origin.to_string(),
                message,
            })
    }
}
