//! Loaders that read and write character documents and schemas.
//!
//! Every loader works in two steps: text is parsed into a generic tree
//! ([`serde_json::Value`]) that the schema can inspect, and only then is the
//! tree converted into typed records.

pub mod schema;
pub mod sheet;

pub use schema::SchemaLoader;
pub use sheet::SheetLoader;

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::format::DocumentFormat;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, PipelineError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))
}

/// Write `contents` to `path` through a sibling temporary file, so readers
/// never observe a half-written document. Parent directories are created.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = Path::new(&staging);

    fs::write(staging, contents).map_err(|e| PipelineError::io(staging, e))?;
    fs::rename(staging, path).map_err(|e| {
        let _ = fs::remove_file(staging);
        PipelineError::io(path, e)
    })
}

/// Resolve the format of `path`, preferring an explicit choice.
pub(crate) fn format_for(
    path: &Path,
    explicit: Option<DocumentFormat>,
) -> LoadResult<DocumentFormat> {
    explicit
        .or_else(|| DocumentFormat::from_path(path))
        .ok_or_else(|| PipelineError::UnknownFormat {
            origin: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/sheet.yaml");

        write_file(&path, "schema_version: 1\n").unwrap();

        assert_eq!(read_file(&path).unwrap(), "schema_version: 1\n");
        assert!(!dir.path().join("out/nested/sheet.yaml.tmp").exists());
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let path = Path::new("sheet.yaml");
        assert_eq!(format_for(path, None).unwrap(), DocumentFormat::Yaml);
        assert_eq!(
            format_for(path, Some(DocumentFormat::Json)).unwrap(),
            DocumentFormat::Json
        );
        assert!(matches!(
            format_for(Path::new("sheet.txt"), None),
            Err(PipelineError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
