//! Errors raised by loaders and the sheet pipeline.

use std::io;
use std::path::PathBuf;

use sheet_core::{DeriveError, ErrorSeverity, SheetError};

use crate::format::DocumentFormat;
use crate::schema::{SchemaError, ViolationReport};

/// Everything that can stop a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("cannot access {}: {source}", origin.display())]
    Io {
        origin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin} is not a valid character document: {message}")]
    Parse { origin: String, message: String },

    #[error("cannot infer document format of {}", origin.display())]
    UnknownFormat { origin: PathBuf },

    #[error("failed to render {format} document: {message}")]
    Render {
        format: DocumentFormat,
        message: String,
    },

    #[error(transparent)]
    SchemaCompile(#[from] SchemaError),

    #[error("record rejected by schema: {0}")]
    StructuralViolation(ViolationReport),

    #[error("derivation failed: {0}")]
    Derive(#[from] DeriveError),
}

impl PipelineError {
    pub(crate) fn io(origin: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            origin: origin.into(),
            source,
        }
    }

    /// The violation report, if the record was rejected by the schema.
    pub fn violations(&self) -> Option<&ViolationReport> {
        match self {
            Self::StructuralViolation(report) => Some(report),
            _ => None,
        }
    }
}

impl From<ViolationReport> for PipelineError {
    fn from(report: ViolationReport) -> Self {
        Self::StructuralViolation(report)
    }
}

impl SheetError for PipelineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StructuralViolation(_) => ErrorSeverity::Validation,
            Self::Derive(err) => err.severity(),
            Self::SchemaCompile(err) => err.severity(),
            Self::Io { .. } | Self::Parse { .. } | Self::UnknownFormat { .. } | Self::Render { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO",
            Self::Parse { .. } | Self::UnknownFormat { .. } => "PARSE",
            Self::Render { .. } => "RENDER",
            Self::SchemaCompile(err) => err.error_code(),
            Self::StructuralViolation(_) => "STRUCTURAL_VIOLATION",
            Self::Derive(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Ability, InvalidScore};

    #[test]
    fn rejections_and_fatal_errors_are_classified() {
        let derive = PipelineError::from(DeriveError::InvalidScore {
            ability: Ability::Wisdom,
            source: InvalidScore { score: -1 },
        });
        assert_eq!(derive.severity(), ErrorSeverity::Validation);
        assert_eq!(derive.error_code(), "INVALID_SCORE");

        let io = PipelineError::io("missing.yaml", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(io.severity(), ErrorSeverity::Fatal);
        assert!(io.to_string().starts_with("cannot access missing.yaml"));

        let schema = PipelineError::from(SchemaError::NotAMapping { path: "#".into() });
        assert_eq!(schema.severity(), ErrorSeverity::Fatal);
        assert!(schema.violations().is_none());
    }
}
