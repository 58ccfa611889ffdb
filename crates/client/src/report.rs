//! Turning a failed run into stderr lines and an exit status.

use sheet_content::PipelineError;
use sheet_core::{ErrorSeverity, SheetError};

/// The run could not proceed (I/O, syntax, schema).
pub const EXIT_FATAL: u8 = 1;
/// The record was rejected (violation, invalid score, mismatch).
pub const EXIT_REJECTED: u8 = 2;

/// What the binary prints and returns for a failed run.
#[derive(Debug, PartialEq, Eq)]
pub struct Failure {
    pub status: u8,
    pub lines: Vec<String>,
}

impl Failure {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let Some(pipeline_err) = err.downcast_ref::<PipelineError>() else {
            return Self {
                status: EXIT_FATAL,
                lines: vec![format!("error: {err:#}")],
            };
        };

        let severity = pipeline_err.severity();
        let mut lines = vec![format!(
            "{} [{}]: {pipeline_err}",
            severity.as_str(),
            pipeline_err.error_code()
        )];
        if let Some(report) = pipeline_err.violations() {
            lines.extend(report.violations().iter().map(|v| format!("  {v}")));
        }

        let status = match severity {
            ErrorSeverity::Validation => EXIT_REJECTED,
            ErrorSeverity::Fatal => EXIT_FATAL,
        };
        Self { status, lines }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use sheet_content::{DocumentFormat, SchemaError, SheetLoader, ValidationGate};
    use sheet_core::{Ability, DeriveError, InvalidScore};

    fn structural_violation() -> PipelineError {
        let instance = SheetLoader::parse_instance(
            r#"{"schema_version": 1, "basics": {"name": "Lyra", "class": "wizard", "level": 3, "race": "elf"}}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        ValidationGate::bundled()
            .unwrap()
            .check_instance(&instance)
            .unwrap_err()
    }

    #[test]
    fn structural_violation_is_rejected_and_lists_every_path() {
        let err = structural_violation();
        let count = err.violations().unwrap().len();
        let failure = Failure::from_error(&anyhow::Error::from(err));

        assert_eq!(failure.status, EXIT_REJECTED);
        assert_eq!(failure.lines.len(), 1 + count);
        assert!(failure.lines[0].starts_with("validation [STRUCTURAL_VIOLATION]"));
        for path in ["/attributes", "/saving_throws", "/skills", "/health"] {
            assert!(
                failure.lines.contains(&format!("  {path}: required property is missing")),
                "{path}"
            );
        }
    }

    #[test]
    fn derivation_errors_are_rejections() {
        let err = PipelineError::from(DeriveError::InvalidScore {
            ability: Ability::Strength,
            source: InvalidScore { score: -3 },
        });
        let failure = Failure::from_error(&anyhow::Error::from(err));

        assert_eq!(failure.status, EXIT_REJECTED);
        assert_eq!(
            failure.lines,
            vec![
                "validation [INVALID_SCORE]: derivation failed: attributes.strength.score: \
                 ability score must be non-negative, got -3"
                    .to_string()
            ]
        );
    }

    #[test]
    fn io_and_schema_errors_are_fatal() {
        let io_err = PipelineError::Io {
            origin: "missing.yaml".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let failure = Failure::from_error(&anyhow::Error::from(io_err));
        assert_eq!(failure.status, EXIT_FATAL);
        assert!(failure.lines[0].starts_with("fatal [IO]: cannot access missing.yaml"));

        let schema_err = PipelineError::from(SchemaError::NotAMapping { path: "#".into() });
        let failure = Failure::from_error(&anyhow::Error::from(schema_err));
        assert_eq!(failure.status, EXIT_FATAL);
        assert_eq!(
            failure.lines,
            vec!["fatal [SCHEMA_COMPILE]: schema node at # must be a mapping".to_string()]
        );
    }

    #[test]
    fn foreign_errors_are_fatal() {
        let failure = Failure::from_error(&anyhow::anyhow!("terminal closed"));
        assert_eq!(failure.status, EXIT_FATAL);
        assert_eq!(failure.lines, vec!["error: terminal closed".to_string()]);
    }
}
