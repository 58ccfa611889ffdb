//! Common error infrastructure for sheet-core.
//!
//! Stage-specific errors (e.g. [`crate::InvalidScore`], [`crate::DeriveError`])
//! are defined next to the code that raises them. This module only holds the
//! classification shared by every error type in the workspace, so that the
//! outermost caller can decide how to react without matching on variants.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each stage has its own error type with specific variants
//! - **Rich Context**: Errors name the ability, skill or document path involved
//! - **Severity Classification**: A rejected record is distinct from a broken run

/// Severity level of an error, used to decide how a caller reacts.
///
/// - **Validation**: The input record was rejected; fixing the document fixes the run
/// - **Fatal**: The run itself could not proceed (unreadable file, broken schema)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorSeverity {
    /// The record does not satisfy the schema or the derivation rules.
    ///
    /// Examples: missing `attributes` section, negative score, authored
    /// modifier disagreeing with the computed one.
    Validation,

    /// The pipeline could not run at all.
    ///
    /// Examples: input file missing, document syntax error, malformed schema.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the error rejects the record rather than the run.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all ledgr errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act: the author of the record, or the operator
/// - Keep `error_code` stable; it is printed by the CLI
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
