//! Document loading, schema validation and the derivation pipeline.
//!
//! This crate wraps the pure rules of `sheet-core` with everything that
//! touches text or files:
//! - Document formats (YAML, JSON, TOML) and the sheet loader/writer
//! - A JSON-Schema subset: compiler, validator and the bundled character schema
//! - The validation gate and [`SheetPipeline`]
//! - Pipeline configuration from the environment
//!
//! A run never terminates the process; every failure is a [`PipelineError`]
//! whose [`sheet_core::SheetError::severity`] tells the caller whether the
//! record was rejected or the run itself failed.

pub mod config;
pub mod error;
pub mod format;
pub mod gate;
pub mod loaders;
pub mod pipeline;
pub mod schema;

pub use config::{DEFAULT_OUTPUT, PipelineConfig};
pub use error::PipelineError;
pub use format::DocumentFormat;
pub use gate::ValidationGate;
pub use loaders::{LoadResult, SchemaLoader, SheetLoader};
pub use pipeline::SheetPipeline;
pub use schema::{
    BUNDLED_SCHEMA, BUNDLED_SCHEMA_ID, CompiledSchema, SchemaError, Violation, ViolationKind,
    ViolationReport,
};

/// Authored template for a new character (YAML, no dependent fields).
pub const TEMPLATE: &str = include_str!("../assets/character_template.yaml");
