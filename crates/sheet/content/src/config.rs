//! Pipeline configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use sheet_core::{DerivationConfig, DerivationPolicy};

use crate::format::DocumentFormat;
use crate::gate::ValidationGate;
use crate::loaders::{LoadResult, SchemaLoader};
use crate::pipeline::SheetPipeline;
use crate::schema::BUNDLED_SCHEMA_ID;

/// Where derived sheets go when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "character_sheet.out.yaml";

/// Settings for one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Schema file path, or the bundled schema identifier.
    pub schema: String,
    pub output: PathBuf,
    pub policy: DerivationPolicy,
    /// Output format; `None` follows the output extension.
    pub format: Option<DocumentFormat>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schema: BUNDLED_SCHEMA_ID.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: DerivationPolicy::default(),
            format: None,
        }
    }
}

impl PipelineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LEDGR_SCHEMA` - Schema path or identifier (default: `ledgr:character/v1`)
    /// - `LEDGR_OUTPUT` - Output document path (default: `character_sheet.out.yaml`)
    /// - `LEDGR_POLICY` - `overwrite` or `validate-and-keep` (default: overwrite)
    /// - `LEDGR_FORMAT` - `yaml`, `json` or `toml` (default: from output extension)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(schema) = lookup("LEDGR_SCHEMA").filter(|value| !value.is_empty()) {
            config.schema = schema;
        }
        if let Some(output) = lookup("LEDGR_OUTPUT").filter(|value| !value.is_empty()) {
            config.output = PathBuf::from(output);
        }
        if let Some(policy) = read_parsed::<DerivationPolicy>(&lookup, "LEDGR_POLICY") {
            config.policy = policy;
        }
        if let Some(format) = read_parsed::<DocumentFormat>(&lookup, "LEDGR_FORMAT") {
            config.format = Some(format);
        }

        config
    }

    pub fn derivation(&self) -> DerivationConfig {
        DerivationConfig::with_policy(self.policy)
    }

    /// Compile the configured schema and assemble a pipeline.
    pub fn build_pipeline(&self) -> LoadResult<SheetPipeline> {
        let schema = SchemaLoader::resolve(&self.schema)?;
        Ok(SheetPipeline::new(
            ValidationGate::new(schema),
            self.derivation(),
        ))
    }
}

fn read_parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
