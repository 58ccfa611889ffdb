//! The read → validate → derive → validate → write pipeline.

use std::path::Path;

use serde_json::Value;
use sheet_core::{CharacterSheet, DerivationConfig, derive_sheet};
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::format::DocumentFormat;
use crate::gate::ValidationGate;
use crate::loaders::{LoadResult, SheetLoader};

/// One configured pipeline; reusable across any number of documents.
#[derive(Clone, Debug)]
pub struct SheetPipeline {
    gate: ValidationGate,
    config: DerivationConfig,
}

impl SheetPipeline {
    pub fn new(gate: ValidationGate, config: DerivationConfig) -> Self {
        Self { gate, config }
    }

    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// Validate, derive and re-validate a parsed document.
    ///
    /// Nothing is derived unless the document passes the gate, and the
    /// returned record always conforms to the gate's schema.
    pub fn run_instance(&self, instance: Value) -> LoadResult<CharacterSheet> {
        debug!("checking document against schema");
        self.gate.check_instance(&instance)?;

        let mut sheet = SheetLoader::to_record(instance)?;

        debug!(policy = %self.config.policy, "deriving dependent fields");
        derive_sheet(&mut sheet, &self.config).map_err(|err| {
            warn!(path = %err.path(), "derivation rejected the record: {err}");
            PipelineError::from(err)
        })?;

        debug!("checking derived record against schema");
        self.gate.check_record(&sheet)?;

        Ok(sheet)
    }

    /// Run the pipeline on document text.
    pub fn run_str(&self, text: &str, format: DocumentFormat) -> LoadResult<CharacterSheet> {
        let instance = SheetLoader::parse_instance(text, format)?;
        self.run_instance(instance)
    }

    /// Load and derive a file without writing anything.
    pub fn derive_file(&self, input: &Path) -> LoadResult<CharacterSheet> {
        debug!(input = %input.display(), "reading character document");
        let instance = SheetLoader::load_instance(input, None)?;
        self.run_instance(instance)
    }

    /// Run the full pipeline from `input` to `output`.
    ///
    /// The output format follows `format`, or else the output extension.
    /// On any error nothing is written.
    pub fn run_file(
        &self,
        input: &Path,
        output: &Path,
        format: Option<DocumentFormat>,
    ) -> LoadResult<CharacterSheet> {
        let sheet = self.derive_file(input)?;
        SheetLoader::write_as(&sheet, output, format)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            character = %sheet.basics.name,
            "wrote derived character sheet"
        );
        Ok(sheet)
    }

    /// Run only the gate on a file.
    pub fn validate_file(&self, input: &Path) -> LoadResult<()> {
        let instance = SheetLoader::load_instance(input, None)?;
        self.gate.check_instance(&instance)?;
        info!(input = %input.display(), "document conforms to schema");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEMPLATE;
    use sheet_core::{DerivationPolicy, DeriveError};

    fn pipeline(policy: DerivationPolicy) -> SheetPipeline {
        SheetPipeline::new(
            ValidationGate::bundled().unwrap(),
            DerivationConfig::with_policy(policy),
        )
    }

    #[test]
    fn template_derives_every_modifier() {
        let sheet = pipeline(DerivationPolicy::Overwrite)
            .run_str(TEMPLATE, DocumentFormat::Yaml)
            .unwrap();

        assert_eq!(sheet.attributes.intelligence.modifier.value(), Some(3));
        assert_eq!(sheet.saving_throws.strength.modifier.value(), Some(-1));
        assert_eq!(sheet.skills.stealth.modifier.value(), Some(2));
        assert_eq!(sheet.skills.insight.modifier.value(), Some(1));
    }

    #[test]
    fn mismatch_under_validate_and_keep_is_a_rejection() {
        let text = TEMPLATE.replace(
            "  intelligence:\n    score: 17\n",
            "  intelligence:\n    score: 17\n    modifier: 4\n",
        );
        let err = pipeline(DerivationPolicy::ValidateAndKeep)
            .run_str(&text, DocumentFormat::Yaml)
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Derive(DeriveError::ModifierMismatch {
                authored: 4,
                computed: 3,
                ..
            })
        ));
    }

    #[test]
    fn derived_record_must_fit_the_schema() {
        // Accepts any document, but caps modifiers below what a score of 17 yields.
        let schema = crate::schema::CompiledSchema::compile(&serde_json::json!({
            "type": "object",
            "properties": {
                "attributes": {
                    "type": "object",
                    "properties": {
                        "intelligence": {
                            "type": "object",
                            "properties": { "modifier": { "type": "integer", "maximum": 2 } }
                        }
                    }
                }
            }
        }))
        .unwrap();
        let pipeline = SheetPipeline::new(ValidationGate::new(schema), DerivationConfig::new());

        let err = pipeline.run_str(TEMPLATE, DocumentFormat::Yaml).unwrap_err();
        assert!(
            err.violations()
                .unwrap()
                .contains_path("/attributes/intelligence/modifier")
        );
    }
}
