//! Validation gate in front of (and behind) derivation.

use serde_json::Value;
use sheet_core::CharacterSheet;
use tracing::warn;

use crate::error::PipelineError;
use crate::loaders::{LoadResult, SchemaLoader, SheetLoader};
use crate::schema::CompiledSchema;

/// Checks documents against a compiled schema.
///
/// A record that fails the gate is never derived and never written.
#[derive(Clone, Debug)]
pub struct ValidationGate {
    schema: CompiledSchema,
}

impl ValidationGate {
    pub fn new(schema: CompiledSchema) -> Self {
        Self { schema }
    }

    /// Gate backed by the bundled character schema.
    pub fn bundled() -> LoadResult<Self> {
        SchemaLoader::bundled().map(Self::new)
    }

    pub fn schema(&self) -> &CompiledSchema {
        &self.schema
    }

    /// Check a parsed document before it becomes a typed record.
    pub fn check_instance(&self, instance: &Value) -> LoadResult<()> {
        self.schema.validate(instance).map_err(|report| {
            for violation in report.violations() {
                warn!(path = %violation.path, reason = %violation.kind, "schema violation");
            }
            PipelineError::StructuralViolation(report)
        })
    }

    /// Check a typed record, e.g. after derivation.
    pub fn check_record(&self, sheet: &CharacterSheet) -> LoadResult<()> {
        let instance = SheetLoader::to_instance(sheet)?;
        self.check_instance(&instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEMPLATE;
    use crate::format::DocumentFormat;
    use sheet_core::SheetError;

    fn template_instance() -> Value {
        SheetLoader::parse_instance(TEMPLATE, DocumentFormat::Yaml).unwrap()
    }

    #[test]
    fn template_passes_the_bundled_gate() {
        let gate = ValidationGate::bundled().unwrap();
        let instance = template_instance();
        gate.check_instance(&instance).unwrap();

        let sheet = SheetLoader::to_record(instance).unwrap();
        gate.check_record(&sheet).unwrap();
    }

    #[test]
    fn missing_attributes_names_the_section() {
        let gate = ValidationGate::bundled().unwrap();
        let mut instance = template_instance();
        instance.as_object_mut().unwrap().remove("attributes");

        let err = gate.check_instance(&instance).unwrap_err();
        let report = err.violations().unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.contains_path("/attributes"));
    }

    #[test]
    fn negative_score_is_rejected_structurally() {
        let gate = ValidationGate::bundled().unwrap();
        let mut instance = template_instance();
        instance["attributes"]["wisdom"]["score"] = Value::from(-2);

        let err = gate.check_instance(&instance).unwrap_err();
        assert!(err.violations().unwrap().contains_path("/attributes/wisdom/score"));
    }

    #[test]
    fn fractional_literal_score_is_rejected_structurally() {
        let gate = ValidationGate::bundled().unwrap();
        let mut instance = template_instance();
        instance["attributes"]["strength"]["score"] = serde_json::json!(14.0);

        let err = gate.check_instance(&instance).unwrap_err();
        assert_eq!(err.severity(), sheet_core::ErrorSeverity::Validation);
        assert!(err.violations().unwrap().contains_path("/attributes/strength/score"));
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let gate = ValidationGate::bundled().unwrap();
        let mut instance = template_instance();
        instance["skills"]["basket_weaving"] = serde_json::json!({});

        let err = gate.check_instance(&instance).unwrap_err();
        assert!(err.violations().unwrap().contains_path("/skills/basket_weaving"));
    }
}
