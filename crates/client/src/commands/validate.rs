//! Gate-only check of a character document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::PipelineArgs;

/// Check a character sheet against the schema only
#[derive(Parser, Debug)]
pub struct Validate {
    /// Character document (.yaml, .yml, .json or .toml)
    pub input: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let config = self.pipeline.config();
        let pipeline = config.build_pipeline()?;
        pipeline.validate_file(&self.input)?;

        let schema = pipeline.gate().schema().id().unwrap_or(&config.schema);
        println!("{}: conforms to {schema}", self.input.display());
        Ok(())
    }
}
