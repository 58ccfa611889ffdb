//! Print a derived sheet without writing it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sheet_content::{DocumentFormat, SheetLoader};

use super::PipelineArgs;

/// Print the derived sheet as JSON
#[derive(Parser, Debug)]
pub struct Show {
    /// Character document (.yaml, .yml, .json or .toml)
    pub input: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let pipeline = self.pipeline.config().build_pipeline()?;
        let sheet = pipeline.derive_file(&self.input)?;

        print!("{}", SheetLoader::render(&sheet, DocumentFormat::Json)?);
        Ok(())
    }
}
