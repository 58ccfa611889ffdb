//! Full pipeline: read, validate, derive, validate, write.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sheet_content::DocumentFormat;

use super::PipelineArgs;

/// Validate, derive and write a character sheet
#[derive(Parser, Debug)]
pub struct Derive {
    /// Character document (.yaml, .yml, .json or .toml)
    pub input: PathBuf,

    /// Where to write the derived sheet [env: LEDGR_OUTPUT] [default: character_sheet.out.yaml]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; defaults to the output file extension [env: LEDGR_FORMAT]
    #[arg(long, value_name = "yaml|json|toml")]
    pub format: Option<DocumentFormat>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl Derive {
    pub fn execute(self) -> Result<()> {
        let mut config = self.pipeline.config();
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.format.is_some() {
            config.format = self.format;
        }

        let pipeline = config.build_pipeline()?;
        pipeline.run_file(&self.input, &config.output, config.format)?;

        println!("{}", config.output.display());
        Ok(())
    }
}
