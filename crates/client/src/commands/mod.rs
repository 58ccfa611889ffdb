//! Subcommands of the `ledgr` binary.

mod derive;
mod show;
mod template;
mod validate;

pub use derive::Derive;
pub use show::Show;
pub use template::Template;
pub use validate::Validate;

use clap::Args;
use sheet_content::PipelineConfig;
use sheet_core::DerivationPolicy;

/// Options shared by every command that runs the pipeline.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Schema file, or `ledgr:character/v1` for the bundled schema [env: LEDGR_SCHEMA]
    #[arg(long)]
    pub schema: Option<String>,

    /// How to treat modifiers already present in the input [env: LEDGR_POLICY]
    #[arg(long, value_name = "overwrite|validate-and-keep")]
    pub policy: Option<DerivationPolicy>,
}

impl PipelineArgs {
    /// Environment configuration with command-line flags layered on top.
    pub fn config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::from_env();
        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        config
    }
}
