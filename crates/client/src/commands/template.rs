//! Print the bundled character template.

use anyhow::Result;
use clap::Parser;

/// Print a blank character template
#[derive(Parser, Debug)]
pub struct Template {}

impl Template {
    pub fn execute(self) -> Result<()> {
        print!("{}", sheet_content::TEMPLATE);
        Ok(())
    }
}
