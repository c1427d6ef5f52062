pub mod cli;
pub mod packages_file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "fit-stats"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Computes workout statistics from raw sensor packages")
)]
pub struct CliConfig {
    /// Packages file (TOML or JSON); the built-in demo batch runs when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub input: Option<String>,

    /// Directory to write summary.txt and reports.csv into
    #[cfg_attr(feature = "cli", arg(long))]
    pub output_path: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_file_extension("input", input, &["toml", "json"])?;
        }

        if let Some(output) = &self.output_path {
            validate_path("output_path", output)?;
        }

        Ok(())
    }
}
