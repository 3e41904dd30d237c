pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, ParsePolicy};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-etl")]
#[command(about = "Plots a submarine course from newline-delimited movement commands")]
pub struct CliConfig {
    /// Input file path, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,

    /// How to render the result on stdout.
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// What to do with a missing or non-numeric magnitude field.
    #[arg(long, value_enum, default_value = "zero")]
    pub on_parse_error: ParsePolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system resource monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn parse_policy(&self) -> ParsePolicy {
        self.on_parse_error
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_input_arg("input", &self.input)
    }
}
