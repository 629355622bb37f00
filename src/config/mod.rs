pub mod cli;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_arg_count, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const PROGRAM_NAME: &str = "anagram-groups";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "anagram-groups", version)]
#[command(about = "Group the words of a text file into anagram sets")]
pub struct CliConfig {
    /// Input file with one word per line
    #[arg(value_name = "INPUT_FILE")]
    pub inputs: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn for_file(path: impl Into<String>) -> Self {
        Self {
            inputs: vec![path.into()],
            verbose: false,
            format: OutputFormat::Text,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.inputs.first().map(String::as_str).unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_arg_count(PROGRAM_NAME, &self.inputs, 1)
    }
}
