use crate::domain::model::{AnagramGroups, Word};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Line-oriented input: a finite, non-restartable sequence of raw lines.
pub trait WordSource {
    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;

    /// Reads every line. The underlying handle must be released before returning.
    fn read_lines(&mut self) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per group, words separated by a single space.
    #[default]
    Text,
    /// A JSON array of groups, each an array of words.
    Json,
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<Vec<Word>>;
    fn transform(&self, words: Vec<Word>) -> Result<AnagramGroups>;
    fn load<W: Write>(&self, groups: &AnagramGroups, out: &mut W) -> Result<usize>;
}
