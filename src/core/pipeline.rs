use crate::core::grouper::group_words;
use crate::core::report::write_report;
use crate::core::{AnagramGroups, ConfigProvider, Pipeline, Result, Word, WordSource};
use std::io::Write;

pub struct AnagramPipeline<S: WordSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: WordSource, C: ConfigProvider> AnagramPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: WordSource, C: ConfigProvider> Pipeline for AnagramPipeline<S, C> {
    fn extract(&mut self) -> Result<Vec<Word>> {
        tracing::debug!("Reading lines from {}", self.source.describe());
        let lines = self.source.read_lines()?;
        let total = lines.len();

        let words: Vec<Word> = lines.iter().filter_map(|line| Word::parse(line)).collect();
        tracing::debug!(
            "Read {} lines, skipped {} blank",
            total,
            total - words.len()
        );
        Ok(words)
    }

    fn transform(&self, words: Vec<Word>) -> Result<AnagramGroups> {
        Ok(group_words(words))
    }

    fn load<W: Write>(&self, groups: &AnagramGroups, out: &mut W) -> Result<usize> {
        write_report(groups, self.config.output_format(), out)
    }
}
