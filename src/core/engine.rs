use crate::core::{Pipeline, Result};
use std::io::Write;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    pub groups: usize,
}

pub struct AnagramEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnagramEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Nothing is written to `out`
    /// unless the whole input was read successfully.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        tracing::info!("Starting anagram grouping");

        // Extract
        let words = self.pipeline.extract()?;
        let word_count = words.len();
        tracing::info!("Extracted {} words", word_count);

        // Transform
        let groups = self.pipeline.transform(words)?;
        tracing::info!("Grouped into {} anagram groups", groups.len());

        // Load
        let written = self.pipeline.load(&groups, out)?;
        tracing::debug!("Wrote {} groups", written);

        Ok(RunSummary {
            words: word_count,
            groups: written,
        })
    }
}
