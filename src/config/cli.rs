use crate::core::WordSource;
use crate::utils::error::{AnagramError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

/// Reads lines from a file on disk. The handle lives only for the duration of
/// [`WordSource::read_lines`].
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&mut self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| AnagramError::read(self.describe(), e))?;
        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|e| AnagramError::read(self.describe(), e))?;
        Ok(split_lines(&text))
    }
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// In-memory lines, for callers that already hold the input.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    lines: Vec<String>,
}

impl VecSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for VecSource {
    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }

    fn read_lines(&mut self) -> Result<Vec<String>> {
        Ok(std::mem::take(&mut self.lines))
    }
}
