use crate::domain::model::{AnagramGroups, Group, Word};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use std::io::Write;

fn join_group(group: &Group) -> String {
    group
        .words()
        .iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One space-joined line per non-empty group, in collection order.
pub fn render_lines(groups: &AnagramGroups) -> Vec<String> {
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(join_group)
        .collect()
}

pub fn render_json(groups: &AnagramGroups) -> Result<String> {
    let nested: Vec<&[Word]> = groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(Group::words)
        .collect();
    Ok(serde_json::to_string(&nested)?)
}

/// Writes the whole report to `out` and returns the number of groups written.
pub fn write_report<W: Write>(
    groups: &AnagramGroups,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let written = match format {
        OutputFormat::Text => {
            let lines = render_lines(groups);
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
            lines.len()
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(groups)?)?;
            groups.iter().filter(|group| !group.is_empty()).count()
        }
    };
    out.flush()?;
    Ok(written)
}
