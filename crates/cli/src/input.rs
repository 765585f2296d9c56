use anyhow::{bail, Context, Result};
use std::path::Path;

/// One sequence: the whitespace-separated tokens of an input line.
pub type Tokens = Vec<String>;

/// Parse sequences, one per line. Blank lines and `#` comments are skipped.
pub fn parse_sequences(text: &str) -> Vec<Tokens> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split_whitespace().map(str::to_owned).collect())
        .collect()
}

pub fn read_sequences(path: &Path) -> Result<Vec<Tokens>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let sequences = parse_sequences(&text);
    tracing::debug!(path = %path.display(), sequences = sequences.len(), "read input");
    Ok(sequences)
}

/// The first two sequences of `path`.
pub fn read_two(path: &Path) -> Result<(Tokens, Tokens)> {
    let mut sequences = read_sequences(path)?.into_iter();
    match (sequences.next(), sequences.next()) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => bail!(
            "{} must contain at least two sequences",
            path.display()
        ),
    }
}
