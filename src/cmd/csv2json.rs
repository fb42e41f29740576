use crate::calc::csv_json::csv_to_json;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub fn run(input: &Path, delimiter: char, has_header: bool) -> Result<()> {
    let text = read_input(input)?;
    write_json(&text, delimiter, has_header, &mut std::io::stdout())
}

/// Reads `input`, or standard input when it is `-`.
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

pub(crate) fn write_json<W: std::io::Write>(
    text: &str,
    delimiter: char,
    has_header: bool,
    out: &mut W,
) -> Result<()> {
    let json = csv_to_json(text, delimiter, has_header)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
