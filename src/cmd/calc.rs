use crate::calc::step_calc::{evaluate_steps, final_result, format_expression, History, Step};
use anyhow::{bail, Result};

/// Edits applied to the session history before it is listed.
#[derive(Debug, Default)]
pub struct HistoryEdits {
    /// Entry ids to delete.
    pub drop: Vec<u64>,
    /// Discard the whole history.
    pub clear: bool,
}

pub fn run(expressions: &[String], edits: &HistoryEdits) -> Result<()> {
    write_session(expressions, edits, &mut std::io::stdout())
}

/// Evaluates each expression in turn, then lists the committed results.
pub(crate) fn write_session<W: std::io::Write>(
    expressions: &[String],
    edits: &HistoryEdits,
    out: &mut W,
) -> Result<()> {
    let mut history = History::default();
    for expression in expressions {
        write_steps(expression, out)?;
        history.commit(expression);
    }
    for id in &edits.drop {
        if !history.remove(*id) {
            tracing::warn!(id, "no history entry to drop");
        }
    }
    if edits.clear {
        history.clear();
    }
    if history.entries().len() > 1 {
        writeln!(out, "---")?;
        for entry in history.entries() {
            writeln!(
                out,
                "#{} {} = {}",
                entry.id,
                entry.formatted_expression(),
                entry.formatted_result()
            )?;
        }
    }
    Ok(())
}

pub(crate) fn write_steps<W: std::io::Write>(expression: &str, out: &mut W) -> Result<()> {
    if expression.trim().is_empty() {
        bail!("expression is empty");
    }
    writeln!(out, "{}", format_expression(expression))?;
    let steps = evaluate_steps(expression);
    for (i, step) in steps.iter().enumerate() {
        writeln!(out, "  {}: {}", i + 1, step)?;
    }
    match final_result(expression) {
        Some(result) => writeln!(out, "= {}", crate::calc::pricing::group_number_str(&result))?,
        None if steps.last() == Some(&Step::Error) => writeln!(out, "= Error")?,
        None => bail!("cannot evaluate '{}'", expression),
    }
    Ok(())
}
