use crate::calc::pricing::group_number_str;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// One running result of a left-to-right evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Value(f64),
    Error,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Value(v) => write!(f, "{}", v),
            Step::Error => write!(f, "Error"),
        }
    }
}

/// Splits on the four operators, keeping them as their own tokens.
fn tokenize(expression: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for (i, ch) in expression.char_indices() {
        if OPERATORS.contains(&ch) {
            tokens.push(&expression[last..i]);
            tokens.push(&expression[i..i + 1]);
            last = i + 1;
        }
    }
    tokens.push(&expression[last..]);
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Reads the longest numeric prefix of `token` (`12abc` is 12, `1.5.3` is
/// 1.5). `None` when no digits lead the token.
fn leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    token[..end].parse().ok()
}

/// Rounds to 8 decimal places.
fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

/// Evaluates strictly left to right with no precedence and records the
/// running value after each operator. Each operand is read by its leading
/// numeric prefix, so parentheses and other trailing text are ignored.
pub fn evaluate_steps(expression: &str) -> Vec<Step> {
    let tokens = tokenize(expression);
    let Some(mut current) = tokens.first().and_then(|t| leading_number(t)) else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    for pair in tokens[1..].chunks(2) {
        let [op, operand] = pair else { break };
        let Some(next) = leading_number(operand) else { break };
        match *op {
            "+" => current += next,
            "-" => current -= next,
            "*" => current *= next,
            "/" => {
                if next == 0.0 {
                    steps.push(Step::Error);
                    return steps;
                }
                current /= next;
            }
            _ => {}
        }
        if !current.is_finite() {
            steps.push(Step::Error);
            return steps;
        }
        steps.push(Step::Value(round8(current)));
    }
    steps
}

/// The value `=` would commit: the last step, or a lone number as typed.
/// `None` when there is nothing to commit or evaluation failed.
pub fn final_result(expression: &str) -> Option<String> {
    let expression = expression.trim();
    if expression.is_empty() {
        return None;
    }
    match evaluate_steps(expression).last() {
        Some(Step::Value(v)) => Some(v.to_string()),
        Some(Step::Error) => None,
        None if !expression.contains(OPERATORS) => Some(expression.to_string()),
        None => None,
    }
}

/// Pretty form with `×`/`÷` and grouped digits.
pub fn format_expression(expression: &str) -> String {
    tokenize(expression)
        .into_iter()
        .map(|t| match t {
            "*" => " × ".to_string(),
            "/" => " ÷ ".to_string(),
            "+" | "-" => format!(" {} ", t),
            number => group_number_str(number),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub expression: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn formatted_expression(&self) -> String {
        format_expression(&self.expression)
    }

    pub fn formatted_result(&self) -> String {
        group_number_str(&self.result)
    }
}

/// Committed calculations, oldest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl History {
    /// Evaluates and records `expression`. Returns `None` (and records
    /// nothing) when there is no committable result.
    pub fn commit(&mut self, expression: &str) -> Option<&HistoryEntry> {
        let result = final_result(expression)?;
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id: self.next_id,
            expression: expression.trim().to_string(),
            result,
        });
        self.entries.last()
    }

    /// Deletes the entry with `id`. Returns false when there was none.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
