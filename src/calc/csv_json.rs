use crate::calc::error::CalcError;
use serde_json::{Map, Value};

/// Splits one CSV line. Inside double quotes the delimiter is literal and
/// `""` is an escaped quote. Every field is trimmed.
pub fn parse_row(row: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Converts CSV text to rows of ordered column → value maps.
pub fn csv_to_records(
    csv: &str,
    delimiter: char,
    has_header: bool,
) -> Result<Vec<Map<String, Value>>, CalcError> {
    let mut lines = csv.trim().lines();
    let first = lines.next().ok_or(CalcError::EmptyInput)?;
    let first_row = parse_row(first, delimiter);

    let (headers, pending) = if has_header {
        (first_row, None)
    } else {
        let names = (1..=first_row.len()).map(|i| format!("column{}", i)).collect();
        (names, Some(first))
    };

    let records = pending
        .into_iter()
        .chain(lines)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values = parse_row(line, delimiter);
            let mut record = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = values.get(i).cloned().unwrap_or_default();
                record.insert(header.clone(), Value::String(value));
            }
            record
        })
        .collect();
    Ok(records)
}

/// Pretty-printed JSON array of objects, column order preserved.
pub fn csv_to_json(csv: &str, delimiter: char, has_header: bool) -> Result<String, CalcError> {
    let records = csv_to_records(csv, delimiter, has_header)?;
    serde_json::to_string_pretty(&records).map_err(|e| CalcError::Json(e.to_string()))
}
