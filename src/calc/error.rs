use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("amount must be a positive number, got '{0}'")]
    InvalidAmount(String),
    #[error("rate must be a finite number, got {0}")]
    InvalidRate(f64),
    #[error("date {0} is in the future")]
    FutureDate(chrono::NaiveDate),
    #[error("input is empty")]
    EmptyInput,
    #[error("failed to encode JSON: {0}")]
    Json(String),
}
