use crate::calc::error::CalcError;

/// How fractional yen are resolved.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    #[default]
    Round,
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Round => value.round(),
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxQuote {
    /// The amount read as tax-inclusive, with tax removed.
    pub excluding_tax: f64,
    /// The amount read as tax-exclusive, with tax added.
    pub including_tax: f64,
}

pub fn quote_tax(amount: f64, rate_percent: f64, rounding: Rounding) -> Result<TaxQuote, CalcError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CalcError::InvalidAmount(amount.to_string()));
    }
    if !rate_percent.is_finite() {
        return Err(CalcError::InvalidRate(rate_percent));
    }
    let rate = rate_percent / 100.0;
    Ok(TaxQuote {
        excluding_tax: rounding.apply(amount / (1.0 + rate)),
        including_tax: amount + rounding.apply(amount * rate),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountQuote {
    pub discount: f64,
    pub final_price: f64,
}

pub fn quote_discount(price: f64, rate_percent: f64) -> Result<DiscountQuote, CalcError> {
    if !price.is_finite() {
        return Err(CalcError::InvalidAmount(price.to_string()));
    }
    if !rate_percent.is_finite() {
        return Err(CalcError::InvalidRate(rate_percent));
    }
    let discount = price * rate_percent / 100.0;
    Ok(DiscountQuote {
        discount: discount.round(),
        final_price: (price - discount).round(),
    })
}

/// Parses an amount, ignoring `,` thousands separators.
pub fn parse_amount(input: &str) -> Result<f64, CalcError> {
    let cleaned: String = input.trim().chars().filter(|&c| c != ',').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidAmount(input.to_string()))
}

/// Formats a number with `,` every three integer digits, keeping any fraction.
pub fn group_digits(value: f64) -> String {
    group_number_str(&value.to_string())
}

/// Same as [`group_digits`] but over an already formatted number.
pub fn group_number_str(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_ten_percent_round() {
        let q = quote_tax(1100.0, 10.0, Rounding::Round).unwrap();
        assert_eq!(q.excluding_tax, 1000.0);
        assert_eq!(q.including_tax, 1210.0);
    }

    #[test]
    fn test_tax_rounding_modes() {
        // 105 / 1.08 = 97.22..., 105 * 0.08 = 8.4
        let floor = quote_tax(105.0, 8.0, Rounding::Floor).unwrap();
        assert_eq!(floor.excluding_tax, 97.0);
        assert_eq!(floor.including_tax, 113.0);
        let ceil = quote_tax(105.0, 8.0, Rounding::Ceil).unwrap();
        assert_eq!(ceil.excluding_tax, 98.0);
        assert_eq!(ceil.including_tax, 114.0);
    }

    #[test]
    fn test_tax_rejects_non_positive_amounts() {
        assert!(matches!(quote_tax(0.0, 10.0, Rounding::Round), Err(CalcError::InvalidAmount(_))));
        assert!(matches!(quote_tax(-5.0, 10.0, Rounding::Round), Err(CalcError::InvalidAmount(_))));
        assert!(matches!(quote_tax(f64::NAN, 10.0, Rounding::Round), Err(CalcError::InvalidAmount(_))));
    }

    #[test]
    fn test_tax_rejects_non_finite_rate() {
        assert_eq!(
            quote_tax(100.0, f64::INFINITY, Rounding::Round),
            Err(CalcError::InvalidRate(f64::INFINITY))
        );
    }

    #[test]
    fn test_discount() {
        let q = quote_discount(1980.0, 20.0).unwrap();
        assert_eq!(q.discount, 396.0);
        assert_eq!(q.final_price, 1584.0);
    }

    #[test]
    fn test_parse_amount_strips_commas() {
        assert_eq!(parse_amount("1,234,567"), Ok(1234567.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(1000.0), "1,000");
        assert_eq!(group_digits(1234567.0), "1,234,567");
        assert_eq!(group_digits(-1234.5), "-1,234.5");
        assert_eq!(group_digits(123456.25), "123,456.25");
    }
}
