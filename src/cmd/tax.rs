use crate::calc::pricing::{
    group_digits, parse_amount, quote_discount, quote_tax, DiscountQuote, Rounding, TaxQuote,
};
use crate::i18n::Locale;
use anyhow::Result;

pub fn run(amount: &str, rate: f64, rounding: Rounding, locale: Locale) -> Result<()> {
    let value = parse_amount(amount)?;
    let quote = quote_tax(value, rate, rounding)?;
    write_tax(value, rate, &quote, locale, &mut std::io::stdout())
}

pub fn run_discount(price: &str, rate: f64, locale: Locale) -> Result<()> {
    let value = parse_amount(price)?;
    let quote = quote_discount(value, rate)?;
    write_discount(value, rate, &quote, locale, &mut std::io::stdout())
}

pub(crate) fn write_tax<W: std::io::Write>(
    amount: f64,
    rate: f64,
    quote: &TaxQuote,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let (input, excluding, including) = match locale {
        Locale::Ja => ("金額", "税抜", "税込"),
        Locale::En => ("Amount", "Excluding tax", "Including tax"),
    };
    writeln!(out, "{}: ¥{} ({}%)", input, group_digits(amount), rate)?;
    writeln!(out, "{}: ¥{}", excluding, group_digits(quote.excluding_tax))?;
    writeln!(out, "{}: ¥{}", including, group_digits(quote.including_tax))?;
    Ok(())
}

pub(crate) fn write_discount<W: std::io::Write>(
    price: f64,
    rate: f64,
    quote: &DiscountQuote,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let (input, discount, final_price) = match locale {
        Locale::Ja => ("定価", "割引額", "割引後"),
        Locale::En => ("Price", "Discount", "Final price"),
    };
    writeln!(out, "{}: ¥{} ({}% off)", input, group_digits(price), rate)?;
    writeln!(out, "{}: ¥{}", discount, group_digits(quote.discount))?;
    writeln!(out, "{}: ¥{}", final_price, group_digits(quote.final_price))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tax() {
        let quote = quote_tax(1100.0, 10.0, Rounding::Round).unwrap();
        let mut buf = Vec::new();
        write_tax(1100.0, 10.0, &quote, Locale::En, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "Amount: ¥1,100 (10%)\nExcluding tax: ¥1,000\nIncluding tax: ¥1,210\n"
        );
    }

    #[test]
    fn test_write_discount_ja() {
        let quote = quote_discount(1980.0, 20.0).unwrap();
        let mut buf = Vec::new();
        write_discount(1980.0, 20.0, &quote, Locale::Ja, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("定価: ¥1,980 (20% off)"));
        assert!(out.contains("割引額: ¥396"));
        assert!(out.contains("割引後: ¥1,584"));
    }

    #[test]
    fn test_run_rejects_bad_amounts() {
        assert!(run("abc", 10.0, Rounding::Round, Locale::En).is_err());
        assert!(run("0", 10.0, Rounding::Round, Locale::En).is_err());
        assert!(run_discount("x", 20.0, Locale::En).is_err());
    }
}
