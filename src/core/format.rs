//! Text rendering of amounts and dates.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::SepaError;

/// Format an amount with exactly two fractional digits, rounding half away
/// from zero.
///
/// Fails with [`SepaError::Arithmetic`] when the integer part is too large
/// for a `Decimal` to also carry two fractional digits.
pub fn format_amount(amount: Decimal) -> Result<String, SepaError> {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.scale() != 2 {
        return Err(SepaError::Arithmetic(format!(
            "amount {amount} does not fit two decimal places"
        )));
    }
    Ok(rounded.to_string())
}

/// `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DDTHH:MM:SS`, fractional seconds dropped.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_cases() {
        assert_eq!(format_amount(dec!(69)).unwrap(), "69.00");
        assert_eq!(format_amount(dec!(123.83)).unwrap(), "123.83");
        assert_eq!(format_amount(dec!(123.834)).unwrap(), "123.83");
        assert_eq!(format_amount(dec!(123.835)).unwrap(), "123.84");
        assert_eq!(format_amount(dec!(0.005)).unwrap(), "0.01");
        assert_eq!(format_amount(dec!(1500.0)).unwrap(), "1500.00");
        assert_eq!(format_amount(dec!(0)).unwrap(), "0.00");
    }

    #[test]
    fn amounts_beyond_two_decimal_precision() {
        let big: Decimal = "1000000000000000000000000000".parse().unwrap();
        let err = format_amount(big).unwrap_err();
        assert!(matches!(err, SepaError::Arithmetic(_)));
        assert_eq!(
            err.to_string(),
            "arithmetic error: amount 1000000000000000000000000000 does not fit two decimal places"
        );
        assert!(format_amount(Decimal::MAX).is_err());

        // One digit less still fits.
        let fits: Decimal = "100000000000000000000000000".parse().unwrap();
        assert_eq!(format_amount(fits).unwrap(), "100000000000000000000000000.00");
    }

    #[test]
    fn dates_are_truncated() {
        let ts = NaiveDate::from_ymd_opt(2022, 6, 15)
            .unwrap()
            .and_hms_milli_opt(22, 5, 9, 731)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2022-06-15T22:05:09");
        assert_eq!(format_date(ts.date()), "2022-06-15");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(987, 1, 2).unwrap()),
            "0987-01-02"
        );
    }
}
