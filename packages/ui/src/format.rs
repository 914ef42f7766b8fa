//! Display formatting for tables and headers.

use chrono::{DateTime, NaiveDate, Utc};

/// Amount with thousands separators. Whole amounts drop the fraction,
/// anything else keeps two digits: `1 250 000` or `1 250 000.50`.
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (whole != 0 || frac != 0) {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac != 0 {
        out.push_str(&format!(".{frac:02}"));
    }
    out
}

/// `money`, with a dash for absent values.
pub fn money_opt(amount: Option<f64>) -> String {
    match amount {
        Some(v) => money(v),
        None => "\u{2013}".to_string(),
    }
}

/// Business dates render day-first, the way the crews write them.
pub fn date(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

pub fn date_opt(d: Option<NaiveDate>) -> String {
    match d {
        Some(d) => date(d),
        None => "\u{2013}".to_string(),
    }
}

pub fn datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "0");
        assert_eq!(money(999.0), "999");
        assert_eq!(money(1000.0), "1 000");
        assert_eq!(money(1_250_000.0), "1 250 000");
    }

    #[test]
    fn money_keeps_cents_only_when_present() {
        assert_eq!(money(1234.5), "1 234.50");
        assert_eq!(money(0.05), "0.05");
        assert_eq!(money(10.999), "11");
    }

    #[test]
    fn money_handles_negatives() {
        assert_eq!(money(-1500.0), "-1 500");
        assert_eq!(money(-0.004), "0");
    }

    #[test]
    fn dates_render_day_first() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date(d), "07.03.2024");
        assert_eq!(date_opt(None), "\u{2013}");
        let dt = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(datetime(dt), "07.03.2024 09:05");
    }
}
