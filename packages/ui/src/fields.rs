//! Field-level parsing shared by the forms.
//!
//! Form state keeps raw strings so the user can type freely. Money fields
//! are gated as they are typed ([`apply_amount_edit`]), so only text that
//! coerces to a number ever lands in state; the submit-time helpers turn
//! each field into its typed value or a message worth showing.

use api::models::dates;
use chrono::NaiveDate;

/// Trimmed non-empty string, or `None`. Optional text fields send null
/// instead of an empty string.
pub fn opt_string(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Optional date field. Blank is fine; anything else must parse.
pub fn parse_date_field(raw: &str, what: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    dates::parse_date(raw)
        .map(Some)
        .ok_or_else(|| format!("Enter the {what} as YYYY-MM-DD."))
}

pub fn require_date_field(raw: &str, what: &str) -> Result<NaiveDate, String> {
    parse_date_field(raw, what)?.ok_or_else(|| format!("The {what} is required."))
}

/// Grouping spaces and a decimal comma are fine, since that is how amounts
/// get typed from paper. Negative amounts never make sense in these books.
/// `None` means the text does not coerce; blank coerces to an absent value.
fn coerce_amount(raw: &str) -> Option<Option<f64>> {
    let cleaned: String = raw.replace(' ', "").replace(',', ".");
    if cleaned.is_empty() {
        return Some(None);
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(Some(v)),
        _ => None,
    }
}

/// Optional money field.
pub fn parse_amount_field(raw: &str, what: &str) -> Result<Option<f64>, String> {
    coerce_amount(raw).ok_or_else(|| format!("Enter the {what} as a non-negative number."))
}

/// Update-time gate for money inputs: the edit lands only while the new text
/// still coerces, so the value shown can never differ from the value a
/// submit would send.
pub fn apply_amount_edit(field: &mut String, raw: &str) {
    if coerce_amount(raw).is_some() {
        *field = raw.to_string();
    }
}

/// Money field that must hold a positive amount.
pub fn require_amount_field(raw: &str, what: &str) -> Result<f64, String> {
    match parse_amount_field(raw, what)? {
        Some(v) if v > 0.0 => Ok(v),
        _ => Err(format!("The {what} must be greater than zero.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_string_trims_and_drops_blank() {
        assert_eq!(opt_string("  Lenina 5 "), Some("Lenina 5".to_string()));
        assert_eq!(opt_string("   "), None);
        assert_eq!(opt_string(""), None);
    }

    #[test]
    fn blank_date_is_none_garbage_is_an_error() {
        assert_eq!(parse_date_field("", "start date"), Ok(None));
        assert_eq!(
            parse_date_field("2024-05-10", "start date"),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 10))
        );
        assert!(parse_date_field("10.05.2024x", "start date").is_err());
        assert!(require_date_field("", "date").is_err());
    }

    #[test]
    fn amounts_accept_spaces_and_decimal_comma() {
        assert_eq!(
            parse_amount_field("1 500 000", "amount"),
            Ok(Some(1_500_000.0))
        );
        assert_eq!(parse_amount_field("1500,50", "amount"), Ok(Some(1500.5)));
        assert_eq!(parse_amount_field("", "amount"), Ok(None));
    }

    #[test]
    fn bad_amounts_are_rejected() {
        assert!(parse_amount_field("-5", "amount").is_err());
        assert!(parse_amount_field("lots", "amount").is_err());
        assert!(require_amount_field("0", "amount").is_err());
        assert!(require_amount_field("", "amount").is_err());
        assert_eq!(require_amount_field("250,75", "amount"), Ok(250.75));
    }

    #[test]
    fn amount_edits_only_land_when_coercible() {
        let mut field = String::new();
        apply_amount_edit(&mut field, "1 200");
        assert_eq!(field, "1 200");

        // A stray letter or sign leaves the previous text in place.
        apply_amount_edit(&mut field, "1 200x");
        apply_amount_edit(&mut field, "-1");
        assert_eq!(field, "1 200");

        // A trailing comma still coerces, so mid-edit decimals type through.
        apply_amount_edit(&mut field, "1 200,");
        assert_eq!(field, "1 200,");

        apply_amount_edit(&mut field, "");
        assert_eq!(field, "");
    }
}
