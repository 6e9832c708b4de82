//! Phone number normalization and amount validation.
//!
//! Subscriber numbers are canonicalized to the 12-digit form
//! `254[17]XXXXXXXX` before any provider call. Rejection never guesses
//! a default; callers get back the exact accepted input forms.

/// Normalize a raw phone number to the canonical `254XXXXXXXXX` form.
///
/// Accepted inputs (after whitespace and leading `+` stripping):
/// `07XXXXXXXX`, `01XXXXXXXX`, `2547XXXXXXXX`, `2541XXXXXXXX`.
pub fn normalize_phone(raw: &str) -> Result<String, String> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    let canonical = if is_local_format(cleaned) {
        format!("254{}", &cleaned[1..])
    } else {
        cleaned.to_string()
    };

    if is_canonical(&canonical) {
        Ok(canonical)
    } else {
        Err(
            "Invalid phone number format. Use 07XXXXXXXX, 01XXXXXXXX, 2547XXXXXXXX or 2541XXXXXXXX."
                .to_string(),
        )
    }
}

/// Local format: leading 0, subscriber prefix 7 or 1, 8 more digits.
fn is_local_format(s: &str) -> bool {
    s.len() == 10
        && s.as_bytes()[0] == b'0'
        && matches!(s.as_bytes()[1], b'7' | b'1')
        && s.bytes().all(|b| b.is_ascii_digit())
}

/// Canonical form: 254, subscriber prefix 7 or 1, 8 more digits.
fn is_canonical(s: &str) -> bool {
    s.len() == 12
        && s.starts_with("254")
        && matches!(s.as_bytes()[3], b'7' | b'1')
        && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse and validate a charge amount.
///
/// Accepts JSON numbers or numeric strings; the amount must be a
/// finite number of at least 1 KES. The error message is distinct from
/// phone rejection so callers can tell the two failure classes apart.
pub fn parse_amount(value: &serde_json::Value) -> Result<f64, String> {
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(a) if a.is_finite() && a >= 1.0 => Ok(a),
        _ => Err("Amount must be a number of at least 1 KES.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_local_formats() {
        assert_eq!(normalize_phone("0712345678"), Ok("254712345678".into()));
        assert_eq!(normalize_phone("0112345678"), Ok("254112345678".into()));
    }

    #[test]
    fn test_normalize_canonical_passthrough() {
        assert_eq!(normalize_phone("254712345678"), Ok("254712345678".into()));
        assert_eq!(normalize_phone("254112345678"), Ok("254112345678".into()));
    }

    #[test]
    fn test_normalize_strips_plus_and_whitespace() {
        assert_eq!(normalize_phone("+254712345678"), Ok("254712345678".into()));
        assert_eq!(normalize_phone(" 0712 345 678 "), Ok("254712345678".into()));
        assert_eq!(normalize_phone("\t+254 712 345 678"), Ok("254712345678".into()));
    }

    #[test]
    fn test_normalize_rejects_bad_shapes() {
        // Missing leading zero / country code
        assert!(normalize_phone("712345678").is_err());
        // Unsupported subscriber prefix
        assert!(normalize_phone("0812345678").is_err());
        assert!(normalize_phone("254812345678").is_err());
        // Wrong lengths
        assert!(normalize_phone("071234567").is_err());
        assert!(normalize_phone("07123456789").is_err());
        assert!(normalize_phone("25471234567").is_err());
        assert!(normalize_phone("2547123456789").is_err());
        // Local form behind a country-code prefix
        assert!(normalize_phone("+2540712345678").is_err());
        // Garbage
        assert!(normalize_phone("abc").is_err());
        assert!(normalize_phone("071234567a").is_err());
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("+").is_err());
    }

    #[test]
    fn test_rejection_names_accepted_forms() {
        let err = normalize_phone("12345").unwrap_err();
        assert!(err.contains("07XXXXXXXX"));
        assert!(err.contains("01XXXXXXXX"));
        assert!(err.contains("2547XXXXXXXX"));
        assert!(err.contains("2541XXXXXXXX"));
    }

    #[test]
    fn test_parse_amount_accepts_valid() {
        assert_eq!(parse_amount(&json!(1)), Ok(1.0));
        assert_eq!(parse_amount(&json!(1.5)), Ok(1.5));
        assert_eq!(parse_amount(&json!(1000)), Ok(1000.0));
        assert_eq!(parse_amount(&json!("1000")), Ok(1000.0));
        assert_eq!(parse_amount(&json!(" 25.5 ")), Ok(25.5));
    }

    #[test]
    fn test_parse_amount_rejects_invalid() {
        assert!(parse_amount(&json!(0)).is_err());
        assert!(parse_amount(&json!(-5)).is_err());
        assert!(parse_amount(&json!(0.99)).is_err());
        assert!(parse_amount(&json!("abc")).is_err());
        assert!(parse_amount(&json!(null)).is_err());
        assert!(parse_amount(&json!(true)).is_err());
        assert!(parse_amount(&json!([1])).is_err());
    }

    #[test]
    fn test_parse_amount_error_is_distinct() {
        let err = parse_amount(&json!("abc")).unwrap_err();
        assert!(err.contains("at least 1 KES"));
        assert!(!err.contains("phone"));
    }
}
