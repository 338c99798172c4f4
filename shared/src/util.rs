/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Validate a `YYYY-MM-DD` business date string
pub fn is_valid_business_date(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Validator hook for `YYYY-MM-DD` date fields on create payloads
pub fn validate_business_date(s: &str) -> Result<(), validator::ValidationError> {
    if is_valid_business_date(s) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("business_date"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_date_format() {
        assert!(is_valid_business_date("2026-02-28"));
        assert!(!is_valid_business_date("2026-02-30"));
        assert!(!is_valid_business_date("28/02/2026"));
        assert!(!is_valid_business_date(""));
    }
}
