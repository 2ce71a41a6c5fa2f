use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parses `YYYY-MM-DD`, or the keyword `today`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2025-09-01"),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
        assert_eq!(parse_date("01/09/2025"), None);
        assert_eq!(parse_date("Today"), Some(today()));
    }
}
