/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format an RFC 3339 timestamp to DD.MM.YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(iso_date: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(iso_date) {
        dt.format("%d.%m.%Y %H:%M:%S").to_string()
    } else {
        iso_date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_datetime_with_offset() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26+00:00"),
            "15.03.2024 14:02:26"
        );
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
