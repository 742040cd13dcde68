#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use clap::ValueEnum;
    use tasktime::libs::entry::{EntryField, LogEntry};
    use tasktime::libs::formatter::{format_date, format_duration, format_time, parse_duration};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_format_duration_components() {
        assert_eq!(format_duration(&Duration::seconds(59)), "00:00:59");
        assert_eq!(format_duration(&Duration::minutes(61)), "01:01:00");
        assert_eq!(format_duration(&(Duration::hours(9) + Duration::seconds(7))), "09:00:07");
    }

    #[test]
    fn test_format_duration_large_hours() {
        assert_eq!(format_duration(&Duration::hours(100)), "100:00:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::seconds(-30)), "00:00:00");
    }

    #[test]
    fn test_format_duration_floors_fractions() {
        assert_eq!(format_duration(&Duration::milliseconds(1_999)), "00:00:01");
    }

    #[test]
    fn test_parse_duration_inverts_format() {
        for seconds in [0, 5, 59, 60, 3_599, 3_600, 86_399, 360_001] {
            let duration = Duration::seconds(seconds);
            assert_eq!(parse_duration(&format_duration(&duration)), Some(duration));
        }
    }

    #[test]
    fn test_parse_duration_rejects_free_text() {
        assert_eq!(parse_duration("1h 30m"), None);
        assert_eq!(parse_duration("00:30"), None);
    }

    #[test]
    fn test_format_time_and_date() {
        let at = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap().and_hms_opt(8, 5, 3).unwrap();
        assert_eq!(format_time(&at), "08:05:03");
        assert_eq!(format_date(&at.date()), "2025-07-04");
    }

    #[test]
    fn test_entry_from_reversed_session() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let entry = LogEntry::from_session("Clock skew", start, start - Duration::minutes(5));
        assert_eq!(entry.duration, "00:00:00");
        assert_eq!(entry.stop_time, "11:55:00");
    }

    #[test]
    fn test_entry_field_names() {
        assert_eq!(EntryField::from_str("startTime", false), Ok(EntryField::StartTime));
        assert_eq!(EntryField::from_str("stop-time", false), Ok(EntryField::StopTime));
        assert_eq!(EntryField::from_str("Duration", true), Ok(EntryField::Duration));
        assert!(EntryField::from_str("owner", true).is_err());
        assert_eq!(EntryField::StartTime.to_string(), "Start Time");
    }
}
