use chrono::NaiveDate;

/// Parse a calendar day from a date or datetime string
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            value
                .get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        })
}

/// Expand a date range into per-day candidates, inclusive on both ends
///
/// Unparseable or inverted ranges yield an empty calendar. The result is
/// clamped to `limit` days counted from the start of the range.
pub fn candidate_dates(start: Option<&str>, end: Option<&str>, limit: usize) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };

    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end && dates.len() < limit {
        dates.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let dates = candidate_dates(Some("2024-06-01"), Some("2024-06-03"), 35);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn single_day_range_yields_one_candidate() {
        let dates = candidate_dates(Some("2024-06-01"), Some("2024-06-01"), 35);
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn datetime_strings_are_truncated_to_days() {
        let dates = candidate_dates(
            Some("2024-06-01T10:00:00Z"),
            Some("2024-06-02T08:00:00Z"),
            35,
        );
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        assert!(candidate_dates(Some("2024-06-03"), Some("2024-06-01"), 35).is_empty());
    }

    #[test]
    fn unparseable_range_yields_nothing() {
        assert!(candidate_dates(Some("next friday"), Some("2024-06-01"), 35).is_empty());
        assert!(candidate_dates(None, Some("2024-06-01"), 35).is_empty());
    }

    #[test]
    fn calendar_is_clamped_to_the_limit() {
        let dates = candidate_dates(Some("2024-06-01"), Some("2024-12-31"), 35);
        assert_eq!(dates.len(), 35);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
