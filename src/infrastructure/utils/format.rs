use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders an ISO 8601 timestamp as "January 5, 2024". Unparseable input is
/// returned unchanged so display code never fails on odd data.
pub fn format_date(date: &str) -> String {
    match date.parse::<DateTime<Utc>>() {
        Ok(parsed) => format!(
            "{} {}, {}",
            MONTH_NAMES[parsed.month0() as usize],
            parsed.day(),
            parsed.year()
        ),
        Err(_) => date.to_string(),
    }
}

/// Renders a "YYYY-MM" month string as "January 2024". Unparseable input is
/// returned unchanged.
pub fn format_month(month: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(parsed) => format!("{} {}", MONTH_NAMES[parsed.month0() as usize], parsed.year()),
        Err(_) => month.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(format_date("2024-01-05T12:30:00Z"), "January 5, 2024");
        assert_eq!(format_date("2023-11-30T23:59:59.000Z"), "November 30, 2023");
    }

    #[test]
    fn formats_month_strings() {
        assert_eq!(format_month("2024-01"), "January 2024");
        assert_eq!(format_month("2019-12"), "December 2019");
    }

    #[test]
    fn passes_unparseable_input_through() {
        assert_eq!(format_date("Present"), "Present");
        assert_eq!(format_month(""), "");
    }
}
