//! Startup seed catalogue.

use chrono::{DateTime, SecondsFormat, Utc};

/// Cartridges inserted on every startup, in insertion order.
///
/// Existing rows with the same name are left untouched, so their
/// `cycle_start_date` keeps the value from the first run.
pub const SEED_FILTER_NAMES: [&str; 4] = [
    r#"Filtro polipropileno 5 micras 10"x2.75""#,
    r#"Filtro carbón block de 10"x2.75""#,
    r#"Filtro granulado de 10"x2.75""#,
    r#"Postfiltro calcita de 10"x2.75""#,
];

/// Formats a timestamp as UTC with millisecond precision and a `Z` suffix,
/// e.g. `2024-03-01T08:15:30.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_uses_millis_and_z_suffix() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 15, 30)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(123))
            .unwrap();

        assert_eq!(format_timestamp(at), "2024-03-01T08:15:30.123Z");
    }

    #[test]
    fn test_seed_names_are_unique() {
        let mut names = SEED_FILTER_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), SEED_FILTER_NAMES.len());
    }
}
