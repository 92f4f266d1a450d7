use chrono::NaiveDate;

use crate::error::{AppError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields, so the shape is checked up front.
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(AppError::parse(value, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| AppError::parse(value, err.to_string()))
}

/// Seconds since the Unix epoch at UTC midnight of the given `YYYY-MM-DD` date.
pub fn date_to_unix(value: &str) -> Result<i64> {
    let date = parse_calendar_date(value)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::parse(value, "unable to construct midnight timestamp"))?;
    Ok(midnight.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn calendar_date() -> impl Strategy<Value = (i32, u32, u32)> {
        (1970i32..2100, 1u32..=12, 1u32..=28)
    }

    #[test]
    fn converts_dates_to_utc_midnight() {
        assert_eq!(date_to_unix("1970-01-01").unwrap(), 0);
        assert_eq!(date_to_unix("2023-01-01").unwrap(), 1_672_531_200);
        assert_eq!(date_to_unix("2023-01-31").unwrap(), 1_675_123_200);
        assert_eq!(date_to_unix("2024-02-29").unwrap(), 1_709_164_800);
    }

    #[test]
    fn later_dates_map_to_later_instants() {
        let start = date_to_unix("2022-12-31").unwrap();
        let end = date_to_unix("2023-01-01").unwrap();
        assert_eq!(end - start, 86_400);
    }

    #[test]
    fn rejects_other_layouts() {
        for bad in [
            "01-01-2023",
            "01/01/2023",
            "2023-1-01",
            "2023/01/01",
            "2023-01-01T00:00:00",
            "",
        ] {
            let err = date_to_unix(bad).expect_err("date should be rejected");
            assert!(
                matches!(err, AppError::Parse { ref value, .. } if value == bad),
                "unexpected error for {bad}: {err}"
            );
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(matches!(
            date_to_unix("2023-02-30"),
            Err(AppError::Parse { .. })
        ));
        assert!(matches!(
            date_to_unix("2023-13-01"),
            Err(AppError::Parse { .. })
        ));
    }

    proptest! {
        #[test]
        fn ordered_dates_map_to_ordered_midnights(a in calendar_date(), b in calendar_date()) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let start_text = format!("{:04}-{:02}-{:02}", start.0, start.1, start.2);
            let end_text = format!("{:04}-{:02}-{:02}", end.0, end.1, end.2);

            let from = date_to_unix(&start_text).unwrap();
            let to = date_to_unix(&end_text).unwrap();
            prop_assert!(from <= to);
            prop_assert_eq!(from % 86_400, 0);

            let expected = NaiveDate::from_ymd_opt(start.0, start.1, start.2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
                .timestamp();
            prop_assert_eq!(from, expected);
        }
    }
}
