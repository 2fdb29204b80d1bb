use chrono::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidDateError {
    #[error("Invalid date format: `{0}`. Use: YYYY-MM-DD, DD-MM-YYYY, DD/MM/YYYY or DD/MM/YY")]
    Format(String),
    #[error("The date `{0}` does not exist")]
    OutOfRange(String),
}

fn all_digits(parts: &[&str], lengths: [usize; 3]) -> bool {
    parts.len() == 3
        && parts
            .iter()
            .zip(lengths.iter())
            .all(|(part, len)| part.len() == *len && part.chars().all(|c| c.is_ascii_digit()))
}

/// Two digit years below 50 belong to this century, the rest to the previous one
fn expand_short_year(year: i32) -> i32 {
    if year < 50 {
        2000 + year
    } else {
        1900 + year
    }
}

/// Parses the date formats accepted for events:
/// `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY` and `DD/MM/YY`.
pub fn parse_event_date(datestr: &str) -> Result<NaiveDate, InvalidDateError> {
    let datestr = datestr.trim();
    let invalid_format = || InvalidDateError::Format(datestr.to_string());

    let dashes = datestr.split('-').collect::<Vec<_>>();
    let slashes = datestr.split('/').collect::<Vec<_>>();

    let (year, month, day, short_year) = if all_digits(&dashes, [4, 2, 2]) {
        (dashes[0], dashes[1], dashes[2], false)
    } else if all_digits(&dashes, [2, 2, 4]) {
        (dashes[2], dashes[1], dashes[0], false)
    } else if all_digits(&slashes, [2, 2, 4]) {
        (slashes[2], slashes[1], slashes[0], false)
    } else if all_digits(&slashes, [2, 2, 2]) {
        (slashes[2], slashes[1], slashes[0], true)
    } else {
        return Err(invalid_format());
    };

    let mut year = year.parse::<i32>().map_err(|_| invalid_format())?;
    if short_year {
        year = expand_short_year(year);
    }
    let month = month.parse::<u32>().map_err(|_| invalid_format())?;
    let day = day.parse::<u32>().map_err(|_| invalid_format())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidDateError::OutOfRange(datestr.to_string()))
}

/// Signed number of calendar days from `today` until `date`
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            ("2025-12-31", ymd(2025, 12, 31)),
            ("2020-02-29", ymd(2020, 2, 29)),
            ("31-12-2025", ymd(2025, 12, 31)),
            ("01/02/2026", ymd(2026, 2, 1)),
            ("01/02/26", ymd(2026, 2, 1)),
            ("15/06/49", ymd(2049, 6, 15)),
            ("15/06/50", ymd(1950, 6, 15)),
            ("  2026-10-16 ", ymd(2026, 10, 16)),
        ];

        for (datestr, expected) in valid_dates {
            assert_eq!(parse_event_date(datestr), Ok(expected), "{}", datestr);
        }
    }

    #[test]
    fn it_rejects_invalid_formats() {
        let invalid_dates = vec![
            "",
            "2026-1-1",
            "2026/10/16",
            "16.10.2026",
            "16-10-26",
            "1/2/2026",
            "2026-10-16T00:00:00",
            "abcd-ef-gh",
        ];

        for datestr in invalid_dates {
            assert!(
                matches!(parse_event_date(datestr), Err(InvalidDateError::Format(_))),
                "{}",
                datestr
            );
        }
    }

    #[test]
    fn it_rejects_impossible_dates() {
        let impossible = vec!["2021-02-29", "2026-13-01", "32/01/2026", "00-01-2026"];

        for datestr in impossible {
            assert!(
                matches!(parse_event_date(datestr), Err(InvalidDateError::OutOfRange(_))),
                "{}",
                datestr
            );
        }
    }

    #[test]
    fn counts_signed_calendar_days() {
        let today = ymd(2026, 10, 16);
        assert_eq!(days_until(ymd(2026, 10, 16), today), 0);
        assert_eq!(days_until(ymd(2026, 10, 21), today), 5);
        assert_eq!(days_until(ymd(2026, 10, 15), today), -1);
        assert_eq!(days_until(ymd(2027, 1, 1), today), 77);
    }
}
