use chrono::{NaiveDate, NaiveDateTime};
use metacsv_format::{get_locale, DateParseError, DatePattern, PatternField, EN_US};
use pretty_assertions::assert_eq;

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn iso_datetime_formats_and_parses() {
    let pattern = DatePattern::iso_datetime();
    let value = datetime(2021, 3, 7, 14, 5, 9);
    assert_eq!(pattern.format(&value, &EN_US), "2021-03-07T14:05:09");
    assert_eq!(pattern.parse("2021-03-07T14:05:09", &EN_US), Ok(value));
}

#[test]
fn date_only_patterns_resolve_to_midnight() {
    let pattern = DatePattern::iso_date();
    assert_eq!(
        pattern.parse("2020-02-29", &EN_US),
        Ok(datetime(2020, 2, 29, 0, 0, 0))
    );
}

#[test]
fn time_only_patterns_resolve_against_the_epoch() {
    let pattern = DatePattern::compile("HH:mm").unwrap();
    assert_eq!(pattern.parse("23:59", &EN_US), Ok(datetime(1970, 1, 1, 23, 59, 0)));
}

#[test]
fn french_month_names_round_trip() {
    let fr = get_locale("fr_FR").unwrap();
    let pattern = DatePattern::compile("EEEE d MMMM yyyy").unwrap();
    let value = datetime(2021, 8, 16, 0, 0, 0);
    let text = pattern.format(&value, fr);
    assert_eq!(text, "lundi 16 août 2021");
    assert_eq!(pattern.parse(&text, fr), Ok(value));
    assert_eq!(pattern.parse("LUNDI 16 AOÛT 2021", fr), Ok(value));
}

#[test]
fn abbreviated_names_and_twelve_hour_clock() {
    let pattern = DatePattern::compile("EEE, MMM d, yy h:mm a").unwrap();
    let value = datetime(1999, 12, 31, 23, 30, 0);
    let text = pattern.format(&value, &EN_US);
    assert_eq!(text, "Fri, Dec 31, 99 11:30 PM");
    assert_eq!(pattern.parse(&text, &EN_US), Ok(value));

    let noon = datetime(2000, 1, 1, 12, 0, 0);
    assert_eq!(pattern.format(&noon, &EN_US), "Sat, Jan 1, 00 12:00 PM");
    let midnight = datetime(2000, 1, 1, 0, 15, 0);
    assert_eq!(pattern.format(&midnight, &EN_US), "Sat, Jan 1, 00 12:15 AM");
    assert_eq!(pattern.parse("Sat, Jan 1, 00 12:15 AM", &EN_US), Ok(midnight));
}

#[test]
fn adjacent_numeric_fields_read_their_exact_width() {
    let pattern = DatePattern::compile("yyyyMMddHHmmss").unwrap();
    let value = datetime(2022, 11, 5, 7, 8, 9);
    assert_eq!(pattern.format(&value, &EN_US), "20221105070809");
    assert_eq!(pattern.parse("20221105070809", &EN_US), Ok(value));
}

#[test]
fn fractions_of_second_scale_to_the_pattern_width() {
    let pattern = DatePattern::compile("HH:mm:ss.SSS").unwrap();
    let value = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_milli_opt(10, 20, 30, 45)
        .unwrap();
    assert_eq!(pattern.format(&value, &EN_US), "10:20:30.045");
    assert_eq!(pattern.parse("10:20:30.045", &EN_US), Ok(value));
}

#[test]
fn parse_failures_name_the_offending_part() {
    let pattern = DatePattern::iso_date();
    assert_eq!(
        pattern.parse("2021/01/01", &EN_US),
        Err(DateParseError::ExpectedLiteral {
            expected: "-".to_string(),
            position: 4
        })
    );
    assert_eq!(
        pattern.parse("2021-xx-01", &EN_US),
        Err(DateParseError::ExpectedDigits {
            field: PatternField::Month,
            position: 5
        })
    );
    assert_eq!(
        pattern.parse("2021-01-01 ", &EN_US),
        Err(DateParseError::TrailingText { position: 10 })
    );
    assert_eq!(
        pattern.parse("2021-02-30", &EN_US),
        Err(DateParseError::InvalidDate {
            year: 2021,
            month: 2,
            day: 30
        })
    );
}

#[test]
fn weekday_must_agree_with_the_date() {
    let pattern = DatePattern::compile("EEE yyyy-MM-dd").unwrap();
    assert_eq!(
        pattern.parse("Tue 2021-08-16", &EN_US),
        Err(DateParseError::WeekdayMismatch)
    );
    assert!(pattern.parse("Mon 2021-08-16", &EN_US).is_ok());
}

#[test]
fn out_of_range_clock_values_are_rejected() {
    let pattern = DatePattern::compile("HH:mm").unwrap();
    assert!(matches!(
        pattern.parse("24:00", &EN_US),
        Err(DateParseError::InvalidTime { .. })
    ));
    let pattern = DatePattern::compile("h:mm a").unwrap();
    assert!(matches!(
        pattern.parse("13:00 PM", &EN_US),
        Err(DateParseError::InvalidTime { .. })
    ));
}
