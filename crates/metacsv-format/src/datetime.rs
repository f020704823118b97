use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::locale::DateLocale;

/// A single calendar/clock field of a [`DatePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternField {
    /// `y`
    Year,
    /// `M`
    Month,
    /// `d`
    Day,
    /// `E`
    Weekday,
    /// `H` (0-23)
    Hour,
    /// `h` (1-12)
    Hour12,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `S`
    Fraction,
    /// `a`
    AmPm,
}

impl PatternField {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'y' => PatternField::Year,
            'M' => PatternField::Month,
            'd' => PatternField::Day,
            'E' => PatternField::Weekday,
            'H' => PatternField::Hour,
            'h' => PatternField::Hour12,
            'm' => PatternField::Minute,
            's' => PatternField::Second,
            'S' => PatternField::Fraction,
            'a' => PatternField::AmPm,
            _ => return None,
        })
    }
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternField::Year => "year",
            PatternField::Month => "month",
            PatternField::Day => "day",
            PatternField::Weekday => "weekday",
            PatternField::Hour | PatternField::Hour12 => "hour",
            PatternField::Minute => "minute",
            PatternField::Second => "second",
            PatternField::Fraction => "fraction of second",
            PatternField::AmPm => "AM/PM marker",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("date pattern is empty")]
    Empty,
    #[error("unsupported pattern letter `{letter}` at position {position}")]
    UnsupportedLetter { letter: char, position: usize },
    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected {expected:?} at position {position}")]
    ExpectedLiteral { expected: String, position: usize },
    #[error("expected {field} digits at position {position}")]
    ExpectedDigits { field: PatternField, position: usize },
    #[error("unrecognized {field} name at position {position}")]
    UnknownName { field: PatternField, position: usize },
    #[error("unexpected trailing text at position {position}")]
    TrailingText { position: usize },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("weekday does not match the date")]
    WeekdayMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { field: PatternField, width: usize },
}

impl Token {
    fn is_numeric(&self) -> bool {
        match self {
            Token::Literal(_) => false,
            Token::Field { field, width } => match field {
                PatternField::Month => *width <= 2,
                PatternField::Weekday | PatternField::AmPm => false,
                _ => true,
            },
        }
    }
}

/// A compiled LDML/Java-style date pattern.
///
/// Letters `y M d E H h m s S a` are fields; text inside single quotes is literal (`''` is a
/// quote); any other non-letter is literal. Other ASCII letters are rejected so that patterns
/// meant for a richer formatter fail at load time instead of rendering garbage.
///
/// Parsing resolves components absent from the pattern against the Unix epoch
/// (`1970-01-01T00:00:00`), so a date-only pattern yields midnight and a time-only pattern yields
/// a time on 1970-01-01.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }

        let chars: Vec<char> = source.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut idx = 0;
        while idx < chars.len() {
            let ch = chars[idx];
            if ch == '\'' {
                if chars.get(idx + 1) == Some(&'\'') {
                    push_literal(&mut tokens, "'");
                    idx += 2;
                    continue;
                }
                let start = idx;
                let mut literal = String::new();
                idx += 1;
                loop {
                    match chars.get(idx) {
                        None => return Err(PatternError::UnterminatedQuote { position: start }),
                        Some('\'') if chars.get(idx + 1) == Some(&'\'') => {
                            literal.push('\'');
                            idx += 2;
                        }
                        Some('\'') => {
                            idx += 1;
                            break;
                        }
                        Some(c) => {
                            literal.push(*c);
                            idx += 1;
                        }
                    }
                }
                push_literal(&mut tokens, &literal);
            } else if ch.is_ascii_alphabetic() {
                let field = PatternField::from_letter(ch).ok_or(PatternError::UnsupportedLetter {
                    letter: ch,
                    position: idx,
                })?;
                let mut width = 1;
                while chars.get(idx + width) == Some(&ch) {
                    width += 1;
                }
                tokens.push(Token::Field { field, width });
                idx += width;
            } else {
                let mut buf = [0u8; 4];
                push_literal(&mut tokens, ch.encode_utf8(&mut buf));
                idx += 1;
            }
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// `yyyy-MM-dd`
    pub fn iso_date() -> Self {
        Self {
            source: "yyyy-MM-dd".to_string(),
            tokens: vec![
                Token::Field { field: PatternField::Year, width: 4 },
                Token::Literal("-".to_string()),
                Token::Field { field: PatternField::Month, width: 2 },
                Token::Literal("-".to_string()),
                Token::Field { field: PatternField::Day, width: 2 },
            ],
        }
    }

    /// `yyyy-MM-dd'T'HH:mm:ss`
    pub fn iso_datetime() -> Self {
        let mut pattern = Self::iso_date();
        pattern.source.push_str("'T'HH:mm:ss");
        pattern.tokens.extend([
            Token::Literal("T".to_string()),
            Token::Field { field: PatternField::Hour, width: 2 },
            Token::Literal(":".to_string()),
            Token::Field { field: PatternField::Minute, width: 2 },
            Token::Literal(":".to_string()),
            Token::Field { field: PatternField::Second, width: 2 },
        ]);
        pattern
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn format(&self, value: &NaiveDateTime, locale: &DateLocale) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            let (field, width) = match token {
                Token::Literal(s) => {
                    out.push_str(s);
                    continue;
                }
                Token::Field { field, width } => (*field, *width),
            };
            match field {
                PatternField::Year => {
                    if width == 2 {
                        push_padded(&mut out, value.year().rem_euclid(100) as i64, 2);
                    } else {
                        push_padded(&mut out, value.year() as i64, width);
                    }
                }
                PatternField::Month => {
                    let idx = value.month0() as usize;
                    match width {
                        1 | 2 => push_padded(&mut out, value.month() as i64, width),
                        3 => out.push_str(locale.short_months[idx]),
                        _ => out.push_str(locale.months[idx]),
                    }
                }
                PatternField::Day => push_padded(&mut out, value.day() as i64, width),
                PatternField::Weekday => {
                    let idx = value.weekday().num_days_from_monday() as usize;
                    if width <= 3 {
                        out.push_str(locale.short_weekdays[idx]);
                    } else {
                        out.push_str(locale.weekdays[idx]);
                    }
                }
                PatternField::Hour => push_padded(&mut out, value.hour() as i64, width),
                PatternField::Hour12 => {
                    let h = match value.hour() % 12 {
                        0 => 12,
                        h => h,
                    };
                    push_padded(&mut out, h as i64, width);
                }
                PatternField::Minute => push_padded(&mut out, value.minute() as i64, width),
                PatternField::Second => push_padded(&mut out, value.second() as i64, width),
                PatternField::Fraction => {
                    let digits = width.min(9);
                    let nanos = value.nanosecond() % 1_000_000_000;
                    let scaled = nanos / 10u32.pow((9 - digits) as u32);
                    push_padded(&mut out, scaled as i64, digits);
                }
                PatternField::AmPm => {
                    out.push_str(if value.hour() < 12 { locale.am } else { locale.pm });
                }
            }
        }
        out
    }

    /// Parse `text`, which must match the whole pattern.
    pub fn parse(&self, text: &str, locale: &DateLocale) -> Result<NaiveDateTime, DateParseError> {
        let mut parsed = ParsedFields::default();
        let mut pos = 0usize;

        for (idx, token) in self.tokens.iter().enumerate() {
            let rest = &text[pos..];
            let (field, width) = match token {
                Token::Literal(expected) => {
                    if !rest.starts_with(expected.as_str()) {
                        return Err(DateParseError::ExpectedLiteral {
                            expected: expected.clone(),
                            position: pos,
                        });
                    }
                    pos += expected.len();
                    continue;
                }
                Token::Field { field, width } => (*field, *width),
            };

            if token.is_numeric() {
                let adjacent = self.tokens.get(idx + 1).is_some_and(Token::is_numeric);
                let (min, max) = digit_bounds(field, width, adjacent);
                // Years before 1 BCE are written with a leading minus sign.
                let negative = field == PatternField::Year
                    && width != 2
                    && !adjacent
                    && rest.starts_with('-');
                let sign_len = usize::from(negative);
                let len = rest[sign_len..]
                    .bytes()
                    .take(max)
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if len < min {
                    return Err(DateParseError::ExpectedDigits { field, position: pos });
                }
                let digits = &rest[sign_len..sign_len + len];
                let value: u32 = digits
                    .parse()
                    .map_err(|_| DateParseError::ExpectedDigits { field, position: pos })?;
                parsed.set_numeric(field, width, value, len);
                if negative {
                    parsed.year = parsed.year.map(|year| -year);
                }
                pos += sign_len + len;
                continue;
            }

            let (index, len) = match (field, width) {
                (PatternField::Month, 3) => match_name(rest, &locale.short_months),
                (PatternField::Month, _) => match_name(rest, &locale.months),
                (PatternField::Weekday, w) if w <= 3 => match_name(rest, &locale.short_weekdays),
                (PatternField::Weekday, _) => match_name(rest, &locale.weekdays),
                _ => match_name(rest, &[locale.am, locale.pm]),
            }
            .ok_or(DateParseError::UnknownName { field, position: pos })?;
            match field {
                PatternField::Month => parsed.month = Some(index as u32 + 1),
                PatternField::Weekday => parsed.weekday = Some(index as u32),
                _ => parsed.pm = Some(index == 1),
            }
            pos += len;
        }

        if pos != text.len() {
            return Err(DateParseError::TrailingText { position: pos });
        }
        parsed.resolve()
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn push_literal(tokens: &mut Vec<Token>, s: &str) {
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(s);
    } else {
        tokens.push(Token::Literal(s.to_string()));
    }
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    let digits = value.unsigned_abs().to_string();
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(&digits);
}

fn digit_bounds(field: PatternField, width: usize, adjacent: bool) -> (usize, usize) {
    if adjacent || (field == PatternField::Year && width == 2) {
        return (width, width);
    }
    match field {
        PatternField::Year => (1, 9),
        PatternField::Fraction => (1, 9),
        _ => (1, width.max(2)),
    }
}

/// Case-insensitive, longest-first match of one of `names` at the start of `input`.
///
/// Returns the matched index and its length in bytes within `input`.
fn match_name(input: &str, names: &[&str]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    for (idx, name) in names.iter().enumerate() {
        let name_chars = name.chars().count();
        if name_chars == 0 {
            continue;
        }
        let Some(len) = prefix_len_ignore_case(input, name, name_chars) else {
            continue;
        };
        if best.map_or(true, |(_, _, best_chars)| name_chars > best_chars) {
            best = Some((idx, len, name_chars));
        }
    }
    best.map(|(idx, len, _)| (idx, len))
}

fn prefix_len_ignore_case(input: &str, name: &str, name_chars: usize) -> Option<usize> {
    let end = input
        .char_indices()
        .nth(name_chars)
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    let candidate = &input[..end];
    if candidate.chars().count() != name_chars {
        return None;
    }
    (candidate.to_lowercase() == name.to_lowercase()).then_some(end)
}

#[derive(Debug, Default)]
struct ParsedFields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<u32>,
    hour: Option<u32>,
    hour12: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    pm: Option<bool>,
}

impl ParsedFields {
    fn set_numeric(&mut self, field: PatternField, width: usize, value: u32, len: usize) {
        match field {
            PatternField::Year => {
                self.year = Some(if width == 2 {
                    // Two-digit years pivot on the Unix epoch: 70-99 -> 19xx, 00-69 -> 20xx.
                    if value >= 70 {
                        1900 + value as i32
                    } else {
                        2000 + value as i32
                    }
                } else {
                    value as i32
                });
            }
            PatternField::Month => self.month = Some(value),
            PatternField::Day => self.day = Some(value),
            PatternField::Hour => self.hour = Some(value),
            PatternField::Hour12 => self.hour12 = Some(value),
            PatternField::Minute => self.minute = Some(value),
            PatternField::Second => self.second = Some(value),
            PatternField::Fraction => {
                self.nanos = Some(value * 10u32.pow(9 - len.min(9) as u32));
            }
            PatternField::Weekday | PatternField::AmPm => {}
        }
    }

    fn resolve(self) -> Result<NaiveDateTime, DateParseError> {
        let year = self.year.unwrap_or(1970);
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateParseError::InvalidDate { year, month, day })?;

        if let Some(weekday) = self.weekday {
            if date.weekday().num_days_from_monday() != weekday {
                return Err(DateParseError::WeekdayMismatch);
            }
        }

        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let hour = match (self.hour, self.hour12) {
            (Some(h), _) => h,
            (None, Some(h)) => {
                if !(1..=12).contains(&h) {
                    return Err(DateParseError::InvalidTime { hour: h, minute, second });
                }
                h % 12 + if self.pm == Some(true) { 12 } else { 0 }
            }
            (None, None) => 0,
        };
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, self.nanos.unwrap_or(0))
            .ok_or(DateParseError::InvalidTime { hour, minute, second })?;

        Ok(NaiveDateTime::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EN_US;

    #[test]
    fn compiles_quoted_literals_and_merges_adjacent_text() {
        let pattern = DatePattern::compile("yyyy-MM-dd'T'HH:mm:ss").unwrap();
        assert_eq!(pattern, DatePattern::iso_datetime());

        let pattern = DatePattern::compile("'o''clock' h").unwrap();
        assert_eq!(
            pattern.tokens,
            vec![
                Token::Literal("o'clock ".to_string()),
                Token::Field { field: PatternField::Hour12, width: 1 },
            ]
        );

        let pattern = DatePattern::compile("''yy").unwrap();
        assert_eq!(pattern.tokens[0], Token::Literal("'".to_string()));
    }

    #[test]
    fn iso_constructors_match_compiled_patterns() {
        assert_eq!(DatePattern::compile("yyyy-MM-dd").unwrap(), DatePattern::iso_date());
    }

    #[test]
    fn rejects_unknown_letters_and_open_quotes() {
        assert_eq!(
            DatePattern::compile("yyyy-MM-dd Z"),
            Err(PatternError::UnsupportedLetter { letter: 'Z', position: 11 })
        );
        assert_eq!(
            DatePattern::compile("dd 'de MM"),
            Err(PatternError::UnterminatedQuote { position: 3 })
        );
        assert_eq!(DatePattern::compile(""), Err(PatternError::Empty));
    }

    #[test]
    fn name_matching_prefers_the_longest_candidate() {
        assert_eq!(match_name("juillet 2020", &["juil.", "juillet"]), Some((1, 7)));
        assert_eq!(match_name("MARS", &["mars"]), Some((0, 4)));
        assert_eq!(match_name("ao", &["août"]), None);
        assert_eq!(match_name("AOÛT", &["août"]), Some((0, "AOÛT".len())));
    }

    #[test]
    fn negative_years_keep_their_sign() {
        let pattern = DatePattern::iso_date();
        let value = NaiveDate::from_ymd_opt(-44, 3, 15).unwrap().and_time(NaiveTime::MIN);
        assert_eq!(pattern.format(&value, &EN_US), "-0044-03-15");
        assert_eq!(pattern.parse("-0044-03-15", &EN_US), Ok(value));
        assert_eq!(
            pattern.parse("--0044-03-15", &EN_US),
            Err(DateParseError::ExpectedDigits { field: PatternField::Year, position: 0 })
        );

        // Adjacent year digits carry no sign.
        let packed = DatePattern::compile("yyyyMMdd").unwrap();
        assert!(packed.parse("-0440315", &EN_US).is_err());
    }

    #[test]
    fn two_digit_years_pivot_on_the_epoch() {
        let mut fields = ParsedFields::default();
        fields.set_numeric(PatternField::Year, 2, 69, 2);
        assert_eq!(fields.year, Some(2069));
        fields.set_numeric(PatternField::Year, 2, 70, 2);
        assert_eq!(fields.year, Some(1970));
    }
}
