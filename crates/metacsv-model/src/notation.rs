//! The `/`-separated field description notation.
//!
//! A parameter that contains `/` or starts with `"` is written between double quotes with inner
//! quotes doubled, so date patterns such as `dd/MM/yyyy` survive a round trip:
//! `date/"dd/MM/yyyy"/fr_FR`.

use std::fmt;

use crate::description::{
    BooleanDescription, CurrencyDescription, DateDescription, DatetimeDescription,
    DecimalDescription, FieldDescription, FloatDescription, IntegerDescription,
    PercentageDescription,
};
use crate::error::NotationError;
use crate::processor::AffixPosition;

/// Write `type_name` followed by each parameter, `/`-separated.
pub(crate) fn write_segments<W: fmt::Write>(
    out: &mut W,
    type_name: &str,
    params: &[&str],
) -> fmt::Result {
    out.write_str(type_name)?;
    for param in params {
        out.write_char('/')?;
        write_segment(out, param)?;
    }
    Ok(())
}

fn write_segment<W: fmt::Write>(out: &mut W, segment: &str) -> fmt::Result {
    if !segment.contains('/') && !segment.starts_with('"') {
        return out.write_str(segment);
    }
    out.write_char('"')?;
    for ch in segment.chars() {
        if ch == '"' {
            out.write_str("\"\"")?;
        } else {
            out.write_char(ch)?;
        }
    }
    out.write_char('"')
}

fn split_segments(notation: &str) -> Result<Vec<String>, NotationError> {
    let mut segments = Vec::new();
    let mut rest = notation;
    let mut offset = 0usize;

    loop {
        if rest.starts_with('"') {
            let start = offset;
            let mut segment = String::new();
            let mut idx = 1;
            loop {
                let Some(quote) = rest[idx..].find('"') else {
                    return Err(NotationError::UnterminatedQuote { position: start });
                };
                segment.push_str(&rest[idx..idx + quote]);
                idx += quote + 1;
                if rest[idx..].starts_with('"') {
                    segment.push('"');
                    idx += 1;
                } else {
                    break;
                }
            }
            segments.push(segment);
            rest = &rest[idx..];
            offset += idx;
            if rest.is_empty() {
                break;
            }
            match rest.strip_prefix('/') {
                Some(tail) => {
                    rest = tail;
                    offset += 1;
                }
                None => return Err(NotationError::TextAfterQuote { position: offset }),
            }
        } else {
            match rest.find('/') {
                Some(idx) => {
                    segments.push(rest[..idx].to_string());
                    rest = &rest[idx + 1..];
                    offset += idx + 1;
                }
                None => {
                    segments.push(rest.to_string());
                    break;
                }
            }
        }
    }

    Ok(segments)
}

pub(crate) fn parse_description(notation: &str) -> Result<FieldDescription, NotationError> {
    let segments = split_segments(notation)?;
    parse_segments(&segments)
}

fn parse_segments(segments: &[String]) -> Result<FieldDescription, NotationError> {
    let Some((head, params)) = segments.split_first() else {
        return Err(NotationError::Empty);
    };
    let params: Vec<&str> = params.iter().map(String::as_str).collect();

    let description = match head.as_str() {
        "" => return Err(NotationError::Empty),
        "text" => {
            expect_at_most("text", &params, 0)?;
            FieldDescription::Text
        }
        "boolean" => {
            expect_at_most("boolean", &params, 2)?;
            match params.as_slice() {
                [] => FieldDescription::Boolean(BooleanDescription::canonical()),
                [true_word] => FieldDescription::Boolean(BooleanDescription::new(true_word, "")?),
                [true_word, false_word, ..] => {
                    FieldDescription::Boolean(BooleanDescription::new(true_word, false_word)?)
                }
            }
        }
        "integer" => {
            expect_at_most("integer", &params, 1)?;
            FieldDescription::Integer(IntegerDescription::new(params.first().copied())?)
        }
        "float" => {
            expect_at_most("float", &params, 2)?;
            let (thousands, decimal) = fractional_params(&params);
            FieldDescription::Float(FloatDescription::new(thousands, decimal)?)
        }
        "decimal" => {
            expect_at_most("decimal", &params, 2)?;
            let (thousands, decimal) = fractional_params(&params);
            FieldDescription::Decimal(DecimalDescription::new(thousands, decimal)?)
        }
        "currency" => {
            let [position, symbol, inner @ ..] = &segments[1..] else {
                return Err(missing("currency", &params));
            };
            if inner.is_empty() {
                return Err(NotationError::MissingParameter {
                    type_name: "currency",
                    parameter: "number type",
                });
            }
            let position = match position.as_str() {
                "" => AffixPosition::Post,
                other => parse_position(other)?,
            };
            let symbol = Some(symbol.as_str());
            match parse_segments(inner)? {
                FieldDescription::Integer(number) => FieldDescription::CurrencyInteger(
                    CurrencyDescription::new(position, symbol, number)?,
                ),
                FieldDescription::Decimal(number) => FieldDescription::CurrencyDecimal(
                    CurrencyDescription::new(position, symbol, number)?,
                ),
                other => {
                    return Err(NotationError::UnsupportedInnerType {
                        outer: "currency",
                        inner: other.type_name(),
                    })
                }
            }
        }
        "percentage" => {
            let [position, sign, inner @ ..] = &segments[1..] else {
                return Err(missing("percentage", &params));
            };
            if inner.is_empty() {
                return Err(NotationError::MissingParameter {
                    type_name: "percentage",
                    parameter: "number type",
                });
            }
            let position = parse_position(position)?;
            let sign = Some(sign.as_str());
            match parse_segments(inner)? {
                FieldDescription::Float(number) => FieldDescription::PercentageFloat(
                    PercentageDescription::new(position, sign, number)?,
                ),
                FieldDescription::Decimal(number) => FieldDescription::PercentageDecimal(
                    PercentageDescription::new(position, sign, number)?,
                ),
                other => {
                    return Err(NotationError::UnsupportedInnerType {
                        outer: "percentage",
                        inner: other.type_name(),
                    })
                }
            }
        }
        "date" => {
            expect_at_most("date", &params, 2)?;
            let (pattern, locale) = temporal_params("date", &params)?;
            FieldDescription::Date(DateDescription::new(pattern, locale)?)
        }
        "datetime" => {
            expect_at_most("datetime", &params, 2)?;
            let (pattern, locale) = temporal_params("datetime", &params)?;
            FieldDescription::Datetime(DatetimeDescription::new(pattern, locale)?)
        }
        other => return Err(NotationError::UnknownType(other.to_string())),
    };
    Ok(description)
}

fn expect_at_most(
    type_name: &'static str,
    params: &[&str],
    max: usize,
) -> Result<(), NotationError> {
    match params.get(max) {
        Some(segment) => Err(NotationError::UnexpectedParameter {
            type_name,
            segment: segment.to_string(),
        }),
        None => Ok(()),
    }
}

fn missing(type_name: &'static str, params: &[&str]) -> NotationError {
    let parameter = if params.is_empty() { "position" } else { "symbol" };
    NotationError::MissingParameter {
        type_name,
        parameter,
    }
}

/// Missing trailing parameters take the canonical values (no grouping, `.` decimals).
fn fractional_params<'a>(params: &[&'a str]) -> (Option<&'a str>, &'a str) {
    let thousands = params.first().copied();
    let decimal = params.get(1).copied().unwrap_or(".");
    (thousands, decimal)
}

fn temporal_params<'a>(
    type_name: &'static str,
    params: &[&'a str],
) -> Result<(&'a str, Option<&'a str>), NotationError> {
    match params {
        [] => Err(NotationError::MissingParameter {
            type_name,
            parameter: "pattern",
        }),
        [pattern] => Ok((*pattern, None)),
        [pattern, locale, ..] => Ok((*pattern, Some(*locale))),
    }
}

fn parse_position(s: &str) -> Result<AffixPosition, NotationError> {
    match s {
        "pre" => Ok(AffixPosition::Pre),
        "post" => Ok(AffixPosition::Post),
        other => Err(NotationError::InvalidPosition(other.to_string())),
    }
}
