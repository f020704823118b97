use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use metacsv_format::number::{group_number, normalize_number};
use rust_decimal::Decimal;

use super::ConvertError;
use crate::value::FieldValue;

/// Side of the number a currency symbol or percent sign is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixPosition {
    Pre,
    Post,
}

impl AffixPosition {
    /// Notation keyword: `pre` or `post`.
    pub fn name(self) -> &'static str {
        match self {
            AffixPosition::Pre => "pre",
            AffixPosition::Post => "post",
        }
    }
}

impl fmt::Display for AffixPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Integer,
    Float,
    Decimal,
}

/// Reads and writes plain numbers with the column's separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberProcessor {
    kind: NumberKind,
    thousands_separator: Option<String>,
    decimal_separator: Option<String>,
}

impl NumberProcessor {
    /// `decimal_separator` is ignored for integers.
    pub fn new(
        kind: NumberKind,
        thousands_separator: Option<String>,
        decimal_separator: Option<String>,
    ) -> Self {
        let decimal_separator = match kind {
            NumberKind::Integer => None,
            NumberKind::Float | NumberKind::Decimal => {
                Some(decimal_separator.unwrap_or_else(|| ".".to_string()))
            }
        };
        Self {
            kind,
            thousands_separator: thousands_separator.filter(|sep| !sep.is_empty()),
            decimal_separator,
        }
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub(super) fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        let canonical = self.normalize(raw)?;
        self.value_from_canonical(&canonical)
    }

    pub(super) fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        let canonical = self.canonical_of(value)?;
        Ok(self.render(&canonical))
    }

    /// Strip grouping and map the decimal separator to `.`.
    fn normalize(&self, raw: &str) -> Result<String, ConvertError> {
        normalize_number(
            raw,
            self.thousands_separator.as_deref(),
            self.decimal_separator.as_deref(),
            self.kind == NumberKind::Float,
        )
        .ok_or_else(|| ConvertError::Malformed(self.shape_error()))
    }

    fn shape_error(&self) -> String {
        let mut reason = match self.kind {
            NumberKind::Integer => "expected digits".to_string(),
            NumberKind::Float | NumberKind::Decimal => "expected a number".to_string(),
        };
        if let Some(sep) = &self.thousands_separator {
            reason.push_str(&format!(" grouped by {sep:?}"));
        }
        if let Some(sep) = &self.decimal_separator {
            reason.push_str(&format!(" with {sep:?} as decimal separator"));
        }
        reason
    }

    fn value_from_canonical(&self, canonical: &str) -> Result<FieldValue, ConvertError> {
        match self.kind {
            NumberKind::Integer => canonical
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| ConvertError::Malformed("integer out of range".to_string())),
            NumberKind::Float => match canonical.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(FieldValue::Float(v)),
                _ => Err(ConvertError::Malformed("float out of range".to_string())),
            },
            NumberKind::Decimal => Decimal::from_str(canonical)
                .map(FieldValue::Decimal)
                .map_err(|e| ConvertError::Malformed(e.to_string())),
        }
    }

    /// Shortest round-trip ASCII form of `value`, e.g. `-1234.5`.
    fn canonical_of(&self, value: &FieldValue) -> Result<String, ConvertError> {
        match (self.kind, value) {
            (NumberKind::Integer, FieldValue::Integer(v)) => Ok(v.to_string()),
            (NumberKind::Float, FieldValue::Float(v)) => {
                if !v.is_finite() {
                    return Err(ConvertError::Unrepresentable(format!("{v} is not finite")));
                }
                Ok(v.to_string())
            }
            (NumberKind::Decimal, FieldValue::Decimal(v)) => Ok(v.to_string()),
            (_, other) => Err(ConvertError::UnexpectedValue(other.domain())),
        }
    }

    fn render(&self, canonical: &str) -> String {
        group_number(
            canonical,
            self.thousands_separator.as_deref(),
            self.decimal_separator.as_deref().unwrap_or("."),
        )
    }
}

/// A number with a currency symbol on one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyProcessor {
    position: AffixPosition,
    symbol: Option<String>,
    number: NumberProcessor,
}

impl CurrencyProcessor {
    pub fn new(position: AffixPosition, symbol: Option<String>, number: NumberProcessor) -> Self {
        Self {
            position,
            symbol: symbol.filter(|s| !s.is_empty()),
            number,
        }
    }

    /// A missing symbol is tolerated, and so is a symbol on the other side.
    pub(super) fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        match &self.symbol {
            None => self.number.parse(raw),
            Some(symbol) => self.number.parse(&strip_either_affix(raw, symbol, self.position)),
        }
    }

    pub(super) fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        let text = self.number.format(value)?;
        Ok(match &self.symbol {
            None => text,
            Some(symbol) => add_affix(text, symbol, self.position),
        })
    }
}

/// A number scaled by 100 with a percent sign on one side.
///
/// Scaling moves the decimal point in the number's text rather than multiplying, so `12.5%`
/// reads as exactly `0.125` for both floats and decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageProcessor {
    position: AffixPosition,
    sign: Option<String>,
    number: NumberProcessor,
}

impl PercentageProcessor {
    pub fn new(position: AffixPosition, sign: Option<String>, number: NumberProcessor) -> Self {
        Self {
            position,
            sign: sign.filter(|s| !s.is_empty()),
            number,
        }
    }

    pub(super) fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        let text = match &self.sign {
            None => Cow::Borrowed(raw),
            Some(sign) => strip_affix(raw, sign, self.position),
        };
        let canonical = self.number.normalize(&text)?;
        if canonical.contains('e') {
            // Exponent forms only occur for floats.
            return match self.number.value_from_canonical(&canonical)? {
                FieldValue::Float(v) => Ok(FieldValue::Float(v / 100.0)),
                other => Ok(other),
            };
        }
        self.number.value_from_canonical(&shift_point(&canonical, -2))
    }

    pub(super) fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        let canonical = self.number.canonical_of(value)?;
        let text = self.number.render(&shift_point(&canonical, 2));
        Ok(match &self.sign {
            None => text,
            Some(sign) => add_affix(text, sign, self.position),
        })
    }
}

fn strip_affix<'a>(raw: &'a str, affix: &str, position: AffixPosition) -> Cow<'a, str> {
    strip_affix_at(raw, affix, position).unwrap_or(Cow::Borrowed(raw))
}

/// The configured side is tried first.
fn strip_either_affix<'a>(raw: &'a str, affix: &str, position: AffixPosition) -> Cow<'a, str> {
    let other = match position {
        AffixPosition::Pre => AffixPosition::Post,
        AffixPosition::Post => AffixPosition::Pre,
    };
    strip_affix_at(raw, affix, position)
        .or_else(|| strip_affix_at(raw, affix, other))
        .unwrap_or(Cow::Borrowed(raw))
}

fn strip_affix_at<'a>(raw: &'a str, affix: &str, position: AffixPosition) -> Option<Cow<'a, str>> {
    match position {
        AffixPosition::Pre => strip_prefix_affix(raw, affix),
        AffixPosition::Post => strip_suffix_affix(raw, affix),
    }
}

/// `$12`, `$ 12` and `-$12` all leave the signed number.
fn strip_prefix_affix<'a>(raw: &'a str, affix: &str) -> Option<Cow<'a, str>> {
    if let Some(rest) = raw.strip_prefix(affix) {
        return Some(rest.trim_start().into());
    }
    let rest = raw.strip_prefix('-')?.strip_prefix(affix)?;
    Some(format!("-{}", rest.trim_start()).into())
}

fn strip_suffix_affix<'a>(raw: &'a str, affix: &str) -> Option<Cow<'a, str>> {
    raw.strip_suffix(affix).map(|rest| rest.trim_end().into())
}

/// Negative numbers keep the minus sign outside a leading affix: `-$12`.
fn add_affix(text: String, affix: &str, position: AffixPosition) -> String {
    match position {
        AffixPosition::Post => text + affix,
        AffixPosition::Pre => match text.strip_prefix('-') {
            Some(magnitude) => format!("-{affix}{magnitude}"),
            None => format!("{affix}{text}"),
        },
    }
}

/// Multiply a `[-]digits[.digits]` string by `10^places` by moving its decimal point.
///
/// Leading zeros of the integer part are dropped; trailing fraction zeros are kept so a decimal's
/// scale survives the round trip.
fn shift_point(canonical: &str, places: isize) -> String {
    let (sign, unsigned) = match canonical.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", canonical),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as isize + places;

    let (int_digits, frac_digits) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs());
        (String::new(), format!("{zeros}{digits}"))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        let (int_digits, frac_digits) = digits.split_at(point as usize);
        (int_digits.to_string(), frac_digits.to_string())
    };

    let int_digits = int_digits.trim_start_matches('0');
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    }
}
