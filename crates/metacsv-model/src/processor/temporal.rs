use chrono::NaiveTime;
use metacsv_format::{DateLocale, DatePattern};

use super::ConvertError;
use crate::value::FieldValue;

/// Which value a temporal column produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Date,
    Datetime,
}

/// Reads and writes dates through a compiled pattern.
///
/// Fields the pattern lacks resolve against 1970-01-01T00:00:00: `HH:mm` read as a datetime is a
/// time on the epoch day, and a `yyyy-MM-dd` datetime column reads midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalProcessor {
    kind: TemporalKind,
    pattern: DatePattern,
    locale: &'static DateLocale,
}

impl TemporalProcessor {
    pub fn new(kind: TemporalKind, pattern: DatePattern, locale: &'static DateLocale) -> Self {
        Self {
            kind,
            pattern,
            locale,
        }
    }

    pub fn kind(&self) -> TemporalKind {
        self.kind
    }

    pub fn pattern(&self) -> &DatePattern {
        &self.pattern
    }

    pub fn locale(&self) -> &'static DateLocale {
        self.locale
    }

    pub(super) fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        let parsed = self.pattern.parse(raw, self.locale).map_err(|e| {
            ConvertError::Malformed(format!("{e} (pattern {:?})", self.pattern.as_str()))
        })?;
        Ok(match self.kind {
            TemporalKind::Date => FieldValue::Date(parsed.date()),
            TemporalKind::Datetime => FieldValue::Datetime(parsed),
        })
    }

    /// A date written through a datetime column is taken at midnight.
    pub(super) fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        let datetime = match (self.kind, value) {
            (_, FieldValue::Date(date)) => date.and_time(NaiveTime::MIN),
            (TemporalKind::Datetime, FieldValue::Datetime(datetime)) => *datetime,
            (_, other) => return Err(ConvertError::UnexpectedValue(other.domain())),
        };
        Ok(self.pattern.format(&datetime, self.locale))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use metacsv_format::EN_US;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data_type::ValueDomain;

    fn processor(kind: TemporalKind, pattern: &str) -> TemporalProcessor {
        TemporalProcessor::new(kind, DatePattern::compile(pattern).unwrap(), &EN_US)
    }

    #[test]
    fn missing_fields_resolve_against_the_epoch() {
        let p = processor(TemporalKind::Datetime, "HH:mm");
        let expected = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(13, 45, 0).unwrap();
        assert_eq!(p.parse("13:45"), Ok(FieldValue::Datetime(expected)));
    }

    #[test]
    fn date_kind_drops_the_time_part() {
        let p = processor(TemporalKind::Date, "yyyy-MM-dd HH:mm");
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(p.parse("2024-02-29 08:30"), Ok(FieldValue::Date(expected)));
        assert_eq!(p.format(&FieldValue::Date(expected)), Ok("2024-02-29 00:00".to_string()));
    }

    #[test]
    fn date_column_rejects_datetimes() {
        let p = processor(TemporalKind::Date, "yyyy-MM-dd");
        let value = FieldValue::Datetime(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(p.format(&value), Err(ConvertError::UnexpectedValue(ValueDomain::Datetime)));
    }
}
