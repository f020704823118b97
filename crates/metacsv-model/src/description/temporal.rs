use std::fmt;

use metacsv_format::{get_locale, DateLocale, DatePattern, EN_US};

use crate::data_type::DataType;
use crate::error::InvalidDescriptionParameter;
use crate::notation::write_segments;
use crate::processor::{TemporalKind, TemporalProcessor};

/// Pattern and locale shared by date and datetime columns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TemporalFormat {
    pattern: DatePattern,
    locale_name: Option<String>,
    locale: &'static DateLocale,
}

impl TemporalFormat {
    fn new(
        data_type: DataType,
        pattern: &str,
        locale_name: Option<&str>,
    ) -> Result<Self, InvalidDescriptionParameter> {
        let pattern = DatePattern::compile(pattern)
            .map_err(|e| InvalidDescriptionParameter::new(data_type, "pattern", e.to_string()))?;
        let locale_name = locale_name.filter(|name| !name.is_empty());
        let locale = match locale_name {
            None => &EN_US,
            Some(name) => get_locale(name).ok_or_else(|| {
                let reason = format!("unknown locale {name:?}");
                InvalidDescriptionParameter::new(data_type, "locale", reason)
            })?,
        };
        Ok(Self {
            pattern,
            locale_name: locale_name.map(str::to_string),
            locale,
        })
    }

    fn with_pattern(pattern: DatePattern) -> Self {
        Self {
            pattern,
            locale_name: None,
            locale: &EN_US,
        }
    }

    fn render<W: fmt::Write>(&self, out: &mut W, type_name: &str) -> fmt::Result {
        match self.locale_name.as_deref() {
            None => write_segments(out, type_name, &[self.pattern.as_str()]),
            Some(locale) => write_segments(out, type_name, &[self.pattern.as_str(), locale]),
        }
    }

    fn processor(&self, kind: TemporalKind) -> TemporalProcessor {
        TemporalProcessor::new(kind, self.pattern.clone(), self.locale)
    }
}

macro_rules! temporal_description {
    (
        $(#[$meta:meta])*
        $name:ident, $data_type:ident, $kind:ident, $type_name:literal, $canonical:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(TemporalFormat);

        impl $name {
            /// Compiles `pattern` and resolves `locale_name`; an empty locale name means none.
            pub fn new(
                pattern: &str,
                locale_name: Option<&str>,
            ) -> Result<Self, InvalidDescriptionParameter> {
                TemporalFormat::new(DataType::$data_type, pattern, locale_name).map(Self)
            }

            pub fn canonical() -> Self {
                Self(TemporalFormat::with_pattern(DatePattern::$canonical()))
            }

            pub fn pattern(&self) -> &str {
                self.0.pattern.as_str()
            }

            pub fn locale_name(&self) -> Option<&str> {
                self.0.locale_name.as_deref()
            }

            pub(crate) fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                self.0.render(out, $type_name)
            }

            pub(crate) fn processor(&self) -> TemporalProcessor {
                self.0.processor(TemporalKind::$kind)
            }
        }
    };
}

temporal_description!(
    /// Calendar dates; the canonical pattern is `yyyy-MM-dd`.
    DateDescription,
    Date,
    Date,
    "date",
    iso_date
);
temporal_description!(
    /// Naive date-times; the canonical pattern is `yyyy-MM-dd'T'HH:mm:ss`.
    DatetimeDescription,
    Datetime,
    Datetime,
    "datetime",
    iso_datetime
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_patterns_and_unknown_locales_at_construction() {
        let err = DateDescription::new("yyyy-MM-dd X", None).unwrap_err();
        assert_eq!(err.data_type, DataType::Date);
        assert_eq!(err.parameter, "pattern");

        let err = DatetimeDescription::new("yyyy", Some("tlh_KL")).unwrap_err();
        assert_eq!(err.data_type, DataType::Datetime);
        assert_eq!(err.parameter, "locale");
    }

    #[test]
    fn keeps_the_locale_name_as_written() {
        let description = DateDescription::new("d MMMM yyyy", Some("fr-FR")).unwrap();
        assert_eq!(description.locale_name(), Some("fr-FR"));
        assert_eq!(description.0.locale.id, "fr_FR");
    }

    #[test]
    fn canonical_patterns() {
        assert_eq!(DateDescription::canonical().pattern(), "yyyy-MM-dd");
        assert_eq!(DatetimeDescription::canonical().pattern(), "yyyy-MM-dd'T'HH:mm:ss");
        assert_eq!(DateDescription::canonical(), DateDescription::new("yyyy-MM-dd", None).unwrap());
    }
}
