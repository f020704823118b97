//! Cell converters built from field descriptions.

mod number;
mod temporal;

use crate::data_type::{DataType, ValueDomain};
use crate::error::FieldError;
use crate::value::{FieldType, FieldValue};

pub use number::{
    AffixPosition, CurrencyProcessor, NumberKind, NumberProcessor, PercentageProcessor,
};
pub use temporal::{TemporalKind, TemporalProcessor};

/// Why a converter rejected a cell or a value; the owning [`FieldProcessor`] adds the raw text
/// and data type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConvertError {
    Malformed(String),
    UnexpectedValue(ValueDomain),
    Unrepresentable(String),
}

/// Converts the cells of one column between text and [`FieldValue`]s.
///
/// A processor is bound to its column's description and to the table's null token; it holds no
/// state between calls and can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldProcessor {
    data_type: DataType,
    null_value: String,
    converter: Converter,
}

/// Type-specific conversion rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Converter {
    Boolean(BooleanProcessor),
    Number(NumberProcessor),
    Currency(CurrencyProcessor),
    Percentage(PercentageProcessor),
    Temporal(TemporalProcessor),
    Text,
}

impl FieldProcessor {
    pub fn new(data_type: DataType, null_value: &str, converter: Converter) -> Self {
        Self {
            data_type,
            null_value: null_value.to_string(),
            converter,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn null_value(&self) -> &str {
        &self.null_value
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Parse one cell. The null token is matched exactly (no trimming) before any type-specific
    /// parsing and yields `None`.
    pub fn parse(&self, raw: &str) -> Result<Option<FieldValue>, FieldError> {
        if raw == self.null_value {
            return Ok(None);
        }
        self.converter
            .parse(raw)
            .map(Some)
            .map_err(|err| self.error(Some(raw), err))
    }

    /// Format one value; `None` yields the null token.
    pub fn format(&self, value: Option<&FieldValue>) -> Result<String, FieldError> {
        let Some(value) = value else {
            return Ok(self.null_value.clone());
        };
        self.converter.format(value).map_err(|err| self.error(None, err))
    }

    /// [`FieldProcessor::parse`] into a concrete Rust type.
    pub fn parse_as<T: FieldType>(&self, raw: &str) -> Result<Option<T>, FieldError> {
        let Some(value) = self.parse(raw)? else {
            return Ok(None);
        };
        let found = value.domain();
        T::from_field_value(value).map(Some).ok_or(FieldError::UnexpectedValue {
            data_type: self.data_type,
            found,
        })
    }

    /// [`FieldProcessor::format`] from a concrete Rust type.
    pub fn format_as<T: FieldType>(&self, value: Option<T>) -> Result<String, FieldError> {
        self.format(value.map(T::into_field_value).as_ref())
    }

    fn error(&self, raw: Option<&str>, err: ConvertError) -> FieldError {
        match err {
            ConvertError::Malformed(reason) => FieldError::MalformedValue {
                raw: raw.unwrap_or_default().to_string(),
                data_type: self.data_type,
                reason,
            },
            ConvertError::UnexpectedValue(found) => FieldError::UnexpectedValue {
                data_type: self.data_type,
                found,
            },
            ConvertError::Unrepresentable(reason) => FieldError::UnrepresentableValue {
                data_type: self.data_type,
                reason,
            },
        }
    }
}

impl Converter {
    pub(crate) fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        match self {
            Converter::Boolean(p) => p.parse(raw),
            Converter::Number(p) => p.parse(raw),
            Converter::Currency(p) => p.parse(raw),
            Converter::Percentage(p) => p.parse(raw),
            Converter::Temporal(p) => p.parse(raw),
            Converter::Text => Ok(FieldValue::Text(raw.to_string())),
        }
    }

    pub(crate) fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        match self {
            Converter::Boolean(p) => p.format(value),
            Converter::Number(p) => p.format(value),
            Converter::Currency(p) => p.format(value),
            Converter::Percentage(p) => p.format(value),
            Converter::Temporal(p) => p.format(value),
            Converter::Text => match value {
                FieldValue::Text(s) => Ok(s.clone()),
                other => Err(ConvertError::UnexpectedValue(other.domain())),
            },
        }
    }
}

/// Reads exactly the true word or the false word; anything else is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanProcessor {
    true_word: String,
    false_word: String,
}

impl BooleanProcessor {
    pub fn new(true_word: String, false_word: String) -> Self {
        Self {
            true_word,
            false_word,
        }
    }

    fn parse(&self, raw: &str) -> Result<FieldValue, ConvertError> {
        if raw == self.true_word {
            Ok(FieldValue::Boolean(true))
        } else if raw == self.false_word {
            Ok(FieldValue::Boolean(false))
        } else {
            Err(ConvertError::Malformed(
                format!("expected {:?} or {:?}", self.true_word, self.false_word),
            ))
        }
    }

    fn format(&self, value: &FieldValue) -> Result<String, ConvertError> {
        match value {
            FieldValue::Boolean(true) => Ok(self.true_word.clone()),
            FieldValue::Boolean(false) => Ok(self.false_word.clone()),
            other => Err(ConvertError::UnexpectedValue(other.domain())),
        }
    }
}
