//! Column type descriptors and their canonical notation.
//!
//! A [`FieldDescription`] is what a MetaCSV sidecar declares for one column, e.g.
//! `currency/post/€/decimal/ /,` or `date/"dd/MM/yyyy"/fr_FR`. Descriptions are immutable; each
//! one can render itself back to notation and build the [`FieldProcessor`] that converts the
//! column's cells.

mod number;
mod temporal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data_type::{DataType, ValueDomain};
use crate::error::{InvalidDescriptionParameter, NotationError};
use crate::notation::{self, write_segments};
use crate::processor::{BooleanProcessor, Converter, FieldProcessor};

pub use number::{
    CurrencyDescription, CurrencyNumber, DecimalDescription, FloatDescription, IntegerDescription,
    NumberDescription, PercentageDescription, PercentageNumber,
};
pub use temporal::{DateDescription, DatetimeDescription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanDescription {
    true_word: String,
    false_word: String,
}

impl BooleanDescription {
    /// `false_word` may be empty, in which case only the empty cell reads as `false`.
    pub fn new(true_word: &str, false_word: &str) -> Result<Self, InvalidDescriptionParameter> {
        if true_word.is_empty() {
            return Err(InvalidDescriptionParameter::new(
                DataType::Boolean,
                "true word",
                "must not be empty",
            ));
        }
        if true_word == false_word {
            return Err(InvalidDescriptionParameter::new(
                DataType::Boolean,
                "false word",
                format!("{false_word:?} is also the true word"),
            ));
        }
        Ok(Self {
            true_word: true_word.to_string(),
            false_word: false_word.to_string(),
        })
    }

    /// `true` / `false`.
    pub fn canonical() -> Self {
        Self {
            true_word: "true".to_string(),
            false_word: "false".to_string(),
        }
    }

    pub fn true_word(&self) -> &str {
        &self.true_word
    }

    pub fn false_word(&self) -> &str {
        &self.false_word
    }

    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.false_word.is_empty() {
            write_segments(out, "boolean", &[self.true_word.as_str()])
        } else {
            write_segments(out, "boolean", &[self.true_word.as_str(), self.false_word.as_str()])
        }
    }
}

/// Type and formatting of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDescription {
    Boolean(BooleanDescription),
    Integer(IntegerDescription),
    Float(FloatDescription),
    Decimal(DecimalDescription),
    CurrencyInteger(CurrencyDescription<IntegerDescription>),
    CurrencyDecimal(CurrencyDescription<DecimalDescription>),
    PercentageFloat(PercentageDescription<FloatDescription>),
    PercentageDecimal(PercentageDescription<DecimalDescription>),
    Date(DateDescription),
    Datetime(DatetimeDescription),
    Text,
}

impl FieldDescription {
    /// The narrowest description of `data_type`.
    ///
    /// These are the values served by [`crate::default_field_description`]; prefer that function
    /// to avoid rebuilding them.
    pub fn canonical(data_type: DataType) -> Self {
        match data_type {
            DataType::Boolean => FieldDescription::Boolean(BooleanDescription::canonical()),
            DataType::Integer => FieldDescription::Integer(IntegerDescription::canonical()),
            DataType::Float => FieldDescription::Float(FloatDescription::canonical()),
            DataType::Decimal => FieldDescription::Decimal(DecimalDescription::canonical()),
            DataType::CurrencyInteger => FieldDescription::CurrencyInteger(
                CurrencyDescription::canonical_with(IntegerDescription::canonical()),
            ),
            DataType::CurrencyDecimal => FieldDescription::CurrencyDecimal(
                CurrencyDescription::canonical_with(DecimalDescription::canonical()),
            ),
            DataType::PercentageFloat => FieldDescription::PercentageFloat(
                PercentageDescription::canonical_with(FloatDescription::canonical()),
            ),
            DataType::PercentageDecimal => FieldDescription::PercentageDecimal(
                PercentageDescription::canonical_with(DecimalDescription::canonical()),
            ),
            DataType::Date => FieldDescription::Date(DateDescription::canonical()),
            DataType::Datetime => FieldDescription::Datetime(DatetimeDescription::canonical()),
            DataType::Text => FieldDescription::Text,
        }
    }

    /// Write the canonical notation of this description.
    pub fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            FieldDescription::Boolean(d) => d.render(out),
            FieldDescription::Integer(d) => d.render(out),
            FieldDescription::Float(d) => d.render(out),
            FieldDescription::Decimal(d) => d.render(out),
            FieldDescription::CurrencyInteger(d) => d.render(out),
            FieldDescription::CurrencyDecimal(d) => d.render(out),
            FieldDescription::PercentageFloat(d) => d.render(out),
            FieldDescription::PercentageDecimal(d) => d.render(out),
            FieldDescription::Date(d) => d.render(out),
            FieldDescription::Datetime(d) => d.render(out),
            FieldDescription::Text => out.write_str("text"),
        }
    }

    /// Build the converter for this column; `null_value` is the table's null token.
    pub fn to_field_processor(&self, null_value: &str) -> FieldProcessor {
        let converter = match self {
            FieldDescription::Boolean(d) => Converter::Boolean(BooleanProcessor::new(
                d.true_word.clone(),
                d.false_word.clone(),
            )),
            FieldDescription::Integer(d) => Converter::Number(d.number_processor()),
            FieldDescription::Float(d) => Converter::Number(d.number_processor()),
            FieldDescription::Decimal(d) => Converter::Number(d.number_processor()),
            FieldDescription::CurrencyInteger(d) => Converter::Currency(d.processor()),
            FieldDescription::CurrencyDecimal(d) => Converter::Currency(d.processor()),
            FieldDescription::PercentageFloat(d) => Converter::Percentage(d.processor()),
            FieldDescription::PercentageDecimal(d) => Converter::Percentage(d.processor()),
            FieldDescription::Date(d) => Converter::Temporal(d.processor()),
            FieldDescription::Datetime(d) => Converter::Temporal(d.processor()),
            FieldDescription::Text => Converter::Text,
        };
        FieldProcessor::new(self.data_type(), null_value, converter)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            FieldDescription::Boolean(_) => DataType::Boolean,
            FieldDescription::Integer(_) => DataType::Integer,
            FieldDescription::Float(_) => DataType::Float,
            FieldDescription::Decimal(_) => DataType::Decimal,
            FieldDescription::CurrencyInteger(_) => DataType::CurrencyInteger,
            FieldDescription::CurrencyDecimal(_) => DataType::CurrencyDecimal,
            FieldDescription::PercentageFloat(_) => DataType::PercentageFloat,
            FieldDescription::PercentageDecimal(_) => DataType::PercentageDecimal,
            FieldDescription::Date(_) => DataType::Date,
            FieldDescription::Datetime(_) => DataType::Datetime,
            FieldDescription::Text => DataType::Text,
        }
    }

    pub fn value_domain(&self) -> ValueDomain {
        self.data_type().value_domain()
    }

    /// First segment of the notation (`currency` for both currency variants).
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldDescription::Boolean(_) => "boolean",
            FieldDescription::Integer(_) => "integer",
            FieldDescription::Float(_) => "float",
            FieldDescription::Decimal(_) => "decimal",
            FieldDescription::CurrencyInteger(_) | FieldDescription::CurrencyDecimal(_) => "currency",
            FieldDescription::PercentageFloat(_) | FieldDescription::PercentageDecimal(_) => {
                "percentage"
            }
            FieldDescription::Date(_) => "date",
            FieldDescription::Datetime(_) => "datetime",
            FieldDescription::Text => "text",
        }
    }
}

impl fmt::Display for FieldDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl FromStr for FieldDescription {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse_description(s)
    }
}

impl Serialize for FieldDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        notation.parse().map_err(serde::de::Error::custom)
    }
}
