use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedDataType;

/// Logical type of a MetaCSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    Decimal,
    CurrencyInteger,
    CurrencyDecimal,
    PercentageFloat,
    PercentageDecimal,
    Date,
    Datetime,
    Text,
}

impl DataType {
    pub const ALL: [DataType; 11] = [
        DataType::Boolean,
        DataType::Integer,
        DataType::Float,
        DataType::Decimal,
        DataType::CurrencyInteger,
        DataType::CurrencyDecimal,
        DataType::PercentageFloat,
        DataType::PercentageDecimal,
        DataType::Date,
        DataType::Datetime,
        DataType::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Decimal => "decimal",
            DataType::CurrencyInteger => "currency_integer",
            DataType::CurrencyDecimal => "currency_decimal",
            DataType::PercentageFloat => "percentage_float",
            DataType::PercentageDecimal => "percentage_decimal",
            DataType::Date => "date",
            DataType::Datetime => "datetime",
            DataType::Text => "text",
        }
    }

    /// The domain of the values a column of this type parses into.
    pub fn value_domain(self) -> ValueDomain {
        match self {
            DataType::Boolean => ValueDomain::Boolean,
            DataType::Integer | DataType::CurrencyInteger => ValueDomain::Integer,
            DataType::Float | DataType::PercentageFloat => ValueDomain::Float,
            DataType::Decimal | DataType::CurrencyDecimal | DataType::PercentageDecimal => {
                ValueDomain::Decimal
            }
            DataType::Date => ValueDomain::Date,
            DataType::Datetime => ValueDomain::Datetime,
            DataType::Text => ValueDomain::Text,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = UnsupportedDataType;

    /// Accepts `currency_integer` as well as `CURRENCY_INTEGER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedDataType(s.to_string()))
    }
}

/// Rust-side domain of parsed cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDomain {
    /// `bool`
    Boolean,
    /// `i64`
    Integer,
    /// `f64`
    Float,
    /// `rust_decimal::Decimal`
    Decimal,
    /// `chrono::NaiveDate`
    Date,
    /// `chrono::NaiveDateTime`
    Datetime,
    /// `String`
    Text,
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueDomain::Boolean => "boolean",
            ValueDomain::Integer => "integer",
            ValueDomain::Float => "float",
            ValueDomain::Decimal => "decimal",
            ValueDomain::Date => "date",
            ValueDomain::Datetime => "datetime",
            ValueDomain::Text => "text",
        };
        f.write_str(name)
    }
}
