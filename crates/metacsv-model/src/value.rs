use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::data_type::ValueDomain;

/// A parsed, non-null cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    Text(String),
}

impl FieldValue {
    pub fn domain(&self) -> ValueDomain {
        match self {
            FieldValue::Boolean(_) => ValueDomain::Boolean,
            FieldValue::Integer(_) => ValueDomain::Integer,
            FieldValue::Float(_) => ValueDomain::Float,
            FieldValue::Decimal(_) => ValueDomain::Decimal,
            FieldValue::Date(_) => ValueDomain::Date,
            FieldValue::Datetime(_) => ValueDomain::Datetime,
            FieldValue::Text(_) => ValueDomain::Text,
        }
    }
}

/// Plain rendering used for columns that have no description.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Decimal(v) => write!(f, "{v}"),
            FieldValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            FieldValue::Datetime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S")),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

/// Rust types that a column can be parsed into or formatted from.
pub trait FieldType: Sized {
    const DOMAIN: ValueDomain;

    fn from_field_value(value: FieldValue) -> Option<Self>;

    fn into_field_value(self) -> FieldValue;
}

macro_rules! impl_field_type {
    ($ty:ty, $variant:ident) => {
        impl FieldType for $ty {
            const DOMAIN: ValueDomain = ValueDomain::$variant;

            fn from_field_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_field_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }
        }

        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

impl_field_type!(bool, Boolean);
impl_field_type!(i64, Integer);
impl_field_type!(f64, Float);
impl_field_type!(Decimal, Decimal);
impl_field_type!(NaiveDate, Date);
impl_field_type!(NaiveDateTime, Datetime);
impl_field_type!(String, Text);

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}
