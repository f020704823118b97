use thiserror::Error;

use crate::data_type::{DataType, ValueDomain};

/// A cell could not be converted by its column's processor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The cell text does not match the pattern, separators or affixes of its column.
    #[error("malformed {data_type} value {raw:?}: {reason}")]
    MalformedValue {
        raw: String,
        data_type: DataType,
        reason: String,
    },
    /// A value from another domain was handed to the column's formatter.
    #[error("{data_type} column cannot hold a {found} value")]
    UnexpectedValue { data_type: DataType, found: ValueDomain },
    /// The value belongs to the right domain but has no textual form (e.g. `NaN`).
    #[error("{data_type} value cannot be written: {reason}")]
    UnrepresentableValue { data_type: DataType, reason: String },
}

impl FieldError {
    pub fn data_type(&self) -> DataType {
        match self {
            FieldError::MalformedValue { data_type, .. }
            | FieldError::UnexpectedValue { data_type, .. }
            | FieldError::UnrepresentableValue { data_type, .. } => *data_type,
        }
    }
}

/// A field description was built with contradictory or unusable parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {data_type} parameter `{parameter}`: {reason}")]
pub struct InvalidDescriptionParameter {
    pub data_type: DataType,
    pub parameter: &'static str,
    pub reason: String,
}

impl InvalidDescriptionParameter {
    pub(crate) fn new(
        data_type: DataType,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            data_type,
            parameter,
            reason: reason.into(),
        }
    }
}

/// A type name that does not name any [`DataType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported data type {0:?}")]
pub struct UnsupportedDataType(pub String);

/// Field description notation that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("field description is empty")]
    Empty,
    #[error("unknown field type {0:?}")]
    UnknownType(String),
    #[error("`{type_name}` requires a {parameter} parameter")]
    MissingParameter {
        type_name: &'static str,
        parameter: &'static str,
    },
    #[error("unexpected parameter {segment:?} after `{type_name}`")]
    UnexpectedParameter {
        type_name: &'static str,
        segment: String,
    },
    #[error("expected `pre` or `post`, found {0:?}")]
    InvalidPosition(String),
    #[error("`{outer}` cannot wrap `{inner}`")]
    UnsupportedInnerType {
        outer: &'static str,
        inner: &'static str,
    },
    #[error("unterminated quoted parameter at position {position}")]
    UnterminatedQuote { position: usize },
    #[error("expected `/` after quoted parameter at position {position}")]
    TextAfterQuote { position: usize },
    #[error(transparent)]
    InvalidParameter(#[from] InvalidDescriptionParameter),
}

/// A [`FieldError`] tied to its position in the table.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}, column {column}: {source}")]
pub struct CellError {
    pub row: usize,
    pub column: usize,
    #[source]
    pub source: FieldError,
}
