//! `metacsv-model` describes the typed columns of a MetaCSV table and converts their cells.
//!
//! A sidecar declares one [`FieldDescription`] per column, written in a compact `/`-separated
//! notation:
//!
//! ```
//! use metacsv_model::{FieldDescription, FieldValue};
//!
//! let description: FieldDescription = "percentage/post/%/float//.".parse().unwrap();
//! let processor = description.to_field_processor("");
//! assert_eq!(processor.parse("12.5%").unwrap(), Some(FieldValue::Float(0.125)));
//! assert_eq!(processor.parse("").unwrap(), None);
//! assert_eq!(description.to_string(), "percentage/post/%/float//.");
//! ```
//!
//! Descriptions, processors and the default registry are immutable and can be shared freely
//! between threads.

#![forbid(unsafe_code)]

mod columns;
mod data_type;
pub mod description;
mod error;
mod notation;
pub mod processor;
mod registry;
mod value;

pub use crate::columns::{ColumnProcessors, TableOptions};
pub use crate::data_type::{DataType, ValueDomain};
pub use crate::description::{
    BooleanDescription, CurrencyDescription, DateDescription, DatetimeDescription,
    DecimalDescription, FieldDescription, FloatDescription, IntegerDescription,
    PercentageDescription,
};
pub use crate::error::{
    CellError, FieldError, InvalidDescriptionParameter, NotationError, UnsupportedDataType,
};
pub use crate::processor::{AffixPosition, FieldProcessor};
pub use crate::registry::{default_field_description, field_description_for_type_name};
pub use crate::value::{FieldType, FieldValue};

pub use metacsv_format::{DateLocale, DatePattern};
