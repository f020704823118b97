//! Per-table converters: one [`FieldProcessor`] per described column.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data_type::DataType;
use crate::description::FieldDescription;
use crate::error::CellError;
use crate::processor::FieldProcessor;
use crate::registry::default_field_description;
use crate::value::FieldValue;

/// Table-wide settings from a MetaCSV sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Cell text that stands for a missing value. Compared exactly, without trimming.
    pub null_value: String,
}

/// Converts whole rows. Columns without a description are read as text and written with
/// [`FieldValue`]'s `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProcessors {
    processors: BTreeMap<usize, FieldProcessor>,
    null_value: String,
}

impl ColumnProcessors {
    /// A later description for the same column index replaces an earlier one.
    pub fn new<'a, I>(descriptions: I, options: &TableOptions) -> Self
    where
        I: IntoIterator<Item = (usize, &'a FieldDescription)>,
    {
        let processors: BTreeMap<_, _> = descriptions
            .into_iter()
            .map(|(column, description)| {
                (column, description.to_field_processor(&options.null_value))
            })
            .collect();
        log::debug!(
            "built {} column processors (null value {:?})",
            processors.len(),
            options.null_value
        );
        Self {
            processors,
            null_value: options.null_value.clone(),
        }
    }

    /// Columns typed by name only, using each type's default description.
    pub fn from_data_types<I>(data_types: I, options: &TableOptions) -> Self
    where
        I: IntoIterator<Item = (usize, DataType)>,
    {
        Self::new(
            data_types
                .into_iter()
                .map(|(column, data_type)| (column, default_field_description(data_type))),
            options,
        )
    }

    pub fn processor(&self, column: usize) -> Option<&FieldProcessor> {
        self.processors.get(&column)
    }

    pub fn null_value(&self) -> &str {
        &self.null_value
    }

    pub fn parse_cell(
        &self,
        row: usize,
        column: usize,
        raw: &str,
    ) -> Result<Option<FieldValue>, CellError> {
        match self.processors.get(&column) {
            Some(processor) => processor
                .parse(raw)
                .map_err(|source| CellError { row, column, source }),
            None if raw == self.null_value => Ok(None),
            None => Ok(Some(FieldValue::Text(raw.to_string()))),
        }
    }

    /// Parse a row, stopping at the first malformed cell.
    pub fn parse_row<S: AsRef<str>>(
        &self,
        row: usize,
        cells: &[S],
    ) -> Result<Vec<Option<FieldValue>>, CellError> {
        cells
            .iter()
            .enumerate()
            .map(|(column, raw)| self.parse_cell(row, column, raw.as_ref()))
            .collect()
    }

    /// Parse every cell of a row, keeping the error of each malformed cell in place.
    pub fn parse_row_cells<S: AsRef<str>>(
        &self,
        row: usize,
        cells: &[S],
    ) -> Vec<Result<Option<FieldValue>, CellError>> {
        cells
            .iter()
            .enumerate()
            .map(|(column, raw)| self.parse_cell(row, column, raw.as_ref()))
            .collect()
    }

    pub fn format_cell(
        &self,
        row: usize,
        column: usize,
        value: Option<&FieldValue>,
    ) -> Result<String, CellError> {
        match (self.processors.get(&column), value) {
            (Some(processor), value) => processor
                .format(value)
                .map_err(|source| CellError { row, column, source }),
            (None, None) => Ok(self.null_value.clone()),
            (None, Some(value)) => Ok(value.to_string()),
        }
    }

    pub fn format_row(
        &self,
        row: usize,
        values: &[Option<FieldValue>],
    ) -> Result<Vec<String>, CellError> {
        values
            .iter()
            .enumerate()
            .map(|(column, value)| self.format_cell(row, column, value.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_an_empty_null_token() {
        let options: TableOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TableOptions::default());
        assert_eq!(options.null_value, "");
    }

    #[test]
    fn undescribed_columns_pass_through_as_text() {
        let options = TableOptions {
            null_value: "NA".to_string(),
        };
        let columns = ColumnProcessors::from_data_types([(0, DataType::Integer)], &options);
        let row = columns.parse_row(3, &["12", "abc", "NA"]).unwrap();
        assert_eq!(
            row,
            vec![
                Some(FieldValue::Integer(12)),
                Some(FieldValue::Text("abc".to_string())),
                None
            ]
        );
    }
}
