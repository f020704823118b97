//! Shared default description per data type.

use std::sync::OnceLock;

use crate::data_type::DataType;
use crate::description::FieldDescription;

static DEFAULTS: OnceLock<[FieldDescription; DataType::ALL.len()]> = OnceLock::new();

fn defaults() -> &'static [FieldDescription; DataType::ALL.len()] {
    DEFAULTS.get_or_init(|| DataType::ALL.map(FieldDescription::canonical))
}

/// The canonical description of `data_type`, built once per process.
pub fn default_field_description(data_type: DataType) -> &'static FieldDescription {
    // `ALL` lists the variants in declaration order.
    &defaults()[data_type as usize]
}

/// Default description for a type name such as `currency_decimal`.
///
/// Lookup is case-insensitive. Unknown names fall back to text so a sidecar written by a newer
/// producer still loads.
pub fn field_description_for_type_name(name: &str) -> &'static FieldDescription {
    match name.parse::<DataType>() {
        Ok(data_type) => default_field_description(data_type),
        Err(err) => {
            log::warn!("{err}; reading the column as text");
            default_field_description(DataType::Text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_in_declaration_order() {
        for (idx, data_type) in DataType::ALL.into_iter().enumerate() {
            assert_eq!(data_type as usize, idx);
            assert_eq!(default_field_description(data_type).data_type(), data_type);
        }
    }

    #[test]
    fn defaults_are_shared() {
        let a = default_field_description(DataType::Date);
        let b = default_field_description(DataType::Date);
        assert!(std::ptr::eq(a, b));
    }
}
