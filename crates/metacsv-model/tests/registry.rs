use std::thread;

use metacsv_model::{
    default_field_description, field_description_for_type_name, DataType, FieldDescription,
    UnsupportedDataType,
};
use pretty_assertions::assert_eq;

#[test]
fn every_data_type_has_a_default() {
    for data_type in DataType::ALL {
        let description = default_field_description(data_type);
        assert_eq!(description, &FieldDescription::canonical(data_type));
        assert_eq!(description.data_type(), data_type);
    }
}

#[test]
fn type_names_resolve_case_insensitively() {
    assert_eq!(
        field_description_for_type_name("PERCENTAGE_DECIMAL").data_type(),
        DataType::PercentageDecimal
    );
    assert_eq!(
        field_description_for_type_name("currency_integer").to_string(),
        "currency/post//integer"
    );
}

#[test]
fn unknown_type_names_fall_back_to_text() {
    for name in ["", "money", "currency", "int"] {
        let description = field_description_for_type_name(name);
        assert_eq!(description, &FieldDescription::Text, "{name:?}");
    }
    assert_eq!(
        "money".parse::<DataType>(),
        Err(UnsupportedDataType("money".to_string()))
    );
}

#[test]
fn defaults_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| default_field_description(DataType::Datetime) as *const _ as usize)
        })
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}
