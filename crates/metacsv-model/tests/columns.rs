use chrono::NaiveDate;
use metacsv_model::{
    CellError, ColumnProcessors, DataType, FieldDescription, FieldError, FieldValue, TableOptions,
};
use pretty_assertions::assert_eq;

fn table() -> ColumnProcessors {
    let descriptions: Vec<(usize, FieldDescription)> = [
        (0, "integer/,"),
        (1, "currency/pre/$/integer/,"),
        (3, "date/\"dd/MM/yyyy\""),
    ]
    .into_iter()
    .map(|(column, notation)| (column, notation.parse().unwrap()))
    .collect();
    let options = TableOptions {
        null_value: "-".to_string(),
    };
    ColumnProcessors::new(descriptions.iter().map(|(c, d)| (*c, d)), &options)
}

#[test]
fn parses_described_and_undescribed_columns() {
    let columns = table();
    let row = columns
        .parse_row(1, &["1,234", "-$5", "free text", "07/03/2021"])
        .unwrap();
    assert_eq!(
        row,
        vec![
            Some(FieldValue::Integer(1234)),
            Some(FieldValue::Integer(-5)),
            Some(FieldValue::Text("free text".to_string())),
            Some(FieldValue::Date(NaiveDate::from_ymd_opt(2021, 3, 7).unwrap())),
        ]
    );
    assert_eq!(columns.parse_row(2, &["-", "-", "-", "-"]).unwrap(), vec![None; 4]);
}

#[test]
fn malformed_cells_carry_their_position() {
    let columns = table();
    let err = columns.parse_row(7, &["12", "$1.5", "x", "-"]).unwrap_err();
    assert_eq!(err.row, 7);
    assert_eq!(err.column, 1);
    assert_eq!(err.source.data_type(), DataType::CurrencyInteger);
    assert!(err.to_string().starts_with("row 7, column 1: "), "{err}");
}

#[test]
fn per_cell_results_keep_going_after_an_error() {
    let columns = table();
    let cells = columns.parse_row_cells(0, &["oops", "$3", "", "32/01/2021"]);
    assert_eq!(cells.len(), 4);
    assert!(matches!(&cells[0], Err(CellError { row: 0, column: 0, .. })));
    assert_eq!(cells[1], Ok(Some(FieldValue::Integer(3))));
    assert_eq!(cells[2], Ok(Some(FieldValue::Text(String::new()))));
    assert!(matches!(
        &cells[3],
        Err(CellError {
            column: 3,
            source: FieldError::MalformedValue { .. },
            ..
        })
    ));
}

#[test]
fn formats_rows() {
    let columns = table();
    let values = vec![
        Some(FieldValue::Integer(1_000_000)),
        None,
        Some(FieldValue::Float(2.5)),
        Some(FieldValue::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())),
        None,
    ];
    assert_eq!(
        columns.format_row(0, &values).unwrap(),
        vec!["1,000,000", "-", "2.5", "31/12/1999", "-"]
    );

    let err = columns
        .format_row(4, &[Some(FieldValue::Text("x".to_string()))])
        .unwrap_err();
    assert_eq!((err.row, err.column), (4, 0));
}

#[test]
fn typed_by_data_type_only() {
    let options = TableOptions::default();
    let columns = ColumnProcessors::from_data_types(
        [(0, DataType::Boolean), (1, DataType::PercentageFloat)],
        &options,
    );
    assert_eq!(columns.processor(1).map(|p| p.data_type()), Some(DataType::PercentageFloat));
    assert!(columns.processor(2).is_none());
    assert_eq!(
        columns.parse_row(0, &["true", "50%", ""]).unwrap(),
        vec![Some(FieldValue::Boolean(true)), Some(FieldValue::Float(0.5)), None]
    );
}
