use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime};
use metacsv_model::{FieldDescription, FieldProcessor, FieldValue};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn processors(notations: &[&str]) -> Vec<FieldProcessor> {
    notations
        .iter()
        .map(|notation| {
            let description: FieldDescription = notation.parse().unwrap();
            description.to_field_processor("NULL")
        })
        .collect()
}

fn assert_round_trips(
    processors: &[FieldProcessor],
    value: FieldValue,
) -> Result<(), TestCaseError> {
    for p in processors {
        let text = p.format(Some(&value)).unwrap();
        prop_assert_eq!(p.parse(&text), Ok(Some(value.clone())), "via {:?}", text);
    }
    Ok(())
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn naive_date(years: RangeInclusive<i32>) -> impl Strategy<Value = NaiveDate> {
    (years, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn naive_datetime(years: RangeInclusive<i32>) -> impl Strategy<Value = NaiveDateTime> {
    (naive_date(years), 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(date, h, m, s)| date.and_hms_opt(h, m, s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn integers_round_trip(v in any::<i64>()) {
        let ps = processors(&[
            "integer",
            "integer/,",
            "integer/ ",
            "currency/pre/$/integer/,",
            "currency/post/€/integer/.",
            "currency/post//integer",
            "currency/pre//integer",
        ]);
        assert_round_trips(&ps, FieldValue::Integer(v))?;
    }

    #[test]
    fn floats_round_trip(v in finite_f64()) {
        let ps = processors(&[
            "float//.",
            "float/,/.",
            "float/./,",
            "float/ /,",
            "percentage/post/%/float//.",
            "percentage/pre/%/float/./,",
        ]);
        assert_round_trips(&ps, FieldValue::Float(v))?;
    }

    #[test]
    fn decimals_round_trip(v in decimal()) {
        let ps = processors(&[
            "decimal//.",
            "decimal/ /,",
            "currency/pre/$/decimal/,/.",
            "currency/post/ kr/decimal/./,",
            "percentage/post/%/decimal//.",
        ]);
        assert_round_trips(&ps, FieldValue::Decimal(v))?;
    }

    #[test]
    fn dates_round_trip(v in naive_date(-9999..=9999)) {
        let ps = processors(&[
            "date/yyyy-MM-dd",
            "date/\"dd/MM/yyyy\"",
            "date/EEEE d MMMM yyyy/fr_FR",
            "date/MMM d, yyyy/en_US",
            "date/d. MMMM yyyy/de_DE",
        ]);
        assert_round_trips(&ps, FieldValue::Date(v))?;
    }

    #[test]
    fn datetimes_round_trip(v in naive_datetime(-9999..=9999)) {
        let ps = processors(&[
            "datetime/yyyy-MM-dd'T'HH:mm:ss",
            "datetime/d MMM yyyy h:mm:ss a/en_GB",
        ]);
        assert_round_trips(&ps, FieldValue::Datetime(v))?;
    }

    // Packed digits leave no room for a sign.
    #[test]
    fn packed_datetimes_round_trip(v in naive_datetime(0..=9999)) {
        let ps = processors(&["date/yyyyMMdd", "datetime/yyyyMMddHHmmss"]);
        let date = FieldValue::Date(v.date());
        assert_round_trips(&ps[..1], date)?;
        assert_round_trips(&ps[1..], FieldValue::Datetime(v))?;
    }

    #[test]
    fn text_round_trips(v in ".*") {
        prop_assume!(v != "NULL");
        let ps = processors(&["text"]);
        assert_round_trips(&ps, FieldValue::Text(v))?;
    }

    #[test]
    fn any_null_token_round_trips(token in ".*") {
        let notations = [
            "boolean",
            "integer/,",
            "float/./,",
            "percentage/post/%/decimal//.",
            "date/yyyy",
            "text",
        ];
        for notation in notations {
            let description: FieldDescription = notation.parse().unwrap();
            let p = description.to_field_processor(&token);
            prop_assert_eq!(p.parse(&token), Ok(None));
            prop_assert_eq!(p.format(None), Ok(token.clone()));
        }
    }
}
