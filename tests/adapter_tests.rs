use chrono::NaiveDate;
use histogram_chart::ChartError;
use histogram_chart::core::{
    InvalidValuePolicy, NumericAdapter, NumericDomainPolicy, RawRecord, RawScalar,
    TemporalAdapter, ValueAdapter, ValueKind, adapt_records, records_from_json_str,
};

#[test]
fn numeric_adapter_parses_numbers_and_numeric_text() {
    let adapter = NumericAdapter::new();

    assert_eq!(adapter.kind(), ValueKind::Numeric);
    assert_eq!(adapter.parse(&RawScalar::Number(2.5)), Ok(2.5));
    assert_eq!(adapter.parse(&RawScalar::from("35")), Ok(35.0));
    assert_eq!(adapter.parse(&RawScalar::from(" 7.25 ")), Ok(7.25));
}

#[test]
fn numeric_adapter_rejects_non_numbers() {
    let adapter = NumericAdapter::new();

    assert!(adapter.parse(&RawScalar::from("abc")).is_err());
    assert!(adapter.parse(&RawScalar::from("NaN")).is_err());
    assert!(adapter.parse(&RawScalar::Bool(true)).is_err());
    assert!(adapter.parse(&RawScalar::Null).is_err());
}

#[test]
fn temporal_adapter_parses_iso_dates() {
    let adapter = TemporalAdapter::new();

    assert_eq!(adapter.kind(), ValueKind::Temporal);
    assert_eq!(
        adapter.parse(&RawScalar::from("2004-04-15")),
        Ok(NaiveDate::from_ymd_opt(2004, 4, 15).expect("valid date"))
    );
    assert!(adapter.parse(&RawScalar::from("not-a-date")).is_err());
    assert!(adapter.parse(&RawScalar::Number(20_040_415.0)).is_err());
}

#[test]
fn temporal_adapter_accepts_custom_formats() {
    let adapter = TemporalAdapter::with_format("%d/%m/%Y");

    assert_eq!(adapter.format(), "%d/%m/%Y");
    assert_eq!(
        adapter.parse(&RawScalar::from("15/04/2004")),
        Ok(NaiveDate::from_ymd_opt(2004, 4, 15).expect("valid date"))
    );
    assert!(adapter.parse(&RawScalar::from("2004-04-15")).is_err());
}

#[test]
fn numeric_domain_is_anchored_at_zero() {
    let adapter = NumericAdapter::new();

    let domain = adapter.domain(&[5.0, 1.0, 35.0]).expect("domain");
    assert_eq!((domain.min(), domain.max()), (0.0, 35.0));

    let domain = adapter.domain(&[-8.0, -2.0]).expect("domain");
    assert_eq!((domain.min(), domain.max()), (0.0, 0.0));
}

#[test]
fn extent_policy_uses_value_minimum() {
    let adapter = NumericAdapter::new().with_domain_policy(NumericDomainPolicy::Extent);

    let domain = adapter.domain(&[5.0, 1.0, 35.0]).expect("domain");
    assert_eq!((domain.min(), domain.max()), (1.0, 35.0));
}

#[test]
fn empty_values_have_no_domain() {
    let result = NumericAdapter::new().domain(&[]);
    assert!(matches!(result, Err(ChartError::EmptyInput)));

    let result = TemporalAdapter::new().domain(&[]);
    assert!(matches!(result, Err(ChartError::EmptyInput)));
}

#[test]
fn skip_policy_collects_rejected_records() {
    let records = records_from_json_str(
        r#"[{"value":"5"},{"value":"abc"},{"other":"1"},{"value":35}]"#,
    )
    .expect("records json");

    let adapted = adapt_records(
        &NumericAdapter::new(),
        &records,
        "value",
        InvalidValuePolicy::Skip,
    )
    .expect("skip never fails");

    assert_eq!(adapted.values, vec![5.0, 35.0]);
    let rejected: Vec<usize> = adapted.rejected.iter().map(|r| r.index).collect();
    assert_eq!(rejected, vec![1, 2]);
    assert_eq!(adapted.rejected[1].reason, "field is missing");
}

#[test]
fn fail_policy_reports_the_first_bad_record() {
    let records = vec![
        RawRecord::single("date", "2004-04-15"),
        RawRecord::single("date", "not-a-date"),
    ];

    let result = adapt_records(
        &TemporalAdapter::new(),
        &records,
        "date",
        InvalidValuePolicy::Fail,
    );

    match result {
        Err(ChartError::InvalidField { index, field, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "date");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }
}
