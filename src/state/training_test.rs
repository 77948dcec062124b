use super::*;

fn day(value: &str) -> NaiveDate {
    parse_day(value).expect("valid date literal")
}

fn range() -> DataRange {
    DataRange {
        disease: Some("MALARIA".to_owned()),
        lab_test_start: "2024-01-01".to_owned(),
        lab_test_end: "2025-06-30".to_owned(),
        pharma_start: "2024-02-01".to_owned(),
        pharma_end: "2025-06-30".to_owned(),
        training_start: "2024-02-01".to_owned(),
        training_end: "2025-05-31".to_owned(),
    }
}

fn valid_dates() -> TrainingDates {
    TrainingDates {
        training_start: day("2024-02-01"),
        training_end: day("2025-05-31"),
        forecast_start: day("2025-06-01"),
        forecast_end: day("2025-08-30"),
    }
}

// =============================================================
// Validation rules
// =============================================================

#[test]
fn accepts_the_defaults_derived_from_the_range() {
    let dates = defaults_from_range(&range()).expect("defaults");
    assert_eq!(dates, valid_dates());
    assert_eq!(validate(&dates, Some(&range())), Ok(()));
}

#[test]
fn rejects_training_start_not_before_end() {
    let mut dates = valid_dates();
    dates.training_start = dates.training_end;
    assert_eq!(
        validate(&dates, Some(&range())),
        Err(TrainingDateError::TrainingOrder)
    );
}

#[test]
fn rejects_forecast_start_not_before_end() {
    let mut dates = valid_dates();
    dates.forecast_end = dates.forecast_start;
    assert_eq!(
        validate(&dates, Some(&range())),
        Err(TrainingDateError::ForecastOrder)
    );
}

#[test]
fn rejects_a_gap_between_training_and_forecast() {
    let mut dates = valid_dates();
    dates.forecast_start = day("2025-06-05");
    assert_eq!(
        validate(&dates, Some(&range())),
        Err(TrainingDateError::ForecastGap { expected: day("2025-06-01") })
    );
}

#[test]
fn rejects_training_outside_the_available_range() {
    let mut dates = valid_dates();
    dates.training_start = day("2024-01-15");
    assert_eq!(
        validate(&dates, Some(&range())),
        Err(TrainingDateError::OutsideRange {
            start: day("2024-02-01"),
            end: day("2025-05-31"),
        })
    );
}

#[test]
fn skips_the_range_check_when_no_range_is_known() {
    let mut dates = valid_dates();
    dates.training_start = day("2023-01-01");
    assert_eq!(validate(&dates, None), Ok(()));
}

// =============================================================
// Derived windows
// =============================================================

#[test]
fn forecast_window_starts_the_next_day_with_default_horizon() {
    let (start, end) = forecast_window(day("2025-05-31")).expect("window");
    assert_eq!(start, day("2025-06-01"));
    assert_eq!(end, day("2025-08-30"));
}

#[test]
fn to_request_formats_wire_dates() {
    let req = valid_dates().to_request("MALARIA");
    assert_eq!(req.disease, "MALARIA");
    assert_eq!(req.training_start_date, "2024-02-01");
    assert_eq!(req.forecast_end_date, "2025-08-30");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_day_accepts_wire_format_only() {
    assert_eq!(parse_day("2025-06-01"), Some(day("2025-06-01")));
    assert_eq!(parse_day(" 2025-06-01 "), Some(day("2025-06-01")));
    assert!(parse_day("06/01/2025").is_none());
    assert!(parse_day("").is_none());
}
