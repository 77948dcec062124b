use super::*;
use crate::net::error::status_error;

fn point(day: &str, predicted: f64) -> Forecast {
    Forecast {
        id: 1,
        model: 1,
        disease: "DENGUE".to_owned(),
        region: "Sindh".to_owned(),
        forecast_date: day.to_owned(),
        predicted_cases: predicted,
        actual_cases: None,
        confidence_interval: None,
        created_at: None,
    }
}

// =============================================================
// Statistics
// =============================================================

#[test]
fn stats_match_hand_computed_values() {
    let series = [
        point("2025-06-01", 40.0),
        point("2025-06-02", 70.0),
        point("2025-06-03", 10.0),
    ];
    let s = stats(&series);

    assert_eq!(s.average, 40.0);
    assert_eq!(s.peak, 70.0);
    assert_eq!(s.minimum, 10.0);
    assert_eq!(s.total, 120.0);
}

#[test]
fn stats_for_empty_series_are_zero() {
    assert_eq!(stats(&[]), ForecastStats::default());
}

#[test]
fn stats_for_single_point_collapse() {
    let s = stats(&[point("2025-06-01", 55.0)]);
    assert_eq!(s.average, 55.0);
    assert_eq!(s.peak, 55.0);
    assert_eq!(s.minimum, 55.0);
    assert_eq!(s.total, 55.0);
}

// =============================================================
// Date-range rendering
// =============================================================

#[test]
fn format_date_range_accepts_plain_strings() {
    let value = serde_json::json!("2025-01-01 to 2025-06-30");
    assert_eq!(format_date_range(&value).as_deref(), Some("2025-01-01 to 2025-06-30"));
}

#[test]
fn format_date_range_accepts_bound_objects() {
    let value = serde_json::json!({"earliest": "2025-01-01", "latest": "2025-06-30"});
    assert_eq!(format_date_range(&value).as_deref(), Some("2025-01-01 to 2025-06-30"));

    let value = serde_json::json!({"start": "2025-01-01", "end": "2025-06-30"});
    assert_eq!(format_date_range(&value).as_deref(), Some("2025-01-01 to 2025-06-30"));
}

#[test]
fn format_date_range_rejects_unknown_shapes() {
    assert!(format_date_range(&serde_json::json!(42)).is_none());
    assert!(format_date_range(&serde_json::json!({"from": "a", "until": "b"})).is_none());
}

#[test]
fn available_range_surfaces_from_out_of_range_errors() {
    let err = status_error(
        404,
        r#"{"error":"no forecasts in range","available_range":{"start":"2025-01-01","end":"2025-06-30"}}"#,
    );
    assert_eq!(
        available_range_message(&err).as_deref(),
        Some("2025-01-01 to 2025-06-30")
    );
    assert_eq!(err.to_string(), "no forecasts in range");
}

#[test]
fn available_range_absent_for_other_errors() {
    let err = status_error(500, r#"{"detail":"boom"}"#);
    assert!(available_range_message(&err).is_none());
}
