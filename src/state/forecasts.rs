//! Forecast browsing: filters, client-side statistics, and helpers for the
//! loosely-typed range payloads the backend returns.

#[cfg(test)]
#[path = "forecasts_test.rs"]
mod forecasts_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::Forecast;

/// Diseases offered by the forecast filters, as wire token + label.
pub const DISEASES: [(&str, &str); 5] = [
    ("DENGUE", "Dengue"),
    ("MALARIA", "Malaria"),
    ("COVID19", "COVID-19"),
    ("PNEUMONIA", "Pneumonia"),
    ("DIARRHEA", "Diarrhea"),
];

/// Forecast horizons offered by the filters, in days.
pub const HORIZONS: [u32; 3] = [7, 14, 30];

/// Aggregates over a forecast series, computed client-side for the
/// statistics tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForecastStats {
    pub average: f64,
    pub peak: f64,
    pub minimum: f64,
    pub total: f64,
}

/// Compute statistics over the predicted case counts. All zeros for an
/// empty series.
pub fn stats(points: &[Forecast]) -> ForecastStats {
    if points.is_empty() {
        return ForecastStats::default();
    }

    let mut peak = f64::MIN;
    let mut minimum = f64::MAX;
    let mut total = 0.0;
    for point in points {
        peak = peak.max(point.predicted_cases);
        minimum = minimum.min(point.predicted_cases);
        total += point.predicted_cases;
    }

    #[allow(clippy::cast_precision_loss)]
    let average = total / points.len() as f64;
    ForecastStats { average, peak, minimum, total }
}

/// Render a backend date-range payload for display.
///
/// The shape is backend-defined: sometimes a plain string, sometimes an
/// object with `earliest`/`latest` or `start`/`end` bounds.
pub fn format_date_range(value: &Value) -> Option<String> {
    if let Some(text) = value.as_str() {
        return Some(text.to_owned());
    }

    for (from, to) in [("earliest", "latest"), ("start", "end"), ("start_date", "end_date")] {
        let bounds = value
            .get(from)
            .and_then(Value::as_str)
            .zip(value.get(to).and_then(Value::as_str));
        if let Some((first, last)) = bounds {
            return Some(format!("{first} to {last}"));
        }
    }
    None
}

/// Pull the available range out of an out-of-range forecast-detail error.
pub fn available_range_message(err: &ApiError) -> Option<String> {
    let range = err.body()?.get("available_range")?;
    format_date_range(range)
}
