//! Date rules for configuring a model training run.
//!
//! The backend enforces these too; checking locally keeps obviously
//! invalid runs from ever being queued and gives the form immediate
//! feedback.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use chrono::{Days, NaiveDate};

use crate::net::types::{DataRange, TrainingSessionRequest};

/// Default forecast horizon appended after the training window.
pub const DEFAULT_HORIZON_DAYS: u64 = 90;

/// A fully selected training/forecast window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingDates {
    pub training_start: NaiveDate,
    pub training_end: NaiveDate,
    pub forecast_start: NaiveDate,
    pub forecast_end: NaiveDate,
}

impl TrainingDates {
    /// Wire payload for queueing this window for `disease`.
    pub fn to_request(&self, disease: &str) -> TrainingSessionRequest {
        TrainingSessionRequest {
            disease: disease.to_owned(),
            training_start_date: self.training_start.to_string(),
            training_end_date: self.training_end.to_string(),
            forecast_start_date: self.forecast_start.to_string(),
            forecast_end_date: self.forecast_end.to_string(),
        }
    }
}

/// Why a selected window cannot be queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrainingDateError {
    #[error("training start date must be before training end date")]
    TrainingOrder,

    #[error("forecast start date must be before forecast end date")]
    ForecastOrder,

    #[error("forecast must start the day after training ends ({expected})")]
    ForecastGap { expected: NaiveDate },

    #[error("training dates must be within the available range: {start} to {end}")]
    OutsideRange { start: NaiveDate, end: NaiveDate },
}

/// Check a selected window against the ordering rules and, when the
/// backend's data range is known, against its training bounds.
pub fn validate(
    dates: &TrainingDates,
    range: Option<&DataRange>,
) -> Result<(), TrainingDateError> {
    if dates.training_start >= dates.training_end {
        return Err(TrainingDateError::TrainingOrder);
    }
    if dates.forecast_start >= dates.forecast_end {
        return Err(TrainingDateError::ForecastOrder);
    }

    // The forecast picks up exactly where training data ends.
    if let Some(expected) = dates.training_end.checked_add_days(Days::new(1)) {
        if dates.forecast_start != expected {
            return Err(TrainingDateError::ForecastGap { expected });
        }
    }

    if let Some((start, end)) = range.and_then(training_bounds) {
        if dates.training_start < start || dates.training_end > end {
            return Err(TrainingDateError::OutsideRange { start, end });
        }
    }

    Ok(())
}

/// Forecast window derived from a training end date: starts the next day,
/// runs for the default horizon. The forecast end may extend beyond the
/// available data for future predictions.
pub fn forecast_window(training_end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = training_end.checked_add_days(Days::new(1))?;
    let end = start.checked_add_days(Days::new(DEFAULT_HORIZON_DAYS))?;
    Some((start, end))
}

/// Pre-filled window covering the backend's whole valid training range.
pub fn defaults_from_range(range: &DataRange) -> Option<TrainingDates> {
    let (training_start, training_end) = training_bounds(range)?;
    let (forecast_start, forecast_end) = forecast_window(training_end)?;
    Some(TrainingDates { training_start, training_end, forecast_start, forecast_end })
}

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn training_bounds(range: &DataRange) -> Option<(NaiveDate, NaiveDate)> {
    Some((parse_day(&range.training_start)?, parse_day(&range.training_end)?))
}
