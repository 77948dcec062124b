//! Wire types shared with the backend.
//!
//! Field names follow the backend's snake_case JSON; enums use the
//! SCREAMING_SNAKE_CASE spellings that appear on the wire. Loosely
//! specified payloads (`summary`, `date_range`, report parameters) stay as
//! raw `serde_json::Value` rather than inventing a schema the server does
//! not promise.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account role; gates which screens and endpoints a user may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    HealthOfficial,
    Pharmacist,
    LabTech,
}

impl Role {
    pub const ALL: [Self; 4] = [
        Self::Admin,
        Self::HealthOfficial,
        Self::Pharmacist,
        Self::LabTech,
    ];

    /// Human-readable label for selects and badges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::HealthOfficial => "Health Official",
            Self::Pharmacist => "Pharmacist",
            Self::LabTech => "Lab Technician",
        }
    }
}

/// The authenticated account as returned by the profile endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

/// Success payload of login and register.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

/// Success payload of the token refresh endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// An uploaded surveillance dataset.
#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
    pub dataset_type: String,
    pub disease: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Metadata fields accompanying a dataset file upload.
#[derive(Clone, Debug)]
pub struct DatasetUploadMeta {
    pub dataset_type: String,
    pub disease: String,
    pub name: String,
}

/// Lifecycle of a forecasting model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelStatus {
    Training,
    Trained,
    Failed,
    Archived,
}

impl ModelStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Training => "Training",
            Self::Trained => "Trained",
            Self::Failed => "Failed",
            Self::Archived => "Archived",
        }
    }
}

/// A forecasting model registered on the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastModel {
    pub id: i64,
    pub name: String,
    pub version: String,
    pub algorithm: String,
    pub status: ModelStatus,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub dataset: Option<i64>,
    #[serde(default)]
    pub metrics: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a model.
#[derive(Clone, Debug, Serialize)]
pub struct ModelCreateRequest {
    pub name: String,
    pub version: String,
    pub algorithm: String,
    pub dataset: i64,
}

/// Confidence bounds around a predicted case count.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// A single-day forecast for one disease and region.
#[derive(Clone, Debug, Deserialize)]
pub struct Forecast {
    pub id: i64,
    pub model: i64,
    pub disease: String,
    pub region: String,
    pub forecast_date: String,
    pub predicted_cases: f64,
    #[serde(default)]
    pub actual_cases: Option<f64>,
    #[serde(default)]
    pub confidence_interval: Option<ConfidenceInterval>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Optional filters for the forecast list endpoint.
#[derive(Clone, Debug, Default)]
pub struct ForecastQuery {
    pub disease: Option<String>,
    pub region: Option<String>,
    pub model: Option<i64>,
}

/// Detail payload for a date-range forecast request.
///
/// `summary` is backend-defined aggregate data; it is rendered, never
/// interpreted, so it stays untyped.
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastDetail {
    #[serde(default)]
    pub summary: Value,
    pub forecasts: Vec<Forecast>,
}

/// Coverage of stored forecasts for one disease.
#[derive(Clone, Debug, Deserialize)]
pub struct AvailableDates {
    pub total_forecasts: i64,
    #[serde(default)]
    pub date_range: Value,
}

/// Bounds of ingested data usable for training, per disease.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataRange {
    #[serde(default)]
    pub disease: Option<String>,
    pub lab_test_start: String,
    pub lab_test_end: String,
    pub pharma_start: String,
    pub pharma_end: String,
    pub training_start: String,
    pub training_end: String,
}

/// Lifecycle of a training run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStatus {
    Pending,
    Training,
    Completed,
    Failed,
}

impl TrainingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Training => "Training",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// A queued or completed model training run.
#[derive(Clone, Debug, Deserialize)]
pub struct TrainingSession {
    pub id: i64,
    pub disease: String,
    pub training_start_date: String,
    pub training_end_date: String,
    pub forecast_start_date: String,
    pub forecast_end_date: String,
    pub status: TrainingStatus,
    #[serde(default)]
    pub mae_score: Option<f64>,
    #[serde(default)]
    pub trained_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for queueing a training run. Dates are `YYYY-MM-DD`.
#[derive(Clone, Debug, Serialize)]
pub struct TrainingSessionRequest {
    pub disease: String,
    pub training_start_date: String,
    pub training_end_date: String,
    pub forecast_start_date: String,
    pub forecast_end_date: String,
}

/// A generated report available for download.
#[derive(Clone, Debug, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_type: String,
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One audit-trail entry.
#[derive(Clone, Debug, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub user: String,
    pub action: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
