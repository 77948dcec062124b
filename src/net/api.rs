//! Typed endpoint wrappers.
//!
//! The `impl ApiClient` block is the full backend surface, one thin method
//! per endpoint. The free functions below it are what pages call: in the
//! browser they forward to a process-wide client, on the server they fail
//! with [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{Method, Transport};
use crate::net::types::{
    AuditEntry, AuthResponse, AvailableDates, DataRange, Dataset, DatasetUploadMeta, Forecast,
    ForecastDetail, ForecastModel, ForecastQuery, ModelCreateRequest, RegisterRequest, Report,
    TrainingSession, TrainingSessionRequest, User,
};

impl<T: Transport> ApiClient<T> {
    /// Authenticate and persist the returned credential pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let resp: AuthResponse = self
            .request(
                Method::Post,
                "/api/users/login/",
                Some(json!({ "email": email, "password": password })),
            )
            .await?;
        self.tokens().store(&resp.access, &resp.refresh);
        Ok(resp)
    }

    /// Create an account and persist the returned credential pair.
    pub async fn register(&self, form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(form).unwrap_or(Value::Null);
        let resp: AuthResponse = self
            .request(Method::Post, "/api/users/register/", Some(body))
            .await?;
        self.tokens().store(&resp.access, &resp.refresh);
        Ok(resp)
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.request(Method::Get, "/api/users/profile/", None).await
    }

    pub async fn list_datasets(&self) -> Result<Vec<Dataset>, ApiError> {
        self.request(Method::Get, "/api/datasets/", None).await
    }

    pub async fn dataset(&self, id: i64) -> Result<Dataset, ApiError> {
        self.request(Method::Get, &format!("/api/datasets/{id}/"), None).await
    }

    pub async fn list_models(&self) -> Result<Vec<ForecastModel>, ApiError> {
        self.request(Method::Get, "/api/forecasting/models/", None).await
    }

    pub async fn create_model(&self, form: &ModelCreateRequest) -> Result<ForecastModel, ApiError> {
        let body = serde_json::to_value(form).unwrap_or(Value::Null);
        self.request(Method::Post, "/api/forecasting/models/", Some(body)).await
    }

    pub async fn retrain_model(&self, id: i64) -> Result<ForecastModel, ApiError> {
        self.request(
            Method::Post,
            &format!("/api/forecasting/models/{id}/retrain/"),
            None,
        )
        .await
    }

    pub async fn list_forecasts(&self, query: &ForecastQuery) -> Result<Vec<Forecast>, ApiError> {
        let qs = query_string(&[
            ("disease", query.disease.clone()),
            ("region", query.region.clone()),
            ("model", query.model.map(|m| m.to_string())),
        ]);
        self.request(Method::Get, &format!("/api/forecasting/forecasts/{qs}"), None)
            .await
    }

    /// Day-by-day forecasts over a date window. A window outside the stored
    /// range fails with a 404 whose body names the available range.
    pub async fn forecast_detail(
        &self,
        disease: &str,
        start_date: &str,
        days_ahead: u32,
    ) -> Result<ForecastDetail, ApiError> {
        let qs = query_string(&[
            ("disease", Some(disease.to_owned())),
            ("start_date", Some(start_date.to_owned())),
            ("days_ahead", Some(days_ahead.to_string())),
        ]);
        self.request(
            Method::Get,
            &format!("/api/forecasting/forecasts/forecast_detail/{qs}"),
            None,
        )
        .await
    }

    pub async fn available_dates(&self, disease: &str) -> Result<AvailableDates, ApiError> {
        let qs = query_string(&[("disease", Some(disease.to_owned()))]);
        self.request(
            Method::Get,
            &format!("/api/forecasting/forecasts/available_dates/{qs}"),
            None,
        )
        .await
    }

    pub async fn data_range(&self, disease: &str) -> Result<DataRange, ApiError> {
        let qs = query_string(&[("disease", Some(disease.to_owned()))]);
        self.request(Method::Get, &format!("/api/forecasting/data-range/{qs}"), None)
            .await
    }

    pub async fn create_training_session(
        &self,
        form: &TrainingSessionRequest,
    ) -> Result<TrainingSession, ApiError> {
        let body = serde_json::to_value(form).unwrap_or(Value::Null);
        self.request(Method::Post, "/api/forecasting/training-sessions/", Some(body))
            .await
    }

    pub async fn list_training_sessions(&self) -> Result<Vec<TrainingSession>, ApiError> {
        self.request(Method::Get, "/api/forecasting/training-sessions/", None).await
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.request(Method::Get, "/api/reports/", None).await
    }

    pub async fn generate_report(
        &self,
        report_type: &str,
        params: Value,
    ) -> Result<Report, ApiError> {
        let mut body = serde_json::Map::new();
        body.insert("report_type".to_owned(), Value::String(report_type.to_owned()));
        if let Value::Object(extra) = params {
            body.extend(extra);
        }
        self.request(Method::Post, "/api/reports/generate/", Some(Value::Object(body)))
            .await
    }

    pub async fn audit_log(&self) -> Result<Vec<AuditEntry>, ApiError> {
        self.request(Method::Get, "/api/reports/audit/", None).await
    }
}

/// Build `?k=v&…` from the pairs whose value is present; empty when none is.
pub(crate) fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Multipart field set accompanying a dataset file upload.
pub(crate) fn upload_fields(meta: &DatasetUploadMeta) -> Vec<(&'static str, String)> {
    vec![
        ("dataset_type", meta.dataset_type.clone()),
        ("disease", meta.disease.clone()),
        ("name", meta.name.clone()),
    ]
}

// =============================================================
// Browser-side entry points
// =============================================================

#[cfg(feature = "hydrate")]
pub(crate) fn shared() -> std::rc::Rc<ApiClient<crate::net::transport::GlooTransport>> {
    use std::rc::Rc;

    use crate::net::tokens::TokenStore;
    use crate::net::transport::GlooTransport;

    thread_local! {
        static CLIENT: Rc<ApiClient<GlooTransport>> = Rc::new(
            ApiClient::new(crate::config::api_base(), TokenStore::persistent(), GlooTransport)
                .on_session_invalid(|| crate::util::nav::hard_redirect("/login")),
        );
    }
    CLIENT.with(Rc::clone)
}

macro_rules! browser_call {
    ($call:expr) => {{
        #[cfg(feature = "hydrate")]
        {
            $call.await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }};
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = (email, password);
    browser_call!(shared().login(email, password))
}

pub async fn register(form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = form;
    browser_call!(shared().register(form))
}

pub async fn list_datasets() -> Result<Vec<Dataset>, ApiError> {
    browser_call!(shared().list_datasets())
}

pub async fn dataset(id: i64) -> Result<Dataset, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
    browser_call!(shared().dataset(id))
}

pub async fn list_models() -> Result<Vec<ForecastModel>, ApiError> {
    browser_call!(shared().list_models())
}

pub async fn create_model(form: &ModelCreateRequest) -> Result<ForecastModel, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = form;
    browser_call!(shared().create_model(form))
}

pub async fn retrain_model(id: i64) -> Result<ForecastModel, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
    browser_call!(shared().retrain_model(id))
}

pub async fn list_forecasts(query: &ForecastQuery) -> Result<Vec<Forecast>, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = query;
    browser_call!(shared().list_forecasts(query))
}

pub async fn forecast_detail(
    disease: &str,
    start_date: &str,
    days_ahead: u32,
) -> Result<ForecastDetail, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = (disease, start_date, days_ahead);
    browser_call!(shared().forecast_detail(disease, start_date, days_ahead))
}

pub async fn available_dates(disease: &str) -> Result<AvailableDates, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = disease;
    browser_call!(shared().available_dates(disease))
}

pub async fn data_range(disease: &str) -> Result<DataRange, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = disease;
    browser_call!(shared().data_range(disease))
}

pub async fn create_training_session(
    form: &TrainingSessionRequest,
) -> Result<TrainingSession, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = form;
    browser_call!(shared().create_training_session(form))
}

pub async fn list_training_sessions() -> Result<Vec<TrainingSession>, ApiError> {
    browser_call!(shared().list_training_sessions())
}

pub async fn list_reports() -> Result<Vec<Report>, ApiError> {
    browser_call!(shared().list_reports())
}

pub async fn generate_report(report_type: &str, params: Value) -> Result<Report, ApiError> {
    #[cfg(not(feature = "hydrate"))]
    let _ = (report_type, params);
    browser_call!(shared().generate_report(report_type, params))
}

pub async fn audit_log() -> Result<Vec<AuditEntry>, ApiError> {
    browser_call!(shared().audit_log())
}

/// Resolve the persisted session once at startup: profile fetch when an
/// access token is stored, anonymous otherwise.
pub async fn resolve_session() -> crate::state::session::SessionState {
    #[cfg(feature = "hydrate")]
    {
        crate::state::session::resolve(shared().as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::state::session::SessionState::anonymous()
    }
}

/// Drop the persisted credential pair. Part of logout; the caller is
/// responsible for the accompanying hard redirect.
pub fn clear_session_tokens() {
    #[cfg(feature = "hydrate")]
    shared().tokens().clear();
}

/// Upload a dataset file with its metadata fields as multipart form data.
///
/// Bypasses the JSON default: no explicit `Content-Type` header (the
/// browser sets the multipart boundary), bearer still attached, errors
/// surfaced through the same [`ApiError`] taxonomy.
#[cfg(feature = "hydrate")]
pub async fn upload_dataset(
    file: &web_sys::File,
    meta: &DatasetUploadMeta,
) -> Result<Dataset, ApiError> {
    use crate::net::client::bearer_headers;
    use crate::net::error::status_error;

    let api = shared();
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    form.append_with_blob("file", file).map_err(|_| ApiError::Network)?;
    for (key, value) in upload_fields(meta) {
        form.append_with_str(key, &value).map_err(|_| ApiError::Network)?;
    }

    let url = format!("{}/api/datasets/upload/", api.base());
    let builder = bearer_headers(api.tokens().access().as_deref())
        .into_iter()
        .fold(gloo_net::http::Request::post(&url), |b, (name, value)| {
            b.header(&name, &value)
        });

    let response = builder
        .body(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(status_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Download a generated report as raw bytes.
#[cfg(feature = "hydrate")]
pub async fn download_report(id: i64) -> Result<Vec<u8>, ApiError> {
    use crate::net::client::bearer_headers;
    use crate::net::error::status_error;

    let api = shared();
    let url = format!("{}/api/reports/{id}/download/", api.base());
    let builder = bearer_headers(api.tokens().access().as_deref())
        .into_iter()
        .fold(gloo_net::http::Request::get(&url), |b, (name, value)| {
            b.header(&name, &value)
        });

    let response = builder.send().await.map_err(|_| ApiError::Network)?;
    let status = response.status();
    if !(200..300).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    response.binary().await.map_err(|_| ApiError::Network)
}
