use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::tokens::TokenStore;

use futures::executor::block_on;
use serde_json::json;

fn canned(status: u16, body: &str) -> ScriptedTransport {
    let transport = ScriptedTransport::default();
    transport.push_ok(status, body);
    transport
}

fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", TokenStore::in_memory(), transport.clone())
}

// =============================================================
// Query strings and upload fields
// =============================================================

#[test]
fn query_string_skips_absent_pairs() {
    let qs = query_string(&[
        ("disease", Some("DENGUE".to_owned())),
        ("region", None),
        ("model", Some("3".to_owned())),
    ]);
    assert_eq!(qs, "?disease=DENGUE&model=3");
}

#[test]
fn query_string_is_empty_without_values() {
    assert_eq!(query_string(&[("disease", None), ("region", None)]), "");
}

#[test]
fn query_string_percent_encodes_values() {
    let qs = query_string(&[("region", Some("Khyber Pakhtunkhwa".to_owned()))]);
    assert_eq!(qs, "?region=Khyber%20Pakhtunkhwa");
}

#[test]
fn upload_fields_cover_the_metadata_triple() {
    let meta = DatasetUploadMeta {
        dataset_type: "LAB".to_owned(),
        disease: "DENGUE".to_owned(),
        name: "cases-nov.csv".to_owned(),
    };
    assert_eq!(
        upload_fields(&meta),
        vec![
            ("dataset_type", "LAB".to_owned()),
            ("disease", "DENGUE".to_owned()),
            ("name", "cases-nov.csv".to_owned()),
        ]
    );
}

// =============================================================
// Endpoint wiring
// =============================================================

#[test]
fn login_persists_the_returned_credential_pair() {
    let transport = canned(
        200,
        r#"{"access":"A1","refresh":"R1","user":{"id":1,"email":"admin@msdp.pk","first_name":"Site","last_name":"Admin","role":"ADMIN","is_active":true}}"#,
    );
    let api = client(&transport);

    let resp = block_on(api.login("admin@msdp.pk", "admin123")).expect("login");

    assert_eq!(api.tokens().access().as_deref(), Some("A1"));
    assert_eq!(api.tokens().refresh().as_deref(), Some("R1"));
    assert_eq!(resp.user.role, crate::net::types::Role::Admin);

    let req = transport.last_request();
    assert!(req.url.ends_with("/api/users/login/"));
    assert_eq!(
        req.body,
        Some(json!({"email": "admin@msdp.pk", "password": "admin123"}))
    );
}

#[test]
fn failed_login_stores_nothing() {
    let transport = canned(400, r#"{"detail":"invalid credentials"}"#);
    let api = client(&transport);

    let err = block_on(api.login("admin@msdp.pk", "wrong")).expect_err("expected failure");

    assert_eq!(err.status_code(), 400);
    assert!(api.tokens().access().is_none());
}

#[test]
fn forecast_detail_builds_the_expected_query() {
    let transport = canned(200, r#"{"summary":{},"forecasts":[]}"#);
    let api = client(&transport);

    let detail = block_on(api.forecast_detail("MALARIA", "2025-06-01", 14)).expect("detail");
    assert!(detail.forecasts.is_empty());

    let req = transport.last_request();
    assert!(req.url.ends_with(
        "/api/forecasting/forecasts/forecast_detail/?disease=MALARIA&start_date=2025-06-01&days_ahead=14"
    ));
}

#[test]
fn list_forecasts_carries_only_the_set_filters() {
    let transport = canned(200, "[]");
    let api = client(&transport);

    let query = ForecastQuery {
        disease: Some("DENGUE".to_owned()),
        region: None,
        model: Some(3),
    };
    let list = block_on(api.list_forecasts(&query)).expect("forecasts");
    assert!(list.is_empty());

    let req = transport.last_request();
    assert!(req.url.ends_with("/api/forecasting/forecasts/?disease=DENGUE&model=3"));
}

#[test]
fn generate_report_merges_parameters_into_the_body() {
    let transport = canned(200, r#"{"id":7,"report_type":"WEEKLY_SUMMARY"}"#);
    let api = client(&transport);

    let report = block_on(api.generate_report(
        "WEEKLY_SUMMARY",
        json!({"disease": "DENGUE", "region": "Sindh"}),
    ))
    .expect("report");
    assert_eq!(report.id, 7);

    let req = transport.last_request();
    assert_eq!(
        req.body,
        Some(json!({
            "report_type": "WEEKLY_SUMMARY",
            "disease": "DENGUE",
            "region": "Sindh"
        }))
    );
}

#[test]
fn single_resource_lookups_target_their_id_paths() {
    let transport = canned(
        200,
        r#"{"id":5,"name":"lab-nov.csv","dataset_type":"LAB","disease":"DENGUE"}"#,
    );
    let api = client(&transport);

    let dataset = block_on(api.dataset(5)).expect("dataset");
    assert_eq!(dataset.id, 5);
    assert!(transport.last_request().url.ends_with("/api/datasets/5/"));
}

#[test]
fn retrain_targets_the_model_specific_path() {
    let transport = canned(
        200,
        r#"{"id":3,"name":"lstm","version":"2","algorithm":"LSTM","status":"TRAINING"}"#,
    );
    let api = client(&transport);

    let model = block_on(api.retrain_model(3)).expect("model");
    assert_eq!(model.status, crate::net::types::ModelStatus::Training);
    assert!(transport.last_request().url.ends_with("/api/forecasting/models/3/retrain/"));
}
