//! Reports screen: generate, list, and download reports, plus the audit
//! trail. Open to any authenticated role.

use leptos::prelude::*;
use serde_json::json;

use crate::components::error_banner::{ErrorBanner, SuccessBanner};
use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::state::forecasts::DISEASES;

/// Report categories the backend can render.
const REPORT_TYPES: [(&str, &str); 3] = [
    ("FORECAST", "Forecast Report"),
    ("TREND", "Disease Trend Analysis"),
    ("AUDIT", "Audit Summary"),
];

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <NavBar/>
            <ReportsScreen/>
        </RouteGuard>
    }
}

#[component]
fn ReportsScreen() -> impl IntoView {
    let reports = LocalResource::new(|| crate::net::api::list_reports());
    let audit = LocalResource::new(|| crate::net::api::audit_log());

    let report_type = RwSignal::new(REPORT_TYPES[0].0.to_owned());
    let disease = RwSignal::new(DISEASES[0].0.to_owned());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let generating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_generate = move |_| {
        error.set(None);
        success.set(None);

        let params = json!({
            "disease": disease.get(),
            "start_date": start_date.get(),
            "end_date": end_date.get(),
        });
        let kind = report_type.get();
        generating.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_report(&kind, params).await {
                Ok(report) => {
                    success.set(Some(format!("Report {} queued", report.id)));
                    reports.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            generating.set(false);
        });
    };

    view! {
        <div class="reports-page">
            <header class="page-header">
                <h1>"Reports & Export"</h1>
                <p>"Generate and download reports for analysis and decision-making"</p>
            </header>

            <section class="reports-page__generator">
                <h2>"Generate Report"</h2>

                <label class="field">
                    "Report Type"
                    <select
                        class="field__input"
                        on:change=move |ev| report_type.set(event_target_value(&ev))
                    >
                        {REPORT_TYPES
                            .into_iter()
                            .map(|(wire, label)| {
                                view! {
                                    <option value=wire selected=move || report_type.get() == wire>
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="field">
                    "Disease"
                    <select
                        class="field__input"
                        on:change=move |ev| disease.set(event_target_value(&ev))
                    >
                        {DISEASES
                            .into_iter()
                            .map(|(wire, label)| {
                                view! {
                                    <option value=wire selected=move || disease.get() == wire>
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="field">
                    "Start Date"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "End Date"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>

                <ErrorBanner message=error/>
                <SuccessBanner message=success/>

                <button
                    class="btn btn--primary"
                    disabled=move || generating.get()
                    on:click=on_generate
                >
                    {move || if generating.get() { "Generating..." } else { "Generate" }}
                </button>
            </section>

            <section class="reports-page__list">
                <h2>"Available Reports"</h2>
                <Suspense fallback=move || view! { <p>"Loading reports..."</p> }>
                    {move || {
                        reports.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="empty">"No reports generated yet"</p> }
                                    .into_any()
                            }
                            Ok(list) => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Type"</th>
                                            <th>"Disease"</th>
                                            <th>"Created"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|report| {
                                                view! { <ReportRow report=report error=error/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Err(err) => {
                                view! { <p class="empty">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="reports-page__audit">
                <h2>"Audit Log"</h2>
                <Suspense fallback=move || view! { <p>"Loading audit trail..."</p> }>
                    {move || {
                        audit.get().map(|result| match result {
                            Ok(entries) if entries.is_empty() => {
                                view! { <p class="empty">"No audit entries"</p> }.into_any()
                            }
                            Ok(entries) => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"User"</th>
                                            <th>"Action"</th>
                                            <th>"When"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {entries
                                            .into_iter()
                                            .map(|entry| {
                                                view! {
                                                    <tr>
                                                        <td>{entry.user}</td>
                                                        <td>{entry.action}</td>
                                                        <td>{entry.timestamp.unwrap_or_default()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Err(err) => {
                                view! { <p class="empty">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn ReportRow(
    report: crate::net::types::Report,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = report.id;
    let kind = report.report_type.clone();
    let downloading = RwSignal::new(false);

    let on_download = move |_| {
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let name = format!("report-{id}.pdf");
            downloading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::download_report(id).await {
                    Ok(bytes) => crate::util::download::save_bytes(&name, &bytes),
                    Err(err) => error.set(Some(err.to_string())),
                }
                downloading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <tr>
            <td>{kind}</td>
            <td>{report.disease.unwrap_or_default()}</td>
            <td>{report.created_at.unwrap_or_default()}</td>
            <td>
                <button class="btn" disabled=move || downloading.get() on:click=on_download>
                    {move || if downloading.get() { "Fetching..." } else { "Download" }}
                </button>
            </td>
        </tr>
    }
}
