//! Forecast browser for health officials.
//!
//! Filters pick a disease, a start date, and a horizon; the detail fetch
//! returns the daily series plus a backend summary. A window outside the
//! stored range comes back as a 404 naming the available range, which is
//! surfaced instead of a generic failure.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::net::error::ApiError;
use crate::net::types::{ForecastDetail, Role};
use crate::state::forecasts::{self, DISEASES, HORIZONS};

#[component]
pub fn ForecastsPage() -> impl IntoView {
    view! {
        <RouteGuard roles=vec![Role::HealthOfficial]>
            <NavBar/>
            <ForecastBrowser/>
        </RouteGuard>
    }
}

#[component]
fn ForecastBrowser() -> impl IntoView {
    let disease = RwSignal::new(DISEASES[0].0.to_owned());
    let start_date = RwSignal::new(String::new());
    let horizon = RwSignal::new(HORIZONS[0]);
    let detail = RwSignal::new(None::<Result<ForecastDetail, ApiError>>);
    let loading = RwSignal::new(false);

    let coverage = LocalResource::new(move || {
        let disease = disease.get();
        async move { crate::net::api::available_dates(&disease).await.ok() }
    });

    let on_load = move |_| {
        let date = start_date.get();
        if date.is_empty() {
            return;
        }
        loading.set(true);
        let disease = disease.get();
        let days = horizon.get();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::forecast_detail(&disease, &date, days).await;
            detail.set(Some(result));
            loading.set(false);
        });
    };

    let coverage_note = move || {
        coverage.get().flatten().map(|dates| {
            let range = forecasts::format_date_range(&dates.date_range)
                .unwrap_or_else(|| "unknown".to_owned());
            format!("{} forecasts stored, covering {range}", dates.total_forecasts)
        })
    };

    view! {
        <div class="forecasts-page">
            <header class="page-header">
                <h1>"Disease Forecasts"</h1>
                <p>"Predicted case counts from the trained models"</p>
            </header>

            <div class="forecasts-page__filters">
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
                    "Horizon"
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse() {
                                horizon.set(days);
                            }
                        }
                    >
                        {HORIZONS
                            .into_iter()
                            .map(|days| {
                                view! {
                                    <option
                                        value=days.to_string()
                                        selected=move || horizon.get() == days
                                    >
                                        {format!("{days} days")}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <button
                    class="btn btn--primary"
                    disabled=move || loading.get()
                    on:click=on_load
                >
                    {move || if loading.get() { "Loading..." } else { "Load Forecast" }}
                </button>
            </div>

            <p class="forecasts-page__coverage">{coverage_note}</p>

            {move || detail.get().map(|result| match result {
                Ok(loaded) => view! { <ForecastResult detail=loaded/> }.into_any(),
                Err(err) => {
                    let message = forecasts::available_range_message(&err)
                        .map(|range| format!("No forecasts for that window; available {range}"))
                        .unwrap_or_else(|| err.to_string());
                    view! { <p class="banner banner--error">{message}</p> }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn ForecastResult(detail: ForecastDetail) -> impl IntoView {
    let stats = forecasts::stats(&detail.forecasts);

    let tiles = [
        ("Average", stats.average),
        ("Peak", stats.peak),
        ("Minimum", stats.minimum),
        ("Total", stats.total),
    ]
    .into_iter()
    .map(|(label, value)| {
        view! {
            <div class="stat-tile">
                <span class="stat-tile__label">{label}</span>
                <span class="stat-tile__value">{format!("{value:.0}")}</span>
            </div>
        }
    })
    .collect::<Vec<_>>();

    let rows = detail
        .forecasts
        .into_iter()
        .map(|point| {
            let interval = point
                .confidence_interval
                .map(|ci| format!("{:.0} - {:.0}", ci.lower, ci.upper))
                .unwrap_or_else(|| "-".to_owned());
            view! {
                <tr>
                    <td>{point.forecast_date}</td>
                    <td>{point.region}</td>
                    <td>{format!("{:.0}", point.predicted_cases)}</td>
                    <td>{interval}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="forecasts-page__stats">{tiles}</div>

        <table class="data-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Region"</th>
                    <th>"Predicted Cases"</th>
                    <th>"Confidence"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
