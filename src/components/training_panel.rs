//! Admin model-training panel: per-disease data-range display, date
//! pickers checked by the rules in [`crate::state::training`], and the
//! training-run history.

use leptos::prelude::*;

use crate::components::error_banner::{ErrorBanner, SuccessBanner};
use crate::state::forecasts::DISEASES;
use crate::state::training::{self, TrainingDates};

#[component]
pub fn TrainingPanel() -> impl IntoView {
    let disease = RwSignal::new(DISEASES[0].0.to_owned());

    let range = LocalResource::new(move || {
        let disease = disease.get();
        async move { crate::net::api::data_range(&disease).await.ok() }
    });
    let sessions = LocalResource::new(|| crate::net::api::list_training_sessions());

    let training_start = RwSignal::new(String::new());
    let training_end = RwSignal::new(String::new());
    let forecast_start = RwSignal::new(String::new());
    let forecast_end = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Prefill the pickers with the backend's full valid window whenever a
    // new disease's range arrives.
    Effect::new(move || {
        let Some(loaded) = range.get().flatten() else {
            return;
        };
        if let Some(defaults) = training::defaults_from_range(&loaded) {
            training_start.set(defaults.training_start.to_string());
            training_end.set(defaults.training_end.to_string());
            forecast_start.set(defaults.forecast_start.to_string());
            forecast_end.set(defaults.forecast_end.to_string());
        }
    });

    // The forecast window tracks the training end date.
    let on_training_end = move |ev| {
        let value = event_target_value(&ev);
        if let Some(end) = training::parse_day(&value) {
            if let Some((start, horizon_end)) = training::forecast_window(end) {
                forecast_start.set(start.to_string());
                forecast_end.set(horizon_end.to_string());
            }
        }
        training_end.set(value);
    };

    let on_submit = move |_| {
        error.set(None);
        success.set(None);

        let parsed = training::parse_day(&training_start.get())
            .zip(training::parse_day(&training_end.get()))
            .zip(
                training::parse_day(&forecast_start.get())
                    .zip(training::parse_day(&forecast_end.get())),
            );
        let Some(((t_start, t_end), (f_start, f_end))) = parsed else {
            error.set(Some("All four dates are required".to_owned()));
            return;
        };

        let dates = TrainingDates {
            training_start: t_start,
            training_end: t_end,
            forecast_start: f_start,
            forecast_end: f_end,
        };
        let loaded = range.get().flatten();
        if let Err(rule) = training::validate(&dates, loaded.as_ref()) {
            error.set(Some(rule.to_string()));
            return;
        }

        let form = dates.to_request(&disease.get());
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_training_session(&form).await {
                Ok(session) => {
                    success.set(Some(format!(
                        "Training session {} queued for {}",
                        session.id, session.disease
                    )));
                    sessions.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let range_summary = move || {
        range.get().flatten().map(|r| {
            view! {
                <dl class="training-panel__range">
                    <div>
                        <dt>"Lab tests"</dt>
                        <dd>{format!("{} to {}", r.lab_test_start, r.lab_test_end)}</dd>
                    </div>
                    <div>
                        <dt>"Pharmacy sales"</dt>
                        <dd>{format!("{} to {}", r.pharma_start, r.pharma_end)}</dd>
                    </div>
                    <div>
                        <dt>"Valid training window"</dt>
                        <dd>{format!("{} to {}", r.training_start, r.training_end)}</dd>
                    </div>
                </dl>
            }
        })
    };

    view! {
        <section class="training-panel">
            <h2>"Model Training"</h2>

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

            <Suspense fallback=move || view! { <p>"Loading data range..."</p> }>
                {range_summary}
            </Suspense>

            <div class="training-panel__dates">
                <label class="field">
                    "Training Start"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || training_start.get()
                        on:input=move |ev| training_start.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Training End"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || training_end.get()
                        on:input=on_training_end
                    />
                </label>
                <label class="field">
                    "Forecast Start"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || forecast_start.get()
                        on:input=move |ev| forecast_start.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Forecast End"
                    <input
                        class="field__input"
                        type="date"
                        prop:value=move || forecast_end.get()
                        on:input=move |ev| forecast_end.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <ErrorBanner message=error/>
            <SuccessBanner message=success/>

            <button
                class="btn btn--primary"
                disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || if submitting.get() { "Queueing..." } else { "Start Training" }}
            </button>

            <h3>"Training History"</h3>
            <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                {move || {
                    sessions.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty">"No training runs yet"</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Disease"</th>
                                        <th>"Training Window"</th>
                                        <th>"Forecast Window"</th>
                                        <th>"Status"</th>
                                        <th>"MAE"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|s| {
                                            let mae = s
                                                .mae_score
                                                .map(|m| format!("{m:.2}"))
                                                .unwrap_or_else(|| "-".to_owned());
                                            view! {
                                                <tr>
                                                    <td>{s.disease}</td>
                                                    <td>
                                                        {format!(
                                                            "{} to {}",
                                                            s.training_start_date,
                                                            s.training_end_date,
                                                        )}
                                                    </td>
                                                    <td>
                                                        {format!(
                                                            "{} to {}",
                                                            s.forecast_start_date,
                                                            s.forecast_end_date,
                                                        )}
                                                    </td>
                                                    <td>
                                                        <span class="badge">{s.status.label()}</span>
                                                    </td>
                                                    <td>{mae}</td>
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
    }
}
