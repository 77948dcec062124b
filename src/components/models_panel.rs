//! Admin model-management panel: registered models, a create form, and a
//! per-row retrain action.

use leptos::prelude::*;

use crate::components::error_banner::{ErrorBanner, SuccessBanner};
use crate::net::types::{ForecastModel, ModelCreateRequest};

/// Algorithms the backend can train.
const ALGORITHMS: [&str; 3] = ["LSTM", "ARIMAX", "PROPHET"];

#[component]
pub fn ModelsPanel() -> impl IntoView {
    let models = LocalResource::new(|| crate::net::api::list_models());

    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    view! {
        <section class="models-panel">
            <h2>"Forecasting Models"</h2>

            <ErrorBanner message=error/>
            <SuccessBanner message=success/>

            <Suspense fallback=move || view! { <p>"Loading models..."</p> }>
                {move || {
                    models.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty">"No models registered"</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Version"</th>
                                        <th>"Algorithm"</th>
                                        <th>"Status"</th>
                                        <th>"Accuracy"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|model| {
                                            view! {
                                                <ModelRow
                                                    model=model
                                                    models=models
                                                    error=error
                                                    success=success
                                                />
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

            <CreateModelForm models=models error=error success=success/>
        </section>
    }
}

#[component]
fn ModelRow(
    model: ForecastModel,
    models: LocalResource<Result<Vec<ForecastModel>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = model.id;
    let busy = RwSignal::new(false);

    let on_retrain = move |_| {
        error.set(None);
        success.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::retrain_model(id).await {
                Ok(updated) => {
                    success.set(Some(format!("Retraining {}", updated.name)));
                    models.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let accuracy = model
        .accuracy
        .map(|a| format!("{a:.1}%"))
        .unwrap_or_else(|| "-".to_owned());

    view! {
        <tr>
            <td>{model.name}</td>
            <td>{model.version}</td>
            <td>{model.algorithm}</td>
            <td>
                <span class="badge">{model.status.label()}</span>
            </td>
            <td>{accuracy}</td>
            <td>
                <button class="btn" disabled=move || busy.get() on:click=on_retrain>
                    {move || if busy.get() { "Queued..." } else { "Retrain" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn CreateModelForm(
    models: LocalResource<Result<Vec<ForecastModel>, crate::net::error::ApiError>>,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let version = RwSignal::new("1.0".to_owned());
    let algorithm = RwSignal::new(ALGORITHMS[0].to_owned());
    let dataset_id = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |_| {
        error.set(None);
        success.set(None);

        if name.get().trim().is_empty() {
            error.set(Some("Model name is required".to_owned()));
            return;
        }
        let Ok(dataset) = dataset_id.get().trim().parse::<i64>() else {
            error.set(Some("Dataset ID must be a number".to_owned()));
            return;
        };

        let form = ModelCreateRequest {
            name: name.get().trim().to_owned(),
            version: version.get().trim().to_owned(),
            algorithm: algorithm.get(),
            dataset,
        };

        submitting.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_model(&form).await {
                Ok(created) => {
                    success.set(Some(format!("Created model {}", created.name)));
                    name.set(String::new());
                    dataset_id.set(String::new());
                    models.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <h3>"Register Model"</h3>
        <div class="models-panel__form">
            <label class="field">
                "Name"
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Version"
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || version.get()
                    on:input=move |ev| version.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Algorithm"
                <select
                    class="field__input"
                    on:change=move |ev| algorithm.set(event_target_value(&ev))
                >
                    {ALGORITHMS
                        .into_iter()
                        .map(|alg| {
                            view! {
                                <option value=alg selected=move || algorithm.get() == alg>
                                    {alg}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="field">
                "Dataset ID"
                <input
                    class="field__input"
                    type="number"
                    prop:value=move || dataset_id.get()
                    on:input=move |ev| dataset_id.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || if submitting.get() { "Creating..." } else { "Create Model" }}
            </button>
        </div>
    }
}
