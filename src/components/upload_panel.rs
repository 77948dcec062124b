//! Admin data-upload panel: pick a dataset category and a file, send it as
//! multipart, and list recent uploads.

use leptos::prelude::*;

use crate::components::error_banner::{ErrorBanner, SuccessBanner};
use crate::state::forecasts::DISEASES;
use crate::state::ui::DatasetKind;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let kind = RwSignal::new(DatasetKind::default());
    let disease = RwSignal::new(DISEASES[0].0.to_owned());
    let file_name = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let datasets = LocalResource::new(|| crate::net::api::list_datasets());

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            file_name.set(name);
        }
    };

    let on_upload = move |_| {
        error.set(None);
        success.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_ref.get().and_then(|input| input.files()).and_then(|f| f.get(0))
            else {
                error.set(Some("Choose a file to upload".to_owned()));
                return;
            };

            let meta = crate::net::types::DatasetUploadMeta {
                dataset_type: kind.get().wire().to_owned(),
                disease: disease.get(),
                name: file.name(),
            };

            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_dataset(&file, &meta).await {
                    Ok(dataset) => {
                        success.set(Some(format!("Uploaded {}", dataset.name)));
                        file_name.set(None);
                        datasets.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                uploading.set(false);
            });
        }
    };

    let kind_cards = move || {
        DatasetKind::ALL
            .into_iter()
            .map(|candidate| {
                let selected = move || kind.get() == candidate;
                view! {
                    <button
                        class="upload-panel__kind"
                        class=("upload-panel__kind--selected", selected)
                        on:click=move |_| kind.set(candidate)
                    >
                        <span class="upload-panel__kind-label">{candidate.label()}</span>
                        <span class="upload-panel__kind-desc">{candidate.description()}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="upload-panel">
            <h2>"Data Upload"</h2>

            <div class="upload-panel__kinds">{kind_cards}</div>

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
                "Data File (CSV)"
                <input
                    class="field__input"
                    type="file"
                    accept=".csv"
                    node_ref=file_ref
                    on:change=on_file_change
                />
            </label>

            <ErrorBanner message=error/>
            <SuccessBanner message=success/>

            <button
                class="btn btn--primary"
                disabled=move || uploading.get() || file_name.get().is_none()
                on:click=on_upload
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload Dataset" }}
            </button>

            <h3>"Recent Uploads"</h3>
            <Suspense fallback=move || view! { <p>"Loading datasets..."</p> }>
                {move || {
                    datasets.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty">"No datasets uploaded yet"</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Type"</th>
                                        <th>"Disease"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|d| {
                                            view! {
                                                <tr>
                                                    <td>{d.name}</td>
                                                    <td>{d.dataset_type}</td>
                                                    <td>{d.disease}</td>
                                                    <td>{d.status.unwrap_or_default()}</td>
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
