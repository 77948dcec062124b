//! Daily data-entry screens for lab technicians and pharmacists.
//!
//! Both forms keep their values in local component state and validate
//! locally; surveillance data reaches the backend through the admin bulk
//! upload, not through these screens.

use leptos::prelude::*;

use crate::components::error_banner::{ErrorBanner, SuccessBanner};
use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::net::types::Role;
use crate::state::forecasts::DISEASES;

/// Medicines tracked per disease on the pharmacy form.
const MEDICINES: [(&str, [&str; 5]); 5] = [
    ("Malaria", ["Basoquin", "Amdaquin", "Amoquine", "Fansidar", "Coartem"]),
    ("Dengue", ["Panadol", "Calpol", "Febrol", "Vitamin C", "Folic Acid"]),
    ("COVID-19", ["Panadol", "Calpol", "Disprol", "Vitamin C", "Medisol"]),
    ("Pneumonia", ["Medilact-D", "Plasaline", "Hartmann", "Dextrone", "Flagyl"]),
    ("Diarrhea", ["Pedialyte", "ORS-L", "Hydral", "Zincolak", "Enterogermina"]),
];

/// Parse a count field; empty means zero, anything else must be a
/// non-negative integer.
fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

#[component]
pub fn LabEntryPage() -> impl IntoView {
    view! {
        <RouteGuard roles=vec![Role::LabTech]>
            <NavBar/>
            <LabEntryForm/>
        </RouteGuard>
    }
}

#[component]
fn LabEntryForm() -> impl IntoView {
    let date = RwSignal::new(String::new());
    let counts: Vec<(RwSignal<String>, RwSignal<String>)> = DISEASES
        .iter()
        .map(|_| (RwSignal::new(String::new()), RwSignal::new(String::new())))
        .collect();
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let submit_counts = counts.clone();
    let on_submit = move |_| {
        error.set(None);
        success.set(None);

        if date.get().is_empty() {
            error.set(Some("Select the date for this entry".to_owned()));
            return;
        }
        let all_parse = submit_counts
            .iter()
            .all(|(pos, neg)| parse_count(&pos.get()).is_some() && parse_count(&neg.get()).is_some());
        if !all_parse {
            error.set(Some("Counts must be whole numbers".to_owned()));
            return;
        }

        for (pos, neg) in &submit_counts {
            pos.set(String::new());
            neg.set(String::new());
        }
        success.set(Some("Lab results recorded for today".to_owned()));
    };

    let rows = DISEASES
        .iter()
        .zip(counts)
        .map(|((_, label), (positive, negative))| {
            view! {
                <tr>
                    <td>{*label}</td>
                    <td>
                        <input
                            class="field__input"
                            type="number"
                            min="0"
                            prop:value=move || positive.get()
                            on:input=move |ev| positive.set(event_target_value(&ev))
                        />
                    </td>
                    <td>
                        <input
                            class="field__input"
                            type="number"
                            min="0"
                            prop:value=move || negative.get()
                            on:input=move |ev| negative.set(event_target_value(&ev))
                        />
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="entry-page">
            <header class="page-header">
                <h1>"Lab Test Results"</h1>
                <p>"Record today's confirmed test results by disease"</p>
            </header>

            <ErrorBanner message=error/>
            <SuccessBanner message=success/>

            <label class="field">
                "Date"
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </label>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Disease"</th>
                        <th>"Positive Results"</th>
                        <th>"Negative Results"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <button class="btn btn--primary" on:click=on_submit>
                "Submit Results"
            </button>
        </div>
    }
}

#[component]
pub fn PharmacyEntryPage() -> impl IntoView {
    view! {
        <RouteGuard roles=vec![Role::Pharmacist]>
            <NavBar/>
            <PharmacyEntryForm/>
        </RouteGuard>
    }
}

#[component]
fn PharmacyEntryForm() -> impl IntoView {
    let date = RwSignal::new(String::new());
    let quantities: Vec<Vec<RwSignal<String>>> = MEDICINES
        .iter()
        .map(|(_, medicines)| medicines.iter().map(|_| RwSignal::new(String::new())).collect())
        .collect();
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let submit_quantities = quantities.clone();
    let on_submit = move |_| {
        error.set(None);
        success.set(None);

        if date.get().is_empty() {
            error.set(Some("Select the date for this entry".to_owned()));
            return;
        }
        let all_parse = submit_quantities
            .iter()
            .flatten()
            .all(|quantity| parse_count(&quantity.get()).is_some());
        if !all_parse {
            error.set(Some("Units sold must be whole numbers".to_owned()));
            return;
        }

        for quantity in submit_quantities.iter().flatten() {
            quantity.set(String::new());
        }
        success.set(Some("Pharmacy sales recorded for today".to_owned()));
    };

    let groups = MEDICINES
        .iter()
        .zip(quantities)
        .map(|((disease, medicines), fields)| {
            let inputs = medicines
                .iter()
                .zip(fields)
                .map(|(medicine, quantity)| {
                    view! {
                        <label class="field">
                            {*medicine}
                            <input
                                class="field__input"
                                type="number"
                                min="0"
                                placeholder="0"
                                prop:value=move || quantity.get()
                                on:input=move |ev| quantity.set(event_target_value(&ev))
                            />
                        </label>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <fieldset class="entry-page__group">
                    <legend>{*disease}</legend>
                    {inputs}
                </fieldset>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="entry-page">
            <header class="page-header">
                <h1>"Pharmacy Sales"</h1>
                <p>"Enter units sold per medicine; leave blank for none"</p>
            </header>

            <ErrorBanner message=error/>
            <SuccessBanner message=success/>

            <label class="field">
                "Date"
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </label>

            {groups}

            <button class="btn btn--primary" on:click=on_submit>
                "Submit Sales"
            </button>
        </div>
    }
}
