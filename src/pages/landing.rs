//! Public landing page with the product pitch and sign-in links.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    (
        "Real-Time Forecasting",
        "LSTM and ARIMAX models predict disease spread days in advance",
    ),
    (
        "Multi-Source Data",
        "Lab results, pharmacy sales, weather, and search trends in one pipeline",
    ),
    (
        "Role-Based Access",
        "Tailored screens for admins, health officials, pharmacists, and lab technicians",
    ),
    (
        "Audit Trail",
        "Every upload, training run, and report generation is logged",
    ),
];

const DISEASES: [&str; 5] = ["Malaria", "Dengue", "COVID-19", "Pneumonia", "Diarrhea"];

#[component]
pub fn LandingPage() -> impl IntoView {
    let features = FEATURES
        .into_iter()
        .map(|(title, description)| {
            view! {
                <div class="landing-page__feature">
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let diseases = DISEASES
        .into_iter()
        .map(|disease| view! { <span class="landing-page__disease">{disease}</span> })
        .collect::<Vec<_>>();

    view! {
        <div class="landing-page">
            <nav class="landing-page__nav">
                <span class="landing-page__brand">"MSDP"</span>
                <div>
                    <a class="btn" href="/login">"Sign In"</a>
                    <a class="btn btn--primary" href="/register">"Get Started"</a>
                </div>
            </nav>

            <header class="landing-page__hero">
                <h1>"Multi-Source Disease Surveillance Platform"</h1>
                <p>
                    "Proactive outbreak forecasting for public-health teams, built on \
                     laboratory, pharmacy, and environmental signals."
                </p>
                <a class="btn btn--primary" href="/register">"Create an account"</a>
            </header>

            <section class="landing-page__features">{features}</section>

            <section class="landing-page__diseases">
                <h2>"Diseases under surveillance"</h2>
                <div>{diseases}</div>
            </section>
        </div>
    }
}
