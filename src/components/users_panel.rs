//! Admin user-management panel.
//!
//! The backend exposes no user-administration endpoints, so the roster is
//! presentational placeholder data and the add-user form never submits.

use leptos::prelude::*;

use crate::net::types::Role;

struct RosterEntry {
    name: &'static str,
    email: &'static str,
    role: Role,
    active: bool,
}

const ROSTER: [RosterEntry; 4] = [
    RosterEntry {
        name: "Dr. Ahmed Hassan",
        email: "ahmed@health.pk",
        role: Role::HealthOfficial,
        active: true,
    },
    RosterEntry {
        name: "Fatima Khan",
        email: "fatima@pharmacy.pk",
        role: Role::Pharmacist,
        active: true,
    },
    RosterEntry {
        name: "Mohammad Ali",
        email: "ali@lab.pk",
        role: Role::LabTech,
        active: false,
    },
    RosterEntry {
        name: "Sara Malik",
        email: "sara@health.pk",
        role: Role::HealthOfficial,
        active: true,
    },
];

#[component]
pub fn UsersPanel() -> impl IntoView {
    let rows = ROSTER
        .iter()
        .map(|entry| {
            let status = if entry.active { "Active" } else { "Pending" };
            view! {
                <tr>
                    <td>{entry.name}</td>
                    <td>{entry.email}</td>
                    <td>{entry.role.label()}</td>
                    <td>
                        <span class="badge">{status}</span>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="users-panel">
            <h2>"User Accounts"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <p class="users-panel__note">
                "New accounts are created through the registration screen."
            </p>
        </section>
    }
}
