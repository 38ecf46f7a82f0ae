//! Dashboard page with aggregate counts and recent activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::types::DashboardStats;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Status counts in a stable render order (alphabetical by status).
pub fn sorted_status_counts(counts: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<_> = counts
        .iter()
        .map(|(status, count)| (status.clone(), *count))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Authenticated landing route: totals, appointments by status, recent
/// patients, and today's appointments from `GET /dashboard/stats`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_dashboard_stats().await {
                Ok(snapshot) => {
                    let _ = stats.try_set(Some(snapshot));
                }
                Err(err) => {
                    let _ = error.try_set(Some(describe_failure(&session, &err)));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    view! {
        <div class="dashboard-page">
            <h2>"Dashboard Overview"</h2>
            <p class="dashboard-page__subtitle">
                "Welcome back. Here's what's happening today."
            </p>
            <Show when=move || loading.get()>
                <div class="record-page__spinner"></div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || format!("Error: {}", error.get().unwrap_or_default())}
                </div>
            </Show>
            {move || {
                stats
                    .get()
                    .map(|snapshot| {
                        let by_status = sorted_status_counts(&snapshot.appointments_by_status);
                        view! {
                            <div class="dashboard-page__cards">
                                <StatCard title="Total Patients" value=snapshot.total_patients/>
                                <StatCard title="Total Doctors" value=snapshot.total_doctors/>
                                <StatCard
                                    title="Total Appointments"
                                    value=snapshot.total_appointments
                                />
                            </div>

                            <section class="dashboard-page__section">
                                <h3>"Appointments by Status"</h3>
                                <ul class="dashboard-page__statuses">
                                    {by_status
                                        .into_iter()
                                        .map(|(status, count)| {
                                            view! {
                                                <li>{format!("{status}: {count}")}</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </section>

                            <section class="dashboard-page__section">
                                <h3>"Recent Patients"</h3>
                                <ul class="record-list">
                                    {snapshot
                                        .recent_patients
                                        .into_iter()
                                        .map(|patient| {
                                            view! {
                                                <li class="record-list__row">
                                                    <p class="record-list__name">{patient.name}</p>
                                                    <p class="record-list__meta">
                                                        {format!("{} years old", patient.age)}
                                                    </p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </section>

                            <section class="dashboard-page__section">
                                <h3>"Today's Appointments"</h3>
                                <ul class="record-list">
                                    {snapshot
                                        .todays_appointments
                                        .into_iter()
                                        .map(|appointment| {
                                            view! {
                                                <li class="record-list__row">
                                                    <p class="record-list__name">
                                                        {format!(
                                                            "Patient {} with Doctor {}",
                                                            appointment.patient_id,
                                                            appointment.doctor_id,
                                                        )}
                                                    </p>
                                                    <p class="record-list__meta">{appointment.date}</p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </section>
                        }
                    })
            }}
        </div>
    }
}

/// One headline statistic.
#[component]
fn StatCard(title: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
