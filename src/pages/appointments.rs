//! Appointment list page.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Appointment, AppointmentStatus};
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// CSS modifier class for a status pill.
pub fn status_badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "status-badge--scheduled",
        AppointmentStatus::Completed => "status-badge--completed",
        AppointmentStatus::Cancelled => "status-badge--cancelled",
    }
}

/// Fetch-on-mount list of all appointments with detail and edit links.
#[component]
pub fn AppointmentListPage() -> impl IntoView {
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_appointments().await {
                Ok(list) => {
                    let _ = appointments.try_set(list);
                }
                Err(err) => {
                    let _ = error.try_set(Some(describe_failure(&session, &err)));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    view! {
        <div class="record-page">
            <h2>"Appointment List"</h2>
            <Show when=move || loading.get()>
                <div class="record-page__spinner"></div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || format!("Error: {}", error.get().unwrap_or_default())}
                </div>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none()>
                {move || {
                    let list = appointments.get();
                    if list.is_empty() {
                        view! { <p class="record-page__empty">"No appointments found"</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="record-list">
                                {list
                                    .into_iter()
                                    .map(|appointment| {
                                        let badge = status_badge_class(appointment.status);
                                        let links = appointment
                                            .id
                                            .as_deref()
                                            .map(|id| {
                                                (
                                                    format!("/appointments/{id}"),
                                                    format!("/appointments/{id}/edit"),
                                                )
                                            });
                                        view! {
                                            <li class="record-list__row">
                                                <div>
                                                    <p class="record-list__name">
                                                        {format!(
                                                            "Patient {} with Doctor {}",
                                                            appointment.patient_id,
                                                            appointment.doctor_id,
                                                        )}
                                                    </p>
                                                    <p class="record-list__meta">{appointment.date}</p>
                                                    <span class=format!("status-badge {badge}")>
                                                        {appointment.status.as_str()}
                                                    </span>
                                                </div>
                                                {links
                                                    .map(|(detail, edit)| {
                                                        view! {
                                                            <div class="record-list__actions">
                                                                <A href=detail attr:class="record-list__action">
                                                                    "View"
                                                                </A>
                                                                <A href=edit attr:class="record-list__action">
                                                                    "Update"
                                                                </A>
                                                            </div>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
