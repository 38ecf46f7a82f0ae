//! Appointment detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::Appointment;
use crate::pages::appointments::status_badge_class;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Fetch-on-mount detail view for one appointment record.
#[component]
pub fn AppointmentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let appointment_id = params.get_untracked().get("id").unwrap_or_default();

    let appointment = RwSignal::new(None::<Appointment>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let appointment_id = appointment_id.clone();
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_appointment(&appointment_id).await {
                Ok(record) => {
                    let _ = appointment.try_set(Some(record));
                }
                Err(err) => {
                    let _ = error.try_set(Some(describe_failure(&session, &err)));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    let edit_href = format!("/appointments/{appointment_id}/edit");

    view! {
        <div class="record-page">
            <h2>"Appointment Details"</h2>
            <Show when=move || loading.get()>
                <div class="record-page__spinner"></div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || format!("Error: {}", error.get().unwrap_or_default())}
                </div>
            </Show>
            {move || {
                let edit_href = edit_href.clone();
                appointment
                    .get()
                    .map(|record| {
                        let badge = status_badge_class(record.status);
                        view! {
                            <dl class="record-detail">
                                <dt>"Patient ID"</dt>
                                <dd>{record.patient_id}</dd>
                                <dt>"Doctor ID"</dt>
                                <dd>{record.doctor_id}</dd>
                                <dt>"Date"</dt>
                                <dd>{record.date}</dd>
                                <dt>"Status"</dt>
                                <dd>
                                    <span class=format!("status-badge {badge}")>
                                        {record.status.as_str()}
                                    </span>
                                </dd>
                                <dt>"Notes"</dt>
                                <dd>{record.notes.unwrap_or_else(|| "Not recorded".to_owned())}</dd>
                            </dl>
                            <A href=edit_href attr:class="record-detail__action">
                                "Update Appointment"
                            </A>
                        }
                    })
            }}
        </div>
    }
}
