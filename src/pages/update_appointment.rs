//! Appointment update form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::create_appointment::{AppointmentFields, build_appointment};
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Update form for one appointment, pre-filled from the current record and
/// submitted via `PUT /appointments/{id}`.
#[component]
pub fn UpdateAppointmentPage() -> impl IntoView {
    let params = use_params_map();
    let appointment_id = params.get_untracked().get("id").unwrap_or_default();

    let patient_id = RwSignal::new(String::new());
    let doctor_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let status = RwSignal::new("scheduled".to_owned());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionHandle>();

    // Pre-fill from the existing record.
    #[cfg(feature = "hydrate")]
    {
        let appointment_id = appointment_id.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_appointment(&appointment_id).await {
                Ok(record) => {
                    let _ = patient_id.try_set(record.patient_id);
                    let _ = doctor_id.try_set(record.doctor_id);
                    let _ = date.try_set(record.date);
                    let _ = status.try_set(record.status.as_str().to_owned());
                    let _ = notes.try_set(record.notes.unwrap_or_default());
                }
                Err(err) => {
                    let _ = error.try_set(Some(describe_failure(&session, &err)));
                }
            }
        });
    }

    let submit_id = appointment_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(false);
        let appointment = match build_appointment(
            &patient_id.get(),
            &doctor_id.get(),
            &date.get(),
            &status.get(),
            &notes.get(),
        ) {
            Ok(appointment) => appointment,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let id = submit_id.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_appointment(&id, &appointment).await {
                    Ok(_) => {
                        let _ = success.try_set(true);
                    }
                    Err(err) => {
                        let _ = error.try_set(Some(describe_failure(&session, &err)));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submit_id, appointment);
        }
    };

    view! {
        <div class="form-page">
            <h2>"Update Appointment"</h2>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || success.get()>
                <div class="banner banner--success">"Appointment updated successfully!"</div>
            </Show>
            <form class="record-form" on:submit=on_submit>
                <AppointmentFields
                    patient_id=patient_id
                    doctor_id=doctor_id
                    date=date
                    status=status
                    notes=notes
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Updating..." } else { "Update Appointment" }}
                </button>
            </form>
        </div>
    }
}
