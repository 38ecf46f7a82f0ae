//! Appointment booking form.

#[cfg(test)]
#[path = "create_appointment_test.rs"]
mod create_appointment_test;

use leptos::prelude::*;

use crate::net::types::{AppointmentStatus, AppointmentUpsert};
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Assemble an appointment payload from raw form fields. Shared with the
/// update form, which posts the same shape to a different endpoint.
pub fn build_appointment(
    patient_id: &str,
    doctor_id: &str,
    date: &str,
    status: &str,
    notes: &str,
) -> Result<AppointmentUpsert, &'static str> {
    let patient_id = patient_id.trim();
    let doctor_id = doctor_id.trim();
    let date = date.trim();
    if patient_id.is_empty() || doctor_id.is_empty() || date.is_empty() {
        return Err("Fill in patient ID, doctor ID, and date.");
    }
    let notes = notes.trim();
    Ok(AppointmentUpsert {
        patient_id: patient_id.to_owned(),
        doctor_id: doctor_id.to_owned(),
        date: date.to_owned(),
        status: AppointmentStatus::parse(status),
        notes: if notes.is_empty() { None } else { Some(notes.to_owned()) },
    })
}

/// Create-appointment form posting to `POST /appointments/`.
#[component]
pub fn CreateAppointmentPage() -> impl IntoView {
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
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_appointment(&appointment).await {
                    Ok(_) => {
                        let _ = success.try_set(true);
                        let _ = patient_id.try_set(String::new());
                        let _ = doctor_id.try_set(String::new());
                        let _ = date.try_set(String::new());
                        let _ = status.try_set("scheduled".to_owned());
                        let _ = notes.try_set(String::new());
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
            let _ = appointment;
        }
    };

    view! {
        <div class="form-page">
            <h2>"Add Appointment"</h2>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || success.get()>
                <div class="banner banner--success">"Appointment created successfully!"</div>
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
                    {move || if busy.get() { "Saving..." } else { "Add Appointment" }}
                </button>
            </form>
        </div>
    }
}

/// Shared field block for the create and update appointment forms.
#[component]
pub fn AppointmentFields(
    patient_id: RwSignal<String>,
    doctor_id: RwSignal<String>,
    date: RwSignal<String>,
    status: RwSignal<String>,
    notes: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>
            "Patient ID"
            <input
                type="text"
                placeholder="Enter Patient ID"
                prop:value=move || patient_id.get()
                on:input=move |ev| patient_id.set(event_target_value(&ev))
            />
        </label>
        <label>
            "Doctor ID"
            <input
                type="text"
                placeholder="Enter Doctor ID"
                prop:value=move || doctor_id.get()
                on:input=move |ev| doctor_id.set(event_target_value(&ev))
            />
        </label>
        <label>
            "Appointment Date"
            <input
                type="datetime-local"
                prop:value=move || date.get()
                on:input=move |ev| date.set(event_target_value(&ev))
            />
        </label>
        <label>
            "Status"
            <select
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                <option value="scheduled">"Scheduled"</option>
                <option value="completed">"Completed"</option>
                <option value="cancelled">"Cancelled"</option>
            </select>
        </label>
        <label>
            "Notes"
            <textarea
                placeholder="Enter any additional notes"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}
