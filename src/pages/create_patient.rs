//! Patient admission form.

#[cfg(test)]
#[path = "create_patient_test.rs"]
mod create_patient_test;

use leptos::prelude::*;

use crate::net::types::NewPatient;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Assemble a patient payload from raw form fields.
///
/// Age must parse as a whole number; blood type and medical history are
/// optional and omitted when blank.
pub fn build_new_patient(
    name: &str,
    age: &str,
    gender: &str,
    contact: &str,
    address: &str,
    blood_type: &str,
    medical_history: &str,
) -> Result<NewPatient, &'static str> {
    let name = name.trim();
    let gender = gender.trim();
    let contact = contact.trim();
    let address = address.trim();
    if name.is_empty() || gender.is_empty() || contact.is_empty() || address.is_empty() {
        return Err("Fill in name, gender, contact, and address.");
    }
    let Ok(age) = age.trim().parse::<u32>() else {
        return Err("Enter a valid age.");
    };
    let optional = |value: &str| {
        let value = value.trim();
        if value.is_empty() { None } else { Some(value.to_owned()) }
    };
    Ok(NewPatient {
        name: name.to_owned(),
        age,
        gender: gender.to_owned(),
        contact: contact.to_owned(),
        address: address.to_owned(),
        blood_type: optional(blood_type),
        medical_history: optional(medical_history),
    })
}

/// Create-patient form posting to `POST /patients/`.
#[component]
pub fn CreatePatientPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let blood_type = RwSignal::new(String::new());
    let medical_history = RwSignal::new(String::new());
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
        let patient = match build_new_patient(
            &name.get(),
            &age.get(),
            &gender.get(),
            &contact.get(),
            &address.get(),
            &blood_type.get(),
            &medical_history.get(),
        ) {
            Ok(patient) => patient,
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
                match crate::net::api::create_patient(&patient).await {
                    Ok(_) => {
                        let _ = success.try_set(true);
                        let _ = name.try_set(String::new());
                        let _ = age.try_set(String::new());
                        let _ = gender.try_set(String::new());
                        let _ = contact.try_set(String::new());
                        let _ = address.try_set(String::new());
                        let _ = blood_type.try_set(String::new());
                        let _ = medical_history.try_set(String::new());
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
            let _ = patient;
        }
    };

    view! {
        <div class="form-page">
            <h2>"Add Patient"</h2>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || success.get()>
                <div class="banner banner--success">"Patient created successfully!"</div>
            </Show>
            <form class="record-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Age"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Gender"
                    <select
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="male">"Male"</option>
                        <option value="female">"Female"</option>
                        <option value="other">"Other"</option>
                        <option value="prefer_not_to_say">"Prefer not to say"</option>
                    </select>
                </label>
                <label>
                    "Contact"
                    <input
                        type="text"
                        prop:value=move || contact.get()
                        on:input=move |ev| contact.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Address"
                    <input
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Blood Type"
                    <input
                        type="text"
                        placeholder="Optional"
                        prop:value=move || blood_type.get()
                        on:input=move |ev| blood_type.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Medical History"
                    <textarea
                        placeholder="Optional"
                        prop:value=move || medical_history.get()
                        on:input=move |ev| medical_history.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Add Patient" }}
                </button>
            </form>
        </div>
    }
}
