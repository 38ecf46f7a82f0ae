//! Doctor registration form.

#[cfg(test)]
#[path = "create_doctor_test.rs"]
mod create_doctor_test;

use leptos::prelude::*;

use crate::net::types::NewDoctor;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Assemble a doctor payload from raw form fields.
pub fn build_new_doctor(
    name: &str,
    specialization: &str,
    contact: &str,
    email: &str,
) -> Result<NewDoctor, &'static str> {
    let name = name.trim();
    let specialization = specialization.trim();
    let contact = contact.trim();
    let email = email.trim();
    if name.is_empty() || specialization.is_empty() || contact.is_empty() || email.is_empty() {
        return Err("Fill in all fields.");
    }
    Ok(NewDoctor {
        name: name.to_owned(),
        specialization: specialization.to_owned(),
        contact: contact.to_owned(),
        email: email.to_owned(),
    })
}

/// Create-doctor form posting to `POST /doctors/`.
#[component]
pub fn CreateDoctorPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
        let doctor = match build_new_doctor(
            &name.get(),
            &specialization.get(),
            &contact.get(),
            &email.get(),
        ) {
            Ok(doctor) => doctor,
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
                match crate::net::api::create_doctor(&doctor).await {
                    Ok(_) => {
                        let _ = success.try_set(true);
                        let _ = name.try_set(String::new());
                        let _ = specialization.try_set(String::new());
                        let _ = contact.try_set(String::new());
                        let _ = email.try_set(String::new());
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
            let _ = doctor;
        }
    };

    view! {
        <div class="form-page">
            <h2>"Add Doctor"</h2>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || success.get()>
                <div class="banner banner--success">"Doctor created successfully!"</div>
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
                    "Specialization"
                    <input
                        type="text"
                        prop:value=move || specialization.get()
                        on:input=move |ev| specialization.set(event_target_value(&ev))
                    />
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
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Add Doctor" }}
                </button>
            </form>
        </div>
    }
}
