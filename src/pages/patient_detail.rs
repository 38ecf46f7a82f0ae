//! Patient detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Patient;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Fetch-on-mount detail view for one patient record.
#[component]
pub fn PatientDetailPage() -> impl IntoView {
    let params = use_params_map();
    let patient_id = params.get_untracked().get("id").unwrap_or_default();

    let patient = RwSignal::new(None::<Patient>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let patient_id = patient_id.clone();
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_patient(&patient_id).await {
                Ok(record) => {
                    let _ = patient.try_set(Some(record));
                }
                Err(err) => {
                    let _ = error.try_set(Some(describe_failure(&session, &err)));
                }
            }
            let _ = loading.try_set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = patient_id;

    view! {
        <div class="record-page">
            <h2>"Patient Details"</h2>
            <Show when=move || loading.get()>
                <div class="record-page__spinner"></div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || format!("Error: {}", error.get().unwrap_or_default())}
                </div>
            </Show>
            {move || {
                patient
                    .get()
                    .map(|record| {
                        view! {
                            <dl class="record-detail">
                                <dt>"Name"</dt>
                                <dd>{record.name}</dd>
                                <dt>"Age"</dt>
                                <dd>{format!("{} years old", record.age)}</dd>
                                <dt>"Gender"</dt>
                                <dd>{record.gender}</dd>
                                <dt>"Contact"</dt>
                                <dd>{record.contact}</dd>
                                <dt>"Address"</dt>
                                <dd>{record.address}</dd>
                                <dt>"Blood Type"</dt>
                                <dd>{record.blood_type.unwrap_or_else(|| "Not recorded".to_owned())}</dd>
                                <dt>"Medical History"</dt>
                                <dd>{record.medical_history.unwrap_or_else(|| "Not recorded".to_owned())}</dd>
                                <dt>"Admission Date"</dt>
                                <dd>{record.admission_date.unwrap_or_else(|| "Not recorded".to_owned())}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
