//! Patient list page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Patient;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Fetch-on-mount list of all patients with links to their detail views.
#[component]
pub fn PatientListPage() -> impl IntoView {
    let patients = RwSignal::new(Vec::<Patient>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_patients().await {
                Ok(list) => {
                    let _ = patients.try_set(list);
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
            <h2>"Patient List"</h2>
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
                    let list = patients.get();
                    if list.is_empty() {
                        view! { <p class="record-page__empty">"No patients found"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="record-list">
                                {list
                                    .into_iter()
                                    .map(|patient| {
                                        let detail = patient
                                            .id
                                            .as_deref()
                                            .map(|id| format!("/patients/{id}"));
                                        view! {
                                            <li class="record-list__row">
                                                <div>
                                                    <p class="record-list__name">{patient.name}</p>
                                                    <p class="record-list__meta">
                                                        {format!("{} years old", patient.age)}
                                                    </p>
                                                    <p class="record-list__meta">{patient.contact}</p>
                                                </div>
                                                {detail
                                                    .map(|href| {
                                                        view! {
                                                            <A href=href attr:class="record-list__action">
                                                                "View Details"
                                                            </A>
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
