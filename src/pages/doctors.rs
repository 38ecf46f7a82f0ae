//! Doctor list page.

use leptos::prelude::*;

use crate::net::types::Doctor;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Fetch-on-mount list of all doctors.
#[component]
pub fn DoctorListPage() -> impl IntoView {
    let doctors = RwSignal::new(Vec::<Doctor>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionHandle>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_doctors().await {
                Ok(list) => {
                    let _ = doctors.try_set(list);
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
            <h2>"Doctor List"</h2>
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
                    let list = doctors.get();
                    if list.is_empty() {
                        view! { <p class="record-page__empty">"No doctors found"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="record-list">
                                {list
                                    .into_iter()
                                    .map(|doctor| {
                                        view! {
                                            <li class="record-list__row">
                                                <div>
                                                    <p class="record-list__name">{doctor.name}</p>
                                                    <p class="record-list__meta">{doctor.specialization}</p>
                                                    <p class="record-list__meta">{doctor.email}</p>
                                                </div>
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
