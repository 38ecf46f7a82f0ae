//! Patient search page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Patient;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::describe_failure;

/// Trim and require a non-empty query before searching.
pub fn validate_query(query: &str) -> Result<String, &'static str> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Enter a search term.");
    }
    Ok(query.to_owned())
}

/// Search form over `GET /search/patients` matching name, contact, or
/// address.
#[component]
pub fn SearchPatientsPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Patient>::new());
    let searched = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let term = match validate_query(&query.get()) {
            Ok(term) => term,
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
                match crate::net::api::search_patients(&term).await {
                    Ok(list) => {
                        let _ = results.try_set(list);
                        let _ = searched.try_set(true);
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
            let _ = term;
        }
    };

    view! {
        <div class="record-page">
            <h2>"Search Patients"</h2>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name, contact, or address"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || format!("Error: {}", error.get().unwrap_or_default())}
                </div>
            </Show>
            <Show when=move || searched.get() && error.get().is_none()>
                {move || {
                    let list = results.get();
                    if list.is_empty() {
                        view! { <p class="record-page__empty">"No matching patients"</p> }
                            .into_any()
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
                                                    <p class="record-list__meta">{patient.contact}</p>
                                                    <p class="record-list__meta">{patient.address}</p>
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
