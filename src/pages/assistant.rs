//! Health assistant chat page backed by the AI relay.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use leptos::prelude::*;

use crate::net::types::Patient;
#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::session::guard::{describe_failure, purge_if_unauthorized};

/// One entry in the chat transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
    pub sources: Vec<String>,
}

impl ChatMessage {
    fn assistant(text: String, sources: Vec<String>) -> Self {
        Self {
            from_user: false,
            text,
            sources,
        }
    }

    fn user(text: String) -> Self {
        Self {
            from_user: true,
            text,
            sources: Vec::new(),
        }
    }
}

/// Greeting shown before the first question is asked.
pub fn welcome_message() -> ChatMessage {
    ChatMessage::assistant(
        "Hello! I'm your health assistant. Ask me about hospital records, \
         or pick a patient to focus on their history."
            .to_owned(),
        Vec::new(),
    )
}

/// Empty selection means an unscoped question.
pub fn scope_for_selection(selected: &str) -> Option<&str> {
    let selected = selected.trim();
    if selected.is_empty() { None } else { Some(selected) }
}

#[component]
pub fn AssistantPage() -> impl IntoView {
    let messages = RwSignal::new(vec![welcome_message()]);
    let draft = RwSignal::new(String::new());
    let selected_patient = RwSignal::new(String::new());
    let patients = RwSignal::new(Vec::<Patient>::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionHandle>();

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_patients().await {
                Ok(list) => {
                    let _ = patients.try_set(list);
                }
                Err(err) => {
                    purge_if_unauthorized(&session, &err);
                    log::debug!("patient list unavailable for assistant scope: {err}");
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let question = draft.get().trim().to_owned();
        if question.is_empty() {
            return;
        }
        draft.set(String::new());
        messages.update(|log| log.push(ChatMessage::user(question.clone())));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let selection = selected_patient.get();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let scope = scope_for_selection(&selection);
                let entry = match crate::net::api::assistant_query(&question, scope).await {
                    Ok(reply) => {
                        ChatMessage::assistant(reply.response, reply.sources.unwrap_or_default())
                    }
                    Err(err) => ChatMessage::assistant(
                        format!(
                            "Sorry, I couldn't answer that: {}",
                            describe_failure(&session, &err)
                        ),
                        Vec::new(),
                    ),
                };
                let _ = messages.try_update(|log| log.push(entry));
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = question;
        }
    };

    view! {
        <div class="record-page assistant">
            <h2>"Health Assistant"</h2>
            <div class="assistant__scope">
                <label for="assistant-scope">"Focus on patient"</label>
                <select
                    id="assistant-scope"
                    prop:value=move || selected_patient.get()
                    on:change=move |ev| selected_patient.set(event_target_value(&ev))
                >
                    <option value="">"All records"</option>
                    {move || {
                        patients
                            .get()
                            .into_iter()
                            .filter_map(|patient| {
                                patient
                                    .id
                                    .map(|id| {
                                        view! { <option value=id>{patient.name}</option> }
                                    })
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <ul class="assistant__transcript">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| {
                            let class = if message.from_user {
                                "assistant__message assistant__message--user"
                            } else {
                                "assistant__message assistant__message--bot"
                            };
                            let sources = message.sources;
                            view! {
                                <li class=class>
                                    <p>{message.text}</p>
                                    {(!sources.is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="assistant__sources">
                                                    {format!("Sources: {}", sources.join(", "))}
                                                </p>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || busy.get()>
                <p class="assistant__typing">"Thinking..."</p>
            </Show>
            <form class="assistant__composer" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask about patients, doctors, or appointments"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
