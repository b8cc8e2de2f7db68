//! Assistant launcher and chat panel.
//!
//! The transcript and panel visibility live in
//! [`crate::state::assistant::AssistantState`]; this component schedules
//! when its transitions run (reply delay, typing ticks, close delay) and
//! renders the result.

use leptos::prelude::*;

use crate::assistant::knowledge::KnowledgeBase;
#[cfg(feature = "csr")]
use crate::assistant::responder;
use crate::state::assistant::{AssistantState, Role};
#[cfg(feature = "csr")]
use crate::state::assistant::{ANSWER_DELAY_MS, HIDE_DELAY_MS, TYPING_TICK_MS};

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Floating launcher button plus the assistant panel.
#[component]
pub fn AssistantPanel() -> impl IntoView {
    let _kb = expect_context::<KnowledgeBase>();
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let prompt_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the transcript pinned to the latest message.
    Effect::new(move || {
        let _ = assistant.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_open = move |_| {
        assistant.update(AssistantState::open_panel);
        #[cfg(feature = "csr")]
        {
            if let Some(input) = prompt_ref.get() {
                let _ = input.focus();
            }
        }
    };

    let on_close = move |_| {
        assistant.update(AssistantState::begin_close);
        #[cfg(feature = "csr")]
        {
            Timeout::new(HIDE_DELAY_MS, move || {
                assistant.update(AssistantState::finish_close);
            })
            .forget();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let question = draft.get().trim().to_owned();
        if question.is_empty() {
            return;
        }
        assistant.update(|state| state.push_user(&question));
        draft.set(String::new());

        #[cfg(feature = "csr")]
        {
            Timeout::new(ANSWER_DELAY_MS, move || {
                let reply = responder::answer(&_kb, &question);
                assistant.update(|state| state.start_reply(&reply));
                schedule_reveal(assistant);
            })
            .forget();
        }
    };

    view! {
        <button class="ai-launcher" id="ai-assistant-btn" on:click=on_open>
            "Ask AI"
        </button>

        <section
            class="ai-assistant"
            id="ai-assistant"
            class:open=move || assistant.get().open
            hidden=move || assistant.get().hidden
        >
            <header class="ai-assistant__bar">
                <span class="ai-assistant__title">"AI assistant"</span>
                <button class="close" on:click=on_close>
                    "×"
                </button>
            </header>

            <div class="ai-messages" node_ref=messages_ref>
                {move || {
                    assistant
                        .get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let role_class = match msg.role {
                                Role::User => "msg user",
                                Role::Assistant => "msg assistant",
                            };
                            let text = msg.text.clone();
                            view! { <div class=role_class>{text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <form class="ai-input" on:submit=on_submit>
                <input
                    id="ai-prompt"
                    type="text"
                    placeholder="Ask about skills, projects, goals..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    node_ref=prompt_ref
                />
                <button type="submit">"Send"</button>
            </form>
        </section>
    }
}

/// Chain one typing tick per interval until the reply is fully revealed.
#[cfg(feature = "csr")]
fn schedule_reveal(assistant: RwSignal<AssistantState>) {
    Timeout::new(TYPING_TICK_MS, move || {
        let mut more = false;
        assistant.update(|state| more = state.advance_reveal());
        if more {
            schedule_reveal(assistant);
        }
    })
    .forget();
}
