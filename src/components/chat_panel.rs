//! Chat panel displaying the streamed conversation and sending questions.

use leptos::prelude::*;

use crate::app::EventSender;
use crate::net::types::Event;
use crate::state::chat::ChatState;

/// Chat panel showing the message list and an input for sending questions.
///
/// Streamed tokens arrive through the socket client and land in `ChatState`;
/// this component only renders the state and emits `chat_message` events.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<EventSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the message list scrolled to the newest content, including while
    // tokens are still streaming in.
    Effect::new(move || {
        let _ = chat.get().messages.last().map(|m| m.content.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        chat.update(|c| {
            c.push_user(&text);
        });
        sender.get().send(&Event::chat_message(&text));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let class = format!("chat-panel__message {}", msg.role.css_class());
                            let content = msg.content.clone();
                            view! {
                                <div class=class>
                                    <span class="chat-panel__text">{content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
