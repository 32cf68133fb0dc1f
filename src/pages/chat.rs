//! Chat page, the single page of the application.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

/// Chat page wrapping the chat panel in the page chrome.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Chat"</h1>
            </header>
            <main class="chat-page__body">
                <ChatPanel/>
            </main>
        </div>
    }
}
