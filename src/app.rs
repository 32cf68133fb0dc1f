//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::Event;
use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;

/// Handle for sending events to the server over the active WebSocket.
///
/// The default value has no connection attached; `send` then reports
/// `false` and drops the event (fire-and-forget, matching the transport's
/// own delivery guarantees).
#[derive(Clone, Debug, Default)]
pub struct EventSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    /// Wrap the socket client's outbound channel.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Send one event. Returns `false` when no connection is attached or
    /// the channel is closed.
    pub fn send(&self, event: &Event) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| crate::net::socket_client::send_event(tx, event))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the chat state and event sender contexts, spawns the socket
/// client in the browser, and routes the single chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let sender = RwSignal::new(EventSender::default());

    provide_context(chat);
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::socket_client::spawn_socket_client(chat);
        sender.set(EventSender::new(tx));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
