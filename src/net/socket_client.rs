//! WebSocket event client for real-time communication with the chat server.
//!
//! The socket client manages the WebSocket lifecycle: connection,
//! reconnection with exponential backoff, event dispatch, and signal
//! updates. It is the bridge between the server's event protocol and the
//! Leptos UI state.
//!
//! Dispatch itself is pure (`&Event` in, `&mut ChatState` out) so the chat
//! behavior is testable without a browser; only the socket lifecycle is
//! gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

use crate::net::types::Event;
use crate::state::chat::ChatState;

/// Apply one inbound event to the chat state.
///
/// - `chat_token`: append the token to the in-progress assistant message,
///   creating it on the first token of a stream.
/// - `chat_complete`: close the stream; the next token starts a new message.
///
/// Unknown events and malformed payloads are ignored.
pub fn dispatch_event(event: &Event, chat: &mut ChatState) {
    match event.event.as_str() {
        "chat_token" => {
            if let Some(token) = parse_token(event) {
                chat.apply_token(token);
            }
        }

        "chat_complete" => {
            chat.complete_stream();
        }

        _ => {}
    }
}

/// Extract the token text from a `chat_token` payload.
///
/// The server sends the token as a bare JSON string; an object with a
/// `token` field is accepted as a fallback shape.
fn parse_token(event: &Event) -> Option<&str> {
    event
        .data
        .as_str()
        .or_else(|| event.data.get("token").and_then(|v| v.as_str()))
}

/// Send an event to the server via the shared sender channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "hydrate")]
pub fn send_event(tx: &futures::channel::mpsc::UnboundedSender<String>, event: &Event) -> bool {
    if let Ok(json) = serde_json::to_string(event) {
        tx.unbounded_send(json).is_ok()
    } else {
        false
    }
}

/// Spawn the WebSocket client lifecycle as a local async task.
///
/// This connects to the server, dispatches incoming events into `chat`, and
/// reconnects on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client(
    chat: leptos::prelude::RwSignal<ChatState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(socket_client_loop(chat, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_client_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        match connect_and_run(&socket_url(), chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
                backoff_ms = 1000;
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Derive the WebSocket URL from the page location.
#[cfg(feature = "hydrate")]
fn socket_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());

    format!("{ws_proto}://{host}/ws")
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    leptos::logging::log!("connected to chat server");

    // Spawn a task to forward outgoing messages from our channel to the WS.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: dispatch incoming events into chat state.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<Event>(&text) {
                        chat.update(|c| dispatch_event(&event, c));
                    } else {
                        leptos::logging::warn!("unparseable WS frame: {text}");
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
