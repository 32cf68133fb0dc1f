//! Network layer: wire types and the WebSocket event client.

pub mod socket_client;
pub mod types;
