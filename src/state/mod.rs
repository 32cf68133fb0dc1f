//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept in plain structs mutated through small methods so the chat
//! behavior can be tested natively, without a browser. Components hold the
//! structs in `RwSignal` contexts and call the same methods.

pub mod chat;
