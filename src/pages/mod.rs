//! Top-level pages.

pub mod chat;
