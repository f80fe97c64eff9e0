//! UI Components
//!
//! Leptos components owned by the client.

mod flash_stack;

pub use flash_stack::FlashStack;
