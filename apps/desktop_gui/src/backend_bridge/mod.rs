//! Bridge between the UI thread and the async backend runtime.

pub mod commands;
pub mod runtime;
