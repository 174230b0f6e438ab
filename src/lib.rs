// ABOUTME: Library root for netfield - container lifecycle helpers for the netFIELD API.
// ABOUTME: The CLI binary is in main.rs; everything it drives lives here.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod types;
pub mod workflow;
