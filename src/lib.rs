// ABOUTME: Library root for folio — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod commands;
pub mod config;
pub mod dialogue;
pub mod session;
pub mod tui;
pub mod voice;
