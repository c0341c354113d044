//! TUI Hue (workspace facade crate).
//!
//! A daily color-connection puzzle for the terminal. The rules live in
//! `tui_hue::core`, session state in `tui_hue::engine`, persistence in
//! `tui_hue::store`, and the terminal front-end in `tui_hue::{input,term}`.
//! This crate adds the glue the binary needs: configuration, logging and the
//! [`app::App`] that ties a session to its store and the clipboard.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_hue_core as core;
pub use tui_hue_engine as engine;
pub use tui_hue_input as input;
pub use tui_hue_store as store;
pub use tui_hue_term as term;
pub use tui_hue_types as types;
