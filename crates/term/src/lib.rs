//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and instead renders into a framebuffer that is flushed to the
//! terminal, diffed against the previous frame.
//!
//! Goals:
//! - Keep `core` and `engine` free of any rendering concerns
//! - Make the view a pure function of the session snapshot, so it can be tested
//! - Allow precise control over tile aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hue_core as core;
pub use tui_hue_engine as engine;
pub use tui_hue_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, Layout, PuzzleView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
