//! Replay viewer for finished games
//!
//! A trace is turned into [`Frame`]s (the cells of each agent per move) and
//! played back with egui/eframe at a fixed interval.

mod app;
mod board_view;
mod frames;
mod theme;

pub use app::{run_replay, ReplayApp};
pub use frames::{frames, Frame};
