//! Tiamat render-state core.
//!
//! This crate owns the fixed-function state registry and the draw-command
//! construction path used by higher layers.

pub mod command;
pub mod context;
pub mod coords;
pub mod logging;
pub mod material;
pub mod paint;
pub mod scene;
pub mod state;
