//! Color model shared between materials and render contexts.

mod color;

pub use color::Color;
