//! Renderable primitives.
//!
//! Responsibilities:
//! - hold per-primitive draw configuration (placement, material, visibility)
//! - track primitive lifecycle so misuse after teardown fails loudly
//! - keep command construction elsewhere: a primitive never talks to a
//!   render context directly

mod error;
mod quad;

pub use error::InvalidState;
pub use quad::ViewportQuad;
