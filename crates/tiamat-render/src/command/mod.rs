//! Draw-command construction.
//!
//! The one rule of this module: a [`DrawCommand`] exists only if
//! [`CommandBuilder::build`] accepted the configuration. There is no other
//! constructor, so nothing unvalidated can be submitted to a render
//! context.

mod builder;
mod draw;
mod error;

pub use builder::CommandBuilder;
pub use draw::DrawCommand;
pub use error::{BuildError, Precondition};
