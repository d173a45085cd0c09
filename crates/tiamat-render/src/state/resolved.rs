use super::{BlendEquation, BlendFactor, CullFace, DepthFunction, WindingOrder};
use crate::paint::Color;

/// Fully resolved fixed-function state.
///
/// Every enumerated field is a member of its closed set by type. Produced
/// by resolving a [`RenderStateDesc`](super::RenderStateDesc); carried
/// inside a built draw command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub blending: Blending,
    pub depth: DepthTest,
    pub culling: Culling,
}

/// Resolved blending stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blending {
    pub enabled: bool,
    pub equation_rgb: BlendEquation,
    pub equation_alpha: BlendEquation,
    pub source_rgb: BlendFactor,
    pub destination_rgb: BlendFactor,
    pub source_alpha: BlendFactor,
    pub destination_alpha: BlendFactor,
    /// Referenced by the `Constant*` factors.
    pub constant: Color,
}

/// Resolved depth-test stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthTest {
    pub enabled: bool,
    pub function: DepthFunction,
}

/// Resolved face-culling stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Culling {
    pub enabled: bool,
    pub face: CullFace,
    pub winding: WindingOrder,
}
