use super::resolved::{Blending, Culling, DepthTest, RenderState};
use super::{
    BlendEquation, BlendFactor, CullFace, DepthFunction, InvalidStateValue, StateSet, StateValue,
    WindingOrder,
};
use crate::paint::Color;

/// Caller-authored fixed-function state, carried as tagged raw codes.
///
/// This is the interop-facing form: codes may originate from recorded
/// command streams or configuration data, so nothing here is trusted until
/// [`resolve`](Self::resolve) checks every field against its closed set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderStateDesc {
    pub blending: BlendingDesc,
    pub depth: DepthDesc,
    pub culling: CullingDesc,
}

impl RenderStateDesc {
    /// Resolves every field into its typed counterpart.
    ///
    /// Fails on the first field whose value is outside its set; the error
    /// names the set and the offending value.
    pub fn resolve(&self) -> Result<RenderState, InvalidStateValue> {
        Ok(RenderState {
            blending: self.blending.resolve()?,
            depth: self.depth.resolve()?,
            culling: self.culling.resolve()?,
        })
    }
}

impl Default for RenderStateDesc {
    fn default() -> Self {
        Self {
            blending: BlendingDesc::disabled(),
            depth: DepthDesc::default(),
            culling: CullingDesc::default(),
        }
    }
}

/// Blending stage descriptor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlendingDesc {
    pub enabled: bool,
    pub equation_rgb: StateValue,
    pub equation_alpha: StateValue,
    pub source_rgb: StateValue,
    pub destination_rgb: StateValue,
    pub source_alpha: StateValue,
    pub destination_alpha: StateValue,
    /// Constant blend color referenced by the `Constant*` factors.
    pub constant: Color,
}

impl BlendingDesc {
    /// Blending off. Equations and factors still carry defaults (`Add`,
    /// `One`/`Zero`) so enabling the stage later starts from a sane state.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            equation_rgb: BlendEquation::Add.tagged(),
            equation_alpha: BlendEquation::Add.tagged(),
            source_rgb: BlendFactor::One.tagged(),
            destination_rgb: BlendFactor::Zero.tagged(),
            source_alpha: BlendFactor::One.tagged(),
            destination_alpha: BlendFactor::Zero.tagged(),
            constant: Color::TRANSPARENT,
        }
    }

    /// Classic alpha compositing: `SourceAlpha` / `OneMinusSourceAlpha`.
    pub fn alpha_blend() -> Self {
        Self {
            enabled: true,
            source_rgb: BlendFactor::SourceAlpha.tagged(),
            destination_rgb: BlendFactor::OneMinusSourceAlpha.tagged(),
            source_alpha: BlendFactor::One.tagged(),
            destination_alpha: BlendFactor::OneMinusSourceAlpha.tagged(),
            ..Self::disabled()
        }
    }

    /// Additive compositing: `One` / `One`.
    pub fn additive() -> Self {
        Self {
            enabled: true,
            source_rgb: BlendFactor::One.tagged(),
            destination_rgb: BlendFactor::One.tagged(),
            source_alpha: BlendFactor::One.tagged(),
            destination_alpha: BlendFactor::One.tagged(),
            ..Self::disabled()
        }
    }

    pub fn resolve(&self) -> Result<Blending, InvalidStateValue> {
        Ok(Blending {
            enabled: self.enabled,
            equation_rgb: BlendEquation::require(self.equation_rgb)?,
            equation_alpha: BlendEquation::require(self.equation_alpha)?,
            source_rgb: BlendFactor::require(self.source_rgb)?,
            destination_rgb: BlendFactor::require(self.destination_rgb)?,
            source_alpha: BlendFactor::require(self.source_alpha)?,
            destination_alpha: BlendFactor::require(self.destination_alpha)?,
            constant: self.constant,
        })
    }
}

impl Default for BlendingDesc {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Depth-test stage descriptor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthDesc {
    pub enabled: bool,
    pub function: StateValue,
}

impl DepthDesc {
    pub fn resolve(&self) -> Result<DepthTest, InvalidStateValue> {
        Ok(DepthTest {
            enabled: self.enabled,
            function: DepthFunction::require(self.function)?,
        })
    }
}

impl Default for DepthDesc {
    fn default() -> Self {
        Self {
            enabled: false,
            function: DepthFunction::Less.tagged(),
        }
    }
}

/// Face-culling stage descriptor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CullingDesc {
    pub enabled: bool,
    pub face: StateValue,
    pub winding: StateValue,
}

impl CullingDesc {
    pub fn resolve(&self) -> Result<Culling, InvalidStateValue> {
        Ok(Culling {
            enabled: self.enabled,
            face: CullFace::require(self.face)?,
            winding: WindingOrder::require(self.winding)?,
        })
    }
}

impl Default for CullingDesc {
    fn default() -> Self {
        Self {
            enabled: false,
            face: CullFace::Back.tagged(),
            winding: WindingOrder::CounterClockwise.tagged(),
        }
    }
}
