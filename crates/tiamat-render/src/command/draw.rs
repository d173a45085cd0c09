use std::sync::Arc;

use crate::coords::Rect;
use crate::material::Material;
use crate::state::RenderState;

/// Fully-resolved draw instruction.
///
/// Immutable once built, and only [`CommandBuilder`](super::CommandBuilder)
/// builds one: by the time an instance exists, its material is ready and
/// every fixed-function field is a validated member of its closed set.
/// Commands are consumed by a render context within the pass that built
/// them; they are not persisted.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    rect: Rect,
    scissor: Rect,
    material: Arc<Material>,
    state: RenderState,
}

impl DrawCommand {
    pub(crate) fn new(rect: Rect, scissor: Rect, material: Arc<Material>, state: RenderState) -> Self {
        Self {
            rect,
            scissor,
            material,
            state,
        }
    }

    /// Placement as authored; texture coordinates map over this extent.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Placement clamped to the drawable. Empty when fully offscreen.
    #[inline]
    pub fn scissor(&self) -> Rect {
        self.scissor
    }

    #[inline]
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    #[inline]
    pub fn state(&self) -> RenderState {
        self.state
    }
}
