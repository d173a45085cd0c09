use super::{BuildError, DrawCommand, Precondition};
use crate::context::ContextCaps;
use crate::coords::Rect;
use crate::scene::ViewportQuad;
use crate::state::RenderStateDesc;

/// Turns a renderable [`ViewportQuad`] into an immutable [`DrawCommand`].
///
/// This is the single gate between caller-authored configuration and the
/// driver boundary. Within a pass, validation happens here, strictly before
/// command construction, which happens strictly before submission — and
/// since `build` is the only way to obtain a [`DrawCommand`], that ordering
/// cannot be bypassed.
///
/// The builder itself only carries the fixed-function state to stamp onto
/// commands; it holds no per-primitive data and may be reused across quads
/// and passes.
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    state: RenderStateDesc,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: RenderStateDesc) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> &RenderStateDesc {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut RenderStateDesc {
        &mut self.state
    }

    /// Builds a draw command for `quad`, or refuses.
    ///
    /// Checks run in a fixed order: lifecycle, placement presence, material
    /// presence, visibility, placement well-formedness, material readiness,
    /// then closed-set membership of every fixed-function field. The first
    /// violation propagates; nothing is retried.
    pub fn build(
        &self,
        quad: &ViewportQuad,
        caps: &ContextCaps,
    ) -> Result<DrawCommand, BuildError> {
        if quad.is_destroyed() {
            return Err(Precondition::Destroyed.into());
        }

        let rect = quad.rectangle().ok_or(Precondition::MissingRectangle)?;
        let material = quad
            .material()
            .cloned()
            .ok_or(Precondition::MissingMaterial)?;

        if !quad.show() {
            return Err(Precondition::Hidden.into());
        }
        if !rect.is_valid() {
            return Err(Precondition::MalformedRectangle.into());
        }
        if !material.is_ready() {
            return Err(Precondition::MaterialNotReady.into());
        }

        let state = self.state.resolve()?;

        let scissor = rect.intersect(caps.drawable.bounds()).unwrap_or(Rect::ZERO);
        if scissor.is_empty() {
            log::debug!("draw command is fully offscreen: {rect:?}");
        }

        Ok(DrawCommand::new(rect, scissor, material, state))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::coords::Viewport;
    use crate::material::{Material, Texture};
    use crate::paint::Color;
    use crate::state::{BlendEquation, StateFamily, StateValue};

    use super::*;

    fn caps() -> ContextCaps {
        ContextCaps::new(Viewport::new(16, 16))
    }

    fn renderable_quad() -> ViewportQuad {
        ViewportQuad::new(
            Some(Rect::new(0.0, 0.0, 2.0, 2.0)),
            Some(Arc::new(Material::from_color(Color::WHITE))),
        )
    }

    fn precondition(result: Result<DrawCommand, BuildError>) -> Precondition {
        match result {
            Err(BuildError::PreconditionFailed(detail)) => detail,
            other => panic!("expected a precondition failure, got {other:?}"),
        }
    }

    // ── preconditions ─────────────────────────────────────────────────────

    #[test]
    fn refuses_without_a_material() {
        let quad = ViewportQuad::new(Some(Rect::new(0.0, 0.0, 2.0, 2.0)), None);
        assert!(!quad.is_renderable());

        let builder = CommandBuilder::new();
        let detail = precondition(builder.build(&quad, &caps()));
        assert_eq!(detail, Precondition::MissingMaterial);
    }

    #[test]
    fn refuses_without_a_rectangle() {
        let quad = ViewportQuad::new(None, Some(Arc::new(Material::default())));
        let detail = precondition(CommandBuilder::new().build(&quad, &caps()));
        assert_eq!(detail, Precondition::MissingRectangle);
    }

    #[test]
    fn refuses_when_hidden() {
        let mut quad = renderable_quad();
        quad.set_show(false).unwrap();
        assert!(!quad.is_renderable());

        let detail = precondition(CommandBuilder::new().build(&quad, &caps()));
        assert_eq!(detail, Precondition::Hidden);
    }

    #[test]
    fn refuses_a_malformed_rectangle() {
        let mut quad = renderable_quad();
        quad.set_rectangle(Some(Rect::new(0.0, 0.0, -2.0, 2.0))).unwrap();

        let detail = precondition(CommandBuilder::new().build(&quad, &caps()));
        assert_eq!(detail, Precondition::MalformedRectangle);
    }

    #[test]
    fn refuses_a_destroyed_quad() {
        let mut quad = renderable_quad();
        quad.destroy();

        let detail = precondition(CommandBuilder::new().build(&quad, &caps()));
        assert_eq!(detail, Precondition::Destroyed);
    }

    #[test]
    fn refuses_an_unready_material() {
        let texture = Arc::new(Texture::new(4, 4));
        let mut quad = renderable_quad();
        quad.set_material(Some(Arc::new(Material::from_texture(texture.clone()))))
            .unwrap();

        let detail = precondition(CommandBuilder::new().build(&quad, &caps()));
        assert_eq!(detail, Precondition::MaterialNotReady);

        // Once pixels land, the same configuration builds.
        texture.supply(vec![0; 64]);
        assert!(CommandBuilder::new().build(&quad, &caps()).is_ok());
    }

    // ── state validation ──────────────────────────────────────────────────

    #[test]
    fn default_command_blends_with_add() {
        let command = CommandBuilder::new().build(&renderable_quad(), &caps()).unwrap();
        assert_eq!(command.state().blending.equation_rgb, BlendEquation::Add);
        assert_eq!(command.state().blending.equation_alpha, BlendEquation::Add);
    }

    #[test]
    fn refuses_an_out_of_set_state_value() {
        let mut builder = CommandBuilder::new();
        builder.state_mut().blending.equation_rgb =
            StateValue::new(StateFamily::BlendEquation, 0x8007);

        let err = builder.build(&renderable_quad(), &caps()).unwrap_err();
        match err {
            BuildError::InvalidStateValue(detail) => {
                assert_eq!(detail.expected, StateFamily::BlendEquation);
                assert_eq!(detail.found.code(), 0x8007);
            }
            other => panic!("expected an invalid state value, got {other:?}"),
        }
    }

    #[test]
    fn refuses_a_family_collision() {
        // Numerically equals Subtract's wire code, tagged as another set.
        let mut builder = CommandBuilder::new();
        builder.state_mut().blending.equation_alpha =
            StateValue::new(StateFamily::CullFace, 0x800A);

        assert!(matches!(
            builder.build(&renderable_quad(), &caps()),
            Err(BuildError::InvalidStateValue(_))
        ));
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn scissor_is_clamped_to_the_drawable() {
        let mut quad = renderable_quad();
        quad.set_rectangle(Some(Rect::new(8.0, 8.0, 32.0, 32.0))).unwrap();

        let command = CommandBuilder::new().build(&quad, &caps()).unwrap();
        assert_eq!(command.rect(), Rect::new(8.0, 8.0, 32.0, 32.0));
        assert_eq!(command.scissor(), Rect::new(8.0, 8.0, 8.0, 8.0));
    }

    #[test]
    fn offscreen_quad_builds_with_an_empty_scissor() {
        let mut quad = renderable_quad();
        quad.set_rectangle(Some(Rect::new(100.0, 100.0, 4.0, 4.0))).unwrap();

        let command = CommandBuilder::new().build(&quad, &caps()).unwrap();
        assert!(command.scissor().is_empty());
    }
}
