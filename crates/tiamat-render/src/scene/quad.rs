use std::sync::Arc;

use super::InvalidState;
use crate::coords::Rect;
use crate::material::Material;

/// Primitive lifecycle, checked at the top of every mutator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Lifecycle {
    /// No placement or material assigned yet.
    Unconfigured,
    /// At least one field has been assigned.
    Configured,
    /// Terminal; the material reference has been released.
    Destroyed,
}

/// Screen-aligned quad primitive.
///
/// Holds the draw configuration for one viewport-space rectangle:
/// placement, material reference, and visibility. Absence of a field is
/// explicit (`None`), distinguishable from a present-but-degenerate value;
/// completeness is queried via [`is_renderable`](Self::is_renderable) and
/// enforced by command construction.
///
/// The material is shared, not owned: several quads may reference the same
/// [`Material`], and destroying a quad releases only its reference.
#[derive(Debug, Clone)]
pub struct ViewportQuad {
    rectangle: Option<Rect>,
    material: Option<Arc<Material>>,
    show: bool,
    lifecycle: Lifecycle,
}

impl ViewportQuad {
    /// Creates a quad with optional initial placement and material.
    ///
    /// Absent arguments leave the fields unset rather than substituting
    /// defaults.
    pub fn new(rectangle: Option<Rect>, material: Option<Arc<Material>>) -> Self {
        let lifecycle = if rectangle.is_some() || material.is_some() {
            Lifecycle::Configured
        } else {
            Lifecycle::Unconfigured
        };
        Self {
            rectangle,
            material,
            show: true,
            lifecycle,
        }
    }

    #[inline]
    pub fn rectangle(&self) -> Option<Rect> {
        self.rectangle
    }

    #[inline]
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    #[inline]
    pub fn show(&self) -> bool {
        self.show
    }

    pub fn set_rectangle(&mut self, rectangle: Option<Rect>) -> Result<(), InvalidState> {
        self.mutate("set_rectangle")?;
        self.rectangle = rectangle;
        Ok(())
    }

    pub fn set_material(&mut self, material: Option<Arc<Material>>) -> Result<(), InvalidState> {
        self.mutate("set_material")?;
        self.material = material;
        Ok(())
    }

    pub fn set_show(&mut self, show: bool) -> Result<(), InvalidState> {
        self.mutate("set_show")?;
        self.show = show;
        Ok(())
    }

    /// True iff the quad is visible and both placement and material are
    /// assigned. A destroyed quad is never renderable.
    pub fn is_renderable(&self) -> bool {
        self.lifecycle != Lifecycle::Destroyed
            && self.show
            && self.rectangle.is_some()
            && self.material.is_some()
    }

    /// Releases the material reference and marks the quad destroyed.
    ///
    /// Idempotent: repeated calls are no-ops. After the first call every
    /// mutator fails with [`InvalidState`]; queries remain legal.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.material = None;
        self.lifecycle = Lifecycle::Destroyed;
    }

    /// Queryable at any time; never fails.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Lifecycle gate shared by all mutators.
    fn mutate(&mut self, op: &'static str) -> Result<(), InvalidState> {
        match self.lifecycle {
            Lifecycle::Destroyed => Err(InvalidState::new(op)),
            Lifecycle::Unconfigured => {
                self.lifecycle = Lifecycle::Configured;
                Ok(())
            }
            Lifecycle::Configured => Ok(()),
        }
    }
}

impl Default for ViewportQuad {
    fn default() -> Self {
        Self::new(None, None)
    }
}
