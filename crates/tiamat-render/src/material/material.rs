use std::collections::BTreeMap;
use std::sync::Arc;

use super::Texture;
use crate::paint::Color;

/// A value a material exposes to its shader.
#[derive(Debug, Clone)]
pub enum UniformValue {
    Scalar(f32),
    Color(Color),
    Texture(Arc<Texture>),
}

/// Opaque capability provider for a primitive's shading inputs.
///
/// A material is a kind label plus a named uniform map. It is ready once
/// every texture uniform has its pixels; completeness of the primitives
/// referencing it is checked elsewhere, at command construction.
#[derive(Debug, Clone)]
pub struct Material {
    kind: String,
    uniforms: BTreeMap<String, UniformValue>,
}

impl Material {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            uniforms: BTreeMap::new(),
        }
    }

    /// Solid-color material. The color lands in the `color` uniform.
    pub fn from_color(color: Color) -> Self {
        Self::new("Color").with_uniform("color", UniformValue::Color(color))
    }

    /// Textured material. The texture lands in the `image` uniform.
    pub fn from_texture(texture: Arc<Texture>) -> Self {
        Self::new("Image").with_uniform("image", UniformValue::Texture(texture))
    }

    pub fn with_uniform(mut self, name: impl Into<String>, value: UniformValue) -> Self {
        self.uniforms.insert(name.into(), value);
        self
    }

    pub fn set_uniform(&mut self, name: impl Into<String>, value: UniformValue) {
        self.uniforms.insert(name.into(), value);
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    pub fn uniforms(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.uniforms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True once every texture uniform has its pixels.
    ///
    /// Command construction refuses materials that are not ready, so a
    /// primitive never renders with half-loaded inputs.
    pub fn is_ready(&self) -> bool {
        self.uniforms.values().all(|v| match v {
            UniformValue::Texture(t) => t.is_loaded(),
            _ => true,
        })
    }

    /// Base color: the `color` uniform, white when unset.
    pub fn base_color(&self) -> Color {
        match self.uniform("color") {
            Some(UniformValue::Color(c)) => *c,
            _ => Color::WHITE,
        }
    }

    /// First texture uniform, if any.
    pub fn texture(&self) -> Option<&Arc<Texture>> {
        self.uniforms.values().find_map(|v| match v {
            UniformValue::Texture(t) => Some(t),
            _ => None,
        })
    }
}

impl Default for Material {
    /// The default material: solid white.
    fn default() -> Self {
        Self::from_color(Color::WHITE)
    }
}
