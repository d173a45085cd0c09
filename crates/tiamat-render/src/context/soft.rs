use bytemuck::{Pod, Zeroable};

use super::{ContextCaps, RenderContext};
use crate::command::DrawCommand;
use crate::coords::Viewport;
use crate::material::Material;
use crate::paint::Color;
use crate::state::{BlendEquation, BlendFactor, Blending};

/// One frame buffer pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
struct Rgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Rgba8 {
    #[inline]
    fn from_color(c: Color) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        Self { r, g, b, a }
    }

    #[inline]
    fn to_color(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// CPU reference implementation of [`RenderContext`].
///
/// Rasterizes draw commands into an RGBA8 frame buffer. The fixed-function
/// subset it honors is blending, with the full factor and equation
/// arithmetic. Depth and culling are validated upstream but have no effect
/// on a single flat quad, so this rasterizer ignores them.
#[derive(Debug)]
pub struct SoftContext {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl SoftContext {
    /// Creates a context with a transparent-black frame buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::zeroed(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the frame buffer with one color.
    pub fn clear(&mut self, color: Color) {
        log::trace!("clear to {color:?}");
        self.pixels.fill(Rgba8::from_color(color));
    }
}

impl RenderContext for SoftContext {
    fn caps(&self) -> ContextCaps {
        ContextCaps::new(Viewport::new(self.width, self.height))
    }

    fn execute(&mut self, command: &DrawCommand) {
        let rect = command.rect();
        if rect.is_empty() {
            return;
        }
        // The scissor was clamped at build time, possibly against another
        // context's drawable; clamp again to this buffer.
        let Some(scissor) = command.scissor().intersect(self.caps().drawable.bounds()) else {
            return;
        };

        let x0 = scissor.x.floor().max(0.0) as u32;
        let y0 = scissor.y.floor().max(0.0) as u32;
        let x1 = (scissor.max_x().ceil().max(0.0) as u32).min(self.width);
        let y1 = (scissor.max_y().ceil().max(0.0) as u32).min(self.height);

        let material = command.material();
        let blending = command.state().blending;

        log::trace!("execute: {}x{} pixels", x1 - x0, y1 - y0);

        for y in y0..y1 {
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - rect.x) / rect.width;
                let v = (y as f32 + 0.5 - rect.y) / rect.height;
                let src = shade(material, u, v);

                let i = (y * self.width + x) as usize;
                let out = if blending.enabled {
                    blend(&blending, src, self.pixels[i].to_color())
                } else {
                    src
                };
                self.pixels[i] = Rgba8::from_color(out);
            }
        }
    }

    fn read_pixels(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Source fragment for the material at normalized quad coordinates.
fn shade(material: &Material, u: f32, v: f32) -> Color {
    let base = material.base_color();
    match material.texture() {
        Some(texture) => texture.sample(u, v).modulate(base),
        None => base,
    }
}

/// Straight-alpha blend of one source fragment over one destination pixel.
///
/// RGB channels use the rgb equation/factor pair; the alpha channel uses
/// the alpha pair.
fn blend(b: &Blending, src: Color, dst: Color) -> Color {
    let sf_rgb = factor(b.source_rgb, src, dst, b.constant);
    let df_rgb = factor(b.destination_rgb, src, dst, b.constant);
    let sf_a = factor(b.source_alpha, src, dst, b.constant)[3];
    let df_a = factor(b.destination_alpha, src, dst, b.constant)[3];

    let s = src.to_array();
    let d = dst.to_array();

    let mut out = [0.0f32; 4];
    for i in 0..3 {
        out[i] = apply(b.equation_rgb, s[i] * sf_rgb[i], d[i] * df_rgb[i]);
    }
    out[3] = apply(b.equation_alpha, s[3] * sf_a, d[3] * df_a);

    Color::from_array(out)
}

#[inline]
fn apply(equation: BlendEquation, s: f32, d: f32) -> f32 {
    match equation {
        BlendEquation::Add => s + d,
        BlendEquation::Subtract => s - d,
        BlendEquation::ReverseSubtract => d - s,
    }
}

/// Per-channel multipliers for one blend factor.
///
/// Channel `[3]` carries the factor's alpha-slot semantics (`*Color`
/// factors read the alpha channel there; saturate is `1`).
fn factor(f: BlendFactor, src: Color, dst: Color, constant: Color) -> [f32; 4] {
    #[inline]
    fn one_minus(c: [f32; 4]) -> [f32; 4] {
        [1.0 - c[0], 1.0 - c[1], 1.0 - c[2], 1.0 - c[3]]
    }

    match f {
        BlendFactor::Zero => [0.0; 4],
        BlendFactor::One => [1.0; 4],
        BlendFactor::SourceColor => src.to_array(),
        BlendFactor::OneMinusSourceColor => one_minus(src.to_array()),
        BlendFactor::SourceAlpha => [src.a; 4],
        BlendFactor::OneMinusSourceAlpha => [1.0 - src.a; 4],
        BlendFactor::DestinationAlpha => [dst.a; 4],
        BlendFactor::OneMinusDestinationAlpha => [1.0 - dst.a; 4],
        BlendFactor::DestinationColor => dst.to_array(),
        BlendFactor::OneMinusDestinationColor => one_minus(dst.to_array()),
        BlendFactor::SourceAlphaSaturate => {
            let s = src.a.min(1.0 - dst.a);
            [s, s, s, 1.0]
        }
        BlendFactor::ConstantColor => constant.to_array(),
        BlendFactor::OneMinusConstantColor => one_minus(constant.to_array()),
        BlendFactor::ConstantAlpha => [constant.a; 4],
        BlendFactor::OneMinusConstantAlpha => [1.0 - constant.a; 4],
    }
}
