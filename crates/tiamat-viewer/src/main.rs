//! Headless demo: composes a few quads into validated draw commands,
//! executes them on the software context, and writes the result as a PPM.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tiamat_render::command::CommandBuilder;
use tiamat_render::context::{RenderContext, SoftContext};
use tiamat_render::coords::Rect;
use tiamat_render::logging::{LogConfig, init_logging};
use tiamat_render::material::{Material, Texture};
use tiamat_render::paint::Color;
use tiamat_render::scene::ViewportQuad;
use tiamat_render::state::{BlendingDesc, RenderStateDesc};

fn main() -> Result<()> {
    init_logging(LogConfig::default());

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tiamat.ppm".to_string());

    let mut ctx = SoftContext::new(256, 256);
    ctx.clear(Color::new(0.06, 0.06, 0.08, 1.0));

    // Opaque backdrop panel.
    let backdrop = ViewportQuad::new(
        Some(Rect::new(16.0, 16.0, 224.0, 224.0)),
        Some(Arc::new(Material::from_color(Color::new(0.13, 0.15, 0.2, 1.0)))),
    );

    // Checker texture, alpha-composited over the backdrop.
    let textured = ViewportQuad::new(
        Some(Rect::new(40.0, 40.0, 120.0, 120.0)),
        Some(Arc::new(Material::from_texture(Arc::new(checker_texture(32, 32))))),
    );

    // Additive glow overlapping the texture.
    let glow = ViewportQuad::new(
        Some(Rect::new(96.0, 96.0, 128.0, 128.0)),
        Some(Arc::new(Material::from_color(Color::new(0.3, 0.1, 0.02, 1.0)))),
    );

    let opaque = CommandBuilder::new();
    let over = CommandBuilder::with_state(RenderStateDesc {
        blending: BlendingDesc::alpha_blend(),
        ..RenderStateDesc::default()
    });
    let additive = CommandBuilder::with_state(RenderStateDesc {
        blending: BlendingDesc::additive(),
        ..RenderStateDesc::default()
    });

    let caps = ctx.caps();
    for (builder, quad) in [(&opaque, &backdrop), (&over, &textured), (&additive, &glow)] {
        let command = builder.build(quad, &caps)?;
        ctx.execute(&command);
    }

    write_ppm(&path, ctx.width(), ctx.height(), ctx.read_pixels())
        .with_context(|| format!("failed to write {path}"))?;

    log::info!("wrote {}x{} image", ctx.width(), ctx.height());
    println!("{path}");
    Ok(())
}

fn checker_texture(width: u32, height: u32) -> Texture {
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            let even = (x / 4 + y / 4) % 2 == 0;
            let px: [u8; 4] = if even {
                [235, 235, 235, 230]
            } else {
                [40, 44, 52, 230]
            };
            pixels.extend_from_slice(&px);
        }
    }
    Texture::from_rgba8(width, height, pixels)
}

/// Binary PPM (P6), RGB; alpha is dropped.
fn write_ppm(path: &str, width: u32, height: u32, rgba: &[u8]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{width} {height}\n255\n")?;
    for px in rgba.chunks_exact(4) {
        out.write_all(&px[..3])?;
    }
    out.flush()
}
