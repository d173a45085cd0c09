//! Driver-boundary conversion to wgpu fixed-function descriptors.
//!
//! Conversions exist only on resolved types; raw descriptor codes have no
//! path into this module.

use super::resolved::{Blending, Culling, DepthTest};
use super::{BlendEquation, BlendFactor, CullFace, DepthFunction, WindingOrder};

impl BlendEquation {
    pub fn to_wgpu(self) -> wgpu::BlendOperation {
        match self {
            BlendEquation::Add => wgpu::BlendOperation::Add,
            BlendEquation::Subtract => wgpu::BlendOperation::Subtract,
            BlendEquation::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
        }
    }
}

impl BlendFactor {
    /// wgpu exposes a single constant color slot; the GL constant-color and
    /// constant-alpha factors both map onto it.
    pub fn to_wgpu(self) -> wgpu::BlendFactor {
        match self {
            BlendFactor::Zero => wgpu::BlendFactor::Zero,
            BlendFactor::One => wgpu::BlendFactor::One,
            BlendFactor::SourceColor => wgpu::BlendFactor::Src,
            BlendFactor::OneMinusSourceColor => wgpu::BlendFactor::OneMinusSrc,
            BlendFactor::SourceAlpha => wgpu::BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSourceAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
            BlendFactor::DestinationAlpha => wgpu::BlendFactor::DstAlpha,
            BlendFactor::OneMinusDestinationAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
            BlendFactor::DestinationColor => wgpu::BlendFactor::Dst,
            BlendFactor::OneMinusDestinationColor => wgpu::BlendFactor::OneMinusDst,
            BlendFactor::SourceAlphaSaturate => wgpu::BlendFactor::SrcAlphaSaturated,
            BlendFactor::ConstantColor => wgpu::BlendFactor::Constant,
            BlendFactor::OneMinusConstantColor => wgpu::BlendFactor::OneMinusConstant,
            BlendFactor::ConstantAlpha => wgpu::BlendFactor::Constant,
            BlendFactor::OneMinusConstantAlpha => wgpu::BlendFactor::OneMinusConstant,
        }
    }
}

impl DepthFunction {
    pub fn to_wgpu(self) -> wgpu::CompareFunction {
        match self {
            DepthFunction::Never => wgpu::CompareFunction::Never,
            DepthFunction::Less => wgpu::CompareFunction::Less,
            DepthFunction::Equal => wgpu::CompareFunction::Equal,
            DepthFunction::LessOrEqual => wgpu::CompareFunction::LessEqual,
            DepthFunction::Greater => wgpu::CompareFunction::Greater,
            DepthFunction::NotEqual => wgpu::CompareFunction::NotEqual,
            DepthFunction::GreaterOrEqual => wgpu::CompareFunction::GreaterEqual,
            DepthFunction::Always => wgpu::CompareFunction::Always,
        }
    }
}

impl CullFace {
    pub fn to_wgpu(self) -> wgpu::Face {
        match self {
            CullFace::Front => wgpu::Face::Front,
            CullFace::Back => wgpu::Face::Back,
        }
    }
}

impl WindingOrder {
    pub fn to_wgpu(self) -> wgpu::FrontFace {
        match self {
            WindingOrder::Clockwise => wgpu::FrontFace::Cw,
            WindingOrder::CounterClockwise => wgpu::FrontFace::Ccw,
        }
    }
}

impl Blending {
    /// `None` when the stage is disabled (pipeline blending off).
    pub fn to_wgpu(self) -> Option<wgpu::BlendState> {
        if !self.enabled {
            return None;
        }
        Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: self.source_rgb.to_wgpu(),
                dst_factor: self.destination_rgb.to_wgpu(),
                operation: self.equation_rgb.to_wgpu(),
            },
            alpha: wgpu::BlendComponent {
                src_factor: self.source_alpha.to_wgpu(),
                dst_factor: self.destination_alpha.to_wgpu(),
                operation: self.equation_alpha.to_wgpu(),
            },
        })
    }
}

impl DepthTest {
    /// Compare function for the pipeline; `Always` when the stage is
    /// disabled, which is wgpu's way of expressing "no test".
    pub fn to_wgpu(self) -> wgpu::CompareFunction {
        if self.enabled {
            self.function.to_wgpu()
        } else {
            wgpu::CompareFunction::Always
        }
    }
}

impl Culling {
    /// Cull mode for the pipeline; `None` when the stage is disabled.
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        self.enabled.then(|| self.face.to_wgpu())
    }

    pub fn front_face(self) -> wgpu::FrontFace {
        self.winding.to_wgpu()
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{BlendingDesc, CullingDesc, RenderStateDesc};

    use super::*;

    #[test]
    fn equations_map_to_operations() {
        assert_eq!(BlendEquation::Add.to_wgpu(), wgpu::BlendOperation::Add);
        assert_eq!(
            BlendEquation::ReverseSubtract.to_wgpu(),
            wgpu::BlendOperation::ReverseSubtract
        );
    }

    #[test]
    fn disabled_blending_maps_to_none() {
        let blending = BlendingDesc::disabled().resolve().unwrap();
        assert!(blending.to_wgpu().is_none());
    }

    #[test]
    fn alpha_blend_maps_to_blend_state() {
        let blending = BlendingDesc::alpha_blend().resolve().unwrap();
        let state = blending.to_wgpu().unwrap();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(state.color.operation, wgpu::BlendOperation::Add);
        assert_eq!(state.alpha.src_factor, wgpu::BlendFactor::One);
    }

    #[test]
    fn disabled_depth_compares_always() {
        let state = RenderStateDesc::default().resolve().unwrap();
        assert_eq!(state.depth.to_wgpu(), wgpu::CompareFunction::Always);
    }

    #[test]
    fn culling_maps_face_and_winding() {
        let mut desc = CullingDesc::default();
        desc.enabled = true;
        let culling = desc.resolve().unwrap();
        assert_eq!(culling.cull_mode(), Some(wgpu::Face::Back));
        assert_eq!(culling.front_face(), wgpu::FrontFace::Ccw);
    }
}
