use super::set::closed_set;

closed_set! {
    /// Arithmetic combining an incoming fragment with the frame buffer
    /// value.
    ///
    /// Codes are the GL `FUNC_*` constants. `MIN`/`MAX` are not members;
    /// the GLES2-class numbering this set interoperates with does not
    /// provide them.
    pub enum BlendEquation : BlendEquation {
        /// `source + destination`
        Add = 0x8006,
        /// `source - destination`
        Subtract = 0x800A,
        /// `destination - source`
        ReverseSubtract = 0x800B,
    }
}

impl Default for BlendEquation {
    fn default() -> Self {
        BlendEquation::Add
    }
}

closed_set! {
    /// Multiplier applied to the source or destination term of the blend
    /// equation.
    ///
    /// `Constant*` factors reference the constant blend color carried by
    /// the blending descriptor.
    pub enum BlendFactor : BlendFactor {
        Zero = 0x0000,
        One = 0x0001,
        SourceColor = 0x0300,
        OneMinusSourceColor = 0x0301,
        SourceAlpha = 0x0302,
        OneMinusSourceAlpha = 0x0303,
        DestinationAlpha = 0x0304,
        OneMinusDestinationAlpha = 0x0305,
        DestinationColor = 0x0306,
        OneMinusDestinationColor = 0x0307,
        /// `min(source alpha, 1 - destination alpha)` on rgb, `1` on alpha.
        SourceAlphaSaturate = 0x0308,
        ConstantColor = 0x8001,
        OneMinusConstantColor = 0x8002,
        ConstantAlpha = 0x8003,
        OneMinusConstantAlpha = 0x8004,
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{StateFamily, StateSet, StateValue};

    use super::*;

    // ── membership ────────────────────────────────────────────────────────

    #[test]
    fn every_member_validates() {
        for &eq in BlendEquation::MEMBERS {
            assert!(BlendEquation::validate(Some(eq.tagged())), "{}", eq.label());
        }
        for &factor in BlendFactor::MEMBERS {
            assert!(BlendFactor::validate(Some(factor.tagged())), "{}", factor.label());
        }
    }

    #[test]
    fn absent_value_never_validates() {
        assert!(!BlendEquation::validate(None));
        assert!(!BlendFactor::validate(None));
    }

    #[test]
    fn unregistered_code_fails() {
        // GL FUNC_MIN, deliberately not a member.
        let min = StateValue::new(StateFamily::BlendEquation, 0x8007);
        assert!(!BlendEquation::validate(Some(min)));
        assert!(BlendEquation::from_code(0x8007).is_none());
    }

    #[test]
    fn foreign_family_fails_despite_code_collision() {
        // Same number as Subtract's wire code, tagged as a different set.
        let foreign = StateValue::new(StateFamily::CullFace, 0x800A);
        assert_eq!(foreign.code(), BlendEquation::Subtract.tagged().code());
        assert!(!BlendEquation::validate(Some(foreign)));
        assert!(BlendEquation::resolve(foreign).is_none());
    }

    // ── wire codes ────────────────────────────────────────────────────────

    #[test]
    fn equation_codes_are_bit_exact() {
        assert_eq!(BlendEquation::Add.code(), 0x8006);
        assert_eq!(BlendEquation::Subtract.code(), 0x800A);
        assert_eq!(BlendEquation::ReverseSubtract.code(), 0x800B);
    }

    #[test]
    fn factor_codes_are_bit_exact() {
        assert_eq!(BlendFactor::Zero.code(), 0x0000);
        assert_eq!(BlendFactor::One.code(), 0x0001);
        assert_eq!(BlendFactor::SourceAlpha.code(), 0x0302);
        assert_eq!(BlendFactor::OneMinusSourceAlpha.code(), 0x0303);
        assert_eq!(BlendFactor::SourceAlphaSaturate.code(), 0x0308);
        assert_eq!(BlendFactor::OneMinusConstantAlpha.code(), 0x8004);
    }

    #[test]
    fn codes_are_pairwise_distinct() {
        for (i, a) in BlendFactor::MEMBERS.iter().enumerate() {
            for b in &BlendFactor::MEMBERS[i + 1..] {
                assert_ne!(a.code(), b.code(), "{} vs {}", a.label(), b.label());
            }
        }
    }

    #[test]
    fn round_trips_through_tagging() {
        for &eq in BlendEquation::MEMBERS {
            assert_eq!(BlendEquation::resolve(eq.tagged()), Some(eq));
        }
    }
}
