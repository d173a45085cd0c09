use super::set::closed_set;

closed_set! {
    /// Which triangle facing is discarded when culling is enabled.
    ///
    /// GL additionally defines `FRONT_AND_BACK` (0x0408); it is excluded
    /// here because the wgpu boundary has no counterpart for it.
    pub enum CullFace : CullFace {
        Front = 0x0404,
        Back = 0x0405,
    }
}

impl Default for CullFace {
    fn default() -> Self {
        CullFace::Back
    }
}

closed_set! {
    /// Vertex order that counts as front-facing.
    pub enum WindingOrder : WindingOrder {
        Clockwise = 0x0900,
        CounterClockwise = 0x0901,
    }
}

impl Default for WindingOrder {
    fn default() -> Self {
        WindingOrder::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{StateFamily, StateSet, StateValue};

    use super::*;

    #[test]
    fn every_member_validates() {
        for &face in CullFace::MEMBERS {
            assert!(CullFace::validate(Some(face.tagged())), "{}", face.label());
        }
        for &order in WindingOrder::MEMBERS {
            assert!(WindingOrder::validate(Some(order.tagged())), "{}", order.label());
        }
    }

    #[test]
    fn front_and_back_is_not_a_member() {
        let v = StateValue::new(StateFamily::CullFace, 0x0408);
        assert!(!CullFace::validate(Some(v)));
    }

    #[test]
    fn winding_codes_are_bit_exact() {
        assert_eq!(WindingOrder::Clockwise.code(), 0x0900);
        assert_eq!(WindingOrder::CounterClockwise.code(), 0x0901);
    }
}
