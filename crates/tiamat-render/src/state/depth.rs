use super::set::closed_set;

closed_set! {
    /// Comparison deciding whether an incoming fragment passes the depth
    /// test. Codes are the GL compare-function constants.
    pub enum DepthFunction : DepthFunction {
        Never = 0x0200,
        Less = 0x0201,
        Equal = 0x0202,
        LessOrEqual = 0x0203,
        Greater = 0x0204,
        NotEqual = 0x0205,
        GreaterOrEqual = 0x0206,
        Always = 0x0207,
    }
}

impl Default for DepthFunction {
    fn default() -> Self {
        DepthFunction::Less
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{StateFamily, StateSet, StateValue};

    use super::*;

    #[test]
    fn every_member_validates() {
        for &func in DepthFunction::MEMBERS {
            assert!(DepthFunction::validate(Some(func.tagged())), "{}", func.label());
        }
    }

    #[test]
    fn codes_span_the_gl_range() {
        assert_eq!(DepthFunction::Never.code(), 0x0200);
        assert_eq!(DepthFunction::Always.code(), 0x0207);
        assert_eq!(DepthFunction::MEMBERS.len(), 8);
    }

    #[test]
    fn blend_equation_code_is_not_a_depth_function() {
        let v = StateValue::new(StateFamily::BlendEquation, 0x0201);
        assert!(!DepthFunction::validate(Some(v)));
    }
}
