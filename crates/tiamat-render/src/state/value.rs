use std::fmt;

/// Identifies which closed set a raw state code claims to belong to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StateFamily {
    BlendEquation,
    BlendFactor,
    DepthFunction,
    CullFace,
    WindingOrder,
}

impl StateFamily {
    pub fn label(self) -> &'static str {
        match self {
            StateFamily::BlendEquation => "blend equation",
            StateFamily::BlendFactor => "blend factor",
            StateFamily::DepthFunction => "depth function",
            StateFamily::CullFace => "cull face",
            StateFamily::WindingOrder => "winding order",
        }
    }
}

impl fmt::Display for StateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw fixed-function state code as it crosses an interop boundary.
///
/// The tag records which set the code claims to belong to. Membership
/// checks compare the tag before the code, so numerically coincident codes
/// from unrelated sets never validate against each other.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StateValue {
    family: StateFamily,
    code: u32,
}

impl StateValue {
    #[inline]
    pub const fn new(family: StateFamily, code: u32) -> Self {
        Self { family, code }
    }

    #[inline]
    pub const fn family(self) -> StateFamily {
        self.family
    }

    /// Wire code, bit-exact with the external graphics API numbering.
    #[inline]
    pub const fn code(self) -> u32 {
        self.code
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:#06x}", self.family, self.code)
    }
}
