use std::fmt;

use super::{StateFamily, StateValue};

/// A closed set of named fixed-function state values.
///
/// Each member pairs a stable wire code (matching the external graphics API
/// numbering) with a label used in diagnostics. Sets are fixed at compile
/// time; membership is decided by the family tag plus the registered codes,
/// never by raw numbers alone.
///
/// Implemented via [`closed_set!`], so adding a state category is one table
/// of `Name = code` pairs.
pub trait StateSet: Copy + Eq + Sized + 'static {
    /// Family tag shared by every member of this set.
    const FAMILY: StateFamily;

    /// Every member, in declaration order. Codes are pairwise distinct.
    const MEMBERS: &'static [Self];

    /// Wire code, bit-exact with the external graphics API.
    fn code(self) -> u32;

    /// Diagnostic label.
    fn label(self) -> &'static str;

    /// Looks up a member by wire code.
    fn from_code(code: u32) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.code() == code)
    }

    /// Resolves a tagged raw value into a member of this set.
    ///
    /// Fails when the family tag does not match or the code is not
    /// registered, regardless of numeric coincidence with other sets.
    fn resolve(value: StateValue) -> Option<Self> {
        if value.family() != Self::FAMILY {
            return None;
        }
        Self::from_code(value.code())
    }

    /// Membership check for a raw value. Absent input is never a member.
    fn validate(value: Option<StateValue>) -> bool {
        value.is_some_and(|v| Self::resolve(v).is_some())
    }

    /// Like [`resolve`](Self::resolve), but surfaces the failure as an
    /// [`InvalidStateValue`] naming the set and the offending value.
    fn require(value: StateValue) -> Result<Self, InvalidStateValue> {
        Self::resolve(value).ok_or(InvalidStateValue {
            expected: Self::FAMILY,
            found: value,
        })
    }

    /// Tags a member with its family for transport across an interop
    /// boundary.
    fn tagged(self) -> StateValue {
        StateValue::new(Self::FAMILY, self.code())
    }
}

/// A raw fixed-function value failed closed-set membership.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidStateValue {
    /// Set the lookup ran against.
    pub expected: StateFamily,
    /// Offending value, as tagged by the caller.
    pub found: StateValue,
}

impl fmt::Display for InvalidStateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found.family() == self.expected {
            write!(
                f,
                "invalid state value: {:#06x} is not a registered {}",
                self.found.code(),
                self.expected
            )
        } else {
            write!(
                f,
                "invalid state value: {} does not belong to the {} set",
                self.found, self.expected
            )
        }
    }
}

impl std::error::Error for InvalidStateValue {}

/// Declares a closed fixed-function state set.
///
/// Generates the enum plus its [`StateSet`] implementation from one table
/// of `Name = code` pairs.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $family:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::state::StateSet for $name {
            const FAMILY: $crate::state::StateFamily =
                $crate::state::StateFamily::$family;

            const MEMBERS: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn code(self) -> u32 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

pub(crate) use closed_set;
