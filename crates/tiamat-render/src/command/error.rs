use std::fmt;

use crate::state::InvalidStateValue;

/// Which renderability requirement a refused build did not meet.
///
/// Diagnostic detail only: callers see the one
/// [`PreconditionFailed`](BuildError::PreconditionFailed) kind and are
/// expected to fix the configuration, not branch on the reason.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// No placement rectangle assigned.
    MissingRectangle,
    /// No material assigned.
    MissingMaterial,
    /// Placement rectangle has negative extent or non-finite components.
    MalformedRectangle,
    /// The primitive is hidden (`show == false`).
    Hidden,
    /// The material's dependent resources have not finished loading.
    MaterialNotReady,
    /// The primitive was destroyed.
    Destroyed,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self {
            Precondition::MissingRectangle => "no rectangle assigned",
            Precondition::MissingMaterial => "no material assigned",
            Precondition::MalformedRectangle => "rectangle is malformed",
            Precondition::Hidden => "primitive is hidden",
            Precondition::MaterialNotReady => "material is not ready",
            Precondition::Destroyed => "primitive was destroyed",
        };
        f.write_str(detail)
    }
}

/// Errors surfaced while turning a primitive into a draw command.
///
/// Both variants are contract violations, not transient conditions: they
/// propagate to the caller immediately and are never retried internally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The configuration is not renderable.
    PreconditionFailed(Precondition),
    /// A fixed-function field failed closed-set membership.
    InvalidStateValue(InvalidStateValue),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::PreconditionFailed(detail) => {
                write!(f, "draw precondition failed: {detail}")
            }
            BuildError::InvalidStateValue(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<Precondition> for BuildError {
    fn from(detail: Precondition) -> Self {
        BuildError::PreconditionFailed(detail)
    }
}

impl From<InvalidStateValue> for BuildError {
    fn from(err: InvalidStateValue) -> Self {
        BuildError::InvalidStateValue(err)
    }
}
