//! The context --- to which formulas are added and within which solves
//! take place.
//!
//! Strictly, a [GenericContext] and a [Context].
//!
//! The generic context is generic over the source of randomness, which
//! helps distinguish generic context methods from those intended for a
//! particular application. [from_config](Context::from_config) is
//! implemented for a context rather than a generic context to avoid
//! requiring a source of randomness to be supplied alongside a config.

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses may be added.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is consistent, with a complete valuation.
    Satisfiable,

    /// The formula is inconsistent.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
