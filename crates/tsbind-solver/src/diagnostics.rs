//! Errors raised while resolving and projecting the declaration model.
//!
//! Every variant is fatal for the run: a binding set with a hole in it is
//! worse than no binding set.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Alias expansion came back to an alias it had already expanded.
    /// `chain` lists the aliases in expansion order, ending with the repeat.
    TypeAliasCycle { chain: Vec<String> },
    /// A type reference did not bottom out within the render depth limit.
    UnresolvableType { reference: String, depth: u32 },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::TypeAliasCycle { chain } => {
                write!(f, "type alias cycle detected: {}", chain.join(" -> "))
            }
            SolverError::UnresolvableType { reference, depth } => {
                write!(
                    f,
                    "type reference '{reference}' could not be resolved within {depth} levels"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}
