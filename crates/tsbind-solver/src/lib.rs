//! Resolution and projection of a TypeScript declaration model into C#
//! binding views.
//!
//! Pipeline, leaves first:
//! - [`resolve`]: renders one type reference against an inheritance context
//! - [`collect`]: flattens an interface's `extends` chain into members
//! - [`conform`]: merges overloads into one signature per group
//! - [`project`]: builds the interface and class views consumed by the
//!   emitter
//!
//! [`process`] runs the whole pipeline.

pub mod collect;
pub mod conform;
pub mod diagnostics;
pub mod globals;
pub mod options;
pub mod processed;
pub mod project;
pub mod recursion;
pub mod resolve;
pub mod symbol;
pub mod universe;

pub use collect::SymbolCollector;
pub use conform::ConformanceMerger;
pub use diagnostics::SolverError;
pub use globals::{LooseGlobal, LooseGlobals};
pub use options::SolverOptions;
pub use processed::*;
pub use project::Projector;
pub use resolve::TypeResolver;
pub use symbol::{SymbolInfo, SymbolKind, SymbolParent};
pub use universe::TypeUniverse;

use tracing::{Level, span};
use tsbind_common::ParsedInfo;

/// Project every interface and loose global of `parsed`.
pub fn process(parsed: &ParsedInfo, options: &SolverOptions) -> Result<ProcessedInfo, SolverError> {
    let _span = span!(Level::DEBUG, "process").entered();

    let universe = TypeUniverse::new(parsed);
    let loose_globals = LooseGlobals::discover(&universe, options)?;
    let resolver = TypeResolver::new(&universe);
    let projector = Projector::new(&universe, &resolver, &loose_globals, options)?;
    projector.project()
}

#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
mod test_fixtures;
#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod resolve_tests;
#[cfg(test)]
#[path = "tests/collect_tests.rs"]
mod collect_tests;
#[cfg(test)]
#[path = "tests/conform_tests.rs"]
mod conform_tests;
#[cfg(test)]
#[path = "tests/globals_tests.rs"]
mod globals_tests;
#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod project_tests;
#[cfg(test)]
#[path = "tests/recursion_tests.rs"]
mod recursion_tests;
