//! C# source emission for tsbind.
//!
//! Turns the solver's projected views into text artifacts:
//! - `I<Name>.cs`: the contract of a source interface
//! - `<Name>Prototype.cs`: the shim for an interface some global exposes as
//!   its `prototype`
//! - `<name>Global.cs`: contract and shim of a loose global
//!
//! Emission cannot fail; every type in the input is already rendered.

pub mod artifacts;
pub mod declaration;
pub mod options;
pub mod runtime;
pub mod shim;
pub mod source_writer;

pub use artifacts::{Artifact, ArtifactKind, ArtifactPlan, plan};
pub use options::{EmitterOptions, NewLine};

#[cfg(test)]
#[path = "tests/declaration_tests.rs"]
mod declaration_tests;
#[cfg(test)]
#[path = "tests/shim_tests.rs"]
mod shim_tests;
#[cfg(test)]
#[path = "tests/artifacts_tests.rs"]
mod artifacts_tests;
#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod source_writer_tests;
