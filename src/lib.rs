//! tsbind: generates C# interop bindings from a TypeScript declaration model.
//!
//! The pipeline lives in the workspace crates (`tsbind-solver` projects the
//! model, `tsbind-emitter` renders it); this crate adds the command-line
//! surface and writes the rendered artifacts to disk.

pub mod cli;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
