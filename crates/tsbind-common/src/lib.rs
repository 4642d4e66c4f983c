//! Common types and utilities for the tsbind binding generator.
//!
//! This crate provides the foundations shared by every tsbind crate:
//! - The declaration model read from the front end (`ParsedInfo` and friends)
//! - Reserved-word handling for the generated C# surface
//! - Rendering and traversal limits

// Declaration model (front end output, read-only to the solver)
pub mod model;
pub use model::{
    ConstructorInfo, GetAccessorInfo, GlobalVariableInfo, IndexerInfo, InterfaceBodyInfo,
    InterfaceInfo, MethodInfo, ParameterInfo, ParsedInfo, PropertyInfo, SetAccessorInfo,
    SingleTypeInfo, TypeAlias, TypeInfo, TypeParameter,
};

// Reserved words of the target language
pub mod keywords;
pub use keywords::sanitize_name;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod model_tests;
#[cfg(test)]
#[path = "tests/keywords_tests.rs"]
mod keywords_tests;
