//! Centralized limits for type rendering and inheritance traversal.
//!
//! Declaration models come from real-world `.d.ts` files, which are finite
//! trees, but defaulted generics and substitution chains can reference each
//! other. These limits turn a runaway input into a reported error instead of
//! a stack overflow.

/// Maximum nesting of recursive render calls for one type reference.
///
/// Every type argument, substitution hop and default expansion adds a level.
/// `lib.dom.d.ts` stays well below 20; hitting this limit means the model
/// contains a reference that never bottoms out and the run fails with
/// `UnresolvableType`.
pub const MAX_RENDER_DEPTH: u32 = 128;

/// Maximum total enter attempts of one default-parameter recursion guard.
pub const MAX_DEFAULT_EXPANSIONS: u32 = 10_000;

/// Maximum length of an `extends` path followed by the symbol collector.
///
/// The collector already refuses to re-enter an interface that is on the
/// current path, so this only bounds pathological but acyclic hierarchies.
pub const MAX_EXTENDS_DEPTH: usize = 64;
