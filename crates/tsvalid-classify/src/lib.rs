//! Descriptor-kind classification engine.
//!
//! Given a type handle from the type-checking service, an optional library
//! identity, and the optionally written annotation node, this crate decides
//! which one of a closed set of descriptor kinds the type represents. The
//! descriptor-tree builder uses the answer to pick a validator-generation
//! strategy and to decide how to recurse (tuple elements, union branches,
//! map key/value types, signature parameter and return types).
//!
//! Three cooperating predicate groups feed the decision:
//!
//! - [`library`] - nominal identity of built-in reference types
//! - [`type_queries`] - the individual kind predicates
//! - [`classifier`] - the precedence cascade producing one kind per call
//!
//! Everything is pure and synchronous; a misclassification here silently
//! produces a validator that accepts or rejects the wrong values, which is
//! why predicates keep several redundant detection signals (see the module
//! docs in [`type_queries`]).

pub mod classifier;
pub mod library;
pub mod type_queries;

pub use classifier::{DescriptorKind, classify};
pub use library::{LibraryTypeTag, resolve_library_tag};
pub use type_queries::*;

// Test modules live under tests/ and are wired here so they compile as unit
// tests with access to crate internals.
#[cfg(test)]
#[path = "../tests/library_tests.rs"]
mod library_tests;

#[cfg(test)]
#[path = "../tests/query_tests.rs"]
mod query_tests;

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod classifier_tests;
