//! Type, flag and annotation-node facade for the tsvalid classifier.
//!
//! This crate models the slice of a compiler's type-checking and parsing
//! services that validator generation depends on:
//!
//! - `TypeFlags` - the intrinsic-kind tag set attached to every type
//! - `SyntaxKind` / `TypeNode` - the written annotation, when one exists
//! - `TypeProvider` - read-only access to the service, with optional
//!   capability queries modeled explicitly
//! - `TypeStore` - an embeddable in-memory implementation of the provider
//!   surface for harnesses and tests
//!
//! Types and nodes are owned by the external services for the lifetime of a
//! compilation; everything here is read-only from the classifier's point of
//! view.

pub mod flags;
pub mod node;
pub mod provider;
pub mod store;

pub use flags::TypeFlags;
pub use node::{SyntaxKind, TypeNode};
pub use provider::{LiteralValue, SignatureId, SymbolOrigin, TypeId, TypeProvider};
pub use store::{IndexSignature, TypeRecord, TypeStore};
