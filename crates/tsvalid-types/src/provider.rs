//! Provider surface of the external type-checking service.
//!
//! The classifier never owns types; it reads them through the [`TypeProvider`]
//! trait, the Rust face of whatever compiler service supplies type
//! information. The trait splits into three groups:
//!
//! - **Required facts**: the flag set, literal payloads, signature lists and
//!   the declaring symbol's nominal origin. Every service revision supplies
//!   these.
//! - **Optional capability queries**: `is_literal`, `is_union`,
//!   `is_intersection`, `is_class_or_interface`. Older service revisions do
//!   not expose them, so the default answer is `None` ("capability absent"),
//!   and callers fall back to flag- or syntax-based signals. This is a
//!   documented compatibility shim, not reflection.
//! - **Service-level capabilities**: `is_array_type` is answered by the
//!   service itself, never by the type, because only the service can tell a
//!   parametrized array-like reference from an ordinary generic reference.

use crate::flags::TypeFlags;
use serde::Serialize;

/// Index of a type inside the providing service. Types are immutable and
/// owned by the service for the lifetime of one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeId(pub u32);

/// Opaque handle for a call or construct signature. The classifier only
/// counts these; the descriptor-tree builder resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureId(pub u32);

/// Payload of a literal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    BigInt(String),
}

/// Nominal identity of the symbol that declared a type.
///
/// Only symbols declared by a default library file can resolve to a library
/// tag; a user interface named `Map` stays an ordinary interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolOrigin {
    pub name: String,
    pub default_library: bool,
}

impl SymbolOrigin {
    pub fn library(name: impl Into<String>) -> SymbolOrigin {
        SymbolOrigin {
            name: name.into(),
            default_library: true,
        }
    }

    pub fn user(name: impl Into<String>) -> SymbolOrigin {
        SymbolOrigin {
            name: name.into(),
            default_library: false,
        }
    }
}

/// Read-only access to the type-checking service.
///
/// All methods are total: an unknown `TypeId` yields empty flags, no
/// signatures and no origin, so a misbehaving service degrades toward the
/// structural-object fallback instead of faulting the type walk.
pub trait TypeProvider {
    /// The intrinsic-kind tag set of `ty`.
    fn flags(&self, ty: TypeId) -> TypeFlags;

    /// Capability query: is `ty` a literal type. `None` when this service
    /// revision does not expose the query.
    fn is_literal(&self, ty: TypeId) -> Option<bool> {
        let _ = ty;
        None
    }

    /// Capability query: is `ty` a union type.
    fn is_union(&self, ty: TypeId) -> Option<bool> {
        let _ = ty;
        None
    }

    /// Capability query: is `ty` an intersection type.
    fn is_intersection(&self, ty: TypeId) -> Option<bool> {
        let _ = ty;
        None
    }

    /// Capability query: is `ty` a class or interface type.
    fn is_class_or_interface(&self, ty: TypeId) -> Option<bool> {
        let _ = ty;
        None
    }

    /// Service-level capability query: does `ty` behave as an array.
    /// Answered by the service, not the type object.
    fn is_array_type(&self, ty: TypeId) -> Option<bool> {
        let _ = ty;
        None
    }

    /// The literal payload of `ty`, when it is a literal type.
    fn literal_value(&self, ty: TypeId) -> Option<&LiteralValue>;

    /// Call signatures of `ty`. Empty for non-callable types.
    fn call_signatures(&self, ty: TypeId) -> &[SignatureId];

    /// Construct signatures of `ty`. Empty for non-constructable types.
    fn construct_signatures(&self, ty: TypeId) -> &[SignatureId];

    /// Nominal origin of the symbol that declared `ty`, when one exists.
    fn symbol_origin(&self, ty: TypeId) -> Option<&SymbolOrigin>;
}
