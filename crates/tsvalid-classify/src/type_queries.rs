//! Descriptor-kind predicates.
//!
//! Each predicate decides one descriptor kind from up to three information
//! sources: the type's flag set, an optional capability query, and the
//! written annotation node. Where a predicate lists several signals, the
//! redundancy is deliberate - the external service does not expose every
//! query on every revision, and the annotation node is absent for inferred
//! types. Collapsing a disjunction to a single check loses exactly the
//! inputs that made the others necessary.
//!
//! # Design Principles
//!
//! - **Total**: every predicate returns a plain `bool`; malformed input is
//!   "not this kind", never a fault
//! - **Pure**: no state, no caching - each call is a function of its inputs
//! - **Order-sensitive at the call site**: structural predicates only
//!   produce a correct classification when consulted in the precedence
//!   order documented in [`crate::classifier`]

use crate::library::LibraryTypeTag;
use tsvalid_types::{LiteralValue, SyntaxKind, TypeFlags, TypeId, TypeNode, TypeProvider};

fn node_kind(node: Option<&TypeNode>) -> Option<SyntaxKind> {
    node.map(|n| n.kind)
}

// =============================================================================
// Primitive Queries
// =============================================================================
// Each primitive check has two routes: the intrinsic flag for the unboxed
// primitive, and the library tag for the boxed reference type. The boxed and
// unboxed forms are the same runtime-checkable shape, but only the tag route
// detects the boxed one.

/// Check if a type is the bigint primitive or the boxed `BigInt` type.
pub fn is_big_int(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::BIG_INT) || tag == Some(LibraryTypeTag::BigInt)
}

/// Check if a type is the boolean primitive or the boxed `Boolean` type.
pub fn is_boolean(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::BOOLEAN) || tag == Some(LibraryTypeTag::Boolean)
}

/// Check if a type is the string primitive or the boxed `String` type.
pub fn is_string(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::STRING) || tag == Some(LibraryTypeTag::String)
}

/// Check if a type is the number primitive or the boxed `Number` type.
pub fn is_number(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::NUMBER) || tag == Some(LibraryTypeTag::Number)
}

/// Check if a type is the symbol primitive or the boxed `Symbol` type.
pub fn is_symbol(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::ES_SYMBOL) || tag == Some(LibraryTypeTag::Symbol)
}

// =============================================================================
// Literal Queries
// =============================================================================

/// Check if a type is a literal type.
///
/// The capability query is preferred but not universally exposed, so the
/// flag routes back it up. Bigint literals carry a tag outside the LITERAL
/// composite, hence the separate check.
pub fn is_literal(provider: &dyn TypeProvider, ty: TypeId) -> bool {
    provider.is_literal(ty).unwrap_or(false)
        || provider.flags(ty).intersects(TypeFlags::BIG_INT_LITERAL)
        || provider.flags(ty).intersects(TypeFlags::LITERAL)
}

/// Check if the annotation node is the written `object` keyword.
pub fn is_object_keyword(node: Option<&TypeNode>) -> bool {
    node_kind(node) == Some(SyntaxKind::ObjectKeyword)
}

/// Check if the annotation node is the written `true` keyword.
pub fn is_true_keyword(node: Option<&TypeNode>) -> bool {
    node_kind(node) == Some(SyntaxKind::TrueKeyword)
}

/// Check if the annotation node is the written `false` keyword.
pub fn is_false_keyword(node: Option<&TypeNode>) -> bool {
    node_kind(node) == Some(SyntaxKind::FalseKeyword)
}

/// Check if a type is the literal `true`.
///
/// Three routes, evaluated cheapest first: the written keyword, the literal
/// value of the inferred type, and the keyword nested inside a literal-type
/// wrapper node. A type that is simultaneously literal-true and written
/// `false` would be an upstream inconsistency and is not handled here.
pub fn is_true(provider: &dyn TypeProvider, ty: TypeId, node: Option<&TypeNode>) -> bool {
    if is_true_keyword(node) {
        return true;
    }
    if is_literal(provider, ty)
        && provider.literal_value(ty) == Some(&LiteralValue::Boolean(true))
    {
        return true;
    }
    matches!(node, Some(n) if n.literal_kind() == Some(SyntaxKind::TrueKeyword))
}

/// Check if a type is the literal `false`. Same three routes as [`is_true`].
pub fn is_false(provider: &dyn TypeProvider, ty: TypeId, node: Option<&TypeNode>) -> bool {
    if is_false_keyword(node) {
        return true;
    }
    if is_literal(provider, ty)
        && provider.literal_value(ty) == Some(&LiteralValue::Boolean(false))
    {
        return true;
    }
    matches!(node, Some(n) if n.literal_kind() == Some(SyntaxKind::FalseKeyword))
}

// =============================================================================
// Structural Queries
// =============================================================================
// Consult these in the order Tuple -> Intersection -> Union -> Function ->
// Array -> nominal built-ins -> ClassOrInterface/Interface. A tuple is
// array-like, so checking `is_array` first is not wrong but loses the
// element-wise structure downstream.

/// Check if a type was written as a tuple.
///
/// Tuples are detected syntactically, never structurally: an inferred tuple
/// type with no written annotation is intentionally not classified as a
/// tuple. This is a documented precision limit.
pub fn is_tuple(node: Option<&TypeNode>) -> bool {
    node_kind(node) == Some(SyntaxKind::TupleType)
}

/// Check if a type is an intersection.
///
/// Capability query or written annotation - two signals, either sufficient,
/// because the query is not exposed by every service revision.
pub fn is_intersection(provider: &dyn TypeProvider, ty: TypeId, node: Option<&TypeNode>) -> bool {
    provider.is_intersection(ty).unwrap_or(false)
        || node_kind(node) == Some(SyntaxKind::IntersectionType)
}

/// Check if a type is a union.
///
/// Three independent signals, any sufficient: the capability query, the
/// written annotation, and the raw UNION flag.
pub fn is_union(provider: &dyn TypeProvider, ty: TypeId, node: Option<&TypeNode>) -> bool {
    provider.is_union(ty).unwrap_or(false)
        || node_kind(node) == Some(SyntaxKind::UnionType)
        || provider.flags(ty).contains(TypeFlags::UNION)
}

/// Check if a type is callable.
///
/// Any callable shape counts: a written function or constructor annotation,
/// the nominal `Function` tag, or at least one construct or call signature.
pub fn is_function(
    provider: &dyn TypeProvider,
    ty: TypeId,
    tag: Option<LibraryTypeTag>,
    node: Option<&TypeNode>,
) -> bool {
    matches!(
        node_kind(node),
        Some(SyntaxKind::FunctionType | SyntaxKind::ConstructorType)
    ) || tag == Some(LibraryTypeTag::Function)
        || !provider.construct_signatures(ty).is_empty()
        || !provider.call_signatures(ty).is_empty()
}

/// Check if a type is an array.
///
/// The structural route is delegated to the service-level capability query
/// because only the service can tell a parametrized array-like reference
/// from an ordinary generic reference.
pub fn is_array(
    provider: &dyn TypeProvider,
    ty: TypeId,
    tag: Option<LibraryTypeTag>,
    node: Option<&TypeNode>,
) -> bool {
    node_kind(node) == Some(SyntaxKind::ArrayType)
        || tag == Some(LibraryTypeTag::Array)
        || provider.is_array_type(ty).unwrap_or(false)
}

// Map, Set, Promise, Date and RegExp share no distinguishing structural
// shape with ordinary objects; nominal identity is the only signal.

/// Check if a type is the built-in `Date`.
pub fn is_date(tag: Option<LibraryTypeTag>) -> bool {
    tag == Some(LibraryTypeTag::Date)
}

/// Check if a type is the built-in `RegExp`.
pub fn is_regexp(tag: Option<LibraryTypeTag>) -> bool {
    tag == Some(LibraryTypeTag::RegExp)
}

/// Check if a type is the built-in `Map`.
pub fn is_map(tag: Option<LibraryTypeTag>) -> bool {
    tag == Some(LibraryTypeTag::Map)
}

/// Check if a type is the built-in `Set`.
pub fn is_set(tag: Option<LibraryTypeTag>) -> bool {
    tag == Some(LibraryTypeTag::Set)
}

/// Check if a type is the built-in `Promise`.
pub fn is_promise(tag: Option<LibraryTypeTag>) -> bool {
    tag == Some(LibraryTypeTag::Promise)
}

/// Check if a type is a structured object.
///
/// Intentionally broad: the OBJECT flag or the nominal `Object` tag. This is
/// the pre-fallback bucket consulted after every more specific shape.
pub fn is_interface(provider: &dyn TypeProvider, ty: TypeId, tag: Option<LibraryTypeTag>) -> bool {
    provider.flags(ty).contains(TypeFlags::OBJECT) || tag == Some(LibraryTypeTag::Object)
}

/// Check if a type is a class or interface.
///
/// The flag route overlaps [`is_interface`]; callers decide which of the two
/// wins for plain OBJECT-flagged types (see [`crate::classifier`] for the
/// layering the cascade applies).
pub fn is_class_or_interface(
    provider: &dyn TypeProvider,
    ty: TypeId,
    node: Option<&TypeNode>,
) -> bool {
    provider.is_class_or_interface(ty).unwrap_or(false)
        || node_kind(node) == Some(SyntaxKind::InterfaceDeclaration)
        || provider.flags(ty).contains(TypeFlags::OBJECT)
}

// =============================================================================
// Absence, Top and Bottom Queries
// =============================================================================
// Mutually exclusive by construction of the flag set; no precedence needed
// among these four.

/// Check if a type is `null`.
pub fn is_null(provider: &dyn TypeProvider, ty: TypeId) -> bool {
    provider.flags(ty).contains(TypeFlags::NULL)
}

/// Check if a type is `undefined` or a void position. The two are
/// deliberately unified: a void return and an undefined value are the same
/// runtime-checkable shape.
pub fn is_undefined(provider: &dyn TypeProvider, ty: TypeId) -> bool {
    provider
        .flags(ty)
        .intersects(TypeFlags::UNDEFINED | TypeFlags::VOID)
}

/// Check if a type accepts anything. `any` and `unknown` are deliberately
/// unified; both generate an accept-all validator.
pub fn is_any(provider: &dyn TypeProvider, ty: TypeId) -> bool {
    provider
        .flags(ty)
        .intersects(TypeFlags::ANY | TypeFlags::UNKNOWN)
}

/// Check if a type is `never`.
pub fn is_never(provider: &dyn TypeProvider, ty: TypeId) -> bool {
    provider.flags(ty).contains(TypeFlags::NEVER)
}
