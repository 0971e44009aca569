//! Unified descriptor-kind classification.
//!
//! This module runs the full predicate cascade in its mandated order and
//! returns exactly one [`DescriptorKind`] per type position. The
//! descriptor-tree builder calls [`classify`] instead of consulting
//! individual predicates so it cannot mis-order them: a tuple consulted
//! through `is_array` alone still answers true (tuples are array-like), but
//! the classification would lose the element-wise structure downstream.
//!
//! # Design Principles
//!
//! - **Single entry point**: one call yields one kind
//! - **Fixed precedence**: absence/top/bottom, boolean literals, primitives,
//!   generic literals, then structural shapes from most to least specific
//! - **Total**: every input classifies; unmatched types land on the
//!   `StructuralObject` fallback rather than faulting

use crate::library::resolve_library_tag;
use crate::type_queries::*;
use serde::Serialize;
use tracing::trace;
use tsvalid_types::{SyntaxKind, TypeId, TypeNode, TypeProvider};

/// The closed taxonomy of descriptor kinds.
///
/// Downstream code chooses a validator-generation strategy per variant, so
/// the set is closed: new type-system constructs must map onto one of these
/// or onto the `StructuralObject` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DescriptorKind {
    // =========================================================================
    // Absence, Top and Bottom
    // =========================================================================
    /// `any` or `unknown` - accepts every value
    Any,
    /// `never` - accepts no value
    Never,
    /// The `null` value
    Null,
    /// `undefined`, including void positions
    Undefined,

    // =========================================================================
    // Primitives
    // =========================================================================
    /// bigint primitive or boxed `BigInt`
    BigInt,
    /// boolean primitive or boxed `Boolean`
    Boolean,
    /// string primitive or boxed `String`
    String,
    /// number primitive or boxed `Number`
    Number,
    /// symbol primitive or boxed `Symbol`
    Symbol,

    // =========================================================================
    // Literals
    // =========================================================================
    /// The literal `true`
    True,
    /// The literal `false`
    False,
    /// Any other literal value (string, number, bigint literals)
    Literal,

    // =========================================================================
    // Composite Shapes
    // =========================================================================
    /// Written tuple annotation; the builder recurses into its elements
    Tuple,
    /// Intersection; the builder recurses into the constituents
    Intersection,
    /// Union; the builder recurses into the branches
    Union,
    /// Any callable shape
    Function,
    /// Ordered list; the builder recurses into the element type
    Array,

    // =========================================================================
    // Nominal Built-ins
    // =========================================================================
    Date,
    /// Key-value map; the builder recurses into key and value types
    Map,
    Set,
    /// Deferred-value container; the builder recurses into the payload type
    Promise,
    RegExp,

    // =========================================================================
    // Object-like
    // =========================================================================
    /// Class or interface identified by capability or declaration evidence
    ClassOrInterface,
    /// Structured object (interfaces, object literals, `Object`)
    Object,
    /// Fallback for anything no other predicate claimed
    StructuralObject,
}

impl DescriptorKind {
    /// Check if this kind is a primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            DescriptorKind::BigInt
                | DescriptorKind::Boolean
                | DescriptorKind::String
                | DescriptorKind::Number
                | DescriptorKind::Symbol
        )
    }

    /// Check if this kind is a literal (including the boolean literals).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            DescriptorKind::True | DescriptorKind::False | DescriptorKind::Literal
        )
    }

    /// Check if this kind is a composite the builder recurses into.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            DescriptorKind::Tuple
                | DescriptorKind::Intersection
                | DescriptorKind::Union
                | DescriptorKind::Array
        )
    }

    /// Check if this kind is a purely nominal built-in.
    pub fn is_nominal_builtin(&self) -> bool {
        matches!(
            self,
            DescriptorKind::Date
                | DescriptorKind::Map
                | DescriptorKind::Set
                | DescriptorKind::Promise
                | DescriptorKind::RegExp
        )
    }

    /// Check if this kind is object-like.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            DescriptorKind::ClassOrInterface
                | DescriptorKind::Object
                | DescriptorKind::StructuralObject
        )
    }
}

/// Classify one type position into exactly one [`DescriptorKind`].
///
/// Pure function of `(ty, node)` and the facts the provider reports; no
/// state, no caching, safe to call concurrently. The precedence below is
/// normative - reordering the structural block changes the answer for
/// ambiguous types (e.g. a tuple-annotated type would classify as Array).
pub fn classify(
    provider: &dyn TypeProvider,
    ty: TypeId,
    node: Option<&TypeNode>,
) -> DescriptorKind {
    let tag = resolve_library_tag(provider, ty);
    trace!(?ty, ?tag, "classifying type position");

    // Absence, top and bottom: mutually exclusive flag checks.
    if is_any(provider, ty) {
        return DescriptorKind::Any;
    }
    if is_never(provider, ty) {
        return DescriptorKind::Never;
    }
    if is_null(provider, ty) {
        return DescriptorKind::Null;
    }
    if is_undefined(provider, ty) {
        return DescriptorKind::Undefined;
    }

    // Boolean literals before the boolean primitive and the generic
    // literal bucket: `true` must not be swallowed by either.
    if is_true(provider, ty, node) {
        return DescriptorKind::True;
    }
    if is_false(provider, ty, node) {
        return DescriptorKind::False;
    }

    // Primitives, boxed or unboxed. The boolean check also covers the
    // service revisions that report `boolean` as a union of its literals.
    if is_big_int(provider, ty, tag) {
        return DescriptorKind::BigInt;
    }
    if is_boolean(provider, ty, tag) {
        return DescriptorKind::Boolean;
    }
    if is_string(provider, ty, tag) {
        return DescriptorKind::String;
    }
    if is_number(provider, ty, tag) {
        return DescriptorKind::Number;
    }
    if is_symbol(provider, ty, tag) {
        return DescriptorKind::Symbol;
    }

    // Remaining literals: string, number and bigint literal types.
    if is_literal(provider, ty) {
        return DescriptorKind::Literal;
    }

    // Structural shapes, most specific first. Tuple before Array is the
    // load-bearing pair; Union before Function keeps a union of callables
    // from classifying as its first branch.
    if is_tuple(node) {
        return DescriptorKind::Tuple;
    }
    if is_intersection(provider, ty, node) {
        return DescriptorKind::Intersection;
    }
    if is_union(provider, ty, node) {
        return DescriptorKind::Union;
    }
    if is_function(provider, ty, tag, node) {
        return DescriptorKind::Function;
    }
    if is_array(provider, ty, tag, node) {
        return DescriptorKind::Array;
    }

    // Nominal built-ins: no structural route exists for these.
    if is_date(tag) {
        return DescriptorKind::Date;
    }
    if is_regexp(tag) {
        return DescriptorKind::RegExp;
    }
    if is_map(tag) {
        return DescriptorKind::Map;
    }
    if is_set(tag) {
        return DescriptorKind::Set;
    }
    if is_promise(tag) {
        return DescriptorKind::Promise;
    }

    // Object-flagged layering. The is_class_or_interface predicate shares
    // its flag route with is_interface, so the cascade consults only its
    // distinctive evidence (capability answer, written interface
    // declaration) and lets the broad flag/tag bucket catch the rest. See
    // DESIGN.md, Open Questions.
    if provider.is_class_or_interface(ty).unwrap_or(false)
        || matches!(node, Some(n) if n.kind == SyntaxKind::InterfaceDeclaration)
    {
        return DescriptorKind::ClassOrInterface;
    }
    if is_interface(provider, ty, tag) || is_object_keyword(node) {
        return DescriptorKind::Object;
    }

    trace!(?ty, "no predicate matched, using structural fallback");
    DescriptorKind::StructuralObject
}
