//! In-memory implementation of the provider surface.
//!
//! `TypeStore` is an embeddable stand-in for the real type-checking service:
//! the descriptor-tree builder's test harness registers the type shapes it
//! wants to exercise and hands the store to the classifier as a
//! `&dyn TypeProvider`. Records are append-only; once registered, a type is
//! never mutated, matching the immutability contract of the real service.
//!
//! Capability answers default to "withheld" (`None`), which models an older
//! service revision that does not expose the query. Tests opt in per record.

use crate::flags::TypeFlags;
use crate::provider::{LiteralValue, SignatureId, SymbolOrigin, TypeId, TypeProvider};
use serde::Serialize;

/// An index signature on an object shape.
///
/// Shapes keep their numeric and string index signatures separate so a type
/// like `{ [key: number]: A; [key: string]: B }` retains both for downstream
/// validator generation instead of collapsing to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSignature {
    pub value_type: TypeId,
}

/// Everything the store knows about one registered type.
#[derive(Debug, Clone, Default)]
pub struct TypeRecord {
    pub flags: TypeFlags,
    pub literal: Option<LiteralValue>,
    pub symbol: Option<SymbolOrigin>,
    pub call_signatures: Vec<SignatureId>,
    pub construct_signatures: Vec<SignatureId>,
    pub string_index: Option<IndexSignature>,
    pub number_index: Option<IndexSignature>,

    // Capability answers. `None` means the query itself is unavailable,
    // not that the answer is "no".
    pub literal_capability: Option<bool>,
    pub union_capability: Option<bool>,
    pub intersection_capability: Option<bool>,
    pub class_or_interface_capability: Option<bool>,
    pub array_capability: Option<bool>,
}

/// Append-only arena of [`TypeRecord`]s addressed by [`TypeId`].
#[derive(Debug, Default)]
pub struct TypeStore {
    records: Vec<TypeRecord>,
}

impl TypeStore {
    pub fn new() -> TypeStore {
        TypeStore::default()
    }

    /// Register a record and return its id.
    pub fn register(&mut self, record: TypeRecord) -> TypeId {
        let id = TypeId(self.records.len() as u32);
        self.records.push(record);
        id
    }

    /// Look up a record. Unknown ids yield `None`.
    pub fn record(&self, ty: TypeId) -> Option<&TypeRecord> {
        self.records.get(ty.0 as usize)
    }

    /// An intrinsic type carrying only flags.
    pub fn intrinsic(&mut self, flags: TypeFlags) -> TypeId {
        self.register(TypeRecord {
            flags,
            ..TypeRecord::default()
        })
    }

    /// A literal type. Sets the matching literal flag and answers the
    /// literal capability query.
    pub fn literal(&mut self, value: LiteralValue) -> TypeId {
        let flags = match value {
            LiteralValue::String(_) => TypeFlags::STRING_LITERAL,
            LiteralValue::Number(_) => TypeFlags::NUMBER_LITERAL,
            LiteralValue::Boolean(_) => TypeFlags::BOOLEAN_LITERAL,
            LiteralValue::BigInt(_) => TypeFlags::BIG_INT_LITERAL,
        };
        self.register(TypeRecord {
            flags,
            literal: Some(value),
            literal_capability: Some(true),
            ..TypeRecord::default()
        })
    }

    /// A union type whose service revision exposes the union capability.
    pub fn union(&mut self) -> TypeId {
        self.register(TypeRecord {
            flags: TypeFlags::UNION,
            union_capability: Some(true),
            ..TypeRecord::default()
        })
    }

    /// An intersection type with the intersection capability exposed.
    pub fn intersection(&mut self) -> TypeId {
        self.register(TypeRecord {
            flags: TypeFlags::INTERSECTION,
            intersection_capability: Some(true),
            ..TypeRecord::default()
        })
    }

    /// A reference type declared by a default library file, e.g. `Map`.
    pub fn library_reference(&mut self, name: &str, flags: TypeFlags) -> TypeId {
        self.register(TypeRecord {
            flags,
            symbol: Some(SymbolOrigin::library(name)),
            ..TypeRecord::default()
        })
    }

    /// A plain structural object type.
    pub fn object(&mut self) -> TypeId {
        self.intrinsic(TypeFlags::OBJECT)
    }

    /// An object type with index signatures.
    pub fn object_with_index(
        &mut self,
        string_index: Option<IndexSignature>,
        number_index: Option<IndexSignature>,
    ) -> TypeId {
        self.register(TypeRecord {
            flags: TypeFlags::OBJECT,
            string_index,
            number_index,
            ..TypeRecord::default()
        })
    }

    /// A callable object type with the given signature counts.
    pub fn callable(&mut self, calls: u32, constructs: u32) -> TypeId {
        self.register(TypeRecord {
            flags: TypeFlags::OBJECT,
            call_signatures: (0..calls).map(SignatureId).collect(),
            construct_signatures: (calls..calls + constructs).map(SignatureId).collect(),
            ..TypeRecord::default()
        })
    }
}

impl TypeProvider for TypeStore {
    fn flags(&self, ty: TypeId) -> TypeFlags {
        self.record(ty).map(|r| r.flags).unwrap_or_default()
    }

    fn is_literal(&self, ty: TypeId) -> Option<bool> {
        self.record(ty)?.literal_capability
    }

    fn is_union(&self, ty: TypeId) -> Option<bool> {
        self.record(ty)?.union_capability
    }

    fn is_intersection(&self, ty: TypeId) -> Option<bool> {
        self.record(ty)?.intersection_capability
    }

    fn is_class_or_interface(&self, ty: TypeId) -> Option<bool> {
        self.record(ty)?.class_or_interface_capability
    }

    fn is_array_type(&self, ty: TypeId) -> Option<bool> {
        self.record(ty)?.array_capability
    }

    fn literal_value(&self, ty: TypeId) -> Option<&LiteralValue> {
        self.record(ty)?.literal.as_ref()
    }

    fn call_signatures(&self, ty: TypeId) -> &[SignatureId] {
        self.record(ty)
            .map(|r| r.call_signatures.as_slice())
            .unwrap_or(&[])
    }

    fn construct_signatures(&self, ty: TypeId) -> &[SignatureId] {
        self.record(ty)
            .map(|r| r.construct_signatures.as_slice())
            .unwrap_or(&[])
    }

    fn symbol_origin(&self, ty: TypeId) -> Option<&SymbolOrigin> {
        self.record(ty)?.symbol.as_ref()
    }
}
