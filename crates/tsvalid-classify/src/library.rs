//! Library-identity resolution.
//!
//! Several built-in reference types (Map, Set, Date, RegExp, Promise, the
//! boxed primitives, Function, Array, plain Object) have structural shapes
//! indistinguishable from ordinary interfaces. Only the nominal origin of
//! the declaring symbol tells them apart, so this lookup runs logically
//! before every structural predicate and its result is threaded into them
//! as an optional hint.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::trace;
use tsvalid_types::{TypeId, TypeProvider};

/// Nominal identity of a built-in generic/reference construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LibraryTypeTag {
    BigInt,
    Boolean,
    String,
    Number,
    Symbol,
    Date,
    Map,
    Set,
    Promise,
    RegExp,
    Object,
    Function,
    Array,
}

/// Declared names of the built-in constructs the resolver recognizes.
static LIBRARY_TYPE_TABLE: Lazy<FxHashMap<&'static str, LibraryTypeTag>> = Lazy::new(|| {
    let mut table = FxHashMap::default();
    table.insert("Array", LibraryTypeTag::Array);
    table.insert("ReadonlyArray", LibraryTypeTag::Array);
    table.insert("BigInt", LibraryTypeTag::BigInt);
    table.insert("Boolean", LibraryTypeTag::Boolean);
    table.insert("Date", LibraryTypeTag::Date);
    table.insert("Function", LibraryTypeTag::Function);
    table.insert("Map", LibraryTypeTag::Map);
    table.insert("Number", LibraryTypeTag::Number);
    table.insert("Object", LibraryTypeTag::Object);
    table.insert("Promise", LibraryTypeTag::Promise);
    table.insert("RegExp", LibraryTypeTag::RegExp);
    table.insert("Set", LibraryTypeTag::Set);
    table.insert("String", LibraryTypeTag::String);
    table.insert("Symbol", LibraryTypeTag::Symbol);
    table
});

/// Resolve the nominal library identity of `ty`, if any.
///
/// A tag is produced only when the declaring symbol comes from a default
/// library file; a user-defined interface that happens to be named `Map`
/// stays an ordinary interface. Types without a recognized nominal origin
/// yield `None`, never an error.
pub fn resolve_library_tag(provider: &dyn TypeProvider, ty: TypeId) -> Option<LibraryTypeTag> {
    let origin = provider.symbol_origin(ty)?;
    if !origin.default_library {
        return None;
    }
    let tag = LIBRARY_TYPE_TABLE.get(origin.name.as_str()).copied();
    if let Some(tag) = tag {
        trace!(name = %origin.name, ?tag, "resolved library identity");
    }
    tag
}
