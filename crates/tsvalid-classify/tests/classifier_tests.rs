use crate::classifier::{DescriptorKind, classify};
use crate::library::{LibraryTypeTag, resolve_library_tag};
use crate::type_queries::{is_array, is_interface, is_tuple, is_union};
use tsvalid_types::{
    IndexSignature, LiteralValue, SymbolOrigin, SyntaxKind, TypeFlags, TypeNode, TypeRecord,
    TypeStore,
};

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn test_tuple_wins_over_array_under_canonical_order() {
    init_tracing();
    let mut store = TypeStore::new();
    // A written tuple: the service also reports array-ness, because tuples
    // are array-like.
    let ty = store.register(TypeRecord {
        flags: TypeFlags::OBJECT,
        array_capability: Some(true),
        ..TypeRecord::default()
    });
    let node = TypeNode::new(SyntaxKind::TupleType);

    // Consulting is_array alone gives the documented coarser answer.
    assert!(is_array(&store, ty, None, Some(&node)));
    // The canonical cascade keeps the element-wise structure.
    assert_eq!(classify(&store, ty, Some(&node)), DescriptorKind::Tuple);
}

#[test]
fn test_union_wins_over_function() {
    let mut store = TypeStore::new();
    // A union of callables: classifying as Function would lose the branches.
    let ty = store.register(TypeRecord {
        flags: TypeFlags::UNION,
        union_capability: Some(true),
        call_signatures: vec![tsvalid_types::SignatureId(0)],
        ..TypeRecord::default()
    });

    assert_eq!(classify(&store, ty, None), DescriptorKind::Union);
}

#[test]
fn test_intersection_wins_over_union() {
    let mut store = TypeStore::new();
    let ty = store.register(TypeRecord {
        flags: TypeFlags::INTERSECTION | TypeFlags::UNION,
        intersection_capability: Some(true),
        union_capability: Some(true),
        ..TypeRecord::default()
    });

    assert_eq!(classify(&store, ty, None), DescriptorKind::Intersection);
}

#[test]
fn test_function_wins_over_array_capability() {
    let mut store = TypeStore::new();
    let ty = store.register(TypeRecord {
        flags: TypeFlags::OBJECT,
        call_signatures: vec![tsvalid_types::SignatureId(0)],
        array_capability: Some(true),
        ..TypeRecord::default()
    });

    assert_eq!(classify(&store, ty, None), DescriptorKind::Function);
}

#[test]
fn test_boolean_primitive_wins_over_its_union_representation() {
    let mut store = TypeStore::new();
    // Some service revisions report `boolean` as a union of its literals.
    let ty = store.intrinsic(TypeFlags::BOOLEAN | TypeFlags::UNION);

    assert_eq!(classify(&store, ty, None), DescriptorKind::Boolean);
}

// =============================================================================
// Primitives and literals
// =============================================================================

#[test]
fn test_boxed_and_unboxed_number_classify_alike() {
    let mut store = TypeStore::new();
    let unboxed = store.intrinsic(TypeFlags::NUMBER);
    let boxed = store.library_reference("Number", TypeFlags::OBJECT);

    assert_eq!(classify(&store, unboxed, None), DescriptorKind::Number);
    assert_eq!(classify(&store, boxed, None), DescriptorKind::Number);
}

#[test]
fn test_boolean_literals_classify_before_literal_bucket() {
    let mut store = TypeStore::new();
    let t = store.literal(LiteralValue::Boolean(true));
    let f = store.literal(LiteralValue::Boolean(false));
    let s = store.literal(LiteralValue::String("on".to_string()));
    let n = store.literal(LiteralValue::BigInt("12".to_string()));

    assert_eq!(classify(&store, t, None), DescriptorKind::True);
    assert_eq!(classify(&store, f, None), DescriptorKind::False);
    assert_eq!(classify(&store, s, None), DescriptorKind::Literal);
    assert_eq!(classify(&store, n, None), DescriptorKind::Literal);
}

#[test]
fn test_written_true_keyword_classifies_without_type_facts() {
    let mut store = TypeStore::new();
    let bare = store.object();
    let node = TypeNode::new(SyntaxKind::TrueKeyword);

    assert_eq!(classify(&store, bare, Some(&node)), DescriptorKind::True);
}

#[test]
fn test_absence_top_bottom_kinds() {
    let mut store = TypeStore::new();
    let any = store.intrinsic(TypeFlags::ANY);
    let unknown = store.intrinsic(TypeFlags::UNKNOWN);
    let never = store.intrinsic(TypeFlags::NEVER);
    let null = store.intrinsic(TypeFlags::NULL);
    let undefined = store.intrinsic(TypeFlags::UNDEFINED);
    let void = store.intrinsic(TypeFlags::VOID);

    // any/unknown unify, void/undefined unify.
    assert_eq!(classify(&store, any, None), DescriptorKind::Any);
    assert_eq!(classify(&store, unknown, None), DescriptorKind::Any);
    assert_eq!(classify(&store, never, None), DescriptorKind::Never);
    assert_eq!(classify(&store, null, None), DescriptorKind::Null);
    assert_eq!(classify(&store, undefined, None), DescriptorKind::Undefined);
    assert_eq!(classify(&store, void, None), DescriptorKind::Undefined);
}

// =============================================================================
// Nominal built-ins and object layering
// =============================================================================

#[test]
fn test_nominal_builtins_classify_by_identity_alone() {
    let mut store = TypeStore::new();
    for (name, kind) in [
        ("Date", DescriptorKind::Date),
        ("RegExp", DescriptorKind::RegExp),
        ("Map", DescriptorKind::Map),
        ("Set", DescriptorKind::Set),
        ("Promise", DescriptorKind::Promise),
    ] {
        // Structurally these are plain objects.
        let ty = store.library_reference(name, TypeFlags::OBJECT);
        assert_eq!(classify(&store, ty, None), kind, "{name}");
    }
}

#[test]
fn test_function_tag_classifies_as_function() {
    let mut store = TypeStore::new();
    let ty = store.library_reference("Function", TypeFlags::OBJECT);

    assert_eq!(classify(&store, ty, None), DescriptorKind::Function);
}

#[test]
fn test_class_or_interface_needs_distinctive_evidence() {
    let mut store = TypeStore::new();

    let by_capability = store.register(TypeRecord {
        flags: TypeFlags::OBJECT,
        class_or_interface_capability: Some(true),
        ..TypeRecord::default()
    });
    assert_eq!(
        classify(&store, by_capability, None),
        DescriptorKind::ClassOrInterface
    );

    let bare = store.object();
    let node = TypeNode::new(SyntaxKind::InterfaceDeclaration);
    assert_eq!(
        classify(&store, bare, Some(&node)),
        DescriptorKind::ClassOrInterface
    );

    // A plain OBJECT-flagged type without capability or declaration
    // evidence lands in the broad object bucket instead.
    assert_eq!(classify(&store, bare, None), DescriptorKind::Object);
}

#[test]
fn test_object_keyword_classifies_as_object() {
    let mut store = TypeStore::new();
    let ty = store.intrinsic(TypeFlags::empty());
    let node = TypeNode::new(SyntaxKind::ObjectKeyword);

    assert_eq!(classify(&store, ty, Some(&node)), DescriptorKind::Object);
}

#[test]
fn test_unclaimed_type_falls_back_to_structural_object() {
    let mut store = TypeStore::new();
    let ty = store.intrinsic(TypeFlags::empty());

    assert_eq!(classify(&store, ty, None), DescriptorKind::StructuralObject);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_string_keyed_record_scenario() {
    init_tracing();
    let mut store = TypeStore::new();
    let number = store.intrinsic(TypeFlags::NUMBER);
    // Record<string, number>: an object with a string index signature whose
    // declaring symbol is the default-library `Object`.
    let record = store.register(TypeRecord {
        flags: TypeFlags::OBJECT,
        symbol: Some(SymbolOrigin::library("Object")),
        string_index: Some(IndexSignature { value_type: number }),
        ..TypeRecord::default()
    });

    // None of the more specific structural shapes claim it.
    assert!(!is_tuple(None));
    assert!(!is_union(&store, record, None));
    assert!(!is_array(&store, record, resolve_library_tag(&store, record), None));

    let tag = resolve_library_tag(&store, record);
    assert_eq!(tag, Some(LibraryTypeTag::Object));
    assert!(is_interface(&store, record, tag));
    assert_eq!(classify(&store, record, None), DescriptorKind::Object);

    // The index signature stays visible for the builder's recursion.
    let index = store.record(record).unwrap().string_index.unwrap();
    assert_eq!(index.value_type, number);
    assert_eq!(classify(&store, index.value_type, None), DescriptorKind::Number);
}

#[test]
fn test_double_index_signature_scenario() {
    let mut store = TypeStore::new();
    let literal = store.literal(LiteralValue::String("literal".to_string()));
    let string = store.intrinsic(TypeFlags::STRING);
    // { [key: number]: 'literal'; [key: string]: string }
    let ty = store.object_with_index(
        Some(IndexSignature { value_type: string }),
        Some(IndexSignature { value_type: literal }),
    );

    assert_eq!(classify(&store, ty, None), DescriptorKind::Object);

    // Both index signatures survive, keyed separately, for downstream
    // validator generation.
    let record = store.record(ty).unwrap();
    let number_index = record.number_index.unwrap();
    let string_index = record.string_index.unwrap();
    assert_eq!(
        classify(&store, number_index.value_type, None),
        DescriptorKind::Literal
    );
    assert_eq!(
        classify(&store, string_index.value_type, None),
        DescriptorKind::String
    );
}

// =============================================================================
// Kind helpers and serialization
// =============================================================================

#[test]
fn test_kind_helper_partitions() {
    assert!(DescriptorKind::Number.is_primitive());
    assert!(DescriptorKind::True.is_literal());
    assert!(DescriptorKind::Tuple.is_composite());
    assert!(DescriptorKind::Map.is_nominal_builtin());
    assert!(DescriptorKind::StructuralObject.is_object_like());

    assert!(!DescriptorKind::Union.is_object_like());
    assert!(!DescriptorKind::Object.is_primitive());
}

#[test]
fn test_kind_serializes_by_name() {
    let value = serde_json::to_value(DescriptorKind::Union).unwrap();
    assert_eq!(value, serde_json::json!("Union"));
    let value = serde_json::to_value(DescriptorKind::StructuralObject).unwrap();
    assert_eq!(value, serde_json::json!("StructuralObject"));
}

// =============================================================================
// Properties
// =============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_flags() -> impl Strategy<Value = TypeFlags> {
        any::<u32>().prop_map(TypeFlags::from_bits_truncate)
    }

    fn arb_literal() -> impl Strategy<Value = Option<LiteralValue>> {
        proptest::option::of(prop_oneof![
            any::<bool>().prop_map(LiteralValue::Boolean),
            any::<f64>().prop_map(LiteralValue::Number),
            "[a-z]{0,8}".prop_map(LiteralValue::String),
        ])
    }

    fn arb_symbol() -> impl Strategy<Value = Option<SymbolOrigin>> {
        proptest::option::of(
            (
                prop_oneof![
                    Just("Map".to_string()),
                    Just("Array".to_string()),
                    Just("Object".to_string()),
                    Just("Widget".to_string()),
                ],
                any::<bool>(),
            )
                .prop_map(|(name, default_library)| SymbolOrigin {
                    name,
                    default_library,
                }),
        )
    }

    fn arb_record() -> impl Strategy<Value = TypeRecord> {
        (
            arb_flags(),
            arb_literal(),
            arb_symbol(),
            0u32..3,
            0u32..3,
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(
                |(
                    flags,
                    literal,
                    symbol,
                    calls,
                    constructs,
                    literal_capability,
                    union_capability,
                    intersection_capability,
                    class_or_interface_capability,
                    array_capability,
                )| TypeRecord {
                    flags,
                    literal,
                    symbol,
                    call_signatures: (0..calls).map(tsvalid_types::SignatureId).collect(),
                    construct_signatures: (0..constructs)
                        .map(tsvalid_types::SignatureId)
                        .collect(),
                    string_index: None,
                    number_index: None,
                    literal_capability,
                    union_capability,
                    intersection_capability,
                    class_or_interface_capability,
                    array_capability,
                },
            )
    }

    fn arb_node() -> impl Strategy<Value = Option<TypeNode>> {
        proptest::option::of(prop_oneof![
            Just(TypeNode::new(SyntaxKind::ArrayType)),
            Just(TypeNode::new(SyntaxKind::TupleType)),
            Just(TypeNode::new(SyntaxKind::UnionType)),
            Just(TypeNode::new(SyntaxKind::IntersectionType)),
            Just(TypeNode::new(SyntaxKind::FunctionType)),
            Just(TypeNode::new(SyntaxKind::TrueKeyword)),
            Just(TypeNode::new(SyntaxKind::FalseKeyword)),
            Just(TypeNode::new(SyntaxKind::ObjectKeyword)),
            Just(TypeNode::new(SyntaxKind::InterfaceDeclaration)),
            Just(TypeNode::literal_type(SyntaxKind::TrueKeyword)),
            Just(TypeNode::literal_type(SyntaxKind::Unknown)),
        ])
    }

    proptest! {
        /// Classification is total and deterministic: every input yields a
        /// kind, and the same input always yields the same kind.
        #[test]
        fn classify_is_total_and_idempotent(record in arb_record(), node in arb_node()) {
            let mut store = TypeStore::new();
            let ty = store.register(record);
            let first = classify(&store, ty, node.as_ref());
            let second = classify(&store, ty, node.as_ref());
            prop_assert_eq!(first, second);
        }

        /// `any`/`unknown` dominate every other signal.
        #[test]
        fn any_and_unknown_dominate(record in arb_record(), node in arb_node()) {
            let mut store = TypeStore::new();
            let mut record = record;
            record.flags |= TypeFlags::ANY;
            let ty = store.register(record);
            prop_assert_eq!(classify(&store, ty, node.as_ref()), DescriptorKind::Any);
        }

        /// A written tuple annotation wins over every non-primitive signal
        /// the record can carry.
        #[test]
        fn tuple_annotation_wins_for_shape_only_records(record in arb_record()) {
            let mut store = TypeStore::new();
            let mut record = record;
            // Restrict to shape signals: no intrinsic or literal flags, no
            // literal payload or capability.
            record.flags &= TypeFlags::OBJECT | TypeFlags::UNION | TypeFlags::INTERSECTION;
            record.literal = None;
            record.literal_capability = None;
            let ty = store.register(record);
            let node = TypeNode::new(SyntaxKind::TupleType);
            prop_assert_eq!(classify(&store, ty, Some(&node)), DescriptorKind::Tuple);
        }
    }
}
