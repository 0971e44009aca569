//! Annotation-node model.
//!
//! When a type position was literally written out (`number[]` as opposed to
//! an inferred array type), the syntax tree supplies a node for it. The
//! classifier only reads the node's syntax kind and, for literal-type
//! wrappers, the kind of the wrapped literal. Nodes are owned by the parsing
//! service; a type position with an inferred type simply has no node.

use serde::Serialize;

/// Syntax kinds the classifier consults.
///
/// `Unknown` absorbs every kind the facade does not model; predicates treat
/// it as "no match" so malformed or unexpected annotations degrade toward
/// the structural-object fallback instead of faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    Unknown,
    ArrayType,
    TupleType,
    UnionType,
    IntersectionType,
    FunctionType,
    ConstructorType,
    TypeReference,
    TypeLiteral,
    LiteralType,
    ObjectKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    UndefinedKeyword,
    VoidKeyword,
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    InterfaceDeclaration,
}

/// A written type annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeNode {
    pub kind: SyntaxKind,
    literal: Option<SyntaxKind>,
}

impl TypeNode {
    pub fn new(kind: SyntaxKind) -> TypeNode {
        TypeNode {
            kind,
            literal: None,
        }
    }

    /// A literal-type wrapper node (`true`, `42` or `'a'` used as a type)
    /// around a literal with its own syntax kind.
    pub fn literal_type(literal: SyntaxKind) -> TypeNode {
        TypeNode {
            kind: SyntaxKind::LiteralType,
            literal: Some(literal),
        }
    }

    /// The wrapped literal's kind, for `LiteralType` nodes only.
    pub fn literal_kind(&self) -> Option<SyntaxKind> {
        if self.kind == SyntaxKind::LiteralType {
            self.literal
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kind_only_for_literal_type_nodes() {
        let node = TypeNode::literal_type(SyntaxKind::TrueKeyword);
        assert_eq!(node.kind, SyntaxKind::LiteralType);
        assert_eq!(node.literal_kind(), Some(SyntaxKind::TrueKeyword));

        let plain = TypeNode::new(SyntaxKind::ArrayType);
        assert_eq!(plain.literal_kind(), None);
    }
}
