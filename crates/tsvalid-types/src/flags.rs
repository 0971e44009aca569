//! Type metadata flags.
//!
//! The external type-checking service attaches a set of intrinsic-kind tags
//! to every type it hands out. Any subset of tags may be present on the same
//! type (a literal boolean carries both `BOOLEAN_LITERAL` and, on some
//! service revisions, `UNION`), so the set is modeled as a `bitflags` value
//! with set semantics rather than a single discriminant. The classifier only
//! ever reads these; it never constructs types of its own.

use bitflags::bitflags;

bitflags! {
    /// Intrinsic-kind tags reported by the type-checking service.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIG_INT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const BIG_INT_LITERAL = 1 << 10;
        const ES_SYMBOL = 1 << 11;
        const VOID = 1 << 12;
        const UNDEFINED = 1 << 13;
        const NULL = 1 << 14;
        const NEVER = 1 << 15;
        const OBJECT = 1 << 16;
        const UNION = 1 << 17;
        const INTERSECTION = 1 << 18;

        /// Composite tag covering the literal kinds. Bigint literals carry
        /// their own tag on every service revision and are not part of this
        /// set, which is why literal detection has to consult both.
        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_composite_excludes_bigint_literal() {
        assert!(TypeFlags::LITERAL.contains(TypeFlags::STRING_LITERAL));
        assert!(TypeFlags::LITERAL.contains(TypeFlags::NUMBER_LITERAL));
        assert!(TypeFlags::LITERAL.contains(TypeFlags::BOOLEAN_LITERAL));
        assert!(!TypeFlags::LITERAL.contains(TypeFlags::BIG_INT_LITERAL));
    }

    #[test]
    fn test_flags_are_a_set() {
        let flags = TypeFlags::BOOLEAN | TypeFlags::UNION;
        assert!(flags.contains(TypeFlags::BOOLEAN));
        assert!(flags.contains(TypeFlags::UNION));
        assert!(!flags.contains(TypeFlags::STRING));
    }
}
