// Global safety caps to prevent pathological or infinite loops

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Parser: maximum iterations for any guarded loop or overall passes
pub const PARSER_MAX_LOOP_ITERS: usize = 200_000;
// Parser: upper bound on tokens skipped during a single recovery walk
pub const PARSER_MAX_SYNC_STEPS: usize = 200_000;

// Primitive type names, usable wherever a reference type name is expected
pub const PRIMITIVE_TYPE_NAMES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float", "double", "void",
];

/// Reserved words of the input language. Initialized once at startup and
/// never mutated; consulted when a reserved word shows up in identifier
/// position so the diagnostic can say so instead of a generic mismatch.
pub static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "package", "import", "class", "interface", "enum", "extends",
        "implements", "public", "protected", "private", "static", "final",
        "abstract", "throws", "new", "return", "for", "if", "else", "while",
        "this", "super", "true", "false", "null", "void", "boolean", "byte",
        "short", "int", "long", "char", "float", "double",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_cover_primitives() {
        for name in PRIMITIVE_TYPE_NAMES {
            assert!(RESERVED_WORDS.contains(name), "{} missing", name);
        }
    }
}
