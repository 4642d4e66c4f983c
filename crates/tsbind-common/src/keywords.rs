//! Reserved words of the generated C# surface.
//!
//! Declaration member and parameter names are free-form JavaScript
//! identifiers; anything that collides with a C# keyword is emitted as a
//! verbatim identifier (`@name`). The original name is still used for the
//! dynamic lookup on the foreign object.

/// C# reserved keywords (contextual keywords are valid identifiers and are
/// not listed).
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Turn a declaration name into a usable C# identifier.
pub fn sanitize_name(name: &str) -> String {
    if is_reserved_keyword(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}
