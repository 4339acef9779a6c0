//! Shared string utilities for code generation.

/// Convert a protobuf identifier to its Go declaration name.
///
/// Follows the protoc-gen-go rules: a leading underscore becomes `X`, an
/// underscore or dot followed by a lowercase letter is dropped and the letter
/// upper-cased, digits are kept, and every other word start is upper-cased.
/// Non-ASCII characters are copied unchanged.
///
/// ```
/// use protojson_core::to_go_camel_case;
///
/// assert_eq!(to_go_camel_case("foo_bar"), "FooBar");
/// assert_eq!(to_go_camel_case("_private"), "XPrivate");
/// ```
pub fn to_go_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    let mut chars = s.chars().peekable();

    if chars.next_if_eq(&'_').is_some() {
        out.push('X');
    }

    while let Some(c) = chars.next() {
        let next_is_lower = chars.peek().is_some_and(char::is_ascii_lowercase);

        if (c == '_' || c == '.') && next_is_lower {
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            continue;
        }

        // Start of a word: upper-case it, then copy the lowercase run.
        out.push(c.to_ascii_uppercase());
        while let Some(lower) = chars.next_if(char::is_ascii_lowercase) {
            out.push(lower);
        }
    }

    out
}

/// Strip the directory-less extension from a proto file name.
///
/// `a/b/c.proto` -> `a/b/c`; names without an extension are returned as-is.
pub fn file_stem(name: &str) -> &str {
    let base_start = name.rfind('/').map_or(0, |i| i + 1);
    match name[base_start..].rfind('.') {
        Some(dot) if dot > 0 => &name[..base_start + dot],
        _ => name,
    }
}
