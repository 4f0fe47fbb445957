// Character classes used by the template parser and the percent encoder

use super::operator::Operator;

/// Check if a character may appear in a variable name
///
/// `%` is accepted on its own; the two hex digits of a pct-encoded triplet
/// are ordinary name characters and are not validated.
pub fn is_var_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' || ch == '%'
}

/// Check if a character is one of the expression operator symbols: `{+var}`, `{?q}`, ...
pub fn is_operator(ch: char) -> bool {
    Operator::from_symbol(ch).is_some()
}

/// RFC 3986 unreserved: ALPHA / DIGIT / "-" / "." / "_" / "~"
pub fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

/// RFC 3986 reserved: gen-delims / sub-delims
pub fn is_reserved(ch: char) -> bool {
    matches!(
        ch,
        // gen-delims
        ':' | '/' | '?' | '#' | '[' | ']' | '@'
        // sub-delims
        | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}
