// Percent-encoding of expanded values

use std::borrow::Cow;

use super::charspec::{is_reserved, is_unreserved};

/// Which characters an expansion may emit unescaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodePolicy {
    /// Only unreserved characters pass through
    Unreserved,
    /// Unreserved, reserved and `%` pass through
    AllowReserved,
}

impl EncodePolicy {
    pub fn for_reserved(allow_reserved: bool) -> Self {
        if allow_reserved {
            EncodePolicy::AllowReserved
        } else {
            EncodePolicy::Unreserved
        }
    }

    /// Percent-encode `value`, uppercase hex over the UTF-8 bytes
    pub fn encode<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            EncodePolicy::Unreserved => urlencoding::encode(value),
            EncodePolicy::AllowReserved => encode_allow_reserved(value),
        }
    }
}

fn encode_allow_reserved(value: &str) -> Cow<'_, str> {
    let passes = |ch: char| is_unreserved(ch) || is_reserved(ch) || ch == '%';
    if value.chars().all(passes) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() * 3);
    let mut utf8 = [0u8; 4];
    for ch in value.chars() {
        if passes(ch) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut utf8)));
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_policy() {
        let policy = EncodePolicy::Unreserved;
        assert_eq!(policy.encode("hello world"), "hello%20world");
        assert_eq!(policy.encode("foo/bar"), "foo%2Fbar");
        assert_eq!(policy.encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(policy.encode("50%"), "50%25");
        assert_eq!(policy.encode("Hello World!"), "Hello%20World%21");
    }

    #[test]
    fn test_unicode_is_encoded_bytewise_uppercase() {
        assert_eq!(EncodePolicy::Unreserved.encode("é"), "%C3%A9");
        assert_eq!(EncodePolicy::AllowReserved.encode("é/"), "%C3%A9/");
    }

    #[test]
    fn test_allow_reserved_policy() {
        let policy = EncodePolicy::AllowReserved;
        assert_eq!(policy.encode("/foo/bar"), "/foo/bar");
        assert_eq!(policy.encode("Hello World!"), "Hello%20World!");
        assert_eq!(policy.encode("?q=1&r=[2]#x"), "?q=1&r=[2]#x");
        assert_eq!(policy.encode("50%25"), "50%25");
        assert_eq!(policy.encode("a<b>"), "a%3Cb%3E");
    }

    #[test]
    fn test_borrows_when_nothing_to_encode() {
        assert!(matches!(
            EncodePolicy::AllowReserved.encode("/plain"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_for_reserved() {
        assert_eq!(EncodePolicy::for_reserved(true), EncodePolicy::AllowReserved);
        assert_eq!(EncodePolicy::for_reserved(false), EncodePolicy::Unreserved);
    }
}
