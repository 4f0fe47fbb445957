// Common test utilities shared across test files

use serde_json::{json, Value};
use uri_templates::UriTemplate;

/// Variables used by the examples in RFC 6570, section 3.2
#[allow(dead_code)]
pub fn rfc_variables() -> Value {
    json!({
        "count": ["one", "two", "three"],
        "dom": ["example", "com"],
        "dub": "me/too",
        "hello": "Hello World!",
        "half": "50%",
        "var": "value",
        "who": "fred",
        "base": "http://example.com/home/",
        "path": "/foo/bar",
        "list": ["red", "green", "blue"],
        "keys": {"semi": ";", "dot": ".", "comma": ","},
        "v": "6",
        "x": "1024",
        "y": "768",
        "empty": "",
        "empty_keys": [],
        "undef": null
    })
}

/// Expand `template` with `vars`, panicking on any error
#[allow(dead_code)]
pub fn expand(template: &str, vars: &Value) -> String {
    UriTemplate::new(template)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", template, e))
        .resolve(vars)
        .unwrap_or_else(|e| panic!("Failed to expand {}: {}", template, e))
}

/// Check every `(template, expected)` pair against the RFC variables
#[allow(dead_code)]
pub fn assert_rfc_expansions(cases: &[(&str, &str)]) {
    let vars = rfc_variables();
    for (template, expected) in cases {
        assert_eq!(&expand(template, &vars), expected, "template {}", template);
    }
}
