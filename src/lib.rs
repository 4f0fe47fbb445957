//! RFC 6570 URI Templates.
//!
//! A template such as `http://example.com{/paths*}{?q1,q2}{#f*}` is parsed
//! once into literal and expression parts, then expanded against variable
//! values any number of times. Values are [`serde_json::Value`]s: strings,
//! arrays of strings, and objects with string values. Missing, null and empty
//! values are left out of the expansion; any other value shape is an error.
//!
//! ```
//! use serde_json::json;
//! use uri_templates::UriTemplate;
//!
//! let template = UriTemplate::new("http://example.com{/paths*}{?q1,q2}{#f*}").unwrap();
//! let uri = template
//!     .resolve(&json!({
//!         "paths": ["foo", "bar"],
//!         "q1": "abc",
//!         "f": {"key1": "val1", "key2": null}
//!     }))
//!     .unwrap();
//! assert_eq!(uri, "http://example.com/foo/bar?q1=abc#key1=val1,key2=");
//! ```

pub mod config;
pub mod domain;
mod error;
mod uri_template;

pub use config::{Route, RouteSettings, RouteTable};
pub use domain::template::{Template, TemplateParser, VarLookup};
pub use error::{Error, InvalidValueTypeError, ParseError, UriError, UriKind};
pub use uri_template::{Binder, ResolvedUri, UriTemplate};

/// Parse template text into its parts
pub fn parse(text: &str) -> Result<Template, ParseError> {
    TemplateParser::parse(text)
}
