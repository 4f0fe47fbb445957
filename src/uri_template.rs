// Parse-once URI template with resolve, bind and resolve-to-URI conveniences

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use url::Url;

use crate::domain::template::{Template, TemplateParser, VarLookup, VarSpec};
use crate::error::{Error, InvalidValueTypeError, ParseError, UriError, UriKind};

/// Base used only to check that a relative reference is well formed
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A URI template parsed once and resolved any number of times
///
/// ```
/// use serde_json::json;
/// use uri_templates::UriTemplate;
///
/// let template = UriTemplate::new("http://example.org/{area}/last-news{?type,count}").unwrap();
/// let uri = template
///     .resolve(&json!({"area": "world", "type": "actual", "count": "10"}))
///     .unwrap();
/// assert_eq!(uri, "http://example.org/world/last-news?type=actual&count=10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    text: String,
    template: Template,
}

/// Result of resolving a template as a URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUri {
    Absolute(Url),
    Relative(String),
}

impl ResolvedUri {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedUri::Absolute(url) => url.as_str(),
            ResolvedUri::Relative(reference) => reference,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, ResolvedUri::Absolute(_))
    }
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UriTemplate {
    pub fn new(text: &str) -> Result<Self, ParseError> {
        let template = TemplateParser::parse(text)?;
        Ok(Self {
            text: text.to_string(),
            template,
        })
    }

    /// The template text as given
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed parts
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn variables(&self) -> Vec<&VarSpec> {
        self.template.variables()
    }

    pub fn resolve<L>(&self, vars: &L) -> Result<String, InvalidValueTypeError>
    where
        L: VarLookup + ?Sized,
    {
        self.template.expand(vars)
    }

    /// Resolve and parse the result as an absolute URI
    pub fn resolve_uri<L>(&self, vars: &L) -> Result<Url, Error>
    where
        L: VarLookup + ?Sized,
    {
        let kind = UriKind::Absolute;
        match parse_uri(self.resolve(vars)?, kind)? {
            ResolvedUri::Absolute(url) => Ok(url),
            ResolvedUri::Relative(uri) => Err(UriError::WrongKind { uri, kind }.into()),
        }
    }

    /// Resolve and parse the result as a URI of the given kind
    pub fn resolve_uri_as<L>(&self, kind: UriKind, vars: &L) -> Result<ResolvedUri, Error>
    where
        L: VarLookup + ?Sized,
    {
        let resolved = self.resolve(vars)?;
        Ok(parse_uri(resolved, kind)?)
    }

    /// Start binding variables one at a time
    pub fn binder(&self) -> Binder<'_> {
        Binder {
            template: self,
            vars: HashMap::new(),
        }
    }
}

fn parse_uri(uri: String, kind: UriKind) -> Result<ResolvedUri, UriError> {
    use url::ParseError::RelativeUrlWithoutBase;

    match (Url::parse(&uri), kind) {
        (Ok(url), UriKind::Absolute | UriKind::RelativeOrAbsolute) => {
            Ok(ResolvedUri::Absolute(url))
        }
        (Ok(_), UriKind::Relative) => Err(UriError::WrongKind { uri, kind }),
        (Err(RelativeUrlWithoutBase), UriKind::Relative | UriKind::RelativeOrAbsolute) => {
            let base = Url::parse(RELATIVE_BASE).map_err(|source| UriError::Syntax {
                uri: uri.clone(),
                kind,
                source,
            })?;
            match base.join(&uri) {
                Ok(_) => Ok(ResolvedUri::Relative(uri)),
                Err(source) => Err(UriError::Syntax { uri, kind, source }),
            }
        }
        (Err(RelativeUrlWithoutBase), UriKind::Absolute) => Err(UriError::WrongKind { uri, kind }),
        (Err(source), kind) => Err(UriError::Syntax { uri, kind, source }),
    }
}

impl FromStr for UriTemplate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Accumulates variable values before a single resolve
#[derive(Debug, Clone)]
pub struct Binder<'t> {
    template: &'t UriTemplate,
    vars: HashMap<String, Value>,
}

impl Binder<'_> {
    /// Bind `name`; binding the same name again replaces the earlier value
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn resolve(&self) -> Result<String, InvalidValueTypeError> {
        self.template.resolve(&self.vars)
    }

    pub fn resolve_uri(&self) -> Result<Url, Error> {
        self.template.resolve_uri(&self.vars)
    }

    pub fn resolve_uri_as(&self, kind: UriKind) -> Result<ResolvedUri, Error> {
        self.template.resolve_uri_as(kind, &self.vars)
    }
}
