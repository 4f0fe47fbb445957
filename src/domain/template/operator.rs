// Expression operators and their expansion behavior

use std::fmt;

/// Operator of a `{...}` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// `{var}` simple string expansion
    #[default]
    Default,
    /// `{+var}` reserved expansion
    Reserved,
    /// `{#var}` fragment expansion
    Fragment,
    /// `{.var}` label expansion with dot-prefix
    Label,
    /// `{/var}` path segment expansion
    PathSegment,
    /// `{;var}` path-style parameter expansion
    PathParameter,
    /// `{?var}` form-style query expansion
    Query,
    /// `{&var}` form-style query continuation
    QueryContinuation,
}

/// Expansion behavior of one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Emitted once before the first defined variable
    pub prefix: &'static str,
    /// Joins the rendered variables of an expression
    pub separator: &'static str,
    /// Variables render as `name=value`
    pub named: bool,
    /// Appended to the name when a named value is empty
    pub if_empty: &'static str,
    /// Reserved characters pass through unescaped
    pub allow_reserved: bool,
}

const fn spec(
    prefix: &'static str,
    separator: &'static str,
    named: bool,
    if_empty: &'static str,
    allow_reserved: bool,
) -> OperatorSpec {
    OperatorSpec {
        prefix,
        separator,
        named,
        if_empty,
        allow_reserved,
    }
}

impl Operator {
    /// Map an operator symbol to its operator, `None` for anything else
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    /// The symbol that selects this operator, `None` for the default
    pub fn symbol(self) -> Option<char> {
        match self {
            Operator::Default => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParameter => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    pub fn spec(self) -> OperatorSpec {
        match self {
            Operator::Default => spec("", ",", false, "", false),
            Operator::Reserved => spec("", ",", false, "", true),
            Operator::Fragment => spec("#", ",", false, "", true),
            Operator::Label => spec(".", ".", false, "", false),
            Operator::PathSegment => spec("/", "/", false, "", false),
            Operator::PathParameter => spec(";", ";", true, "", false),
            Operator::Query => spec("?", "&", true, "=", false),
            Operator::QueryContinuation => spec("&", "&", true, "=", false),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(ch) => write!(f, "{}", ch),
            None => Ok(()),
        }
    }
}
