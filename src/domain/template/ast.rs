// Abstract Syntax Tree types for URI templates

use std::fmt;

use super::operator::Operator;

/// Represents a parsed template as a list of parts
///
/// A template is immutable once parsed and may be expanded any number of
/// times, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Get all variable specifications in this template, in template order
    pub fn variables(&self) -> Vec<&VarSpec> {
        self.expressions()
            .flat_map(|expr| expr.varspecs.iter())
            .collect()
    }

    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Expression(expr) => Some(expr),
            _ => None,
        })
    }

    /// True when the template has no expressions at all
    pub fn is_literal(&self) -> bool {
        self.expressions().next().is_none()
    }
}

/// A template consists of literal strings and expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Expression(Expression),
}

/// One `{...}` block: an operator and at least one variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: Operator,
    pub varspecs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator, varspecs: Vec<VarSpec>) -> Self {
        Self { operator, varspecs }
    }
}

/// A variable reference with its optional modifier
///
/// `exploded` and a non-zero `max_length` never occur together; the parser
/// accepts only one modifier per variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub exploded: bool,
    /// Prefix length from `:N`; 0 means no truncation
    pub max_length: usize,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exploded: false,
            max_length: 0,
        }
    }

    pub fn with_exploded(mut self, exploded: bool) -> Self {
        self.exploded = exploded;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl fmt::Display for VarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.exploded {
            f.write_str("*")?;
        } else if self.max_length > 0 {
            write!(f, ":{}", self.max_length)?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.operator)?;
        for (i, varspec) in self.varspecs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", varspec)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                TemplatePart::Literal(s) => f.write_str(s)?,
                TemplatePart::Expression(expr) => write!(f, "{}", expr)?,
            }
        }
        Ok(())
    }
}
