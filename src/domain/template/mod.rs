// Template module for RFC 6570 URI templates
//
// This module provides parsing of template text into literal and expression
// parts, and expansion of those parts against variable values.

mod ast;
mod charspec;
mod encoding;
mod operator;
mod parser;
mod resolver;
mod value;

pub use ast::{Expression, Template, TemplatePart, VarSpec};
pub use charspec::{is_operator, is_var_char};
pub use encoding::EncodePolicy;
pub use operator::{Operator, OperatorSpec};
pub use parser::TemplateParser;
pub use value::{coerce, VarLookup, VarValue};
