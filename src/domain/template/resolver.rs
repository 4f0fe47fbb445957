// Template expansion: parsed parts + variable values -> string

use log::debug;

use super::ast::{Expression, Template, TemplatePart, VarSpec};
use super::encoding::EncodePolicy;
use super::operator::OperatorSpec;
use super::value::{coerce, VarLookup, VarValue};
use crate::error::InvalidValueTypeError;

impl Template {
    /// Expand the template with values from `vars`
    ///
    /// Missing, null and empty values are not errors: the variable is simply
    /// left out. Fails only when a value has a shape that cannot be expanded.
    pub fn expand<L>(&self, vars: &L) -> Result<String, InvalidValueTypeError>
    where
        L: VarLookup + ?Sized,
    {
        let mut result = String::new();

        if self.is_literal() {
            for part in &self.parts {
                if let TemplatePart::Literal(s) = part {
                    result.push_str(s);
                }
            }
            return Ok(result);
        }

        let mut omitted = 0;

        for part in &self.parts {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Expression(expr) => {
                    if !expand_expression(expr, vars, &mut result)? {
                        omitted += 1;
                    }
                }
            }
        }

        debug!(
            "expanded {} parts ({} expressions omitted) into {:?}",
            self.parts.len(),
            omitted,
            result
        );
        Ok(result)
    }
}

/// Append one expression; returns false when every variable was undefined
fn expand_expression<L>(
    expr: &Expression,
    vars: &L,
    out: &mut String,
) -> Result<bool, InvalidValueTypeError>
where
    L: VarLookup + ?Sized,
{
    let spec = expr.operator.spec();
    let policy = EncodePolicy::for_reserved(spec.allow_reserved);

    // Coerce everything first so a bad value fails the whole expansion
    let mut defined = Vec::with_capacity(expr.varspecs.len());
    for varspec in &expr.varspecs {
        let value = coerce(&varspec.name, vars.lookup(&varspec.name))?;
        if !value.is_undefined() {
            defined.push((varspec, value));
        }
    }

    if defined.is_empty() {
        return Ok(false);
    }

    out.push_str(spec.prefix);
    for (i, (varspec, value)) in defined.iter().enumerate() {
        if i > 0 {
            out.push_str(spec.separator);
        }
        render_varspec(varspec, value, &spec, policy, out);
    }
    Ok(true)
}

fn render_varspec(
    varspec: &VarSpec,
    value: &VarValue<'_>,
    spec: &OperatorSpec,
    policy: EncodePolicy,
    out: &mut String,
) {
    let name = varspec.name.as_str();

    match value {
        VarValue::Absent => {}
        VarValue::Text(text) => {
            let text = truncate(text, varspec.max_length);
            push_field(name, &policy.encode(text), spec, out);
        }
        VarValue::List(items) if varspec.exploded => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(spec.separator);
                }
                push_field(name, &policy.encode(item.unwrap_or_default()), spec, out);
            }
        }
        VarValue::List(items) => {
            let joined = items
                .iter()
                .map(|item| policy.encode(item.unwrap_or_default()))
                .collect::<Vec<_>>()
                .join(",");
            push_field(name, &joined, spec, out);
        }
        VarValue::Assoc(pairs) if varspec.exploded => {
            // Each pair names itself; the variable name is not emitted
            for (i, (key, val)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(spec.separator);
                }
                out.push_str(&policy.encode(key));
                out.push('=');
                out.push_str(&policy.encode(val.unwrap_or_default()));
            }
        }
        VarValue::Assoc(pairs) => {
            let joined = pairs
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{},{}",
                        policy.encode(key),
                        policy.encode(val.unwrap_or_default())
                    )
                })
                .collect::<Vec<_>>()
                .join(",");
            if spec.named {
                out.push_str(name);
                out.push('=');
            }
            out.push_str(&joined);
        }
    }
}

/// Write an already encoded field, as `name=value` for named operators
fn push_field(name: &str, encoded: &str, spec: &OperatorSpec, out: &mut String) {
    if spec.named {
        out.push_str(name);
        if encoded.is_empty() {
            out.push_str(spec.if_empty);
            return;
        }
        out.push('=');
    }
    out.push_str(encoded);
}

/// First `max_length` characters of `text`; 0 keeps everything
fn truncate(text: &str, max_length: usize) -> &str {
    if max_length == 0 {
        return text;
    }
    match text.char_indices().nth(max_length) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
