// Template parser: single pass state machine over the template characters

use log::debug;

use super::ast::{Expression, Template, TemplatePart, VarSpec};
use super::charspec::is_var_char;
use super::operator::Operator;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    /// Right after `{`
    Expression,
    VarSpec,
    VarSpecExploded,
    VarSpecMaxLength,
}

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    parts: Vec<TemplatePart>,
    buf: String,
    operator: Operator,
    varspecs: Vec<VarSpec>,
    exploded: bool,
    /// `None` until the first digit after `:`
    max_length: Option<usize>,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<Template, ParseError> {
        let mut parser = Self {
            input: template,
            pos: 0,
            state: State::Literal,
            parts: Vec::new(),
            buf: String::new(),
            operator: Operator::Default,
            varspecs: Vec::new(),
            exploded: false,
            max_length: Some(0),
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<Template, ParseError> {
        let input = self.input;
        for (pos, ch) in input.chars().enumerate() {
            self.pos = pos;
            match self.state {
                State::Literal => self.read_literal(ch)?,
                State::Expression => self.read_expression(ch)?,
                State::VarSpec => self.read_varspec(ch)?,
                State::VarSpecExploded => self.read_varspec_exploded(ch)?,
                State::VarSpecMaxLength => self.read_varspec_max_length(ch)?,
            }
        }

        if self.state != State::Literal {
            self.pos = input.chars().count();
            return Err(self.error("unexpected end of URI template"));
        }

        // Flush remaining literal
        self.flush_literal();

        debug!(
            "parsed URI template {:?} into {} parts",
            self.input,
            self.parts.len()
        );
        Ok(Template::new(std::mem::take(&mut self.parts)))
    }

    fn read_literal(&mut self, ch: char) -> Result<(), ParseError> {
        match ch {
            '{' => self.state = State::Expression,
            '}' => return Err(self.error("invalid literal character \"}\"")),
            _ => self.buf.push(ch),
        }
        Ok(())
    }

    fn read_expression(&mut self, ch: char) -> Result<(), ParseError> {
        self.flush_literal();
        self.state = State::VarSpec;

        match Operator::from_symbol(ch) {
            Some(operator) => {
                self.operator = operator;
                Ok(())
            }
            None => {
                // Not an operator: the character starts the first variable name
                self.operator = Operator::Default;
                self.read_varspec(ch)
            }
        }
    }

    fn read_varspec(&mut self, ch: char) -> Result<(), ParseError> {
        if self.try_end_varspec(ch)? {
            return Ok(());
        }

        match ch {
            '*' => self.state = State::VarSpecExploded,
            ':' => {
                self.max_length = None;
                self.state = State::VarSpecMaxLength;
            }
            ch if is_var_char(ch) => self.buf.push(ch),
            _ => return Err(self.error("invalid name of template variable")),
        }
        Ok(())
    }

    fn read_varspec_exploded(&mut self, ch: char) -> Result<(), ParseError> {
        self.exploded = true;

        if self.try_end_varspec(ch)? {
            Ok(())
        } else {
            Err(self.error("invalid URI template modifier"))
        }
    }

    fn read_varspec_max_length(&mut self, ch: char) -> Result<(), ParseError> {
        if let Some(digit) = ch.to_digit(10) {
            let length = self
                .max_length
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or_else(|| self.internal_error("length modifier overflow"))?;
            self.max_length = Some(length);
            Ok(())
        } else if self.try_end_varspec(ch)? {
            Ok(())
        } else {
            Err(self.error("invalid URI template length modifier"))
        }
    }

    /// Close the current varspec on `,` or `}`; returns false for any other character
    fn try_end_varspec(&mut self, ch: char) -> Result<bool, ParseError> {
        if ch != ',' && ch != '}' {
            return Ok(false);
        }

        self.push_varspec()?;

        if ch == '}' {
            let varspecs = std::mem::take(&mut self.varspecs);
            self.parts
                .push(TemplatePart::Expression(Expression::new(self.operator, varspecs)));
            self.state = State::Literal;
        } else {
            self.state = State::VarSpec;
        }
        Ok(true)
    }

    fn push_varspec(&mut self) -> Result<(), ParseError> {
        let max_length = self
            .max_length
            .ok_or_else(|| self.error("invalid URI template modifier"))?;

        if self.buf.is_empty() {
            return Err(self.error("invalid name of template variable"));
        }

        let name = std::mem::take(&mut self.buf);
        self.varspecs.push(
            VarSpec::new(name)
                .with_exploded(self.exploded)
                .with_max_length(max_length),
        );

        self.exploded = false;
        self.max_length = Some(0);
        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.buf.is_empty() {
            let literal = std::mem::take(&mut self.buf);
            self.parts.push(TemplatePart::Literal(literal));
        }
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError::new(message, self.input, self.pos)
    }

    /// Wrap a failure that is not a grammar violation into the parse error shape
    fn internal_error(&self, cause: &str) -> ParseError {
        self.error(&format!("error at parse URI template: {}", cause))
    }
}
