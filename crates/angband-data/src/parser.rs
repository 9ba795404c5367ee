//! Schema-driven line parser for `keyword:field:field...` data files.
//!
//! Each directive is registered with a schema such as
//! `"N int index str name"` and a handler. Parsing a line splits off the
//! keyword, tokenizes the remaining fields according to the schema, and
//! hands the typed values to the handler along with the parser's state.

use std::collections::HashMap;

use angband_types::Random;

use crate::dice;
use crate::error::{ParseError, ParseErrorKind, RegError};

/// The type of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    Uint,
    Sym,
    Str,
    Char,
    Rand,
}

impl FieldType {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "int" => Self::Int,
            "uint" => Self::Uint,
            "sym" => Self::Sym,
            "str" => Self::Str,
            "char" => Self::Char,
            "rand" => Self::Rand,
            _ => return None,
        })
    }

    fn convert(self, token: &str) -> Result<FieldValue, ParseErrorKind> {
        match self {
            Self::Int => token
                .trim()
                .parse()
                .map(FieldValue::Int)
                .map_err(|_| ParseErrorKind::NotNumber),
            Self::Uint => token
                .trim()
                .parse()
                .map(FieldValue::Uint)
                .map_err(|_| ParseErrorKind::NotNumber),
            Self::Sym => Ok(FieldValue::Sym(token.to_string())),
            Self::Str => Ok(FieldValue::Str(token.to_string())),
            Self::Char => token
                .chars()
                .next()
                .map(FieldValue::Char)
                .ok_or(ParseErrorKind::MissingField),
            Self::Rand => dice::parse_random(token)
                .map(FieldValue::Rand)
                .ok_or(ParseErrorKind::NotRandom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    name: String,
    ty: FieldType,
    optional: bool,
}

/// A directive keyword and the fields that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    directive: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn parse(text: &str) -> Result<Self, RegError> {
        let mut words = text.split_whitespace();
        let directive = words.next().ok_or(RegError::Empty)?.to_string();
        let mut fields: Vec<FieldSpec> = Vec::new();

        while let Some(ty_word) = words.next() {
            let (optional, ty_name) = match ty_word.strip_prefix('?') {
                Some(rest) => (true, rest),
                None => (false, ty_word),
            };
            let ty = FieldType::from_name(ty_name).ok_or_else(|| RegError::UnknownType {
                ty: ty_name.to_string(),
            })?;
            let name = words.next().ok_or_else(|| RegError::MissingName {
                ty: ty_name.to_string(),
            })?;

            if let Some(prev) = fields.last() {
                if prev.ty == FieldType::Str {
                    return Err(RegError::FieldAfterStr { field: name.into() });
                }
                if prev.optional && !optional {
                    return Err(RegError::RequiredAfterOptional { field: name.into() });
                }
            }
            fields.push(FieldSpec {
                name: name.to_string(),
                ty,
                optional,
            });
        }

        Ok(Self { directive, fields })
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i32),
    Uint(u32),
    Sym(String),
    Str(String),
    Char(char),
    Rand(Random),
}

/// The fields of one parsed line, looked up by schema name.
#[derive(Debug)]
pub struct Fields<'s> {
    schema: &'s Schema,
    values: Vec<Option<FieldValue>>,
}

impl Fields<'_> {
    /// Whether an optional field was present on the line.
    pub fn has(&self, name: &str) -> bool {
        self.schema
            .position(name)
            .and_then(|i| self.values.get(i))
            .is_some_and(Option::is_some)
    }

    fn value(&self, name: &str) -> Result<&FieldValue, ParseError> {
        let i = self.schema.position(name).ok_or_else(|| {
            ParseError::internal(format!("{} has no field {name}", self.schema.directive))
        })?;
        self.values
            .get(i)
            .and_then(Option::as_ref)
            .ok_or_else(|| ParseError::internal(format!("field {name} is absent")))
    }

    fn mismatch(&self, name: &str, wanted: &str) -> ParseError {
        ParseError::internal(format!("field {name} is not {wanted}"))
    }

    pub fn get_int(&self, name: &str) -> Result<i32, ParseError> {
        match self.value(name)? {
            FieldValue::Int(v) => Ok(*v),
            _ => Err(self.mismatch(name, "an int")),
        }
    }

    pub fn get_uint(&self, name: &str) -> Result<u32, ParseError> {
        match self.value(name)? {
            FieldValue::Uint(v) => Ok(*v),
            _ => Err(self.mismatch(name, "a uint")),
        }
    }

    pub fn get_sym(&self, name: &str) -> Result<&str, ParseError> {
        match self.value(name)? {
            FieldValue::Sym(v) => Ok(v),
            _ => Err(self.mismatch(name, "a sym")),
        }
    }

    pub fn get_str(&self, name: &str) -> Result<&str, ParseError> {
        match self.value(name)? {
            FieldValue::Str(v) => Ok(v),
            _ => Err(self.mismatch(name, "a str")),
        }
    }

    pub fn get_char(&self, name: &str) -> Result<char, ParseError> {
        match self.value(name)? {
            FieldValue::Char(v) => Ok(*v),
            _ => Err(self.mismatch(name, "a char")),
        }
    }

    pub fn get_rand(&self, name: &str) -> Result<Random, ParseError> {
        match self.value(name)? {
            FieldValue::Rand(v) => Ok(*v),
            _ => Err(self.mismatch(name, "a rand")),
        }
    }

    /// An optional `sym` field, `None` when absent.
    pub fn opt_sym(&self, name: &str) -> Result<Option<&str>, ParseError> {
        if self.has(name) {
            self.get_sym(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// An optional `str` field, `None` when absent.
    pub fn opt_str(&self, name: &str) -> Result<Option<&str>, ParseError> {
        if self.has(name) {
            self.get_str(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// An optional `rand` field, `None` when absent.
    pub fn opt_rand(&self, name: &str) -> Result<Option<Random>, ParseError> {
        if self.has(name) {
            self.get_rand(name).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// A directive handler: mutates the parser state from one line's fields.
pub type Handler<S> = fn(&mut S, &Fields<'_>) -> Result<(), ParseError>;

struct Directive<S> {
    schema: Schema,
    handler: Handler<S>,
}

/// Where a failure happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub line: usize,
    pub col: usize,
    pub kind: ParseErrorKind,
    pub msg: String,
}

/// A line parser owning its state and its directive table.
pub struct Parser<S> {
    state: S,
    directives: HashMap<String, Directive<S>>,
    lineno: usize,
    colno: usize,
    errors: Vec<ErrorState>,
}

impl<S> Parser<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            directives: HashMap::new(),
            lineno: 0,
            colno: 0,
            errors: Vec::new(),
        }
    }

    /// Register a directive. A later registration of the same keyword
    /// replaces the earlier one.
    pub fn reg(&mut self, schema: &str, handler: Handler<S>) -> Result<(), RegError> {
        let schema = Schema::parse(schema)?;
        self.directives
            .insert(schema.directive.clone(), Directive { schema, handler });
        Ok(())
    }

    /// Parse one line. Blank lines and `#` comments are skipped but still
    /// counted.
    pub fn parse(&mut self, line: &str) -> Result<(), ParseError> {
        self.lineno += 1;
        self.colno = 0;

        let line = line.trim_end_matches(['\r', '\n']);
        let content = line.trim_start();
        if content.is_empty() || content.starts_with('#') {
            return Ok(());
        }

        let (keyword, rest) = line.split_once(':').unwrap_or((line, ""));
        let result = match self.directives.get(keyword) {
            None => Err((
                1,
                ParseError::new(ParseErrorKind::UndefinedDirective, keyword),
            )),
            Some(directive) => tokenize(&directive.schema, rest).and_then(|values| {
                let consumed = values.len();
                let fields = Fields {
                    schema: &directive.schema,
                    values,
                };
                (directive.handler)(&mut self.state, &fields).map_err(|e| (consumed + 1, e))
            }),
        };

        match result {
            Ok(()) => {
                log::trace!("line {}: {keyword}", self.lineno);
                Ok(())
            }
            Err((col, e)) => {
                self.colno = col;
                self.errors.push(ErrorState {
                    line: self.lineno,
                    col,
                    kind: e.kind,
                    msg: e.msg.clone(),
                });
                Err(e)
            }
        }
    }

    /// Parse every line of `text`, stopping at the first failure.
    pub fn parse_str(&mut self, text: &str) -> Result<(), ParseError> {
        text.lines().try_for_each(|line| self.parse(line))
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Number of lines fed to the parser so far.
    pub fn line(&self) -> usize {
        self.lineno
    }

    /// Column of the last failure: 1 is the keyword, 2 the first field.
    pub fn col(&self) -> usize {
        self.colno
    }

    /// The most recent failure.
    pub fn error(&self) -> Option<&ErrorState> {
        self.errors.last()
    }

    /// Every failure so far, oldest first.
    pub fn errors(&self) -> &[ErrorState] {
        &self.errors
    }
}

/// Split the text after the keyword into values per `schema`.
fn tokenize(
    schema: &Schema,
    mut rest: &str,
) -> Result<Vec<Option<FieldValue>>, (usize, ParseError)> {
    let mut values = Vec::with_capacity(schema.fields.len());

    for (i, spec) in schema.fields.iter().enumerate() {
        let col = i + 2;
        let token = match spec.ty {
            FieldType::Str => take_rest(&mut rest),
            FieldType::Char => take_char(&mut rest),
            _ => take_token(&mut rest),
        };
        let Some(token) = token else {
            if spec.optional {
                values.push(None);
                continue;
            }
            return Err((
                col,
                ParseError::new(ParseErrorKind::MissingField, spec.name.as_str()),
            ));
        };
        let value = spec
            .ty
            .convert(token)
            .map_err(|kind| (col, ParseError::new(kind, spec.name.as_str())))?;
        values.push(Some(value));
    }

    Ok(values)
}

/// Next `:`-delimited token. Runs of separators are skipped.
fn take_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let text = rest.trim_start_matches(':');
    if text.is_empty() {
        *rest = text;
        return None;
    }
    let (token, after) = text.split_once(':').unwrap_or((text, ""));
    *rest = after;
    Some(token)
}

/// Exactly one character, which may itself be `:`.
fn take_char<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let c = rest.chars().next()?;
    let (token, after) = rest.split_at(c.len_utf8());
    *rest = after.strip_prefix(':').unwrap_or(after);
    Some(token)
}

/// Everything left on the line, separators included.
fn take_rest<'a>(rest: &mut &'a str) -> Option<&'a str> {
    if rest.is_empty() {
        return None;
    }
    let token = *rest;
    *rest = "";
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Seen {
        ints: Vec<i32>,
        text: Vec<String>,
        chars: Vec<char>,
        rands: Vec<Random>,
        optional_present: Option<bool>,
    }

    fn take_ints(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.ints.push(f.get_int("i0")?);
        s.ints.push(f.get_int("i1")?);
        Ok(())
    }

    fn take_str(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.text.push(f.get_str("s")?.to_string());
        Ok(())
    }

    fn take_chars(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.chars.push(f.get_char("c0")?);
        s.ints.push(f.get_int("i0")?);
        s.chars.push(f.get_char("c1")?);
        s.text.push(f.get_str("s")?.to_string());
        Ok(())
    }

    fn take_rand(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.rands.push(f.get_rand("r")?);
        Ok(())
    }

    fn take_optional(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.optional_present = Some(f.has("extra"));
        s.text.push(f.get_sym("name")?.to_string());
        if let Some(extra) = f.opt_sym("extra")? {
            s.text.push(extra.to_string());
        }
        Ok(())
    }

    fn take_uint(s: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        s.ints.push(f.get_uint("u")? as i32);
        Ok(())
    }

    fn wrong_accessor(_: &mut Seen, f: &Fields<'_>) -> Result<(), ParseError> {
        f.get_str("i0").map(|_| ())
    }

    fn parser() -> Parser<Seen> {
        let mut p = Parser::new(Seen::default());
        p.reg("test-ints int i0 int i1", take_ints).unwrap();
        p.reg("test-str str s", take_str).unwrap();
        p.reg("test-char char c0 int i0 char c1 str s", take_chars).unwrap();
        p.reg("test-rand rand r", take_rand).unwrap();
        p.reg("test-opt sym name ?sym extra", take_optional).unwrap();
        p.reg("test-uint uint u", take_uint).unwrap();
        p.reg("test-wrong int i0", wrong_accessor).unwrap();
        p
    }

    #[test]
    fn bad_schemas_are_rejected() {
        let mut p = Parser::new(Seen::default());
        assert_eq!(p.reg("", take_str), Err(RegError::Empty));
        assert_eq!(p.reg(" ", take_str), Err(RegError::Empty));
        assert!(matches!(p.reg("abc int", take_str), Err(RegError::MissingName { .. })));
        assert!(matches!(
            p.reg("abc notype name", take_str),
            Err(RegError::UnknownType { .. })
        ));
        assert!(matches!(
            p.reg("abc int a ?int b int c", take_str),
            Err(RegError::RequiredAfterOptional { .. })
        ));
        assert!(matches!(
            p.reg("abc str foo int bar", take_str),
            Err(RegError::FieldAfterStr { .. })
        ));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let mut p = parser();
        assert!(p.parse("").is_ok());
        assert!(p.parse("   ").is_ok());
        assert!(p.parse("# a comment").is_ok());
        assert!(p.parse("   # indented comment").is_ok());
        assert_eq!(p.line(), 4);
        assert!(p.state().ints.is_empty());
    }

    #[test]
    fn ints() {
        let mut p = parser();
        p.parse("test-ints:42:-7").unwrap();
        assert_eq!(p.state().ints, vec![42, -7]);
    }

    #[test]
    fn missing_field_reports_position() {
        let mut p = parser();
        p.parse("").unwrap();
        let e = p.parse("test-ints").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::MissingField);
        let state = p.error().unwrap();
        assert_eq!(state.line, 2);
        assert_eq!(state.col, 2);
        assert_eq!(state.msg, "i0");
    }

    #[test]
    fn second_field_missing_is_column_three() {
        let mut p = parser();
        p.parse("test-ints:1").unwrap_err();
        assert_eq!(p.col(), 3);
    }

    #[test]
    fn not_a_number() {
        let mut p = parser();
        let e = p.parse("test-ints:a:1").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::NotNumber);
        assert_eq!(p.col(), 2);
        let e = p.parse("test-ints::test").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::NotNumber);
    }

    #[test]
    fn negative_uint_is_not_a_number() {
        let mut p = parser();
        let e = p.parse("test-uint:-2").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::NotNumber);
        p.parse("test-uint:2").unwrap();
        assert_eq!(p.state().ints, vec![2]);
    }

    #[test]
    fn undefined_directive() {
        let mut p = parser();
        let e = p.parse("nosuch:1:2").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::UndefinedDirective);
        assert_eq!(e.msg, "nosuch");
        assert_eq!(p.col(), 1);
    }

    #[test]
    fn str_takes_rest_of_line() {
        let mut p = parser();
        p.parse("test-str:foo:bar:baz quxx...").unwrap();
        assert_eq!(p.state().text, vec!["foo:bar:baz quxx..."]);
    }

    #[test]
    fn char_may_be_a_separator() {
        let mut p = parser();
        p.parse("test-char:::34:::lala").unwrap();
        assert_eq!(p.state().chars, vec![':', ':']);
        assert_eq!(p.state().ints, vec![34]);
        assert_eq!(p.state().text, vec!["lala"]);
    }

    #[test]
    fn char_accepts_unicode() {
        let mut p = parser();
        p.parse("test-char:♣:1:é:text").unwrap();
        assert_eq!(p.state().chars, vec!['♣', 'é']);
    }

    #[test]
    fn rand_fields() {
        let mut p = parser();
        p.parse("test-rand:2d3").unwrap();
        p.parse("test-rand:5+2d10M50").unwrap();
        assert_eq!(
            p.state().rands,
            vec![Random::new(0, 2, 3, 0), Random::new(5, 2, 10, 50)]
        );
        let e = p.parse("test-rand:1d6+1d10").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::NotRandom);
    }

    #[test]
    fn optional_fields() {
        let mut p = parser();
        p.parse("test-opt:foo").unwrap();
        assert_eq!(p.state().optional_present, Some(false));
        p.parse("test-opt:foo:bar").unwrap();
        assert_eq!(p.state().optional_present, Some(true));
        assert_eq!(p.state().text, vec!["foo", "foo", "bar"]);
    }

    #[test]
    fn surplus_fields_are_ignored() {
        let mut p = parser();
        p.parse("test-ints:1:2:3").unwrap();
        assert_eq!(p.state().ints, vec![1, 2]);
    }

    #[test]
    fn accessor_misuse_is_internal() {
        let mut p = parser();
        let e = p.parse("test-wrong:1").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::Internal);
    }

    #[test]
    fn failures_are_logged_in_order() {
        let mut p = parser();
        p.parse("bogus:1").unwrap_err();
        p.parse("test-ints:5:6").unwrap();
        p.parse("test-ints:x:1").unwrap_err();
        let log: Vec<_> = p
            .errors()
            .iter()
            .map(|e| (e.line, e.col, e.kind))
            .collect();
        assert_eq!(
            log,
            [
                (1, 1, ParseErrorKind::UndefinedDirective),
                (3, 2, ParseErrorKind::NotNumber),
            ]
        );
        assert_eq!(p.error().unwrap().line, 3);
    }

    #[test]
    fn crlf_line_endings() {
        let mut p = parser();
        p.parse("test-str:hello\r").unwrap();
        assert_eq!(p.state().text, vec!["hello"]);
    }

    #[test]
    fn reregistering_replaces() {
        let mut p = parser();
        p.reg("test-ints int i0 int i1 int i2", take_ints).unwrap();
        p.parse("test-ints:1:2").unwrap_err();
        assert_eq!(p.error().unwrap().kind, ParseErrorKind::MissingField);
    }
}
