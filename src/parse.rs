//! Parsing objects from roster notation.
//!
//! Grammar:
//!
//! ```text
//! object := set | atom
//! set    := '{' [ object ( ',' object )* ] '}'
//! atom   := one or more characters other than '{', '}' and ','
//! ```
//!
//! Whitespace around tokens is ignored, and atom names are trimmed.
//! Whitespace inside an atom name is kept, so `{hello world}` is a singleton.
//!
//! # Examples
//!
//! ```
//! use settree_rs::object::Object;
//! use settree_rs::parse::parse;
//!
//! let s = parse("{2, 1, {1, 2}, 1}").unwrap();
//! assert_eq!(s.to_string(), "{1, 2, {1, 2}}");
//!
//! let t: Object = "{ {2,1}, 2, 1 }".parse().unwrap();
//! assert_eq!(s, t);
//! ```

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::intern::Interner;
use crate::object::Object;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unexpected end of input with {open} unclosed brace(s)")]
    UnexpectedEnd { open: usize },

    #[error("unexpected character {found:?} at byte {pos}")]
    UnexpectedChar { pos: usize, found: char },

    #[error("missing element at byte {pos}")]
    EmptyAtom { pos: usize },

    #[error("trailing input at byte {pos}")]
    TrailingInput { pos: usize },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Expect {
    /// An element: after `,` or at the very start.
    Value,
    /// An element or `}`: right after `{`.
    ValueOrClose,
    /// A separator or `}`: after an element inside a set.
    CommaOrClose,
}

struct Parser<'a> {
    interner: &'a Interner,
    /// Elements collected so far for each currently open set, innermost last.
    open: Vec<Vec<Object>>,
    expect: Expect,
    result: Option<Object>,
}

impl<'a> Parser<'a> {
    fn new(interner: &'a Interner) -> Self {
        Self {
            interner,
            open: Vec::new(),
            expect: Expect::Value,
            result: None,
        }
    }

    fn complete(&mut self, object: Object) {
        match self.open.last_mut() {
            Some(elements) => {
                elements.push(object);
                self.expect = Expect::CommaOrClose;
            }
            None => self.result = Some(object),
        }
    }

    fn run(mut self, input: &str) -> Result<Object, ParseError> {
        let mut chars = input.char_indices().peekable();

        while let Some(&(pos, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }
            if self.result.is_some() {
                return Err(ParseError::TrailingInput { pos });
            }

            match (self.expect, c) {
                (Expect::Value | Expect::ValueOrClose, '{') => {
                    chars.next();
                    self.open.push(Vec::new());
                    self.expect = Expect::ValueOrClose;
                }
                (Expect::ValueOrClose | Expect::CommaOrClose, '}') => {
                    chars.next();
                    let elements = self.open.pop().unwrap_or_default();
                    let set = self.interner.set(elements);
                    self.complete(set);
                }
                (Expect::CommaOrClose, ',') => {
                    chars.next();
                    self.expect = Expect::Value;
                }
                (Expect::Value | Expect::ValueOrClose, ',' | '}') if !self.open.is_empty() => {
                    return Err(ParseError::EmptyAtom { pos });
                }
                (Expect::Value | Expect::ValueOrClose, c) if !matches!(c, ',' | '}') => {
                    let mut end = pos;
                    while let Some(&(i, c)) = chars.peek() {
                        if matches!(c, '{' | '}' | ',') {
                            break;
                        }
                        end = i + c.len_utf8();
                        chars.next();
                    }
                    let name = input[pos..end].trim_end();
                    let atom = self.interner.atom(name);
                    self.complete(atom);
                }
                (_, found) => return Err(ParseError::UnexpectedChar { pos, found }),
            }
        }

        if !self.open.is_empty() {
            return Err(ParseError::UnexpectedEnd { open: self.open.len() });
        }
        self.result.ok_or(ParseError::Empty)
    }
}

/// Parses an object, sharing equal sub-objects within the result.
pub fn parse(input: &str) -> Result<Object, ParseError> {
    parse_with(&Interner::new(), input)
}

/// Parses an object through the given interner, so that sub-objects are shared
/// with everything else built through it.
pub fn parse_with(interner: &Interner, input: &str) -> Result<Object, ParseError> {
    debug!("parse(input = {:?})", input);
    let result = Parser::new(interner).run(input);
    if let Err(e) = &result {
        debug!("parse: {}", e);
    }
    result
}

impl FromStr for Object {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
