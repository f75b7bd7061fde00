// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;
use rederiv::{Term, DEPTH_LIMIT};

use crate::error::{Error, Result};

// The deepest nesting of groups and complements the parser recurses into.
const NEST_LIMIT: usize = 250;

// The largest term, in nodes, that a parse may produce.
const SIZE_LIMIT: usize = 100_000;

/// Parse `input` into a `Term`.
///
/// This is a shorthand for `Parser::new(input).parse()`.
pub fn parse(input: &str) -> Result<Term<char>> {
    Parser::new(input).parse()
}

/// A recursive descent parser for regular expressions.
///
/// The grammar, loosest binding first, is:
///
/// ```text
/// union   := inter ('|' inter)*
/// inter   := seq ('&' seq)*
/// seq     := prefix*
/// prefix  := ('~' | '¬') prefix | postfix
/// postfix := atom ('*' | '+' | '?' | '{' n '}' | '{' n ',' '}' | '{' n ',' m '}')*
/// atom    := '(' union ')' | 'ε' | '∅' | '\' char | literal
/// ```
///
/// Whitespace between tokens is ignored; an escaped space is a literal. An
/// empty sequence is `ε` and a sequence of several factors is a
/// right-associated concatenation.
///
/// Input that would nest more than 250 groups or complements, build a term
/// deeper than `rederiv::DEPTH_LIMIT` or build a term of more than 100,000
/// nodes is rejected.
pub struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    nest: usize,
}

impl<'a> Parser<'a> {
    /// Create a new `Parser` for `input`.
    pub fn new(input: &'a str) -> Parser<'a> {
        Parser {
            input,
            chars: input.char_indices().peekable(),
            nest: 0,
        }
    }

    /// Parse the whole input into a `Term`.
    ///
    /// The result is the raw term the input describes; it is not simplified.
    pub fn parse(mut self) -> Result<Term<char>> {
        let term = self.union()?;
        match self.peek() {
            None => {
                trace!("parsed \"{}\" into {} nodes", self.input, term.size());
                Ok(term)
            }
            Some((offset, ')')) => Err(self.error(offset, "unbalanced parenthesis")),
            Some((offset, _)) => Err(self.error(offset, "unexpected character")),
        }
    }

    fn union(&mut self) -> Result<Term<char>> {
        let start = self.offset();
        let mut members = vec![self.inter()?];
        while self.eat('|') {
            members.push(self.inter()?);
        }
        self.bounded(start, collect(members, Term::union))
    }

    fn inter(&mut self) -> Result<Term<char>> {
        let start = self.offset();
        let mut members = vec![self.seq()?];
        while self.eat('&') {
            members.push(self.seq()?);
        }
        self.bounded(start, collect(members, Term::intersect))
    }

    fn seq(&mut self) -> Result<Term<char>> {
        let start = self.offset();
        let mut factors = Vec::new();
        while let Some((_, c)) = self.peek() {
            match c {
                '|' | '&' | ')' => break,
                _ => factors.push(self.prefix()?),
            }
        }

        let mut factors = factors.into_iter().rev();
        let last = match factors.next() {
            Some(last) => last,
            None => return Ok(Term::epsilon()),
        };
        factors.try_fold(last, |tail, head| self.bounded(start, Term::concat(head, tail)))
    }

    fn prefix(&mut self) -> Result<Term<char>> {
        let start = self.offset();
        if self.eat('~') || self.eat('¬') {
            let inner = self.nested(start, Self::prefix)?;
            self.bounded(start, Term::complement(inner))
        } else {
            self.postfix()
        }
    }

    fn postfix(&mut self) -> Result<Term<char>> {
        let start = self.offset();
        let mut term = self.atom()?;
        loop {
            term = if self.eat('*') {
                Term::star(term)
            } else if self.eat('+') {
                term.plus()
            } else if self.eat('?') {
                term.optional()
            } else if let Some((offset, '{')) = self.peek() {
                self.bump();
                let (min, max) = self.bounds(offset)?;
                term.repeat(min, max)
                    .map_err(|_| self.error(offset, "repetition count is too large"))?
            } else {
                return Ok(term);
            };
            term = self.bounded(start, term)?;
        }
    }

    // the opening brace at `start` has already been consumed
    fn bounds(&mut self, start: usize) -> Result<(usize, Option<usize>)> {
        let min = self.number()?;
        let max = if self.eat(',') {
            match self.peek() {
                Some((_, '}')) => None,
                _ => Some(self.number()?),
            }
        } else {
            Some(min)
        };
        self.expect('}')?;

        match max {
            Some(max) if max < min => {
                Err(self.error(start, "repetition minimum exceeds maximum"))
            }
            _ => Ok((min, max)),
        }
    }

    fn number(&mut self) -> Result<usize> {
        let start = match self.peek() {
            Some((offset, c)) if c.is_ascii_digit() => offset,
            Some((offset, _)) => return Err(self.error(offset, "expected a repetition count")),
            None => return Err(self.error(self.input.len(), "unexpected end")),
        };

        let mut value: usize = 0;
        while let Some(&(_, c)) = self.chars.peek() {
            let digit = match c.to_digit(10) {
                Some(digit) => digit as usize,
                None => break,
            };
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| self.error(start, "repetition count is too large"))?;
            self.chars.next();
        }
        Ok(value)
    }

    fn atom(&mut self) -> Result<Term<char>> {
        let (offset, c) = match self.bump() {
            Some(next) => next,
            None => return Err(self.error(self.input.len(), "unexpected end")),
        };

        match c {
            '(' => {
                let inner = self.nested(offset, Self::union)?;
                match self.bump() {
                    Some((_, ')')) => Ok(inner),
                    _ => Err(self.error(offset, "unbalanced parenthesis")),
                }
            }
            ')' => Err(self.error(offset, "unbalanced parenthesis")),
            '*' | '+' | '?' | '{' => Err(self.error(offset, "nothing to repeat")),
            'ε' => Ok(Term::epsilon()),
            '∅' => Ok(Term::empty()),
            '\\' => match self.chars.next() {
                Some((_, escaped)) => Ok(Term::symbol(escaped)),
                None => Err(self.error(offset, "dangling escape")),
            },
            literal => Ok(Term::symbol(literal)),
        }
    }

    // Parse with `parse` one level of nesting deeper.
    fn nested<F>(&mut self, offset: usize, parse: F) -> Result<Term<char>>
    where
        F: FnOnce(&mut Self) -> Result<Term<char>>,
    {
        if self.nest >= NEST_LIMIT {
            return Err(self.error(offset, "nesting too deep"));
        }
        self.nest += 1;
        let result = parse(self);
        self.nest -= 1;
        result
    }

    fn bounded(&self, offset: usize, term: Term<char>) -> Result<Term<char>> {
        if term.depth() > DEPTH_LIMIT {
            Err(self.error(offset, "nesting too deep"))
        } else if term.size() > SIZE_LIMIT {
            Err(self.error(offset, "expression is too large"))
        } else {
            Ok(term)
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.bump();
                Ok(())
            }
            Some((offset, _)) => Err(self.error(offset, "unexpected character")),
            None => Err(self.error(self.input.len(), "unexpected end")),
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.peek();
        self.chars.next()
    }

    // the next character that is not whitespace
    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
        self.chars.peek().cloned()
    }

    fn offset(&mut self) -> usize {
        match self.peek() {
            Some((offset, _)) => offset,
            None => self.input.len(),
        }
    }

    fn error(&self, offset: usize, message: &'static str) -> Error {
        Error::new(self.input, offset, message)
    }
}

fn collect<F>(mut members: Vec<Term<char>>, build: F) -> Term<char>
where
    F: FnOnce(Vec<Term<char>>) -> Term<char>,
{
    if members.len() == 1 {
        members.remove(0)
    } else {
        build(members)
    }
}
