// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::alphabet::Alphabet;
use crate::term::{Term, TermKind};

// Characters with a meaning of their own in the textual syntax.
const RESERVED: &[char] = &[
    '(', ')', '|', '&', '*', '+', '?', '{', '}', '~', '¬', 'ε', '∅', '\\',
];

// Binding strength, loosest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Union,
    Intersect,
    Concat,
    Complement,
    Star,
    Atom,
}

impl<A: Alphabet> Term<A> {
    fn precedence(&self) -> Precedence {
        use self::TermKind::*;

        match self.kind() {
            Empty | Epsilon | Symbol(_) => Precedence::Atom,
            Concat(_, _) => Precedence::Concat,
            Union(members) if members.is_empty() => Precedence::Atom,
            Intersect(members) if members.is_empty() => Precedence::Complement,
            Union(members) | Intersect(members) if members.len() == 1 => {
                members.iter().map(Term::precedence).next().unwrap_or(Precedence::Atom)
            }
            Union(_) => Precedence::Union,
            Intersect(_) => Precedence::Intersect,
            Complement(_) => Precedence::Complement,
            Star(_) => Precedence::Star,
        }
    }
}

// A term displayed in a context that binds at least as tightly as `min`.
struct Operand<'a, A: Alphabet> {
    term: &'a Term<A>,
    min: Precedence,
}

fn operand<A: Alphabet>(term: &Term<A>, min: Precedence) -> Operand<A> {
    Operand { term, min }
}

impl<'a, A: Alphabet + Display> Display for Operand<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.term.precedence() < self.min {
            write!(f, "({})", self.term)
        } else {
            write!(f, "{}", self.term)
        }
    }
}

// A symbol that displays as a single reserved or whitespace character is
// escaped with a backslash.
fn write_symbol<S: Display>(f: &mut fmt::Formatter, symbol: &S) -> fmt::Result {
    let text = symbol.to_string();
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if RESERVED.contains(&c) || c.is_whitespace() => write!(f, "\\{}", c),
        _ => f.write_str(&text),
    }
}

/// Write the term in the textual syntax.
///
/// Symbols are written with their own `Display`. A symbol written as a single
/// character that the syntax reserves is escaped with `\`, so the display
/// of a `Term<char>` parses back into an equal term.
impl<A: Alphabet + Display> Display for Term<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::TermKind::*;

        match self.kind() {
            Empty => write!(f, "∅"),
            Epsilon => write!(f, "ε"),
            Symbol(symbol) => write_symbol(f, symbol),
            Concat(first, second) => write!(
                f,
                "{} {}",
                operand(first, Precedence::Complement),
                operand(second, Precedence::Concat)
            ),
            Union(members) if members.is_empty() => write!(f, "∅"),
            Union(members) => write!(
                f,
                "{}",
                members
                    .iter()
                    .map(|m| operand(m, Precedence::Intersect))
                    .format(" | ")
            ),
            Intersect(members) if members.is_empty() => write!(f, "¬∅"),
            Intersect(members) => write!(
                f,
                "{}",
                members
                    .iter()
                    .map(|m| operand(m, Precedence::Concat))
                    .format(" & ")
            ),
            Star(inner) => write!(f, "{}*", operand(inner, Precedence::Star)),
            Complement(inner) => write!(f, "¬{}", operand(inner, Precedence::Complement)),
        }
    }
}
