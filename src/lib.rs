// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for matching extended regular expressions with Brzozowski
//! derivatives.
//!
//! This library implements the derivative calculus described in Scott Owens
//! et al., _Regular Expression Derivatives Reexamined_. A regular expression
//! is a `Term`. Matching a word folds the derivative of the term over the
//! symbols of the word, simplifying after every step, and asks whether the
//! final term is nullable. No backtracking is involved and no automaton is
//! built along the way; each distinct simplified term is implicitly a state.
//!
//! The operator set is the one from Owens et al.: the classical Brzozowski
//! operators plus intersection and complement.
//!
//! ```
//! use rederiv::{matches, Term};
//!
//! // a b*
//! let term = Term::concat(Term::symbol('a'), Term::star(Term::symbol('b')));
//!
//! assert!(matches(&term, "abb".chars()));
//! assert!(!matches(&term, "ba".chars()));
//! ```
//!
//! The four operations `nullable`, `derive`, `simplify` and `matches` are
//! pure and total. The only failures are caller contract violations that the
//! drivers in `matcher` and `dfa` detect at their boundaries.

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate proptest;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod alphabet;
pub mod dfa;
pub mod matcher;
pub mod term;

mod derivative;
mod display;
mod error;
mod nullable;
mod ops;
mod simplify;
mod traverse;

#[cfg(test)]
mod testutils;

use std::borrow::Borrow;

pub use alphabet::{Alphabet, FiniteAlphabet};
pub use dfa::Dfa;
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use term::{Term, TermKind, TermSet, DEPTH_LIMIT};
pub use traverse::Subterms;

/// Returns whether the empty word is in the language of `term`.
pub fn nullable<A: Alphabet>(term: &Term<A>) -> bool {
    term.is_nullable()
}

/// Returns the (unsimplified) derivative of `term` with respect to `symbol`.
pub fn derive<A: Alphabet>(symbol: &A, term: &Term<A>) -> Term<A> {
    term.derivative(symbol)
}

/// Returns the canonical form of `term`.
pub fn simplify<A: Alphabet>(term: &Term<A>) -> Term<A> {
    term.simplify()
}

/// Returns whether `input` is a word in the language of `term`.
pub fn matches<A, I>(term: &Term<A>, input: I) -> bool
where
    A: Alphabet,
    I: IntoIterator,
    I::Item: Borrow<A>,
{
    matcher::matches(term, input)
}
