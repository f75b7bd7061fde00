// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Matching words against terms by repeated derivation.
//!
//! The state of a match is nothing more than the simplified derivative of the
//! original term by the symbols consumed so far. The original term is never
//! changed, so one term can drive any number of independent matches.

use std::borrow::Borrow;

use log::trace;

use crate::alphabet::{Alphabet, FiniteAlphabet};
use crate::error::Result;
use crate::term::Term;

/// Returns whether `input` is a word in the language of `term`.
///
/// Every step derives the current term by the next symbol and simplifies the
/// result. The fold stops early once the current term is `Empty` (nothing can
/// match any more) or the full term (everything matches from here on).
pub fn matches<A, I>(term: &Term<A>, input: I) -> bool
where
    A: Alphabet,
    I: IntoIterator,
    I::Item: Borrow<A>,
{
    let mut state = term.simplify();
    for (consumed, symbol) in input.into_iter().enumerate() {
        if state.is_null() {
            trace!("rejecting after {} symbols", consumed);
            return false;
        }
        if state.is_full() {
            trace!("accepting after {} symbols", consumed);
            return true;
        }
        let symbol: &A = symbol.borrow();
        state = state.derivative(symbol).simplify();
        trace!("derived by {:?}: {} nodes", symbol, state.size());
    }
    state.is_nullable()
}

/// A symbol-at-a-time matcher.
///
/// A `Matcher` holds the simplified derivative of its start term by the
/// symbols it has been given. A matcher created with `with_alphabet` enforces
/// a declared finite alphabet on both the start term and the input.
#[derive(Debug, Clone)]
pub struct Matcher<A: Alphabet> {
    start: Term<A>,
    state: Term<A>,
    alphabet: Option<FiniteAlphabet<A>>,
    consumed: usize,
}

impl<A: Alphabet> Matcher<A> {
    /// Create a `Matcher` for `term` over every value of `A`.
    pub fn new(term: &Term<A>) -> Matcher<A> {
        let start = term.simplify();
        Matcher {
            state: start.clone(),
            start,
            alphabet: None,
            consumed: 0,
        }
    }

    /// Create a `Matcher` for `term` over the declared `alphabet`.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutsideAlphabet` if `term` mentions a symbol that
    /// is not part of `alphabet`.
    pub fn with_alphabet(term: &Term<A>, alphabet: FiniteAlphabet<A>) -> Result<Matcher<A>> {
        alphabet.check(term)?;
        let mut matcher = Matcher::new(term);
        matcher.alphabet = Some(alphabet);
        Ok(matcher)
    }

    /// Consume one symbol.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutsideAlphabet` if the matcher has a declared
    /// alphabet that does not contain `symbol`. The state is left unchanged.
    pub fn advance(&mut self, symbol: &A) -> Result<()> {
        if let Some(ref alphabet) = self.alphabet {
            alphabet.check_symbol(symbol)?;
        }

        // ∅ and ¬∅ are their own derivatives
        if !self.state.is_null() && !self.state.is_full() {
            self.state = self.state.derivative(symbol).simplify();
            trace!("derived by {:?}: {} nodes", symbol, self.state.size());
        }
        self.consumed += 1;
        Ok(())
    }

    /// Consume every symbol of `input` and report whether the matcher then
    /// accepts.
    ///
    /// # Errors
    /// Stops at, and returns the error for, the first symbol that `advance`
    /// rejects.
    pub fn accepts<I>(&mut self, input: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        for symbol in input {
            self.advance(symbol.borrow())?;
        }
        Ok(self.is_accepting())
    }

    /// Check if the symbols consumed so far form a word of the language.
    pub fn is_accepting(&self) -> bool {
        self.state.is_nullable()
    }

    /// Check if no continuation of the symbols consumed so far can be
    /// accepted.
    pub fn is_dead(&self) -> bool {
        self.state.is_null()
    }

    /// The current state: the simplified derivative of the start term by the
    /// symbols consumed so far.
    pub fn state(&self) -> &Term<A> {
        &self.state
    }

    /// The number of symbols consumed since creation or the last `reset`.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The declared alphabet, if there is one.
    pub fn alphabet(&self) -> Option<&FiniteAlphabet<A>> {
        self.alphabet.as_ref()
    }

    /// Return to the start term.
    pub fn reset(&mut self) {
        self.state = self.start.clone();
        self.consumed = 0;
    }
}
