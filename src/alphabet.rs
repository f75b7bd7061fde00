// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Alphabets for regular expressions.
//!
//! Any type that is `Ord + Clone + Hash + Debug` can serve as the symbols of a
//! `Term`. Without further information the complement of a term is taken with
//! respect to every value of that type. A `FiniteAlphabet` declares a finite
//! subset instead; drivers that are given one reject terms and input symbols
//! outside of it.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::error::{Error, Result};
use crate::term::{Term, TermKind};

/// Required functionality for the symbols of a regular expression.
///
/// Equality is what the derivative needs. The total order and the hash give
/// the canonical ordering of union and intersection members.
pub trait Alphabet: Ord + Clone + Hash + Debug {}

impl<A> Alphabet for A where A: Ord + Clone + Hash + Debug {}

/// A declared, finite set of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteAlphabet<A: Alphabet> {
    symbols: BTreeSet<A>,
}

impl<A: Alphabet> FiniteAlphabet<A> {
    /// Create a `FiniteAlphabet` from its symbols.
    pub fn new<I>(symbols: I) -> FiniteAlphabet<A>
    where
        I: IntoIterator<Item = A>,
    {
        FiniteAlphabet {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Check if `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: &A) -> bool {
        self.symbols.contains(symbol)
    }

    /// Iterate over the symbols in increasing order.
    pub fn symbols(&self) -> impl Iterator<Item = &A> {
        self.symbols.iter()
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check that every symbol mentioned by `term` is part of the alphabet.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutsideAlphabet` for the first offending symbol
    /// found in a post-order walk of `term`.
    pub fn check(&self, term: &Term<A>) -> Result<()> {
        for sub in term.subterms() {
            if let TermKind::Symbol(symbol) = sub.kind() {
                self.check_symbol(symbol)?;
            }
        }
        Ok(())
    }

    pub(crate) fn check_symbol(&self, symbol: &A) -> Result<()> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(Error::SymbolOutsideAlphabet(format!("{:?}", symbol)))
        }
    }

    /// Every word over the alphabet of length at most `max_len`.
    ///
    /// The words are ordered by length and then lexicographically, starting
    /// with the empty word.
    pub fn words(&self, max_len: usize) -> Vec<Vec<A>> {
        let mut words = vec![Vec::new()];
        let mut frontier = 0;
        for _ in 0..max_len {
            let end = words.len();
            for i in frontier..end {
                for symbol in &self.symbols {
                    let mut word = words[i].clone();
                    word.push(symbol.clone());
                    words.push(word);
                }
            }
            frontier = end;
        }
        words
    }
}

impl<A: Alphabet> FromIterator<A> for FiniteAlphabet<A> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = A>,
    {
        FiniteAlphabet::new(iter)
    }
}
