// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The utility types in this module are used to support tests in more than
// one other module.

use std::fmt;

use proptest::prelude::*;

use crate::alphabet::Alphabet;
use crate::term::Term;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TestAlpha {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for TestAlpha {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A symbol from the two letter alphabet {A, B}.
pub fn arb_symbol() -> impl Strategy<Value = TestAlpha> {
    prop_oneof![Just(TestAlpha::A), Just(TestAlpha::B)]
}

/// A word over {A, B} of at most `max_len` symbols.
pub fn arb_word(max_len: usize) -> impl Strategy<Value = Vec<TestAlpha>> {
    prop::collection::vec(arb_symbol(), 0..=max_len)
}

/// A raw (unsimplified) term over {A, B}.
///
/// Unions and intersections always have at least one member.
pub fn arb_term() -> impl Strategy<Value = Term<TestAlpha>> {
    let leaf = prop_oneof![
        Just(Term::<TestAlpha>::empty()),
        Just(Term::<TestAlpha>::epsilon()),
        arb_symbol().prop_map(Term::symbol),
    ];

    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(first, second)| Term::concat(first, second)),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Term::union),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Term::intersect),
            inner.clone().prop_map(Term::star),
            inner.prop_map(Term::complement),
        ]
    })
}

/// Decide membership of `word` in the language of `term` by trying every way
/// of splitting the word.
///
/// This follows the set semantics of each operator directly and shares no
/// code with the derivative engine.
pub fn naive_matches<S: Alphabet>(term: &Term<S>, word: &[S]) -> bool {
    use crate::term::TermKind::*;

    let splits = |first: &Term<S>, second: &Term<S>, min: usize| {
        (min..=word.len())
            .any(|i| naive_matches(first, &word[..i]) && naive_matches(second, &word[i..]))
    };

    match term.kind() {
        Empty => false,
        Epsilon => word.is_empty(),
        Symbol(symbol) => word.len() == 1 && word[0] == *symbol,
        Concat(first, second) => splits(first, second, 0),
        Union(members) => members.iter().any(|m| naive_matches(m, word)),
        Intersect(members) => members.iter().all(|m| naive_matches(m, word)),
        // the first iteration must consume at least one symbol
        Star(inner) => word.is_empty() || splits(inner, term, 1),
        Complement(inner) => !naive_matches(inner, word),
    }
}
