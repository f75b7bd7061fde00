// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate assert_matches;

use std::thread;

use rederiv::dfa::equivalent;
use rederiv::{matches, Dfa, Error, FiniteAlphabet, Matcher, Term, DEPTH_LIMIT};

lazy_static! {
    // (a|b)*
    static ref SIGMA_STAR: Term<char> = Term::star(sym('a') | sym('b'));

    // (a|b)* & ¬(a a)
    static ref NOT_EXACTLY_AA: Term<char> =
        SIGMA_STAR.clone() & !(sym('a') + sym('a'));

    // (a|b)* & ¬((a|b)* a a (a|b)*)
    static ref NO_AA_SUBSTRING: Term<char> = SIGMA_STAR.clone()
        & !(SIGMA_STAR.clone() + (sym('a') + (sym('a') + SIGMA_STAR.clone())));
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sym(c: char) -> Term<char> {
    Term::symbol(c)
}

fn accepts(term: &Term<char>, word: &str) -> bool {
    matches(term, word.chars())
}

#[test]
fn symbol_followed_by_star() {
    init_logging();
    let sut = Term::concat(sym('a'), Term::star(sym('b')));

    assert!(accepts(&sut, "a"));
    assert!(accepts(&sut, "abb"));
    assert!(!accepts(&sut, ""));
    assert!(!accepts(&sut, "b"));
}

#[test]
fn complement_of_exact_word_rejects_only_that_word() {
    init_logging();
    let sut = &*NOT_EXACTLY_AA;

    assert!(accepts(sut, "ab"));
    assert!(accepts(sut, ""));
    assert!(!accepts(sut, "aa"));
    assert!(accepts(sut, "aab"));
    assert!(!accepts(sut, "ac"));
}

#[test]
fn complement_of_substring_rejects_every_word_containing_it() {
    init_logging();
    let sut = &*NO_AA_SUBSTRING;

    assert!(accepts(sut, "ab"));
    assert!(accepts(sut, "babab"));
    assert!(!accepts(sut, "aab"));
    assert!(!accepts(sut, "baab"));
    assert!(!accepts(sut, "aa"));
}

#[test]
fn union_of_symbols_matches_single_symbol_only() {
    init_logging();
    let sut = Term::union(vec![sym('a'), sym('b')]);

    assert!(accepts(&sut, "a"));
    assert!(accepts(&sut, "b"));
    assert!(!accepts(&sut, "ab"));
}

#[test]
fn epsilon_matches_only_empty_word() {
    init_logging();
    let sut = Term::<char>::epsilon();

    assert!(accepts(&sut, ""));
    assert!(!accepts(&sut, "a"));
}

#[test]
fn star_of_empty_matches_only_empty_word() {
    let sut = Term::<char>::star(Term::empty());

    assert!(accepts(&sut, ""));
    assert!(!accepts(&sut, "a"));
}

#[test]
fn double_complement_matches_like_original() {
    let sut = !!NO_AA_SUBSTRING.clone();

    for word in FiniteAlphabet::new(vec!['a', 'b']).words(6) {
        assert_eq!(
            matches(&sut, &word),
            matches(&*NO_AA_SUBSTRING, &word),
            "word = {:?}",
            word
        );
    }
}

#[test]
fn term_size_stays_bounded_over_long_input() {
    init_logging();
    // (a|b)* a (a|b) (a|b) (a|b) | no "aa" substring
    let sigma = sym('a') | sym('b');
    let term = (SIGMA_STAR.clone() + (sym('a') + sigma.repeat(3, Some(3)).unwrap()))
        | NO_AA_SUBSTRING.clone();
    let mut sut = Matcher::new(&term);
    let mut seed: u32 = 0x2545_f491;
    let mut largest = 0;

    for _ in 0..10_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let symbol = if seed & 1 == 0 { 'a' } else { 'b' };

        sut.advance(&symbol).unwrap();
        largest = largest.max(sut.state().size());
    }

    assert_eq!(sut.consumed(), 10_000);
    assert!(largest < 256, "largest term had {} nodes", largest);
}

#[test]
fn term_size_stays_bounded_for_nested_stars() {
    // ((a b*)* a*)*
    let term = Term::star(
        Term::star(sym('a') + Term::star(sym('b'))) + Term::star(sym('a')),
    );
    let mut sut = Matcher::new(&term);
    let mut largest = 0;

    for i in 0..10_000 {
        let symbol = if i % 3 == 2 { 'b' } else { 'a' };
        sut.advance(&symbol).unwrap();
        largest = largest.max(sut.state().size());
    }

    assert!(sut.is_accepting());
    assert!(largest < 256, "largest term had {} nodes", largest);
}

#[test]
fn repetition_at_depth_limit_is_matched() {
    init_logging();
    let n = DEPTH_LIMIT - 1;
    let sut = sym('a').repeat(n, Some(n)).unwrap();

    assert!(matches(&sut, vec!['a'; n]));
    assert!(!matches(&sut, vec!['a'; n + 1]));
    assert!(!matches(&sut, vec!['a'; n - 1]));
}

#[test]
fn repetition_beyond_depth_limit_is_refused() {
    let result = sym('a').repeat(8_000, Some(8_000));

    assert_matches!(result, Err(Error::DepthLimitExceeded(depth)) => {
        assert!(depth > DEPTH_LIMIT);
    });
}

#[test]
fn matcher_with_finite_alphabet_rejects_foreign_symbols() {
    let alphabet = FiniteAlphabet::new(vec!['a', 'b']);
    let mut sut = Matcher::with_alphabet(&*NO_AA_SUBSTRING, alphabet).unwrap();

    assert_matches!(sut.accepts("abc".chars()), Err(Error::SymbolOutsideAlphabet(ref s)) => {
        assert_eq!(s, "'c'");
    });
}

#[test]
fn complement_is_symbolic_without_declared_alphabet() {
    let sut = !sym('a');

    assert!(accepts(&sut, "c"));
}

#[test]
fn shared_term_is_matched_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let term = NO_AA_SUBSTRING.clone();
            thread::spawn(move || {
                let word: String = "ab".repeat(n + 1);
                matches(&term, word.chars())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn dfa_agrees_with_matcher_on_fixtures() {
    init_logging();
    let words = FiniteAlphabet::new(vec!['a', 'b']).words(5);

    for &term in &[&*SIGMA_STAR, &*NOT_EXACTLY_AA, &*NO_AA_SUBSTRING] {
        let sut = Dfa::new(term).unwrap();
        for word in &words {
            assert_eq!(sut.matches(word), matches(term, word), "{} on {:?}", term, word);
        }
    }
}

#[test]
fn fixtures_are_distinct_languages() {
    assert_matches!(equivalent(&*NOT_EXACTLY_AA, &*NO_AA_SUBSTRING), Ok(false));
    assert_matches!(equivalent(&*NO_AA_SUBSTRING, &!!NO_AA_SUBSTRING.clone()), Ok(true));
}

#[test]
fn display_shows_fixture_structure() {
    let sut = Term::concat(sym('a'), Term::star(sym('b')));

    assert_eq!(sut.to_string(), "a b*");
    assert_eq!(sut.simplify().to_string(), "a b*");
}
