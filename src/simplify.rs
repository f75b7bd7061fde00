// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Canonical form for terms.
//!
//! `Term::simplify` rebuilds a term bottom-up through the smart constructors
//! in this module. Each smart constructor takes children that are already in
//! canonical form and returns a canonical term, so simplifying a canonical
//! term gives back the same term. This is the `≈-canonical` form of section
//! 4.1 of Owens et al., extended with the right association of concatenation.
//!
//! A canonical term satisfies:
//! - no `Concat` has an `Empty` or `Epsilon` factor, and the first factor of a
//!   `Concat` is never itself a `Concat`;
//! - a `Union` has at least two members, none of which is `Empty`, the full
//!   term, or a `Union`;
//! - an `Intersect` has at least two members, none of which is `Empty`, the
//!   full term, or an `Intersect`;
//! - a `Star` never wraps `Empty`, `Epsilon`, a `Star` or the full term;
//! - a `Complement` never wraps a `Complement`.
//!
//! None of the rewrites increase the number of nodes, with one exception: the
//! empty intersection becomes the two node `Complement(Empty)`.

use std::collections::BTreeSet;

use crate::alphabet::Alphabet;
use crate::term::{Term, TermKind};

impl<A: Alphabet> Term<A> {
    /// Rewrite the term into canonical form.
    ///
    /// The result denotes the same language and is a fixed point: simplifying
    /// it again returns an equal term. Unless `self` contains an empty
    /// intersection, the result has no more nodes than `self`.
    pub fn simplify(&self) -> Term<A> {
        use self::TermKind::*;

        match self.kind() {
            Empty | Epsilon | Symbol(_) => self.clone(),
            Concat(first, second) => concat(first.simplify(), second.simplify()),
            Union(members) => union(members.iter().map(Term::simplify)),
            Intersect(members) => intersect(members.iter().map(Term::simplify)),
            Star(inner) => star(inner.simplify()),
            Complement(inner) => complement(inner.simplify()),
        }
    }
}

fn concat<A: Alphabet>(first: Term<A>, second: Term<A>) -> Term<A> {
    // ∅ r = r ∅ = ∅
    if first.is_null() || second.is_null() {
        return Term::empty();
    }
    // ε r = r
    if first.is_epsilon() {
        return second;
    }
    // r ε = r
    if second.is_epsilon() {
        return first;
    }

    // (r s) t = r (s t)
    match first.kind() {
        TermKind::Concat(head, tail) => Term::concat(head.clone(), concat(tail.clone(), second)),
        _ => Term::concat(first, second),
    }
}

fn union<A, I>(members: I) -> Term<A>
where
    A: Alphabet,
    I: IntoIterator<Item = Term<A>>,
{
    let mut set = BTreeSet::new();
    for member in members {
        // ∅ + r = r
        if member.is_null() {
            continue;
        }
        // ¬∅ + r = ¬∅
        if member.is_full() {
            return member;
        }
        // (r + s) + t = r + (s + t)
        if let TermKind::Union(inner) = member.kind() {
            set.extend(inner.iter().cloned());
            continue;
        }
        set.insert(member);
    }

    collapse(set, Term::empty(), Term::union)
}

fn intersect<A, I>(members: I) -> Term<A>
where
    A: Alphabet,
    I: IntoIterator<Item = Term<A>>,
{
    let mut set = BTreeSet::new();
    for member in members {
        // ∅ & r = ∅
        if member.is_null() {
            return member;
        }
        // ¬∅ & r = r
        if member.is_full() {
            continue;
        }
        // (r & s) & t = r & (s & t)
        if let TermKind::Intersect(inner) = member.kind() {
            set.extend(inner.iter().cloned());
            continue;
        }
        set.insert(member);
    }

    collapse(set, Term::full(), Term::intersect)
}

// Build a set operation from its flattened members, replacing the empty and
// singleton cases with the identity and the sole member respectively.
fn collapse<A, F>(set: BTreeSet<Term<A>>, identity: Term<A>, build: F) -> Term<A>
where
    A: Alphabet,
    F: FnOnce(BTreeSet<Term<A>>) -> Term<A>,
{
    if set.len() > 1 {
        build(set)
    } else {
        set.into_iter().next().unwrap_or(identity)
    }
}

fn star<A: Alphabet>(inner: Term<A>) -> Term<A> {
    match inner.kind() {
        // ∅* = ε* = ε
        TermKind::Empty | TermKind::Epsilon => Term::epsilon(),
        // (r*)* = r*
        TermKind::Star(_) => inner,
        // (¬∅)* = ¬∅
        _ if inner.is_full() => inner,
        _ => Term::star(inner),
    }
}

fn complement<A: Alphabet>(inner: Term<A>) -> Term<A> {
    match inner.kind() {
        // ¬¬r = r
        TermKind::Complement(twice) => twice.clone(),
        _ => Term::complement(inner),
    }
}
