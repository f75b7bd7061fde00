// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Operators and derived forms for building terms.
//!
//! Everything here builds raw terms out of the primitive variants. Nothing
//! is simplified.

use std::ops::{Add, BitAnd, BitOr, Not};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::term::{Term, DEPTH_LIMIT};

impl<A: Alphabet> BitOr for Term<A> {
    type Output = Term<A>;

    fn bitor(self, rhs: Term<A>) -> Term<A> {
        Term::union(vec![self, rhs])
    }
}

impl<A: Alphabet> BitAnd for Term<A> {
    type Output = Term<A>;

    fn bitand(self, rhs: Term<A>) -> Term<A> {
        Term::intersect(vec![self, rhs])
    }
}

impl<A: Alphabet> Not for Term<A> {
    type Output = Term<A>;

    fn not(self) -> Term<A> {
        Term::complement(self)
    }
}

impl<A: Alphabet> Add for Term<A> {
    type Output = Term<A>;

    fn add(self, rhs: Term<A>) -> Term<A> {
        Term::concat(self, rhs)
    }
}

impl<A: Alphabet> Term<A> {
    /// One or more repetitions of this term: `r r*`.
    pub fn plus(&self) -> Term<A> {
        Term::concat(self.clone(), Term::star(self.clone()))
    }

    /// Zero or one repetitions of this term: `r | ε`.
    pub fn optional(&self) -> Term<A> {
        Term::union(vec![self.clone(), Term::epsilon()])
    }

    /// Between `min` and `max` repetitions of this term, or at least `min`
    /// repetitions if `max` is `None`.
    ///
    /// `r{2,4}` is built as `r r (r r?)?` and `r{2,}` as `r r r*`. A `max`
    /// that is less than `min` gives `Empty`.
    ///
    /// # Errors
    /// Returns `Error::DepthLimitExceeded` if the repetition could be nested
    /// deeper than `DEPTH_LIMIT`. Nothing is built in that case.
    pub fn repeat(&self, min: usize, max: Option<usize>) -> Result<Term<A>> {
        // every mandatory copy adds a Concat, every optional one a Concat and a Union
        let nesting = match max {
            None => min.saturating_add(1),
            Some(max) if max < min => return Ok(Term::empty()),
            Some(max) => min.saturating_add((max - min).saturating_mul(2)),
        };
        let depth = self.depth().saturating_add(nesting);
        if depth > DEPTH_LIMIT {
            return Err(Error::DepthLimitExceeded(depth));
        }

        let tail = match max {
            None => Term::star(self.clone()),
            Some(max) => (min..max).fold(Term::epsilon(), |tail, _| {
                prepend(self.clone(), tail).optional()
            }),
        };

        Ok((0..min).fold(tail, |tail, _| prepend(self.clone(), tail)))
    }
}

fn prepend<A: Alphabet>(head: Term<A>, tail: Term<A>) -> Term<A> {
    if tail.is_epsilon() {
        head
    } else {
        Term::concat(head, tail)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matcher::matches;
    use crate::term::TermKind;
    use crate::testutils::{TestAlpha, TestAlpha::*};

    fn sym(a: TestAlpha) -> Term<TestAlpha> {
        Term::symbol(a)
    }

    fn a_times(n: usize) -> Vec<TestAlpha> {
        vec![A; n]
    }

    #[test]
    fn bitor_builds_union() {
        let sut = sym(A) | sym(B);

        assert_eq!(sut, Term::union(vec![sym(A), sym(B)]));
    }

    #[test]
    fn bitand_builds_intersect() {
        let sut = sym(A) & sym(B);

        assert_eq!(sut, Term::intersect(vec![sym(A), sym(B)]));
    }

    #[test]
    fn not_builds_complement() {
        let sut = !sym(A);

        assert_eq!(sut, Term::complement(sym(A)));
    }

    #[test]
    fn add_builds_concat() {
        let sut = sym(A) + sym(B);

        assert_matches!(sut.kind(), TermKind::Concat(first, second) => {
            assert_eq!(first, &sym(A));
            assert_eq!(second, &sym(B));
        });
    }

    #[test]
    fn plus_needs_at_least_one() {
        let sut = sym(A).plus();

        assert!(!matches(&sut, a_times(0)));
        assert!(matches(&sut, a_times(1)));
        assert!(matches(&sut, a_times(5)));
    }

    #[test]
    fn optional_allows_zero_or_one() {
        let sut = sym(A).optional();

        assert!(matches(&sut, a_times(0)));
        assert!(matches(&sut, a_times(1)));
        assert!(!matches(&sut, a_times(2)));
    }

    #[test]
    fn repeat_bounded_accepts_counts_in_range() {
        let sut = sym(A).repeat(2, Some(4)).unwrap();

        for n in 0..7 {
            assert_eq!(matches(&sut, a_times(n)), n >= 2 && n <= 4, "n = {}", n);
        }
    }

    #[test]
    fn repeat_exact_accepts_only_that_count() {
        let sut = sym(A).repeat(3, Some(3)).unwrap();

        for n in 0..6 {
            assert_eq!(matches(&sut, a_times(n)), n == 3, "n = {}", n);
        }
    }

    #[test]
    fn repeat_unbounded_accepts_at_least_min() {
        let sut = sym(A).repeat(2, None).unwrap();

        for n in 0..6 {
            assert_eq!(matches(&sut, a_times(n)), n >= 2, "n = {}", n);
        }
    }

    #[test]
    fn repeat_zero_times_is_epsilon() {
        assert!(sym(A).repeat(0, Some(0)).unwrap().is_epsilon());
    }

    #[test]
    fn repeat_with_max_below_min_is_empty() {
        assert!(sym(A).repeat(3, Some(1)).unwrap().is_null());
    }

    #[test]
    fn repeat_exact_is_right_associated_concat() {
        let sut = sym(A).repeat(2, Some(2));

        assert_eq!(sut, Ok(sym(A) + sym(A)));
    }

    #[test]
    fn repeat_stays_within_depth_limit() {
        let exact = sym(A).repeat(DEPTH_LIMIT - 1, Some(DEPTH_LIMIT - 1)).unwrap();
        let bounded = sym(A).repeat(10, Some(400)).unwrap();
        let unbounded = sym(A).repeat(DEPTH_LIMIT - 2, None).unwrap();

        assert!(exact.depth() <= DEPTH_LIMIT);
        assert!(bounded.depth() <= DEPTH_LIMIT);
        assert!(unbounded.depth() <= DEPTH_LIMIT);
    }

    #[test]
    fn repeat_beyond_depth_limit_fails() {
        assert_matches!(
            sym(A).repeat(DEPTH_LIMIT, Some(DEPTH_LIMIT)),
            Err(Error::DepthLimitExceeded(_))
        );
        assert_matches!(
            sym(A).repeat(4_000_000_000, None),
            Err(Error::DepthLimitExceeded(_))
        );
        assert_matches!(
            sym(A).repeat(0, Some(usize::max_value())),
            Err(Error::DepthLimitExceeded(_))
        );
    }

    #[test]
    fn repeat_at_depth_limit_is_matched() {
        let sut = sym(A).repeat(DEPTH_LIMIT - 1, Some(DEPTH_LIMIT - 1)).unwrap();

        assert!(matches(&sut, a_times(DEPTH_LIMIT - 1)));
        assert!(!matches(&sut, a_times(DEPTH_LIMIT - 2)));
    }
}
