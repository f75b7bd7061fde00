// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use crate::alphabet::Alphabet;
use crate::term::{Term, TermKind};

impl<A: Alphabet> Term<A> {
    /// Calculate the Brzozowski derivative of this term with respect to
    /// `symbol`.
    ///
    /// The result denotes `{ w : symbol·w ∈ L(self) }`. It is not simplified;
    /// pass it through `Term::simplify` before deriving again.
    pub fn derivative(&self, symbol: &A) -> Term<A> {
        self.derive_where(&|candidate: &A| candidate == symbol)
    }

    /// Calculate the derivative with respect to any one symbol accepted by
    /// `consumed`.
    ///
    /// This is the derivative for every symbol in the class described by
    /// `consumed` at once. It is only meaningful when all symbols of the class
    /// have the same derivative, which holds for the class of symbols that do
    /// not occur in the term.
    pub(crate) fn derive_where<F>(&self, consumed: &F) -> Term<A>
    where
        F: Fn(&A) -> bool,
    {
        use self::TermKind::*;

        // this is from the rules for computing ∂ for a regular expression in
        // sections 3.1 and 4.2 of Owens et al.
        match self.kind() {
            Empty | Epsilon => Term::empty(),
            Symbol(candidate) if consumed(candidate) => Term::epsilon(),
            Symbol(_) => Term::empty(),
            Concat(first, second) => {
                let consume_first = Term::concat(first.derive_where(consumed), second.clone());
                if first.is_nullable() {
                    Term::union(vec![consume_first, second.derive_where(consumed)])
                } else {
                    Term::union(vec![consume_first])
                }
            }
            Union(members) => Term::union(members.iter().map(|m| m.derive_where(consumed))),
            Intersect(members) => {
                Term::intersect(members.iter().map(|m| m.derive_where(consumed)))
            }
            Star(inner) => Term::concat(inner.derive_where(consumed), self.clone()),
            Complement(inner) => Term::complement(inner.derive_where(consumed)),
        }
    }
}
