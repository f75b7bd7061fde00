// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use crate::alphabet::Alphabet;
use crate::term::{Term, TermKind};

/// Iterator to visit the sub-terms of a term.
///
/// The resulting traversal of the term is a post-order, depth-first search:
/// every node is visited after all of its children, and the children of a
/// node are visited from first to last. Shared sub-terms are visited once per
/// occurrence.
pub struct Subterms<'a, A: Alphabet> {
    stack: Vec<(&'a Term<A>, bool)>,
}

impl<A: Alphabet> Term<A> {
    /// Conduct a post-order, depth-first traversal of the term.
    pub fn subterms(&self) -> Subterms<A> {
        Subterms {
            stack: vec![(self, false)],
        }
    }
}

impl<'a, A: Alphabet> Subterms<'a, A> {
    fn push_children(&mut self, term: &'a Term<A>) {
        use crate::term::TermKind::*;

        // pushed last to first so that the first child is on top
        match term.kind() {
            Empty | Epsilon | Symbol(_) => {}
            Concat(first, second) => {
                self.stack.push((second, false));
                self.stack.push((first, false));
            }
            Union(members) | Intersect(members) => {
                self.stack
                    .extend(members.iter().rev().map(|member| (member, false)));
            }
            Star(inner) | Complement(inner) => self.stack.push((inner, false)),
        }
    }
}

impl<'a, A: Alphabet> Iterator for Subterms<'a, A> {
    type Item = &'a Term<A>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((term, expanded)) = self.stack.pop() {
            let is_leaf = matches!(
                term.kind(),
                TermKind::Empty | TermKind::Epsilon | TermKind::Symbol(_)
            );
            if expanded || is_leaf {
                return Some(term);
            }
            self.stack.push((term, true));
            self.push_children(term);
        }
        None
    }
}
