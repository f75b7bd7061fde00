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
    /// Returns whether the empty word is in the language of this term.
    pub fn is_nullable(&self) -> bool {
        use self::TermKind::*;

        // this is the definition of ν(r) in sections 3.1 and 4.2 of Owens et al.
        match self.kind() {
            Empty => false,
            Epsilon => true,
            Symbol(_) => false,
            Concat(first, second) => first.is_nullable() && second.is_nullable(),
            Union(members) => members.iter().any(Term::is_nullable),
            // the empty intersection is the full language
            Intersect(members) => members.iter().all(Term::is_nullable),
            Star(_) => true,
            Complement(inner) => !inner.is_nullable(),
        }
    }
}
