// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Regular expression terms.
//!
//! The types in this module provide a representation of the extended regular
//! expressions of Owens et al. The key types are `Term<A>`, `TermKind<A>` and
//! `TermSet<A>`.
//!
//! A `Term<A>` is an immutable, cheaply clonable handle to a `TermKind<A>`
//! node. Sub-terms are shared rather than copied, and nothing ever mutates a
//! node once it is built, so a term can be read from several threads at once.
//!
//! The constructors on `Term<A>` are raw: they build exactly the node that is
//! asked for. The canonical form is the job of `Term::simplify`. The one
//! piece of canonical structure that is maintained by construction is that
//! the members of a union or an intersection form a set.
//!
//! Every operation on a term recurses over its structure, so the supported
//! nesting is bounded by `DEPTH_LIMIT`. Each node records its depth and size
//! when it is built; `Term::repeat` and the textual parser refuse to build a
//! term deeper than the limit. Terms nested far beyond it through the raw
//! constructors can exhaust the stack of the thread that works on them.

use std::cmp::Ordering;
use std::collections::{btree_set, BTreeSet};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

use crate::alphabet::Alphabet;

/// The deepest nesting of terms that the operations of this crate support.
pub const DEPTH_LIMIT: usize = 1000;

/// A regular expression over the alphabet `A`.
///
/// Equality, ordering and hashing are structural. Two handles to the same
/// node compare equal without looking at the node.
///
/// # Depth
/// Terms up to `DEPTH_LIMIT` levels deep are supported; see `Term::depth`.
pub struct Term<A: Alphabet> {
    node: Arc<Node<A>>,
}

struct Node<A: Alphabet> {
    kind: TermKind<A>,
    depth: usize,
    size: usize,
}

/// The kind of a regular expression.
///
/// # Type Parameter
/// - A: the alphabet over which the regular expression operates
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind<A: Alphabet> {
    /// The regular expression that matches nothing (∅).
    Empty,

    /// The regular expression that matches only the empty word (ε).
    Epsilon,

    /// A regular expression that matches exactly one symbol.
    Symbol(A),

    /// A regular expression that matches two other regular expressions in
    /// sequence.
    Concat(Term<A>, Term<A>),

    /// A regular expression that matches any of a set of regular expressions.
    Union(TermSet<A>),

    /// A regular expression that matches all of a set of regular expressions.
    Intersect(TermSet<A>),

    /// A regular expression that matches 0 or more instances of another
    /// regular expression.
    Star(Term<A>),

    /// A regular expression that matches every word the inner regular
    /// expression does not match.
    Complement(Term<A>),
}

/// An unordered, duplicate-free collection of terms.
///
/// The members are kept in the structural order of `Term`, which makes two
/// sets with the same members structurally equal no matter the order in which
/// they were collected. A `TermSet` can only be built by collecting terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermSet<A: Alphabet> {
    set: Arc<BTreeSet<Term<A>>>,
}

/// An iterator over the members of a `TermSet`.
pub type Members<'a, A> = btree_set::Iter<'a, Term<A>>;

impl<A: Alphabet> Term<A> {
    /// Create the `Empty` term, matching nothing.
    pub fn empty() -> Term<A> {
        TermKind::Empty.into()
    }

    /// Create the `Epsilon` term, matching only the empty word.
    pub fn epsilon() -> Term<A> {
        TermKind::Epsilon.into()
    }

    /// Create a term matching the single symbol `symbol`.
    pub fn symbol(symbol: A) -> Term<A> {
        TermKind::Symbol(symbol).into()
    }

    /// Create the concatenation of `first` followed by `second`.
    pub fn concat(first: Term<A>, second: Term<A>) -> Term<A> {
        TermKind::Concat(first, second).into()
    }

    /// Create the union of `members`.
    ///
    /// Structurally equal members are kept once.
    pub fn union<I>(members: I) -> Term<A>
    where
        I: IntoIterator<Item = Term<A>>,
    {
        TermKind::Union(members.into_iter().collect()).into()
    }

    /// Create the intersection of `members`.
    ///
    /// Structurally equal members are kept once.
    pub fn intersect<I>(members: I) -> Term<A>
    where
        I: IntoIterator<Item = Term<A>>,
    {
        TermKind::Intersect(members.into_iter().collect()).into()
    }

    /// Create the Kleene closure of `inner`.
    pub fn star(inner: Term<A>) -> Term<A> {
        TermKind::Star(inner).into()
    }

    /// Create the complement of `inner`.
    pub fn complement(inner: Term<A>) -> Term<A> {
        TermKind::Complement(inner).into()
    }

    /// Create the term matching every word, `Complement(Empty)`.
    pub fn full() -> Term<A> {
        Term::complement(Term::empty())
    }

    /// Get the kind of the term.
    pub fn kind(&self) -> &TermKind<A> {
        &self.node.kind
    }

    /// Check if this is the `Empty` term.
    pub fn is_null(&self) -> bool {
        matches!(self.node.kind, TermKind::Empty)
    }

    /// Check if this is the `Epsilon` term.
    pub fn is_epsilon(&self) -> bool {
        matches!(self.node.kind, TermKind::Epsilon)
    }

    /// Check if this is the full term, `Complement(Empty)`.
    pub fn is_full(&self) -> bool {
        match self.node.kind {
            TermKind::Complement(ref inner) => inner.is_null(),
            _ => false,
        }
    }

    /// The number of nodes in the term.
    ///
    /// Shared sub-terms are counted once per occurrence. The count saturates
    /// at `usize::MAX`.
    pub fn size(&self) -> usize {
        self.node.size
    }

    /// The number of nodes on the longest path from this term to a leaf.
    ///
    /// A leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.node.depth
    }

    /// The symbols that occur in the term.
    pub fn symbols(&self) -> BTreeSet<A> {
        self.subterms()
            .filter_map(|sub| match sub.kind() {
                TermKind::Symbol(symbol) => Some(symbol.clone()),
                _ => None,
            })
            .collect()
    }

    fn same_node(&self, other: &Term<A>) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<A: Alphabet> From<TermKind<A>> for Term<A> {
    fn from(kind: TermKind<A>) -> Self {
        use self::TermKind::*;

        // (depth, size) of the deepest child and of all the children
        let (depth, size) = match kind {
            Empty | Epsilon | Symbol(_) => (0, 0),
            Concat(ref first, ref second) => (
                first.depth().max(second.depth()),
                first.size().saturating_add(second.size()),
            ),
            Union(ref members) | Intersect(ref members) => {
                members.iter().fold((0, 0), |(depth, size): (usize, usize), member| {
                    (depth.max(member.depth()), size.saturating_add(member.size()))
                })
            }
            Star(ref inner) | Complement(ref inner) => (inner.depth(), inner.size()),
        };

        Term {
            node: Arc::new(Node {
                kind,
                depth: depth.saturating_add(1),
                size: size.saturating_add(1),
            }),
        }
    }
}

impl<A: Alphabet> Clone for Term<A> {
    fn clone(&self) -> Self {
        Term {
            node: Arc::clone(&self.node),
        }
    }
}

impl<A: Alphabet> PartialEq for Term<A> {
    fn eq(&self, other: &Term<A>) -> bool {
        self.same_node(other) || self.node.kind == other.node.kind
    }
}

impl<A: Alphabet> Eq for Term<A> {}

impl<A: Alphabet> PartialOrd for Term<A> {
    fn partial_cmp(&self, other: &Term<A>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Alphabet> Ord for Term<A> {
    fn cmp(&self, other: &Term<A>) -> Ordering {
        if self.same_node(other) {
            Ordering::Equal
        } else {
            self.node.kind.cmp(&other.node.kind)
        }
    }
}

impl<A: Alphabet> Hash for Term<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.kind.hash(state)
    }
}

impl<A: Alphabet> Debug for Term<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.node.kind, f)
    }
}

impl<A: Alphabet> TermSet<A> {
    /// The number of members.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Check if there are no members.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Check if `term` is a member.
    pub fn contains(&self, term: &Term<A>) -> bool {
        self.set.contains(term)
    }

    /// Iterate over the members in structural order.
    pub fn iter(&self) -> Members<A> {
        self.set.iter()
    }
}

impl<A: Alphabet> FromIterator<Term<A>> for TermSet<A> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Term<A>>,
    {
        TermSet {
            set: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a TermSet<A> {
    type Item = &'a Term<A>;
    type IntoIter = Members<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
