// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A deterministic finite automaton whose states are derivatives.
//!
//! The states of a `Dfa` are the distinct simplified derivatives of its start
//! term. Each state has one transition for each symbol that occurs in the
//! start term and one default transition for all other symbols. Symbols that
//! do not occur in a term all have the same derivative, so the default
//! transition is exact even for an unbounded alphabet.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use log::{debug, warn};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::term::Term;

/// The number of states `Dfa::new` will explore before giving up.
pub const DEFAULT_STATE_LIMIT: usize = 10_000;

/// The identifier of a state within a `Dfa`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    /// The position of the state in `Dfa::states`.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state of a `Dfa`.
#[derive(Debug, Clone)]
pub struct State<A: Alphabet> {
    term: Term<A>,
    accepting: bool,
    live: bool,
    transitions: BTreeMap<A, StateId>,
    default: StateId,
}

impl<A: Alphabet> State<A> {
    /// The term that labels this state.
    pub fn term(&self) -> &Term<A> {
        &self.term
    }

    /// Check if words that lead to this state are accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Check if some accepting state is reachable from this state.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Check if no accepting state is reachable from this state.
    pub fn is_dead(&self) -> bool {
        !self.live
    }

    /// The transitions on the symbols that occur in the start term.
    pub fn transitions<'a>(&'a self) -> impl Iterator<Item = (&'a A, StateId)> + 'a {
        self.transitions.iter().map(|(symbol, id)| (symbol, *id))
    }

    /// The transition on every symbol that does not occur in the start term.
    pub fn default_transition(&self) -> StateId {
        self.default
    }

    fn next(&self, symbol: &A) -> StateId {
        self.transitions.get(symbol).cloned().unwrap_or(self.default)
    }
}

/// A deterministic finite automaton built from the derivatives of a term.
#[derive(Debug, Clone)]
pub struct Dfa<A: Alphabet> {
    states: Vec<State<A>>,
    symbols: BTreeSet<A>,
}

impl<A: Alphabet> Dfa<A> {
    /// Build the `Dfa` for `term`, exploring at most `DEFAULT_STATE_LIMIT`
    /// states.
    ///
    /// # Errors
    /// Returns `Error::StateLimitExceeded` if `term` has more distinct
    /// derivatives than the limit.
    pub fn new(term: &Term<A>) -> Result<Dfa<A>> {
        Dfa::with_state_limit(term, DEFAULT_STATE_LIMIT)
    }

    /// Build the `Dfa` for `term`, exploring at most `limit` states.
    ///
    /// # Errors
    /// Returns `Error::StateLimitExceeded` if `term` has more than `limit`
    /// distinct derivatives.
    pub fn with_state_limit(term: &Term<A>, limit: usize) -> Result<Dfa<A>> {
        let start = term.simplify();
        let symbols = start.symbols();
        let mut builder = Builder::new(limit);

        builder.state_id(start)?;
        let mut states = Vec::new();
        while let Some(term) = builder.queue.pop_front() {
            let mut transitions = BTreeMap::new();
            for symbol in symbols.iter() {
                let next = term.derivative(symbol).simplify();
                transitions.insert(symbol.clone(), builder.state_id(next)?);
            }
            let next = term
                .derive_where(&|candidate: &A| !symbols.contains(candidate))
                .simplify();
            let default = builder.state_id(next)?;

            states.push(State {
                accepting: term.is_nullable(),
                live: false,
                term,
                transitions,
                default,
            });
        }

        mark_live(&mut states);

        debug!(
            "built dfa with {} states ({} dead) over {} symbols",
            states.len(),
            states.iter().filter(|s| s.is_dead()).count(),
            symbols.len()
        );

        Ok(Dfa { states, symbols })
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        StateId(0)
    }

    /// All of the states, indexed by `StateId::index`.
    pub fn states(&self) -> &[State<A>] {
        &self.states
    }

    /// The state with identifier `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this automaton. Identifiers are only
    /// meaningful for the `Dfa` that handed them out.
    pub fn state(&self, id: StateId) -> &State<A> {
        &self.states[id.0]
    }

    /// The symbols that have their own transitions.
    pub fn symbols(&self) -> impl Iterator<Item = &A> {
        self.symbols.iter()
    }

    /// The state reached from `from` on `symbol`.
    pub fn transition(&self, from: StateId, symbol: &A) -> StateId {
        self.state(from).next(symbol)
    }

    /// Returns whether the automaton accepts `input`.
    pub fn matches<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut current = self.start();
        for symbol in input {
            if self.state(current).is_dead() {
                return false;
            }
            current = self.transition(current, symbol.borrow());
        }
        self.state(current).is_accepting()
    }

    /// Check if the automaton accepts no word at all.
    pub fn is_empty(&self) -> bool {
        self.state(self.start()).is_dead()
    }
}

/// Returns whether `first` and `second` denote the same language.
///
/// This checks that the symmetric difference of the two terms is empty.
///
/// # Errors
/// Returns `Error::StateLimitExceeded` if the automaton for the symmetric
/// difference has more than `DEFAULT_STATE_LIMIT` states.
pub fn equivalent<A: Alphabet>(first: &Term<A>, second: &Term<A>) -> Result<bool> {
    let difference = Term::union(vec![
        Term::intersect(vec![first.clone(), Term::complement(second.clone())]),
        Term::intersect(vec![Term::complement(first.clone()), second.clone()]),
    ]);

    Ok(Dfa::new(&difference)?.is_empty())
}

struct Builder<A: Alphabet> {
    ids: HashMap<Term<A>, StateId>,
    queue: VecDeque<Term<A>>,
    limit: usize,
}

impl<A: Alphabet> Builder<A> {
    fn new(limit: usize) -> Builder<A> {
        Builder {
            ids: HashMap::new(),
            queue: VecDeque::new(),
            limit,
        }
    }

    // ids are handed out in queue order so a state's id is its final index
    fn state_id(&mut self, term: Term<A>) -> Result<StateId> {
        if let Some(id) = self.ids.get(&term) {
            return Ok(*id);
        }

        if self.ids.len() >= self.limit {
            warn!("dfa construction stopped at {} states", self.limit);
            return Err(Error::StateLimitExceeded(self.limit));
        }

        let id = StateId(self.ids.len());
        self.ids.insert(term.clone(), id);
        self.queue.push_back(term);
        Ok(id)
    }
}

// a state is live if an accepting state can be reached from it, so walk the
// transitions backwards from every accepting state
fn mark_live<A: Alphabet>(states: &mut [State<A>]) {
    let mut predecessors = vec![Vec::new(); states.len()];
    for (index, state) in states.iter().enumerate() {
        let targets = state.transitions.values().chain(Some(&state.default));
        for target in targets {
            predecessors[target.0].push(index);
        }
    }

    let mut work_list: VecDeque<usize> = states
        .iter()
        .enumerate()
        .filter(|(_, state)| state.accepting)
        .map(|(index, _)| index)
        .collect();

    while let Some(index) = work_list.pop_front() {
        if !states[index].live {
            states[index].live = true;
            work_list.extend(predecessors[index].iter().cloned());
        }
    }
}
