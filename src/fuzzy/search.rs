//! Memoized edit-distance search over a lexicon.
//!
//! The search walks the query and the trie together. A state is the triple
//! (query position, remaining budget, node). Because every node is reached
//! by exactly one path from the root, the letters spelled so far are a
//! function of the node, so two visits to the same state explore identical
//! subtrees. The second visit is skipped, which bounds the work by
//! `(len + 1) * (budget + 1) * nodes` expanded states.

use std::collections::BTreeSet;

use hashbrown::HashSet;
use log::debug;

use super::cost::{CostFn, Operation};
use crate::dawg::letter::{spell, Letter, WordBuf};
use crate::dawg::{Dawg, IntoWord, NodeId, NodeRef};
use crate::error::LexiconError;

type State = (usize, i64, NodeId);

/// A reusable fuzzy-search session bound to one cost function.
///
/// Each call to [`FuzzySearch::search`] starts from an empty visited set;
/// states never carry over between queries.
///
/// ```
/// use lexdawg::fuzzy::{FuzzySearch, UnitCost};
/// use lexdawg::Dawg;
///
/// let dawg = Dawg::from_words(["CAT", "CATS", "COT", "DOG"]).unwrap();
/// let mut search = FuzzySearch::new(UnitCost);
/// let words = search.search(dawg.root(), "CAT", 1).unwrap();
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["CAT", "CATS", "COT"]);
/// assert!(search.states_expanded() > 0);
/// ```
pub struct FuzzySearch<C> {
    cost: C,
    visited: HashSet<State>,
    expanded: usize,
}

impl<C: CostFn> FuzzySearch<C> {
    /// Creates a session pricing edits with `cost`.
    pub fn new(cost: C) -> Self {
        FuzzySearch {
            cost,
            visited: HashSet::new(),
            expanded: 0,
        }
    }

    /// Finds every word below `start` whose edit cost to `query` is at most
    /// `max_edits`.
    ///
    /// Words are spelled relative to `start`, so searching from the root
    /// yields whole words. A negative budget yields nothing.
    ///
    /// # Errors
    ///
    /// [`LexiconError::InvalidLetter`] if `query` has a character outside
    /// `A`-`Z`.
    pub fn search(
        &mut self,
        start: NodeRef<'_>,
        query: impl IntoWord,
        max_edits: i32,
    ) -> Result<BTreeSet<String>, LexiconError> {
        let query = query.collect_word()?;
        self.visited.clear();

        let mut walk = Walk {
            dawg: start.dawg(),
            query: &query,
            insertion: i64::from(self.cost.cost(Operation::Insertion)),
            deletion: i64::from(self.cost.cost(Operation::Deletion)),
            substitution: i64::from(self.cost.cost(Operation::Substitution)),
            visited: &mut self.visited,
            prefix: WordBuf::new(),
            matches: BTreeSet::new(),
            expanded: 0,
        };
        walk.visit(0, start.id(), i64::from(max_edits));

        let Walk {
            matches, expanded, ..
        } = walk;
        self.expanded = expanded;
        debug!(
            "fuzzy search {:?} within {}: {} matches, {} states expanded, {} visited",
            spell(&query),
            max_edits,
            matches.len(),
            expanded,
            self.visited.len()
        );
        Ok(matches)
    }

    /// Number of states with a non-negative budget expanded by the last
    /// search.
    pub fn states_expanded(&self) -> usize {
        self.expanded
    }
}

/// Runs a one-off search. See [`FuzzySearch::search`].
pub fn search(
    start: NodeRef<'_>,
    query: impl IntoWord,
    max_edits: i32,
    cost: impl CostFn,
) -> Result<BTreeSet<String>, LexiconError> {
    FuzzySearch::new(cost).search(start, query, max_edits)
}

impl Dawg {
    /// Every word within `max_edits` of `query` under `cost`.
    ///
    /// ```
    /// use lexdawg::fuzzy::UnitCost;
    /// use lexdawg::Dawg;
    ///
    /// let dawg = Dawg::from_words(["CAT", "CATS", "COT", "DOG"]).unwrap();
    /// let exact = dawg.fuzzy_search("CAT", 0, UnitCost).unwrap();
    /// assert_eq!(exact.into_iter().collect::<Vec<_>>(), ["CAT"]);
    /// ```
    pub fn fuzzy_search(
        &self,
        query: impl IntoWord,
        max_edits: i32,
        cost: impl CostFn,
    ) -> Result<BTreeSet<String>, LexiconError> {
        search(self.root(), query, max_edits, cost)
    }
}

struct Walk<'a, 'q> {
    dawg: &'a Dawg,
    query: &'q [Letter],
    insertion: i64,
    deletion: i64,
    substitution: i64,
    visited: &'q mut HashSet<State>,
    prefix: WordBuf,
    matches: BTreeSet<String>,
    expanded: usize,
}

impl Walk<'_, '_> {
    fn visit(&mut self, pos: usize, id: NodeId, budget: i64) {
        if !self.visited.insert((pos, budget, id)) {
            return;
        }
        if budget < 0 {
            return;
        }
        self.expanded += 1;

        let dawg = self.dawg;
        let node = dawg.node(id);
        if pos == self.query.len() && node.is_word() {
            self.matches.insert(spell(&self.prefix));
        }

        // Past the end there is no letter to match, drop, or replace.
        let current = self.query.get(pos).copied();
        if let Some(letter) = current {
            if let Some(child) = node.get(letter) {
                self.descend(letter, pos + 1, child, budget);
            }
            self.visit(pos + 1, id, budget - self.deletion);
        }

        for (letter, child) in node.children() {
            self.descend(letter, pos, child, budget - self.insertion);
            if current.is_some_and(|c| c != letter) {
                self.descend(letter, pos + 1, child, budget - self.substitution);
            }
        }
    }

    fn descend(&mut self, letter: Letter, pos: usize, child: NodeId, budget: i64) {
        self.prefix.push(letter);
        self.visit(pos, child, budget);
        self.prefix.pop();
    }
}
