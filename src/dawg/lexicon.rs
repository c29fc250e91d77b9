use std::fmt;

use log::debug;

use super::builder::IntoWord;
use super::letter::{spell, Letter};
use super::node::{Node, NodeId};
use super::node_arena::NodeArena;
use super::words::Words;
use crate::error::LexiconError;

/// A trie lexicon over `A`-`Z` whose word-final nodes all share one
/// end-of-word terminal.
///
/// The lexicon owns every node. Read-only handles ([`NodeRef`]) borrow it and
/// cannot outlive it. Cloning rebuilds an independent copy by re-inserting
/// every word.
///
/// # Examples
///
/// ```
/// use lexdawg::Dawg;
///
/// let mut dawg = Dawg::new();
/// for word in ["CAT", "CATS", "COT", "DOG"] {
///     dawg.insert(word).unwrap();
/// }
/// assert!(dawg.contains("CAT"));
/// assert!(!dawg.contains("CA"));
/// assert_eq!(dawg.prefix("CA").unwrap().child_letters(), "T");
/// assert_eq!(dawg.words().collect::<Vec<_>>(), ["CAT", "CATS", "COT", "DOG"]);
/// ```
pub struct Dawg {
    arena: NodeArena,
    words: usize,
}

impl Dawg {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Dawg {
            arena: NodeArena::new(),
            words: 0,
        }
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of distinct non-terminal nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len() - 1
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            dawg: self,
            id: NodeId::ROOT,
        }
    }

    /// Inserts a word.
    ///
    /// Returns `true` if the word was already present, `false` if it was
    /// newly added. The whole word is validated before any node is
    /// allocated, so a rejected word leaves the lexicon untouched.
    ///
    /// # Errors
    ///
    /// [`LexiconError::InvalidLetter`] for characters outside `A`-`Z`, and
    /// [`LexiconError::EmptyWord`] for the empty word.
    pub fn insert(&mut self, word: impl IntoWord) -> Result<bool, LexiconError> {
        let word = word.collect_word()?;
        if word.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        Ok(self.insert_letters(&word))
    }

    fn insert_letters(&mut self, word: &[Letter]) -> bool {
        let mut current = NodeId::ROOT;
        for &letter in word {
            current = match self.arena.get(current).get(letter) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc(Node::new(Some(letter)));
                    self.arena.get_mut(current).put_child(letter, child);
                    child
                }
            };
        }

        let last = self.arena.get_mut(current);
        if last.is_word() {
            return true;
        }
        last.put_child(Letter::EOW, NodeId::TERMINAL);
        self.words += 1;
        false
    }

    /// Returns `true` if `word` was inserted.
    ///
    /// A word with characters outside `A`-`Z` cannot be stored, so it is
    /// never contained.
    pub fn contains(&self, word: impl IntoWord) -> bool {
        word.collect_word()
            .ok()
            .and_then(|w| self.walk(&w))
            .is_some_and(|id| self.node(id).is_word())
    }

    /// Returns the node reached by spelling `prefix` from the root, or
    /// `None` if no stored word starts with it.
    ///
    /// The empty prefix yields the root.
    pub fn prefix(&self, prefix: impl IntoWord) -> Option<NodeRef<'_>> {
        let prefix = prefix.collect_word().ok()?;
        self.walk(&prefix).map(|id| NodeRef { dawg: self, id })
    }

    fn walk(&self, letters: &[Letter]) -> Option<NodeId> {
        letters
            .iter()
            .try_fold(NodeId::ROOT, |id, &letter| self.node(id).get(letter))
    }

    /// Calls `f` once per word, in ascending order.
    pub fn each_word(&self, f: impl FnMut(String)) {
        self.words().for_each(f)
    }

    /// Iterates every word in ascending order.
    pub fn words(&self) -> Words<'_> {
        Words::new(self, NodeId::ROOT)
    }

    /// Releases every node and resets to an empty lexicon.
    pub fn clear(&mut self) {
        let released = self.arena.release_all();
        debug!("cleared lexicon: {} words, {released} nodes released", self.words);
        self.words = 0;
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }
}

impl Default for Dawg {
    fn default() -> Self {
        Dawg::new()
    }
}

impl Clone for Dawg {
    fn clone(&self) -> Self {
        let mut copy = Dawg::new();
        let mut words = self.words();
        while let Some(word) = words.next_letters() {
            copy.insert_letters(word);
        }
        copy
    }
}

impl fmt::Debug for Dawg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dawg")
            .field("word_count", &self.word_count())
            .field("node_count", &self.node_count())
            .finish()
    }
}

/// A read-only handle to one node of a [`Dawg`].
///
/// Equality is node identity: two handles are equal when they point at the
/// same node of the same lexicon.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    dawg: &'a Dawg,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Stable identity of this node within its lexicon.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The letter leading into this node, `None` for the root.
    pub fn letter(&self) -> Option<Letter> {
        self.node().letter()
    }

    /// True if the path to this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.node().is_word()
    }

    /// Follows the edge labelled `letter`.
    ///
    /// The end-of-word marker is not an edge, so `Letter::EOW` gives `None`.
    pub fn child(&self, letter: Letter) -> Option<NodeRef<'a>> {
        if letter.is_eow() {
            return None;
        }
        self.node().get(letter).map(|id| NodeRef { dawg: self.dawg, id })
    }

    /// Letter children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = (Letter, NodeRef<'a>)> + 'a {
        let dawg = self.dawg;
        dawg.node(self.id)
            .children()
            .map(move |(letter, id)| (letter, NodeRef { dawg, id }))
    }

    /// The letters of all children, e.g. `"T"` below `CA` in `{CAT, COT}`.
    pub fn child_letters(&self) -> String {
        let letters: Vec<Letter> = self.node().children().map(|(l, _)| l).collect();
        spell(&letters)
    }

    /// Number of letter children.
    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    /// Iterates the suffixes that complete a word from this node, in
    /// ascending order. A word ending here yields `""`.
    pub fn suffixes(&self) -> Words<'a> {
        Words::new(self.dawg, self.id)
    }

    pub(crate) fn dawg(&self) -> &'a Dawg {
        self.dawg
    }

    fn node(&self) -> &'a Node {
        self.dawg.node(self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dawg, other.dawg) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("letter", &self.letter())
            .field("is_word", &self.is_word())
            .finish()
    }
}
