use super::letter::{Letter, SLOTS};

/// Stable identity of a node inside one lexicon's arena.
///
/// Two ids are equal exactly when they name the same node, which is what the
/// fuzzy search keys its visited states on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
    pub(crate) const TERMINAL: NodeId = NodeId(1);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One trie position: the letter leading into it and a direct-indexed child
/// table over `A`-`Z` plus [`Letter::EOW`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    letter: Option<Letter>,
    children: [Option<NodeId>; SLOTS],
}

impl Node {
    /// Creates a childless node. `None` is the root sentinel.
    pub(crate) fn new(letter: Option<Letter>) -> Self {
        Node {
            letter,
            children: [None; SLOTS],
        }
    }

    #[inline]
    pub(crate) fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub(crate) fn get(&self, letter: Letter) -> Option<NodeId> {
        self.children[letter.index()]
    }

    #[inline]
    pub(crate) fn put_child(&mut self, letter: Letter, child: NodeId) {
        self.children[letter.index()] = Some(child);
    }

    /// True if the path to this node spells a complete word.
    #[inline]
    pub(crate) fn is_word(&self) -> bool {
        self.children[Letter::EOW.index()].is_some()
    }

    /// Iterates letter children in alphabetical order, skipping `EOW`.
    #[inline]
    pub(crate) fn children(&self) -> ChildIter<'_> {
        self.children_from(0)
    }

    /// Like [`Node::children`], starting at slot `from`.
    #[inline]
    pub(crate) fn children_from(&self, from: usize) -> ChildIter<'_> {
        ChildIter { node: self, next: from }
    }

    /// Every occupied slot including `EOW`, for whole-graph walks.
    pub(crate) fn edges(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children().count()
    }
}

/// An iterator over the letter children of a node.
#[derive(Clone)]
pub(crate) struct ChildIter<'a> {
    node: &'a Node,
    next: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (Letter, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.next < Letter::EOW.index() {
            let slot = self.next;
            self.next += 1;
            if let Some(child) = self.node.children[slot] {
                return Some((Letter(slot as u8), child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Letter::EOW.index() - self.next))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn no_children() {
        let n = Node::new(None);
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(!n.is_word());
    }

    #[test]
    fn children_come_out_sorted() {
        let mut n = Node::new(Some(letter('A')));
        n.put_child(letter('Z'), NodeId(4));
        n.put_child(letter('B'), NodeId(2));
        n.put_child(letter('M'), NodeId(3));
        let children: Vec<_> = n.children().collect();
        assert_eq!(
            children,
            vec![
                (letter('B'), NodeId(2)),
                (letter('M'), NodeId(3)),
                (letter('Z'), NodeId(4)),
            ]
        );
        assert_eq!(n.child_count(), 3);
    }

    #[test]
    fn eow_slot_is_not_a_letter_child() {
        let mut n = Node::new(Some(letter('T')));
        n.put_child(Letter::EOW, NodeId::TERMINAL);
        assert!(n.is_word());
        assert_eq!(n.child_count(), 0);
        assert_eq!(n.edges().collect::<Vec<_>>(), vec![NodeId::TERMINAL]);
    }

    #[test]
    fn get_missing_letter() {
        let mut n = Node::new(None);
        n.put_child(letter('C'), NodeId(2));
        assert_eq!(n.get(letter('C')), Some(NodeId(2)));
        assert_eq!(n.get(letter('D')), None);
    }
}
