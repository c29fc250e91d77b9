//! Index arena holding every node of one lexicon.
//!
//! Slot 0 is always the root and slot 1 the shared end-of-word terminal.
//! Nodes refer to each other by [`NodeId`], so the terminal can be a child
//! of many parents without any shared ownership.

use hashbrown::HashSet;

use super::letter::Letter;
use super::node::{Node, NodeId};

pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates an arena seeded with a fresh root and terminal.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![Node::new(None), Node::new(Some(Letter::EOW))],
        }
    }

    /// Allocates a node and returns its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node arena exceeds u32::MAX nodes");
        self.nodes.push(node);
        NodeId(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the number of nodes in this arena, terminal included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every distinct node reachable from the root, plus the terminal, each
    /// exactly once.
    ///
    /// The terminal is reached through many parents but reported once. It is
    /// seeded alongside the root so it is counted even with no words stored.
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut visited = HashSet::with_capacity(self.nodes.len());
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::TERMINAL, NodeId::ROOT];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.get(id).edges());
        }
        order
    }

    /// Releases every node and reseeds the arena.
    ///
    /// Returns the number of distinct nodes released.
    pub fn release_all(&mut self) -> usize {
        let released = self.reachable().len();
        debug_assert_eq!(released, self.nodes.len(), "unreachable node in arena");
        *self = NodeArena::new();
        released
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn fresh_arena_has_root_and_terminal() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(NodeId::ROOT).letter(), None);
        assert_eq!(arena.get(NodeId::TERMINAL).letter(), Some(Letter::EOW));
    }

    #[test]
    fn shared_terminal_is_reached_once() {
        let mut arena = NodeArena::new();
        for ch in ['A', 'B', 'C'] {
            let mut node = Node::new(Some(letter(ch)));
            node.put_child(Letter::EOW, NodeId::TERMINAL);
            let id = arena.alloc(node);
            arena.get_mut(NodeId::ROOT).put_child(letter(ch), id);
        }
        let reachable = arena.reachable();
        assert_eq!(reachable.len(), 5);
        assert_eq!(
            reachable.iter().filter(|&&id| id == NodeId::TERMINAL).count(),
            1
        );
        assert_eq!(arena.release_all(), 5);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(NodeId::ROOT).child_count(), 0);
    }

    #[test]
    fn empty_arena_releases_root_and_terminal() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.reachable(), [NodeId::ROOT, NodeId::TERMINAL]);
        assert_eq!(arena.release_all(), 2);
        assert_eq!(arena.release_all(), 2);
        assert_eq!(arena.len(), 2);
    }
}
