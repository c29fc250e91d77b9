use super::letter::{spell, Letter, WordBuf};
use super::lexicon::Dawg;
use super::node::NodeId;

/// A lazy, ascending iterator over the words below a node.
///
/// Produced by [`Dawg::words`] and [`NodeRef::suffixes`](super::NodeRef::suffixes).
/// At every node the word ending there is reported before any of its
/// extensions, so output is in strict lexicographic order. Each call starts a
/// fresh walk with its own stack.
#[derive(Clone)]
pub struct Words<'a> {
    dawg: &'a Dawg,
    stack: Vec<Frame>,
    prefix: WordBuf,
}

#[derive(Clone, Copy)]
struct Frame {
    node: NodeId,
    /// Next child slot to try, or `None` before the node's own word check.
    cursor: Option<usize>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(dawg: &'a Dawg, start: NodeId) -> Self {
        Words {
            dawg,
            stack: vec![Frame {
                node: start,
                cursor: None,
            }],
            prefix: WordBuf::new(),
        }
    }

    /// Advances to the next word and returns its letters, relative to the
    /// starting node.
    pub(crate) fn next_letters(&mut self) -> Option<&[Letter]> {
        let dawg = self.dawg;
        loop {
            let frame = self.stack.last_mut()?;
            let node = dawg.node(frame.node);
            match frame.cursor {
                None => {
                    frame.cursor = Some(0);
                    if node.is_word() {
                        return Some(&self.prefix);
                    }
                }
                Some(from) => match node.children_from(from).next() {
                    Some((letter, child)) => {
                        frame.cursor = Some(letter.index() + 1);
                        self.prefix.push(letter);
                        self.stack.push(Frame {
                            node: child,
                            cursor: None,
                        });
                    }
                    None => {
                        self.stack.pop();
                        self.prefix.pop();
                    }
                },
            }
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_letters().map(spell)
    }
}

impl std::iter::FusedIterator for Words<'_> {}
