/// Word insertion input types and the word-list loader.
pub mod builder;
/// The 27-symbol alphabet: `A`-`Z` plus the end-of-word marker.
pub mod letter;
/// The lexicon and its read-only node handles.
pub mod lexicon;
/// Trie node layout and child tables.
pub mod node;
/// Internal index arena.
pub(crate) mod node_arena;
/// Ordered word enumeration.
pub mod words;

pub use builder::{IntoWord, InvalidWordPolicy, LoadOptions};
pub use letter::{Letter, WordBuf};
pub use lexicon::{Dawg, NodeRef};
pub use node::NodeId;
pub use words::Words;
