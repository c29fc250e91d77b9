//! # lexdawg
//!
//! A compact word-game lexicon: a trie over `A`-`Z` whose word-final nodes
//! all point at one shared end-of-word terminal, plus a memoized fuzzy search
//! that finds every stored word within a weighted edit budget of a query.
//!
//! ## Quick Start
//!
//! ```
//! use lexdawg::fuzzy::UnitCost;
//! use lexdawg::Dawg;
//!
//! let dawg = Dawg::from_words(["CAT", "CATS", "COT", "DOG"]).unwrap();
//!
//! assert!(dawg.contains("CAT"));
//! assert!(!dawg.contains("CA"));
//! assert_eq!(dawg.prefix("CA").unwrap().child_letters(), "T");
//!
//! let near: Vec<_> = dawg.fuzzy_search("CAT", 1, UnitCost).unwrap().into_iter().collect();
//! assert_eq!(near, ["CAT", "CATS", "COT"]);
//! ```
//!
//! ## Word lists
//!
//! [`Dawg::from_file`] and [`Dawg::from_reader`] read one word per line,
//! skipping blank lines and `#` comments. [`LoadOptions`] controls case
//! folding and whether invalid lines abort the load or are skipped.
//!
//! ## Searching from a partial match
//!
//! Any [`NodeRef`] can seed a search, in which case results are the
//! suffixes below that node:
//!
//! ```
//! use lexdawg::fuzzy::{search, UnitCost};
//! use lexdawg::Dawg;
//!
//! let dawg = Dawg::from_words(["CAT", "CATS", "COT", "DOG"]).unwrap();
//! let c = dawg.prefix("C").unwrap();
//! let tails: Vec<_> = search(c, "AT", 1, UnitCost).unwrap().into_iter().collect();
//! assert_eq!(tails, ["AT", "ATS", "OT"]);
//! ```

#![warn(missing_docs)]

/// Lexicon data structure: alphabet, nodes, construction and enumeration.
pub mod dawg;
/// Error types.
pub mod error;
/// Memoized fuzzy edit-distance search.
pub mod fuzzy;

pub use dawg::{Dawg, IntoWord, InvalidWordPolicy, Letter, LoadOptions, NodeId, NodeRef, Words};
pub use error::LexiconError;
