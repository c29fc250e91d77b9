use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};
use smallvec::SmallVec;

use super::letter::{Letter, WordBuf};
use super::lexicon::Dawg;
use crate::error::LexiconError;

/// Trait for types that can be used as a word or query against a [`Dawg`].
///
/// Implemented for common string types and letter sequences so that
/// [`Dawg::insert`] and friends accept them directly. String input must
/// already be uppercase `A`-`Z`.
pub trait IntoWord {
    /// Collects this word into a letter buffer, rejecting characters
    /// outside the alphabet.
    fn collect_word(self) -> Result<WordBuf, LexiconError>;
}

fn collect_chars(word: &str) -> Result<WordBuf, LexiconError> {
    word.chars()
        .enumerate()
        .map(|(position, ch)| {
            Letter::from_char(ch).ok_or(LexiconError::InvalidLetter { ch, position })
        })
        .collect()
}

// String types

impl IntoWord for &str {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        collect_chars(self)
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        collect_chars(self)
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        collect_chars(&self)
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        collect_chars(self)
    }
}

// Letter sequences

impl IntoWord for &[Letter] {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        letters(self.iter().copied())
    }
}

impl IntoWord for Vec<Letter> {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        letters(self)
    }
}

impl IntoWord for &Vec<Letter> {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        letters(self.iter().copied())
    }
}

impl<const N: usize> IntoWord for [Letter; N] {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        letters(self)
    }
}

impl<const N: usize> IntoWord for &[Letter; N] {
    fn collect_word(self) -> Result<WordBuf, LexiconError> {
        letters(self.iter().copied())
    }
}

// EOW is a slot marker, never part of a word.
fn letters(seq: impl IntoIterator<Item = Letter>) -> Result<WordBuf, LexiconError> {
    seq.into_iter()
        .enumerate()
        .map(|(position, l)| {
            if l.is_eow() {
                Err(LexiconError::InvalidLetter {
                    ch: l.to_char(),
                    position,
                })
            } else {
                Ok(l)
            }
        })
        .collect::<Result<SmallVec<_>, _>>()
}

/// What the loader does with a line that is not a valid word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InvalidWordPolicy {
    /// Abort loading with a [`LexiconError::Line`].
    #[default]
    Reject,
    /// Skip the line and keep going.
    Skip,
}

/// Options for reading a word list, one word per line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadOptions {
    /// ASCII-uppercase each line before inserting it.
    pub uppercase: bool,
    /// Handling of lines containing characters outside `A`-`Z`.
    pub on_invalid: InvalidWordPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            uppercase: true,
            on_invalid: InvalidWordPolicy::Reject,
        }
    }
}

impl Dawg {
    /// Builds a lexicon from an iterator of words, in any order.
    ///
    /// Duplicates are absorbed. The first invalid word aborts the build.
    ///
    /// ```
    /// use lexdawg::Dawg;
    ///
    /// let dawg = Dawg::from_words(["DOG", "CAT", "CATS", "COT"]).unwrap();
    /// assert_eq!(dawg.word_count(), 4);
    /// assert!(dawg.contains("CATS"));
    /// ```
    pub fn from_words<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Result<Self, LexiconError> {
        let mut dawg = Dawg::new();
        for word in words {
            dawg.insert(word)?;
        }
        Ok(dawg)
    }

    /// Reads a word list from `reader`, one word per line.
    ///
    /// Trailing whitespace is trimmed. Blank lines and lines starting with
    /// `#` are ignored.
    pub fn from_reader(mut reader: impl BufRead, options: &LoadOptions) -> Result<Self, LexiconError> {
        let mut dawg = Dawg::new();
        let mut skipped = 0usize;
        let mut line_no = 0usize;

        // read_line into one buffer rather than lines() to avoid an
        // allocation per word.
        let mut buf = String::with_capacity(80);
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let word = buf.trim_end();
            if word.is_empty() || is_comment(word) {
                continue;
            }
            let result = if options.uppercase {
                dawg.insert(word.to_ascii_uppercase())
            } else {
                dawg.insert(word)
            };
            match (result, options.on_invalid) {
                (Ok(_), _) => {}
                (Err(e), InvalidWordPolicy::Skip) => {
                    trace!("skipping line {line_no}: {e}");
                    skipped += 1;
                }
                (Err(e), InvalidWordPolicy::Reject) => return Err(e.at_line(line_no)),
            }
        }

        debug!(
            "loaded {} words into {} nodes ({} lines skipped)",
            dawg.word_count(),
            dawg.node_count(),
            skipped
        );
        Ok(dawg)
    }

    /// Reads a word list file. See [`Dawg::from_reader`].
    ///
    /// ```no_run
    /// use lexdawg::{Dawg, LoadOptions};
    ///
    /// let dawg = Dawg::from_file("list.txt", &LoadOptions::default()).unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        Dawg::from_reader(BufReader::new(file), options)
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
