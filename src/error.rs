//! Error types for lexicon construction and queries.

/// Errors raised when input falls outside the lexicon alphabet or a word list
/// cannot be read.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// A character outside `A`-`Z` was found in a word or query.
    #[error("invalid letter {ch:?} at position {position}")]
    InvalidLetter {
        /// The offending character.
        ch: char,
        /// Character offset within the word.
        position: usize,
    },

    /// Words must contain at least one letter.
    #[error("empty word")]
    EmptyWord,

    /// Reading a word list failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A word list line was rejected.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// Why the line was rejected.
        #[source]
        source: Box<LexiconError>,
    },
}

impl LexiconError {
    pub(crate) fn at_line(self, line: usize) -> Self {
        LexiconError::Line {
            line,
            source: Box::new(self),
        }
    }
}
