use std::fmt;

use smallvec::SmallVec;

use crate::error::LexiconError;

/// Number of child slots per node: `A`-`Z` plus the end-of-word marker.
pub const SLOTS: usize = 27;

/// Inline buffer for a word's letters; spills to the heap past 32 letters.
pub type WordBuf = SmallVec<[Letter; 32]>;

/// An edge label in the lexicon: one of the 26 uppercase letters, or the
/// end-of-word marker [`Letter::EOW`].
///
/// Letters order alphabetically and `EOW` sorts after `Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(pub(crate) u8);

impl Letter {
    /// The end-of-word marker. Only ever used as a child slot.
    pub const EOW: Letter = Letter(26);

    /// Converts an uppercase ASCII letter. Anything else returns `None`.
    #[inline]
    pub fn from_char(ch: char) -> Option<Letter> {
        ch.is_ascii_uppercase().then(|| Letter(ch as u8 - b'A'))
    }

    /// Slot index of this letter in a node's child table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the end-of-word marker.
    #[inline]
    pub fn is_eow(self) -> bool {
        self == Letter::EOW
    }

    /// The letter as a character. `EOW` renders as `$`.
    pub fn to_char(self) -> char {
        if self.is_eow() {
            '$'
        } else {
            (b'A' + self.0) as char
        }
    }

    /// Iterates `A` through `Z` in order. Never yields `EOW`.
    pub fn alphabet() -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + Clone {
        (0..26u8).map(Letter)
    }
}

/// A lone character is treated as a one-letter word, so a rejection reports
/// `position: 0`.
impl TryFrom<char> for Letter {
    type Error = LexiconError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or(LexiconError::InvalidLetter { ch, position: 0 })
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Spells a letter sequence as a `String`.
pub(crate) fn spell(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alphabet_is_ordered() {
        let letters: String = Letter::alphabet().map(Letter::to_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(Letter::alphabet().all(|l| l < Letter::EOW));
    }

    #[test]
    fn rejects_lowercase_and_symbols() {
        assert_eq!(Letter::from_char('Q').map(Letter::index), Some(16));
        assert_eq!(Letter::from_char('q'), None);
        assert_eq!(Letter::from_char('['), None);
        assert_eq!(Letter::from_char('Å'), None);
        assert!(matches!(
            Letter::try_from('1'),
            Err(LexiconError::InvalidLetter { ch: '1', position: 0 })
        ));
        assert_eq!(Letter::try_from('Z').map(Letter::index).ok(), Some(25));
    }

    #[test]
    fn eow_occupies_last_slot() {
        assert_eq!(Letter::EOW.index(), SLOTS - 1);
        assert_eq!(Letter::EOW.to_char(), '$');
    }
}
