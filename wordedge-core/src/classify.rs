//! Character classification for word-run detection
//!
//! Every boundary decision in this crate derives from a single question per
//! character: is it a word character or not. The answer comes from a
//! [`WordClassifier`]; [`AlphanumericClassifier`] is the default policy.

use smallvec::SmallVec;

/// Classification of characters for word-run detection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Part of a word run
    Word,
    /// Whitespace character
    Whitespace,
    /// Punctuation (ASCII or Unicode)
    Punctuation,
    /// Symbols, control characters, everything else
    Other,
}

impl CharacterClass {
    /// Whether this class continues a word run
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(self, CharacterClass::Word)
    }
}

/// Pure character classification logic
pub trait WordClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Check if character belongs to a word run
    #[inline]
    fn is_word_char(&self, ch: char) -> bool {
        self.classify(ch).is_word()
    }
}

impl<C: WordClassifier + ?Sized> WordClassifier for &C {
    fn classify(&self, ch: char) -> CharacterClass {
        (**self).classify(ch)
    }
}

/// Classify a non-word character
fn classify_separator(ch: char) -> CharacterClass {
    if ch.is_whitespace() {
        CharacterClass::Whitespace
    } else if ch.is_ascii_punctuation() || is_unicode_punctuation(ch) {
        CharacterClass::Punctuation
    } else {
        CharacterClass::Other
    }
}

fn is_unicode_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{FF01}'..='\u{FF0F}'
            | '¡'
            | '§'
            | '«'
            | '¶'
            | '·'
            | '»'
            | '¿'
    )
}

/// Default policy: a word character is any alphanumeric character
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlphanumericClassifier;

impl WordClassifier for AlphanumericClassifier {
    #[inline]
    fn classify(&self, ch: char) -> CharacterClass {
        if ch.is_alphanumeric() {
            CharacterClass::Word
        } else {
            classify_separator(ch)
        }
    }
}

/// Alphanumerics plus a caller-chosen set of extra word characters
///
/// Useful when contractions ("don't") or identifiers ("snake_case") should
/// count as a single word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtendedClassifier {
    extra: SmallVec<[char; 4]>,
}

impl ExtendedClassifier {
    /// Create a classifier treating `extra` as word characters
    pub fn new<I: IntoIterator<Item = char>>(extra: I) -> Self {
        let mut extra: SmallVec<[char; 4]> = extra.into_iter().collect();
        extra.sort_unstable();
        extra.dedup();
        Self { extra }
    }

    /// The extra word characters, sorted
    pub fn extra_chars(&self) -> &[char] {
        &self.extra
    }
}

impl WordClassifier for ExtendedClassifier {
    fn classify(&self, ch: char) -> CharacterClass {
        if ch.is_alphanumeric() || self.extra.binary_search(&ch).is_ok() {
            CharacterClass::Word
        } else {
            classify_separator(ch)
        }
    }
}

/// Check a character against the default alphanumeric policy
#[inline]
pub fn is_word_char(ch: char) -> bool {
    AlphanumericClassifier.is_word_char(ch)
}
