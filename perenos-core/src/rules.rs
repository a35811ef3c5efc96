//! Hyphenation rules
//!
//! A split of a letter run into `left` and `right` is acceptable only when
//! every rule in [`RULES`] accepts it. Rules are pure predicates and are
//! evaluated in table order, stopping at the first rejection.

use crate::alphabet::{fold, is_consonant, is_vowel, LetterClass};
use crate::config::MIN_WORD_LEN;

/// A named hyphenation predicate
#[derive(Clone, Copy)]
pub struct Rule {
    /// Human-readable name, used only in diagnostics
    pub name: &'static str,
    /// Predicate over the `(left, right)` split
    pub check: fn(&[char], &[char]) -> bool,
}

impl core::fmt::Debug for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Ordered rule table
pub const RULES: [Rule; 4] = [
    Rule {
        name: "minimum word length",
        check: min_word_length,
    },
    Rule {
        name: "vowels and consonants in both parts",
        check: vowels_and_consonants,
    },
    Rule {
        name: "soft sign, hard sign and short i",
        check: special_letters,
    },
    Rule {
        name: "consonant clusters",
        check: consonant_clusters,
    },
];

/// Check whether `left` + `right` may be hyphenated between the two parts
pub fn can_hyphenate(left: &[char], right: &[char]) -> bool {
    match first_rejection(left, right) {
        None => true,
        Some(name) => {
            log::trace!(
                "split {}|{} rejected by rule: {name}",
                left.iter().collect::<String>(),
                right.iter().collect::<String>()
            );
            false
        }
    }
}

/// Name of the first rule rejecting the split, if any
pub fn first_rejection(left: &[char], right: &[char]) -> Option<&'static str> {
    if left.is_empty() || right.is_empty() {
        return Some("non-empty parts");
    }

    RULES
        .iter()
        .find(|rule| !(rule.check)(left, right))
        .map(|rule| rule.name)
}

/// Words shorter than [`MIN_WORD_LEN`] letters are never split
pub fn min_word_length(left: &[char], right: &[char]) -> bool {
    left.len() + right.len() >= MIN_WORD_LEN
}

/// Each part must contain at least one vowel and one consonant
pub fn vowels_and_consonants(left: &[char], right: &[char]) -> bool {
    [left, right].iter().all(|part| {
        part.iter().any(|&ch| is_vowel(ch)) && part.iter().any(|&ch| is_consonant(ch))
    })
}

/// `ы` never starts a syllable; `ь`, `ъ` and `й` stay with the letter before them
pub fn special_letters(_left: &[char], right: &[char]) -> bool {
    match right.first().map(|&ch| fold(ch)) {
        Some('ы') => false,
        Some(ch) => LetterClass::of(ch) != LetterClass::Special,
        None => false,
    }
}

/// Consonant handling at the split point
pub fn consonant_clusters(left: &[char], right: &[char]) -> bool {
    let (Some(&last), Some(&first)) = (left.last(), right.first()) else {
        return false;
    };
    let (last, first) = (fold(last), fold(first));

    // Doubled consonant at the split, e.g. пропел-лер
    if is_consonant(last) && last == first {
        return true;
    }

    // Two different consonants, e.g. прос-мотр
    if is_consonant(last) && is_consonant(first) {
        return true;
    }

    // Doubled consonant inside one part, e.g. су-ббота
    let before_last = left.len().checked_sub(2).map(|i| fold(left[i]));
    if is_consonant(last) && before_last == Some(last) {
        return false;
    }
    if is_consonant(first) && right.get(1).map(|&ch| fold(ch)) == Some(first) {
        return false;
    }

    // A consonant stays with the vowel after it, e.g. not пол-ено
    if is_consonant(last) && is_vowel(first) {
        return false;
    }

    true
}
