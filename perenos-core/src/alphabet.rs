//! Letter classification for the Russian alphabet

use core::fmt;

/// Lower-case vowels
pub const VOWELS: &str = "аиеёоуыэюя";

/// Lower-case consonants
pub const CONSONANTS: &str = "бвгджзклмнпрстфхцчшщ";

/// Soft sign, hard sign and short i
pub const SPECIAL_LETTERS: &str = "ьъй";

/// Coarse letter classification used by the hyphenation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Syllable nucleus
    Vowel,
    /// Consonant letter
    Consonant,
    /// Soft sign, hard sign or short i; attaches to the preceding letter
    Special,
    /// Digits, punctuation, whitespace, hyphen and any non-Cyrillic letter
    NonAlphabetic,
}

impl LetterClass {
    /// Classify a character after case folding
    pub fn of(ch: char) -> Self {
        match fold(ch) {
            'а' | 'и' | 'е' | 'ё' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я' => LetterClass::Vowel,
            'б' | 'в' | 'г' | 'д' | 'ж' | 'з' | 'к' | 'л' | 'м' | 'н' | 'п' | 'р' | 'с' | 'т'
            | 'ф' | 'х' | 'ц' | 'ч' | 'ш' | 'щ' => LetterClass::Consonant,
            'ь' | 'ъ' | 'й' => LetterClass::Special,
            _ => LetterClass::NonAlphabetic,
        }
    }

    /// Whether this class belongs to the alphabet
    pub fn is_letter(self) -> bool {
        !matches!(self, LetterClass::NonAlphabetic)
    }
}

impl fmt::Display for LetterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterClass::Vowel => write!(f, "vowel"),
            LetterClass::Consonant => write!(f, "consonant"),
            LetterClass::Special => write!(f, "special"),
            LetterClass::NonAlphabetic => write!(f, "non-alphabetic"),
        }
    }
}

/// Fold a character to lower case.
///
/// Every Cyrillic capital maps to exactly one lower-case letter, so the
/// first character of the lowercase expansion is enough.
pub fn fold(ch: char) -> char {
    if ch.is_lowercase() {
        return ch;
    }
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Check whether a character is a letter of the alphabet
pub fn is_letter(ch: char) -> bool {
    LetterClass::of(ch).is_letter()
}

/// Check whether a character is a vowel
pub fn is_vowel(ch: char) -> bool {
    LetterClass::of(ch) == LetterClass::Vowel
}

/// Check whether a character is a consonant
pub fn is_consonant(ch: char) -> bool {
    LetterClass::of(ch) == LetterClass::Consonant
}
