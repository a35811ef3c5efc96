//! Whole-word hyphenation listing
//!
//! Buffers one letter run at a time and emits it with a hyphen at every
//! acceptable split point. Non-letters only delimit words and are not echoed.

use crate::{alphabet::is_letter, config::HYPHEN, rules::can_hyphenate, types::Line};

/// Every acceptable split index of `word`, longest left part first
pub fn hyphenation_points(word: &[char]) -> Vec<usize> {
    (2..word.len().saturating_sub(1))
        .rev()
        .filter(|&at| can_hyphenate(&word[..at], &word[at..]))
        .collect()
}

/// Insert a hyphen at every acceptable split point of `word`
pub fn hyphenate_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    insert_hyphens(&chars, &hyphenation_points(&chars))
}

fn insert_hyphens(word: &[char], points: &[usize]) -> String {
    let mut out = String::with_capacity(word.len() * 2 + points.len());
    for (idx, &ch) in word.iter().enumerate() {
        if points.contains(&idx) {
            out.push(HYPHEN);
        }
        out.push(ch);
    }
    out
}

/// Streaming driver for the word listing mode
#[derive(Debug, Clone, Default)]
pub struct WordLister {
    word: Vec<char>,
}

impl WordLister {
    /// Create a new lister
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single character and emit a finished word
    pub fn step(&mut self, ch: char, emit: &mut impl FnMut(Line)) {
        if is_letter(ch) {
            self.word.push(ch);
        } else {
            self.complete(emit);
        }
    }

    /// Emit the last word, if any
    pub fn finish(&mut self, emit: &mut impl FnMut(Line)) {
        self.complete(emit);
    }

    fn complete(&mut self, emit: &mut impl FnMut(Line)) {
        if self.word.is_empty() {
            return;
        }

        let points = hyphenation_points(&self.word);
        log::debug!("{} split points in {}", points.len(), self.word.len());
        emit(Line::new(insert_hyphens(&self.word, &points), false));
        self.word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::emit_push;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_all() {
        let points = hyphenation_points(&chars("пропеллер"));
        assert!(points.len() > 1);
        assert_eq!(points[0], 6);
        assert_eq!(points, [6, 3]);
    }

    #[test]
    fn test_find_none() {
        assert!(hyphenation_points(&chars("лист")).is_empty());
        assert!(hyphenation_points(&chars("юла")).is_empty());
        assert!(hyphenation_points(&chars("я")).is_empty());
        assert!(hyphenation_points(&[]).is_empty());
    }

    #[test]
    fn test_hyphenate_word() {
        assert_eq!(hyphenate_word("пропеллер"), "про-пел-лер");
        assert_eq!(hyphenate_word("лист"), "лист");
    }

    #[test]
    fn test_lister_splits_on_non_letters() {
        let mut lister = WordLister::new();
        let mut lines = Vec::new();

        for ch in "лист, пропеллер!  юла".chars() {
            lister.step(ch, &mut emit_push(&mut lines));
        }
        lister.finish(&mut emit_push(&mut lines));

        let texts: Vec<_> = lines.iter().map(Line::as_str).collect();
        assert_eq!(texts, ["лист", "про-пел-лер", "юла"]);
    }

    #[test]
    fn test_lister_finish_without_word() {
        let mut lister = WordLister::new();
        let mut lines = Vec::new();
        lister.finish(&mut emit_push(&mut lines));
        assert!(lines.is_empty());
    }
}
