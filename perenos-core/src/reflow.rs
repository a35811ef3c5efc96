//! Streaming line reflow with hyphenation
//!
//! The engine consumes one character at a time and never looks at already
//! emitted output. While the current line is shorter than the configured
//! width every character is appended. Once the line is full:
//!
//! - between words, the next character ends the line: trailing punctuation
//!   is kept on it and whitespace is dropped;
//! - inside a word, further letters of that word are held in the carry
//!   buffer until the word ends or its split can no longer change. Split
//!   points are then tried from the longest left part down and the first
//!   one accepted by [`can_hyphenate`] ends the line with a hyphen; without
//!   an acceptable split the whole word moves to the next line.
//!
//! The carry buffer is fed back through the engine after each emitted line,
//! so a carried fragment longer than the width is broken again.

use crate::{
    alphabet::{is_consonant, is_letter, is_vowel},
    config::{ReflowConfig, HYPHEN},
    error::Result,
    rules::can_hyphenate,
    types::{emit_push, Line},
};
use std::collections::VecDeque;

/// Start of the letter run ending just before `end`.
///
/// Scans backward until a non-letter is found. A buffer with no boundary
/// before `end` starts its word at index 0.
pub fn word_start(buf: &[char], end: usize) -> usize {
    let end = end.min(buf.len());
    buf[..end]
        .iter()
        .rposition(|&ch| !is_letter(ch))
        .map_or(0, |idx| idx + 1)
}

/// Start of the word the buffer ends with, if it ends inside one
fn trailing_word(buf: &[char]) -> Option<usize> {
    match buf.last() {
        Some(&ch) if is_letter(ch) => Some(word_start(buf, buf.len())),
        _ => None,
    }
}

/// Streaming reflow engine for a fixed line width
#[derive(Debug, Clone)]
pub struct ReflowEngine {
    width: usize,
    /// Line being assembled
    line: Vec<char>,
    /// Characters read past the boundary; they start the next line
    carry: VecDeque<char>,
    /// Index in `line` where the open word starts
    pivot: Option<usize>,
    /// The pending line ends with an inserted hyphen
    hyphenated: bool,
}

impl ReflowEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: &ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_width_unchecked(config.width))
    }

    /// Create an engine for the given width
    pub fn with_width(width: usize) -> Result<Self> {
        Self::new(&ReflowConfig::new(width))
    }

    pub(crate) fn with_width_unchecked(width: usize) -> Self {
        Self {
            width,
            line: Vec::with_capacity(width + 1),
            carry: VecDeque::new(),
            pivot: None,
            hyphenated: false,
        }
    }

    /// Target line width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Content of the line currently being assembled
    pub fn buffered(&self) -> String {
        self.line.iter().collect()
    }

    /// Letters of the open word held past the boundary
    pub fn pending(&self) -> String {
        self.carry.iter().collect()
    }

    /// Process a single character and emit any completed line
    pub fn step(&mut self, ch: char, emit: &mut impl FnMut(Line)) {
        self.handle(Some(ch), emit);
    }

    /// Flush the remaining input at end of stream
    ///
    /// A line shorter than the width is emitted as-is and never hyphenated.
    /// A full line goes through the overflow path once more, as if a
    /// non-letter followed it, until what is left fits.
    pub fn finish(&mut self, emit: &mut impl FnMut(Line)) {
        while !self.line.is_empty() && self.line.len() >= self.width {
            self.handle(None, emit);
        }
        debug_assert!(self.carry.is_empty());

        if !self.line.is_empty() {
            let text: String = self.line.drain(..).collect();
            emit(Line::new(text, false));
        }
        self.pivot = None;
    }

    /// `None` is the end-of-input marker: a non-letter that is never stored.
    fn handle(&mut self, input: Option<char>, emit: &mut impl FnMut(Line)) {
        if self.line.len() < self.width {
            if let Some(ch) = input {
                self.push(ch);
            }
            return;
        }

        debug_assert_eq!(self.pivot.is_some(), trailing_word(&self.line).is_some());
        debug_assert!(self.pivot.is_some() || self.carry.is_empty());

        match (self.pivot, input) {
            // A new word begins past the boundary
            (None, Some(ch)) if is_letter(ch) => self.carry.push_back(ch),
            (None, Some(ch)) => self.close_line(ch),
            (None, None) => {}
            (Some(start), Some(ch)) if is_letter(ch) => {
                self.carry.push_back(ch);
                if !self.split_settled() {
                    return;
                }
                self.break_word(start, None);
            }
            (Some(start), input) => self.break_word(start, input),
        }

        self.flush(emit);
    }

    fn push(&mut self, ch: char) {
        let idx = self.line.len();
        self.line.push(ch);

        if !is_letter(ch) {
            self.pivot = None;
        } else if self.pivot.is_none() {
            self.pivot = Some(word_start(&self.line, idx));
        }
    }

    /// Whether more letters of the open word can still change its split.
    ///
    /// Every candidate keeps at least one letter of the word on the line,
    /// so once the held letters contain a vowel and a consonant each rule
    /// already sees all it needs. Holding is capped at one line width.
    fn split_settled(&self) -> bool {
        self.carry.len() >= self.width
            || (self.carry.iter().any(|&ch| is_vowel(ch))
                && self.carry.iter().any(|&ch| is_consonant(ch)))
    }

    /// Keep punctuation on the finished line, drop whitespace
    fn close_line(&mut self, ch: char) {
        if !ch.is_whitespace() {
            self.line.push(ch);
        }
    }

    /// Split or move the word starting at `start`, then queue `trailing`.
    ///
    /// The left part is taken from the line, the right part is the rest of
    /// the line followed by the held letters. A word filling the whole line
    /// with no acceptable split stays where it is.
    fn break_word(&mut self, start: usize, trailing: Option<char>) {
        let word: Vec<char> = self.line[start..]
            .iter()
            .chain(self.carry.iter())
            .copied()
            .collect();
        let on_line = self.line.len() - start;

        // The left part keeps at least two letters
        let split = (2..on_line)
            .rev()
            .find(|&at| can_hyphenate(&word[..at], &word[at..]));

        match split {
            Some(at) => {
                log::debug!(
                    "hyphenating {}-{}",
                    word[..at].iter().collect::<String>(),
                    word[at..].iter().collect::<String>()
                );
                self.line.truncate(start + at);
                self.line.push(HYPHEN);
                self.carry = word[at..].iter().copied().collect();
                self.carry.extend(trailing);
                self.hyphenated = true;
            }
            None if start > 0 => {
                log::debug!(
                    "moving {} to the next line",
                    word.iter().collect::<String>()
                );
                self.line.truncate(start);
                self.carry = word.into();
                self.carry.extend(trailing);
            }
            None => {
                log::debug!("no split for a word filling the line, breaking hard");
                match trailing {
                    Some(ch) if self.carry.is_empty() => self.close_line(ch),
                    other => self.carry.extend(other),
                }
            }
        }
    }

    /// Emit the line and feed the carry back in as the start of the next one
    fn flush(&mut self, emit: &mut impl FnMut(Line)) {
        let text: String = self.line.drain(..).collect();
        emit(Line::new(text, self.hyphenated));

        self.pivot = None;
        self.hyphenated = false;

        let carried: Vec<char> = self.carry.drain(..).collect();
        for ch in carried {
            self.handle(Some(ch), emit);
        }
    }
}

/// Reflow a whole string with the given configuration
///
/// Newlines are not normalized here; callers that want them treated as
/// spaces must replace them first.
pub fn reflow(text: &str, config: &ReflowConfig) -> Result<Vec<Line>> {
    let mut engine = ReflowEngine::new(config)?;
    Ok(run(&mut engine, text))
}

fn run(engine: &mut ReflowEngine, text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for ch in text.chars() {
        engine.step(ch, &mut emit_push(&mut lines));
    }
    engine.finish(&mut emit_push(&mut lines));
    lines
}
