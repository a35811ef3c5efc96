//! Dictionary-free hyphenation and streaming line reflow for Russian text
//!
//! Hyphenation decisions are made from letter-class heuristics alone:
//! vowel and consonant patterns, the soft and hard signs, short i, and
//! doubled consonants. Two drivers share the same rule set:
//!
//! - [`ReflowEngine`] reflows a character stream into lines no wider than a
//!   configured width, splitting a word with a hyphen when it crosses the
//!   line boundary;
//! - [`WordLister`] lists every acceptable split point of each word.
//!
//! # Example
//!
//! ```rust
//! use perenos_core::{reflow, ReflowConfig};
//!
//! let config = ReflowConfig::builder().width(20).build().unwrap();
//! let lines = reflow("Над пропеллером кружились чайки.", &config).unwrap();
//!
//! assert!(lines.iter().all(|line| line.len() <= 21));
//! assert_eq!(lines[0].as_str(), "Над пропеллером кру-");
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod processor;
pub mod reflow;
pub mod rules;
pub mod types;
pub mod words;

pub use alphabet::LetterClass;
pub use config::{Mode, ReflowConfig, ReflowConfigBuilder, DEFAULT_WIDTH, MIN_WIDTH};
pub use error::{ReflowError, Result};
pub use processor::Processor;
pub use reflow::{reflow, ReflowEngine};
pub use rules::can_hyphenate;
pub use types::{emit_push, Line};
pub use words::{hyphenate_word, hyphenation_points, WordLister};
