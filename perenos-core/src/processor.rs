//! Mode dispatch over the two processing drivers

use crate::{
    config::{Mode, ReflowConfig},
    error::Result,
    reflow::ReflowEngine,
    types::{emit_push, Line},
    words::WordLister,
};

/// A configured processor for one input stream
#[derive(Debug, Clone)]
pub enum Processor {
    /// Width-bounded reflow
    Reflow(ReflowEngine),
    /// Whole-word hyphenation listing
    WordList(WordLister),
}

impl Processor {
    /// Create the processor selected by `config.mode`
    ///
    /// The width is validated in both modes so that a bad configuration
    /// fails before any input is read.
    pub fn new(config: &ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(match config.mode {
            Mode::Reflow => Processor::Reflow(ReflowEngine::new(config)?),
            Mode::WordList => Processor::WordList(WordLister::new()),
        })
    }

    /// The active mode
    pub fn mode(&self) -> Mode {
        match self {
            Processor::Reflow(_) => Mode::Reflow,
            Processor::WordList(_) => Mode::WordList,
        }
    }

    /// Process a single character
    pub fn step(&mut self, ch: char, emit: &mut impl FnMut(Line)) {
        match self {
            Processor::Reflow(engine) => engine.step(ch, emit),
            Processor::WordList(lister) => lister.step(ch, emit),
        }
    }

    /// Flush at end of input
    pub fn finish(&mut self, emit: &mut impl FnMut(Line)) {
        match self {
            Processor::Reflow(engine) => engine.finish(emit),
            Processor::WordList(lister) => lister.finish(emit),
        }
    }

    /// Process a whole string and collect the emitted lines
    pub fn process_str(text: &str, config: &ReflowConfig) -> Result<Vec<Line>> {
        let mut processor = Self::new(config)?;
        let mut lines = Vec::new();

        for ch in text.chars() {
            processor.step(ch, &mut emit_push(&mut lines));
        }
        processor.finish(&mut emit_push(&mut lines));

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReflowError;

    #[test]
    fn test_mode_selection() {
        let reflow = Processor::new(&ReflowConfig::default()).unwrap();
        assert_eq!(reflow.mode(), Mode::Reflow);

        let config = ReflowConfig::builder()
            .mode(Mode::WordList)
            .build()
            .unwrap();
        assert_eq!(Processor::new(&config).unwrap().mode(), Mode::WordList);
    }

    #[test]
    fn test_word_list_still_validates_width() {
        let config = ReflowConfig {
            width: 5,
            mode: Mode::WordList,
        };
        assert_eq!(
            Processor::new(&config).unwrap_err(),
            ReflowError::WidthTooSmall { width: 5, min: 20 }
        );
    }

    #[test]
    fn test_process_str_word_list() {
        let config = ReflowConfig {
            width: 20,
            mode: Mode::WordList,
        };
        let lines = Processor::process_str("пропеллер кот", &config).unwrap();
        assert_eq!(lines[0].as_str(), "про-пел-лер");
        assert_eq!(lines[1].as_str(), "кот");
    }

    #[test]
    fn test_process_str_reflow_returns_lines() {
        let config = ReflowConfig::new(20);
        let lines = Processor::process_str("Над пропеллером кружились чайки.", &config).unwrap();
        let texts: Vec<_> = lines.iter().map(Line::as_str).collect();
        assert_eq!(texts, ["Над пропеллером кру-", "жились чайки."]);
    }
}
