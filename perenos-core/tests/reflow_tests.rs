//! End-to-end reflow and word listing through the public API

use perenos_core::{
    emit_push, hyphenate_word, hyphenation_points, reflow, Line, Mode, Processor,
    ReflowConfig, ReflowEngine, ReflowError, MIN_WIDTH,
};

const TEXT: &str = "Над пропеллером кружились чайки, а рассвет медленно \
                    поднимался над бесконечной рекой.";

fn texts(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(Line::as_str).collect()
}

#[test]
fn test_reflow_at_minimum_width() {
    let config = ReflowConfig::builder().width(MIN_WIDTH).build().unwrap();
    let lines = reflow(TEXT, &config).unwrap();

    assert_eq!(
        texts(&lines),
        [
            "Над пропеллером кру-",
            "жились чайки, а рас-",
            "свет медленно подни-",
            "мался над бесконеч-",
            "ной рекой.",
        ]
    );
    let flags: Vec<_> = lines.iter().map(|line| line.hyphenated).collect();
    assert_eq!(flags, [true, true, true, true, false]);
}

#[test]
fn test_text_fitting_the_width_is_untouched() {
    let config = ReflowConfig::new(100);
    let lines = reflow(TEXT, &config).unwrap();
    assert_eq!(texts(&lines), [TEXT]);
}

#[test]
fn test_split_matches_whole_word_points() {
    // Each split is the longest accepted point of the complete word that
    // still fits: "рас-свет", "подни-мался", "бесконеч-ной"
    let config = ReflowConfig::new(MIN_WIDTH);
    let lines = reflow(TEXT, &config).unwrap();

    for (word, left) in [("рассвет", 3), ("поднимался", 5), ("бесконечной", 8)] {
        let chars: Vec<char> = word.chars().collect();
        assert!(hyphenation_points(&chars).contains(&left));
        let suffix: String = chars[..left].iter().chain(['-'].iter()).collect();
        assert!(
            lines
                .iter()
                .any(|line| line.hyphenated && line.text.ends_with(&suffix)),
            "no line ends with {suffix}"
        );
    }
}

#[test]
fn test_narrow_width_fails_before_processing() {
    let err = ReflowEngine::with_width(12).unwrap_err();
    assert_eq!(err, ReflowError::WidthTooSmall { width: 12, min: 20 });
    assert!(err.to_string().contains("minimum is 20"));
}

#[test]
fn test_streaming_matches_batch() {
    let config = ReflowConfig::new(24);
    let batch = reflow(TEXT, &config).unwrap();

    let mut engine = ReflowEngine::new(&config).unwrap();
    let mut streamed = Vec::new();
    for ch in TEXT.chars() {
        engine.step(ch, &mut emit_push(&mut streamed));
    }
    engine.finish(&mut emit_push(&mut streamed));

    assert_eq!(batch, streamed);
}

#[test]
fn test_word_list_mode() {
    let config = ReflowConfig {
        width: MIN_WIDTH,
        mode: Mode::WordList,
    };
    let lines = Processor::process_str("Пропеллер, лист и кот.", &config).unwrap();
    assert_eq!(texts(&lines), ["Про-пел-лер", "лист", "и", "кот"]);
}

#[test]
fn test_three_letter_word_has_no_points() {
    assert!(hyphenation_points(&['к', 'о', 'т']).is_empty());
    assert_eq!(hyphenate_word("кот"), "кот");
}

#[test]
fn test_word_list_scenarios() {
    let word: Vec<char> = "пропеллер".chars().collect();
    let points = hyphenation_points(&word);
    assert!(points.len() >= 2);
    assert_eq!(points[0], 6);

    let word: Vec<char> = "лист".chars().collect();
    assert!(hyphenation_points(&word).is_empty());
}
