//! Host-level tests for the decision engine.

use word_clock::decision::decide;
use word_clock::phrase::{Phrase, PhraseSet};
use word_clock::style::StyleConfig;

fn phrases(list: &[Phrase]) -> PhraseSet {
    list.iter().copied().collect()
}

const PLAIN: StyleConfig = StyleConfig {
    show_it_is: false,
    ..StyleConfig::DEFAULT
};

fn all_styles() -> impl Iterator<Item = StyleConfig> {
    (0..32_u8).map(|bits| StyleConfig {
        show_it_is: bits & 1 != 0,
        use_midnight_word: bits & 2 != 0,
        use_zero_word: bits & 4 != 0,
        use_quarter_to: bits & 8 != 0,
        use_twenty_to: bits & 16 != 0,
    })
}

#[test]
fn every_time_names_a_word() {
    for style in all_styles() {
        for hour in 0..24 {
            for minute in 0..60 {
                let decision = decide(hour, minute, &style);
                assert!(!decision.phrases.is_empty(), "{hour}:{minute} with {style:?}");
            }
        }
    }
}

#[test]
fn decide_is_pure() {
    for hour in 0..24 {
        for minute in 0..60 {
            assert_eq!(
                decide(hour, minute, &StyleConfig::DEFAULT),
                decide(hour, minute, &StyleConfig::DEFAULT)
            );
        }
    }
}

#[test]
fn dot_count_is_minute_mod_five_and_fills_in_order() {
    for minute in 0..60_u8 {
        let dots = decide(7, minute, &StyleConfig::DEFAULT).dots;
        assert_eq!(dots.count(), usize::from(minute % 5));
        for dot in 1..4 {
            if dots.is_lit(dot) {
                assert!(dots.is_lit(dot - 1));
            }
        }
    }
}

#[test]
fn inputs_are_normalized() {
    for hour in 0..24_u8 {
        for minute in 0..60_u8 {
            let expected = decide(hour, minute, &StyleConfig::DEFAULT);
            assert_eq!(decide(hour + 24, minute, &StyleConfig::DEFAULT), expected);
            assert_eq!(decide(hour, minute + 60, &StyleConfig::DEFAULT), expected);
        }
    }
    assert_eq!(
        decide(255, 255, &StyleConfig::DEFAULT),
        decide(255 % 24, 255 % 60, &StyleConfig::DEFAULT)
    );
}

#[test]
fn minute_five_starts_the_second_band() {
    assert_eq!(
        decide(4, 4, &PLAIN).phrases,
        phrases(&[Phrase::HourFour, Phrase::OClock])
    );
    assert_eq!(
        decide(4, 5, &PLAIN).phrases,
        phrases(&[Phrase::Five, Phrase::Past, Phrase::HourFour])
    );
}

#[test]
fn midnight_word_replaces_zero_hour() {
    let decision = decide(0, 2, &StyleConfig::DEFAULT);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::Midnight])
    );
    assert_eq!(decision.dots.count(), 2);

    let decision = decide(0, 0, &StyleConfig::DEFAULT);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::Midnight])
    );
    assert_eq!(decision.dots.count(), 0);

    // Noon is never "MITTERNACHT"
    assert!(!decide(12, 2, &StyleConfig::DEFAULT).phrases.contains(Phrase::Midnight));
}

#[test]
fn zero_word_without_midnight() {
    let style = StyleConfig {
        use_midnight_word: false,
        ..StyleConfig::DEFAULT
    };
    let decision = decide(0, 0, &style);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::Zero, Phrase::ZeroOClock])
    );
    assert_eq!(decision.dots.count(), 0);
}

#[test]
fn zero_word_sub_phrases() {
    let expected = [
        (3, None),
        (7, Some(Phrase::Five)),
        (12, Some(Phrase::Ten)),
        (19, Some(Phrase::Fifteen)),
        (24, Some(Phrase::Twenty)),
    ];
    for (minute, sub_phrase) in expected {
        let mut want = phrases(&[Phrase::Zero, Phrase::ZeroOClock]);
        if let Some(sub_phrase) = sub_phrase {
            want.insert(sub_phrase);
        }
        // Noon takes the zero wording too
        assert_eq!(decide(12, minute, &PLAIN).phrases, want, "12:{minute}");
    }
    // Midnight keeps priority for its own band, zero wording resumes after it
    assert!(decide(0, 6, &PLAIN).phrases.contains(Phrase::Zero));
    // :25 falls back to the ladder
    assert_eq!(
        decide(0, 25, &PLAIN).phrases,
        phrases(&[Phrase::Five, Phrase::To, Phrase::Half, Phrase::HourOne])
    );
}

#[test]
fn twelve_without_zero_word() {
    let style = StyleConfig {
        show_it_is: false,
        use_midnight_word: false,
        use_zero_word: false,
        ..StyleConfig::DEFAULT
    };
    assert_eq!(
        decide(0, 0, &style).phrases,
        phrases(&[Phrase::HourTwelve, Phrase::OClock])
    );
    assert_eq!(
        decide(12, 10, &style).phrases,
        phrases(&[Phrase::Ten, Phrase::Past, Phrase::HourTwelve])
    );
}

#[test]
fn quarter_past_two() {
    let decision = decide(14, 16, &StyleConfig::DEFAULT);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::Quarter, Phrase::Past, Phrase::HourTwo])
    );
    assert_eq!(decision.dots.count(), 1);
}

#[test]
fn quarter_names_next_hour_without_quarter_to() {
    let style = StyleConfig {
        use_quarter_to: false,
        ..PLAIN
    };
    assert_eq!(
        decide(14, 16, &style).phrases,
        phrases(&[Phrase::Quarter, Phrase::HourThree])
    );
}

#[test]
fn three_quarters_ten() {
    let style = StyleConfig {
        use_quarter_to: false,
        ..StyleConfig::DEFAULT
    };
    let decision = decide(9, 47, &style);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::ThreeQuarters, Phrase::HourTen])
    );
    assert_eq!(decision.dots.count(), 2);

    assert_eq!(
        decide(9, 47, &PLAIN).phrases,
        phrases(&[Phrase::Quarter, Phrase::To, Phrase::HourTen])
    );
}

#[test]
fn five_to_twelve_before_midnight() {
    let decision = decide(23, 58, &StyleConfig::DEFAULT);
    assert_eq!(
        decision.phrases,
        phrases(&[Phrase::It, Phrase::Is, Phrase::Five, Phrase::To, Phrase::HourTwelve])
    );
    assert_eq!(decision.dots.count(), 3);
}

#[test]
fn twenty_past_and_twenty_to() {
    assert_eq!(
        decide(5, 20, &PLAIN).phrases,
        phrases(&[Phrase::Twenty, Phrase::Past, Phrase::HourFive])
    );
    assert_eq!(
        decide(5, 40, &PLAIN).phrases,
        phrases(&[Phrase::Twenty, Phrase::To, Phrase::HourSix])
    );

    let style = StyleConfig {
        use_twenty_to: false,
        ..PLAIN
    };
    assert_eq!(
        decide(5, 20, &style).phrases,
        phrases(&[Phrase::Ten, Phrase::To, Phrase::Half, Phrase::HourSix])
    );
    assert_eq!(
        decide(5, 40, &style).phrases,
        phrases(&[Phrase::Ten, Phrase::Past, Phrase::Half, Phrase::HourSix])
    );
}

#[test]
fn half_hour_names_next_hour() {
    assert_eq!(
        decide(8, 30, &PLAIN).phrases,
        phrases(&[Phrase::Half, Phrase::HourNine])
    );
    assert_eq!(
        decide(8, 35, &PLAIN).phrases,
        phrases(&[Phrase::Five, Phrase::Past, Phrase::Half, Phrase::HourNine])
    );
    assert_eq!(
        decide(11, 50, &PLAIN).phrases,
        phrases(&[Phrase::Ten, Phrase::To, Phrase::HourTwelve])
    );
}

#[test]
fn short_one_only_at_full_hour() {
    assert_eq!(
        decide(1, 0, &PLAIN).phrases,
        phrases(&[Phrase::HourOneShort, Phrase::OClock])
    );
    assert_eq!(
        decide(0, 55, &PLAIN).phrases,
        phrases(&[Phrase::Five, Phrase::To, Phrase::HourOne])
    );
}
