// Property tests over the full renderable range

use proptest::prelude::*;
use wolof_numerals_core::{spell_number, Decomposition, Lexicon, Magnitude, OUT_OF_RANGE_SENTINEL};

fn scale_word_count(text: &str) -> usize {
    let lexicon = Lexicon::wolof();
    let scales: Vec<&str> = Magnitude::DESCENDING
        .iter()
        .map(|&m| lexicon.scale(m).generic.as_str())
        .collect();
    text.split(' ').filter(|word| scales.contains(word)).count()
}

proptest! {
    #[test]
    fn renders_words_only(n in 1u32..=999_999_999) {
        let text = spell_number(n);
        prop_assert!(!text.is_empty());
        prop_assert!(!text.bytes().any(|b| b.is_ascii_digit()), "{}: {}", n, text);
    }

    #[test]
    fn whitespace_is_tidy(n in -999_999_999i64..=999_999_999) {
        let text = spell_number(n);
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.contains("  "), "{}: {:?}", n, text);
    }

    #[test]
    fn negation_is_prefix(n in 1i64..=999_999_999) {
        prop_assert_eq!(spell_number(-n), format!("minus {}", spell_number(n)));
    }

    #[test]
    fn beyond_range_is_sentinel(n in 1_000_000_000i128..=i128::MAX, negative in any::<bool>()) {
        let n = if negative { -n } else { n };
        prop_assert_eq!(spell_number(n), OUT_OF_RANGE_SENTINEL);
    }

    #[test]
    fn one_scale_word_per_scaled_block(n in 1u32..=999_999_999) {
        let blocks = Decomposition::of(n);
        prop_assert_eq!(scale_word_count(&spell_number(n)), blocks.scaled_blocks());
    }

    #[test]
    fn decomposition_recombines(n in any::<u32>()) {
        let blocks = Decomposition::of(n);
        prop_assert_eq!(blocks.value(), u64::from(n));
        prop_assert!(blocks.millions <= 999 && blocks.thousands <= 999 && blocks.units <= 999);
    }
}

#[test]
fn zero_is_the_zero_word() {
    assert_eq!(spell_number(0), Lexicon::wolof().unit(0));
}
