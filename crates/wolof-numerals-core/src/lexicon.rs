//! Lexical tables used by the renderer.
//!
//! A [`Lexicon`] carries every fixed word the renderer needs: the unit and
//! tens tables, the hundred word, the three scale words, the pluralizing
//! affix, the conjunction, the negation prefix and the out-of-range sentinel.
//! The built-in Wolof lexicon is created once and shared for the lifetime of
//! the process; custom lexicons can be loaded from TOML.

use crate::error::{SpellerError, SpellerResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

static WOLOF: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::build_wolof()));

/// Scale tiers above the units block, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    /// 10^9
    Billion,
    /// 10^6
    Million,
    /// 10^3
    Thousand,
}

impl Magnitude {
    /// All scale tiers in descending order
    pub const DESCENDING: [Self; 3] = [Self::Billion, Self::Million, Self::Thousand];

    /// Numeric value of one unit of this scale
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Billion => 1_000_000_000,
            Self::Million => 1_000_000,
            Self::Thousand => 1_000,
        }
    }

    /// Get magnitude name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Billion => "billion",
            Self::Million => "million",
            Self::Thousand => "thousand",
        }
    }
}

impl std::fmt::Display for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale word in its two forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeWord {
    /// Used alone when the multiplier block is exactly one
    pub singular: String,
    /// Used after a pluralized multiplier
    pub generic: String,
}

impl MagnitudeWord {
    /// Scale word whose singular and generic forms coincide
    #[must_use]
    pub fn uniform(word: &str) -> Self {
        Self {
            singular: word.to_string(),
            generic: word.to_string(),
        }
    }
}

/// Complete set of words for one target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Unit words for digits 0 through 9; index 0 is the zero word
    pub units: [String; 10],
    /// Tens words for tens digits 1 through 9 (index 0 is "ten")
    pub tens: [String; 9],
    /// Word for one hundred, also used after a pluralized multiplier
    pub hundred: String,
    /// Thousand scale word
    pub thousand: MagnitudeWord,
    /// Million scale word
    pub million: MagnitudeWord,
    /// Billion scale word
    pub billion: MagnitudeWord,
    /// Affix appended without a space to any multiplier other than one
    pub plural_affix: String,
    /// Linking word between clauses and segments
    pub conjunction: String,
    /// Prefix for negative numbers
    pub negative: String,
    /// Returned in place of a rendering for out-of-range values
    pub out_of_range: String,
}

impl Lexicon {
    /// The built-in Wolof lexicon
    #[must_use]
    pub fn wolof() -> &'static Self {
        &**WOLOF
    }

    pub(crate) fn shared_wolof() -> Arc<Self> {
        Arc::clone(&*WOLOF)
    }

    fn build_wolof() -> Self {
        let units = [
            "nópp",
            "benn",
            "ñaar",
            "ñett",
            "ñeent",
            "juróom",
            "juróom benn",
            "juróom ñaar",
            "juróom ñett",
            "juróom ñeent",
        ];
        let tens = std::array::from_fn(|i| {
            if i == 0 {
                "fukk".to_string()
            } else {
                format!("{} fukk", units[i + 1])
            }
        });

        Self {
            units: units.map(str::to_string),
            tens,
            hundred: "téeméer".to_string(),
            thousand: MagnitudeWord::uniform("junni"),
            million: MagnitudeWord::uniform("million"),
            billion: MagnitudeWord::uniform("milliar"),
            plural_affix: "i".to_string(),
            conjunction: "ak".to_string(),
            negative: "minus".to_string(),
            out_of_range: crate::OUT_OF_RANGE_SENTINEL.to_string(),
        }
    }

    /// Parse and validate a lexicon from TOML text
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is malformed, a table has the
    /// wrong length, or any word fails [`Lexicon::validate`].
    pub fn from_toml_str(content: &str) -> SpellerResult<Self> {
        let lexicon: Self = toml::from_str(content)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load and validate a lexicon from a TOML file
    ///
    /// # Errors
    ///
    /// Returns a file error if the file cannot be read, otherwise the errors
    /// of [`Lexicon::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> SpellerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpellerError::file(format!("Failed to read lexicon {}: {e}", path.display()))
        })?;
        let lexicon = Self::from_toml_str(&content)?;
        info!("Loaded lexicon from {}", path.display());
        Ok(lexicon)
    }

    /// Unit word for `digit` (0-9)
    ///
    /// # Panics
    ///
    /// Panics if `digit` is greater than 9.
    #[must_use]
    pub fn unit(&self, digit: u16) -> &str {
        &self.units[usize::from(digit)]
    }

    /// Tens word for `digit` (1-9)
    ///
    /// # Panics
    ///
    /// Panics if `digit` is 0 or greater than 9.
    #[must_use]
    pub fn tens(&self, digit: u16) -> &str {
        &self.tens[usize::from(digit) - 1]
    }

    /// Scale word for `magnitude`
    #[must_use]
    pub const fn scale(&self, magnitude: Magnitude) -> &MagnitudeWord {
        match magnitude {
            Magnitude::Billion => &self.billion,
            Magnitude::Million => &self.million,
            Magnitude::Thousand => &self.thousand,
        }
    }

    /// Validate lexicon content
    ///
    /// Every word must be non-empty, free of ASCII digits, and free of
    /// leading, trailing or doubled whitespace. The pluralizing affix may be
    /// empty, and the sentinel may contain digits.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending entry.
    pub fn validate(&self) -> SpellerResult<()> {
        let mut words: Vec<(String, &str)> = Vec::with_capacity(28);
        for (digit, word) in self.units.iter().enumerate() {
            words.push((format!("units[{digit}]"), word.as_str()));
        }
        for (index, word) in self.tens.iter().enumerate() {
            words.push((format!("tens[{}]", index + 1), word.as_str()));
        }
        words.push(("hundred".to_string(), self.hundred.as_str()));
        for magnitude in Magnitude::DESCENDING {
            let scale = self.scale(magnitude);
            words.push((format!("{magnitude}.singular"), scale.singular.as_str()));
            words.push((format!("{magnitude}.generic"), scale.generic.as_str()));
        }
        words.push(("conjunction".to_string(), self.conjunction.as_str()));
        words.push(("negative".to_string(), self.negative.as_str()));

        for (label, word) in words {
            check_word(&label, word, false)?;
        }

        if !self.plural_affix.is_empty() {
            check_word("plural_affix", &self.plural_affix, false)?;
        }

        check_word("out_of_range", &self.out_of_range, true)
    }
}

fn check_word(label: &str, word: &str, allow_digits: bool) -> SpellerResult<()> {
    let problem = if word.is_empty() {
        "cannot be empty"
    } else if !allow_digits && word.bytes().any(|b| b.is_ascii_digit()) {
        "cannot contain digits"
    } else if word.trim() != word || word.contains("  ") {
        "has stray whitespace"
    } else {
        return Ok(());
    };

    warn!("Rejecting lexicon entry '{}': {:?} {}", label, word, problem);
    Err(SpellerError::configuration(format!(
        "Lexicon entry '{label}' {problem}"
    )))
}
