//! Full-number rendering: sign, range, magnitude decomposition and assembly.

use crate::block::BlockRenderer;
use crate::error::{SpellerError, SpellerResult};
use crate::lexicon::{Lexicon, Magnitude};
use crate::MAX_RENDERABLE;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

static DEFAULT_RENDERER: Lazy<NumeralRenderer> = Lazy::new(NumeralRenderer::wolof);

/// A non-negative value split into its 0-999 blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    /// Multiplier of 10^9
    pub billions: u16,
    /// Multiplier of 10^6
    pub millions: u16,
    /// Multiplier of 10^3
    pub thousands: u16,
    /// Remaining 0-999
    pub units: u16,
}

impl Decomposition {
    /// Split `value` by integer division and modulo on powers of 1000
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn of(value: u32) -> Self {
        // Every quotient is < 1000 except billions, which is at most 4 for u32.
        Self {
            billions: (value / 1_000_000_000) as u16,
            millions: (value % 1_000_000_000 / 1_000_000) as u16,
            thousands: (value % 1_000_000 / 1_000) as u16,
            units: (value % 1_000) as u16,
        }
    }

    /// Block held at `magnitude`
    #[must_use]
    pub const fn block(&self, magnitude: Magnitude) -> u16 {
        match magnitude {
            Magnitude::Billion => self.billions,
            Magnitude::Million => self.millions,
            Magnitude::Thousand => self.thousands,
        }
    }

    /// Reassemble the original value
    #[must_use]
    pub fn value(&self) -> u64 {
        Magnitude::DESCENDING
            .iter()
            .map(|&m| u64::from(self.block(m)) * u64::from(m.value()))
            .sum::<u64>()
            + u64::from(self.units)
    }

    /// Number of non-zero blocks above the units block
    #[must_use]
    pub fn scaled_blocks(&self) -> usize {
        Magnitude::DESCENDING
            .iter()
            .filter(|&&m| self.block(m) > 0)
            .count()
    }
}

/// Whether `n` renders to words rather than the sentinel
#[must_use]
pub fn is_in_range<N: Into<i128>>(n: N) -> bool {
    n.into().unsigned_abs() <= u128::from(MAX_RENDERABLE)
}

/// Integer-to-text renderer over a lexicon
///
/// Cloning is cheap; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct NumeralRenderer {
    lexicon: Arc<Lexicon>,
}

impl NumeralRenderer {
    /// Renderer over the built-in Wolof lexicon
    #[must_use]
    pub fn wolof() -> Self {
        Self {
            lexicon: Lexicon::shared_wolof(),
        }
    }

    /// Process-wide Wolof renderer
    #[must_use]
    pub fn shared() -> &'static Self {
        &*DEFAULT_RENDERER
    }

    /// Renderer over a custom lexicon
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the lexicon fails validation.
    pub fn with_lexicon(lexicon: Lexicon) -> SpellerResult<Self> {
        lexicon.validate()?;
        Ok(Self {
            lexicon: Arc::new(lexicon),
        })
    }

    /// Lexicon used by this renderer
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Spell out `n`
    ///
    /// Zero yields the zero word. Values whose magnitude exceeds
    /// [`MAX_RENDERABLE`] yield the lexicon's out-of-range sentinel regardless
    /// of sign. Negative values are the negation prefix followed by the
    /// rendering of their magnitude.
    #[must_use]
    pub fn render_number<N: Into<i128>>(&self, n: N) -> String {
        let n = n.into();
        let value = match u32::try_from(n.unsigned_abs()) {
            Ok(value) if value <= MAX_RENDERABLE => value,
            _ => {
                warn!("Value {} exceeds renderable range, returning sentinel", n);
                return self.lexicon.out_of_range.clone();
            }
        };

        if n < 0 {
            return format!("{} {}", self.lexicon.negative, self.render_magnitude(value));
        }
        self.render_magnitude(value)
    }

    /// Like [`render_number`](Self::render_number) but reports out-of-range
    /// values as an error instead of the sentinel
    ///
    /// # Errors
    ///
    /// Returns [`SpellerError::OutOfRange`] if `|n|` exceeds [`MAX_RENDERABLE`].
    pub fn try_render_number<N: Into<i128>>(&self, n: N) -> SpellerResult<String> {
        let n = n.into();
        if !is_in_range(n) {
            return Err(SpellerError::out_of_range(n));
        }
        Ok(self.render_number(n))
    }

    /// Render many values in parallel, preserving order
    #[must_use]
    pub fn render_all(&self, numbers: &[i128]) -> Vec<String> {
        numbers.par_iter().map(|&n| self.render_number(n)).collect()
    }

    /// Replace integer literals in `text` with their spoken form
    ///
    /// See [`spell_numbers_in_text`](crate::spell_numbers_in_text).
    #[must_use]
    pub fn normalize_text(&self, text: &str) -> String {
        crate::text::normalize_with(self, text)
    }

    fn render_magnitude(&self, value: u32) -> String {
        let lexicon = &*self.lexicon;
        if value == 0 {
            return lexicon.unit(0).to_string();
        }

        let blocks = Decomposition::of(value);
        debug!(
            value,
            billions = blocks.billions,
            millions = blocks.millions,
            thousands = blocks.thousands,
            units = blocks.units,
            "Decomposed value into blocks"
        );

        let renderer = BlockRenderer::new(lexicon);
        let mut segments: Vec<String> = Vec::with_capacity(7);

        for magnitude in Magnitude::DESCENDING {
            let block = blocks.block(magnitude);
            if block == 0 {
                continue;
            }
            if !segments.is_empty() {
                segments.push(lexicon.conjunction.clone());
            }

            let word = lexicon.scale(magnitude);
            if block == 1 {
                segments.push(word.singular.clone());
            } else {
                segments.push(format!(
                    "{}{} {}",
                    renderer.render(block),
                    lexicon.plural_affix,
                    word.generic
                ));
            }
        }

        if blocks.units > 0 {
            if !segments.is_empty() {
                segments.push(lexicon.conjunction.clone());
            }
            segments.push(renderer.render(blocks.units));
        }

        segments.join(" ").trim().to_string()
    }
}

impl Default for NumeralRenderer {
    fn default() -> Self {
        Self::wolof()
    }
}
