//! # Wolof Numerals Core
//!
//! Deterministic integer-to-Wolof speller for TTS transcript preparation.
//!
//! ## Features
//!
//! - Block-based rendering up to 999 999 999 with `ak` conjunctions
//! - `-i` agreement on multipliers and bare scale words for a multiplier of one
//! - Fixed sentinel output for out-of-range values, plus a checked variant
//! - Custom lexicons loaded from TOML
//! - Spelling out integer literals inside running text
//!
//! ## Example
//!
//! ```rust
//! use wolof_numerals_core::{spell_number, NumeralRenderer};
//!
//! assert_eq!(spell_number(0), "nópp");
//! assert_eq!(spell_number(2_000), "ñaari junni");
//!
//! let renderer = NumeralRenderer::wolof();
//! assert_eq!(renderer.render_number(-42), "minus ñeent fukk ak ñaar");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod composer;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod parse;
pub mod text;

// Re-export main types for convenience
pub use block::{BlockRenderer, BLOCK_MAX};
pub use composer::{is_in_range, Decomposition, NumeralRenderer};
pub use config::{OutputFormat, SpellerConfig, DEFAULT_LOG_FILTER};
pub use error::{SpellerError, SpellerResult};
pub use lexicon::{Lexicon, Magnitude, MagnitudeWord};
pub use parse::parse_integer;
pub use text::spell_numbers_in_text;

/// Version information for the wolof-numerals-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest magnitude that renders to words
pub const MAX_RENDERABLE: u32 = 999_999_999;

/// Text returned by the built-in lexicon for values beyond [`MAX_RENDERABLE`]
pub const OUT_OF_RANGE_SENTINEL: &str = "Number too large to process";

/// Spell out `n` with the built-in Wolof lexicon
///
/// Shorthand for [`NumeralRenderer::render_number`] on the shared renderer.
#[must_use]
pub fn spell_number<N: Into<i128>>(n: N) -> String {
    NumeralRenderer::shared().render_number(n)
}
