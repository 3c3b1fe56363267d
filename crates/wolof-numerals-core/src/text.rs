//! Transcript normalisation: spelling out integer literals inside running text.

use crate::composer::{is_in_range, NumeralRenderer};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

/// Replace integer literals in `text` with their Wolof rendering
///
/// The text is NFC-normalised first. Every maximal run of ASCII digits is
/// replaced; a `-` directly before the run makes it negative unless the `-`
/// itself follows a letter or digit (as in `12-5` or `A-4`). Runs outside the
/// renderable range are left as digits. Grouped or decimal literals, where
/// digit runs are joined by `,` or `.` (`1,000`, `3.5`), are left untouched
/// as a whole. Everything else is kept verbatim.
///
/// ```
/// use wolof_numerals_core::spell_numbers_in_text;
///
/// assert_eq!(
///     spell_numbers_in_text("Am na 15 xar"),
///     "Am na fukk ak juróom xar"
/// );
/// ```
#[must_use]
pub fn spell_numbers_in_text(text: &str) -> String {
    NumeralRenderer::shared().normalize_text(text)
}

pub(crate) fn normalize_with(renderer: &NumeralRenderer, text: &str) -> String {
    let text: String = text.nfc().collect();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        i = digit_run_end(bytes, i);

        if is_separator_between_digits(bytes, i) {
            while is_separator_between_digits(bytes, i) {
                i = digit_run_end(bytes, i + 1);
            }
            debug!("Leaving grouped literal '{}' untouched", &text[start..i]);
            continue;
        }

        let negative = start > 0
            && bytes[start - 1] == b'-'
            && !text[..start - 1]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let token_start = if negative { start - 1 } else { start };
        let digits = &text[start..i];

        let Some(spoken) = spell_token(renderer, digits, negative) else {
            continue;
        };
        debug!("Replacing '{}' with '{}'", &text[token_start..i], spoken);
        out.push_str(&text[copied..token_start]);
        out.push_str(&spoken);
        copied = i;
    }

    out.push_str(&text[copied..]);
    out
}

fn digit_run_end(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// `,` or `.` at `i` with a digit directly after it
fn is_separator_between_digits(bytes: &[u8], i: usize) -> bool {
    matches!(bytes.get(i), Some(b',' | b'.'))
        && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
}

fn spell_token(renderer: &NumeralRenderer, digits: &str, negative: bool) -> Option<String> {
    let Ok(value) = digits.parse::<i128>() else {
        warn!("Leaving digit run '{}' untouched: too long", digits);
        return None;
    };
    let value = if negative { -value } else { value };
    if !is_in_range(value) {
        warn!("Leaving digit run '{}' untouched: out of range", digits);
        return None;
    }
    Some(renderer.render_number(value))
}
