//! Spelling of a single 0-999 block.

use crate::lexicon::Lexicon;

/// Largest value a single block can hold
pub const BLOCK_MAX: u16 = 999;

/// Renders values in `[0, 999]` from a lexicon's unit and tens tables
#[derive(Debug, Clone, Copy)]
pub struct BlockRenderer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> BlockRenderer<'a> {
    /// Create a block renderer over `lexicon`
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Spell out `n`
    ///
    /// Zero yields an empty string, meaning nothing is said at this tier.
    /// Hundreds take the bare hundred word for one and the pluralized unit
    /// word followed by the hundred word otherwise. The conjunction goes before
    /// the tens clause only after a hundreds clause, and before the units
    /// clause after any clause.
    ///
    /// Values above [`BLOCK_MAX`] are a caller bug; debug builds assert on it.
    #[must_use]
    pub fn render(&self, n: u16) -> String {
        debug_assert!(n <= BLOCK_MAX, "block value {n} exceeds {BLOCK_MAX}");
        if n == 0 {
            return String::new();
        }

        let lexicon = self.lexicon;
        let hundreds = n / 100;
        let remainder = n % 100;
        let tens_digit = remainder / 10;
        let unit_digit = remainder % 10;

        let mut clauses: Vec<String> = Vec::with_capacity(5);

        match hundreds {
            0 => {}
            1 => clauses.push(lexicon.hundred.clone()),
            _ => {
                clauses.push(format!("{}{}", lexicon.unit(hundreds), lexicon.plural_affix));
                clauses.push(lexicon.hundred.clone());
            }
        }

        if tens_digit > 0 {
            if hundreds > 0 {
                clauses.push(lexicon.conjunction.clone());
            }
            clauses.push(lexicon.tens(tens_digit).to_string());
        }

        if unit_digit > 0 {
            if !clauses.is_empty() {
                clauses.push(lexicon.conjunction.clone());
            }
            clauses.push(lexicon.unit(unit_digit).to_string());
        }

        clauses.join(" ").trim().to_string()
    }
}
