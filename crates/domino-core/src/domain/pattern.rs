//! The dot pattern printed on one domino face.
//!
//! A domino face is an 8×2 grid of dot slots.  Each slot is either filled
//! (a dot) or blank, so a whole face fits in a single `u16`.
//!
//! # Bit numbering (for beginners)
//!
//! Slots are numbered 0..16 reading the top row left to right, then the
//! bottom row left to right:
//!
//! ```text
//!  0  1  2  3  4  5  6  7     ← top row
//!  8  9 10 11 12 13 14 15     ← bottom row
//! ```
//!
//! Slot 0 is stored in the **most-significant** bit of the `u16`.  With that
//! ordering the textual form `format!("{:016b}", bits)` lists the slots in
//! index order, and turning the physical domino by 180° is exactly
//! [`u16::reverse_bits`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of dot slots in one row of a domino face.
pub const SLOTS_PER_ROW: usize = 8;

/// Number of rows on a domino face.
pub const ROWS_PER_FACE: usize = 2;

/// Total number of dot slots on a domino face.
pub const SLOT_COUNT: usize = SLOTS_PER_ROW * ROWS_PER_FACE;

/// Errors produced when parsing a pattern from its textual form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternParseError {
    /// The string does not have exactly [`SLOT_COUNT`] characters.
    #[error("pattern must have 16 characters, got {0}")]
    WrongLength(usize),

    /// A character other than `0` or `1` was found.
    #[error("invalid character {found:?} at slot {index}")]
    InvalidCharacter { index: usize, found: char },
}

/// One domino face: 16 dot slots packed into a `u16`.
///
/// The type is `Copy` and ordered by its integer value, which is also the
/// order in which the catalog enumerates patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DotPattern(u16);

impl DotPattern {
    /// Wraps a raw 16-bit value (slot 0 = most-significant bit).
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw 16-bit value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if the slot at `index` holds a dot.
    ///
    /// Indices outside `0..16` are never set.
    pub fn is_set(self, index: usize) -> bool {
        index < SLOT_COUNT && self.0 & Self::mask(index) != 0
    }

    /// Number of dots on the face.
    pub fn dot_count(self) -> u32 {
        self.0.count_ones()
    }

    /// The same physical domino turned by 180°.
    ///
    /// Slot `i` moves to slot `15 - i`, which for this bit layout is a plain
    /// bit reversal.
    pub fn reversed(self) -> Self {
        Self(self.0.reverse_bits())
    }

    /// Returns `true` if the face looks identical after a 180° turn.
    pub fn is_self_symmetric(self) -> bool {
        self.reversed() == self
    }

    /// Iterates over the indices of all slots holding a dot, ascending.
    pub fn dots(self) -> impl Iterator<Item = usize> {
        (0..SLOT_COUNT).filter(move |&index| self.is_set(index))
    }

    fn mask(index: usize) -> u16 {
        1 << (SLOT_COUNT - 1 - index)
    }
}

impl fmt::Display for DotPattern {
    /// Formats the pattern as 16 `0`/`1` characters, slot 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl FromStr for DotPattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != SLOT_COUNT {
            return Err(PatternParseError::WrongLength(length));
        }

        let mut bits = 0u16;
        for (index, ch) in s.chars().enumerate() {
            match ch {
                '1' => bits |= Self::mask(index),
                '0' => {}
                found => return Err(PatternParseError::InvalidCharacter { index, found }),
            }
        }
        Ok(Self(bits))
    }
}

impl From<DotPattern> for String {
    fn from(pattern: DotPattern) -> Self {
        pattern.to_string()
    }
}

impl TryFrom<String> for DotPattern {
    type Error = PatternParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
