//! Enumeration of every distinguishable domino face.
//!
//! The catalog walks all 2^16 possible faces in ascending integer order and
//! keeps those that satisfy [`CatalogRules`]:
//!
//! 1. every fixed slot holds a dot;
//! 2. the face has exactly `dot_count` dots;
//! 3. the face is not identical to itself turned by 180°;
//! 4. the face turned by 180° has not already been kept.
//!
//! Rule 4 makes the enumeration order significant: of each pair of faces that
//! are rotations of one another, the one with the smaller integer value is
//! the one kept.

use thiserror::Error;
use tracing::debug;

use super::pattern::{DotPattern, SLOT_COUNT};

/// Dots per face on the printed labels.
pub const DEFAULT_DOT_COUNT: u32 = 10;

/// Slots that always hold a dot: both ends of both rows.
pub const FIXED_DOT_POSITIONS: [usize; 4] = [0, 7, 8, 15];

/// Errors raised when catalog rules cannot describe any valid face.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A fixed position does not exist on a 16-slot face.
    #[error("fixed dot position {0} is outside the face (0..16)")]
    FixedPositionOutOfRange(usize),

    /// More dots were requested than a face has slots.
    #[error("dot count {0} exceeds the 16 slots on a face")]
    DotCountTooLarge(u32),

    /// The fixed positions alone already exceed the dot count.
    #[error("{fixed} fixed dot positions cannot fit in a face of {dot_count} dots")]
    TooManyFixedPositions { fixed: usize, dot_count: u32 },
}

/// Constraints every catalog member must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRules {
    dot_count: u32,
    fixed_mask: u16,
}

impl CatalogRules {
    /// Creates a rule set.
    ///
    /// Duplicate fixed positions are harmless and counted once.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a fixed position is outside `0..16`, the
    /// dot count exceeds 16, or the fixed positions outnumber the dots.
    pub fn new(dot_count: u32, fixed_positions: &[usize]) -> Result<Self, CatalogError> {
        if dot_count as usize > SLOT_COUNT {
            return Err(CatalogError::DotCountTooLarge(dot_count));
        }

        let mut fixed = DotPattern::from_bits(0);
        for &position in fixed_positions {
            if position >= SLOT_COUNT {
                return Err(CatalogError::FixedPositionOutOfRange(position));
            }
            fixed = DotPattern::from_bits(fixed.bits() | (1 << (SLOT_COUNT - 1 - position)));
        }

        if fixed.dot_count() > dot_count {
            return Err(CatalogError::TooManyFixedPositions {
                fixed: fixed.dot_count() as usize,
                dot_count,
            });
        }

        Ok(Self {
            dot_count,
            fixed_mask: fixed.bits(),
        })
    }

    /// Required number of dots per face.
    pub fn dot_count(&self) -> u32 {
        self.dot_count
    }

    /// Slots that must always hold a dot, ascending.
    pub fn fixed_positions(&self) -> Vec<usize> {
        DotPattern::from_bits(self.fixed_mask).dots().collect()
    }

    /// Returns `true` if `pattern` satisfies the per-face rules (1–3).
    ///
    /// Rule 4 depends on the rest of the catalog and is applied during
    /// enumeration only.
    pub fn admits(&self, pattern: DotPattern) -> bool {
        pattern.bits() & self.fixed_mask == self.fixed_mask
            && pattern.dot_count() == self.dot_count
            && !pattern.is_self_symmetric()
    }
}

impl Default for CatalogRules {
    /// Ten dots per face with the four row ends always filled.
    fn default() -> Self {
        let mut fixed_mask = 0u16;
        for position in FIXED_DOT_POSITIONS {
            fixed_mask |= 1 << (SLOT_COUNT - 1 - position);
        }
        Self {
            dot_count: DEFAULT_DOT_COUNT,
            fixed_mask,
        }
    }
}

/// The set of all distinguishable faces under a rule set.
///
/// Members are stored in enumeration order (ascending integer value), so two
/// builds with the same rules compare equal and iterate identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<DotPattern>,
}

impl Catalog {
    /// Builds the catalog for the default label rules.
    pub fn build() -> Self {
        Self::build_with(&CatalogRules::default())
    }

    /// Builds the catalog for an arbitrary rule set.
    pub fn build_with(rules: &CatalogRules) -> Self {
        let mut patterns: Vec<DotPattern> = Vec::new();

        for bits in 0..=u16::MAX {
            let candidate = DotPattern::from_bits(bits);
            if !rules.admits(candidate) {
                continue;
            }
            // A rotation of a face we already kept is the same physical domino.
            // `patterns` grows in ascending order, so it stays searchable.
            if patterns.binary_search(&candidate.reversed()).is_ok() {
                continue;
            }
            patterns.push(candidate);
        }

        debug!(
            dot_count = rules.dot_count(),
            fixed = ?rules.fixed_positions(),
            size = patterns.len(),
            "built domino pattern catalog"
        );

        Self { patterns }
    }

    /// Number of patterns in the catalog.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no pattern satisfies the rules.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if `pattern` is a member.
    pub fn contains(&self, pattern: DotPattern) -> bool {
        self.patterns.binary_search(&pattern).is_ok()
    }

    /// All members in ascending order.
    pub fn as_slice(&self) -> &[DotPattern] {
        &self.patterns
    }

    /// Iterates over all members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DotPattern> + '_ {
        self.patterns.iter().copied()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
