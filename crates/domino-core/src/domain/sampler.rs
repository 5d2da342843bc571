//! Random selection of distinct patterns from a [`Catalog`].
//!
//! The random source is always passed in by the caller.  Production code
//! hands over an OS-seeded generator; tests use a seeded `StdRng` so the
//! drawn subset is reproducible.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::catalog::Catalog;
use super::pattern::DotPattern;

/// Errors that can occur while sampling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// More distinct dominoes were requested than the catalog contains.
    #[error("tried to generate {requested} dominos, but only {available} dominos exist")]
    InsufficientSupply { requested: usize, available: usize },
}

/// Draws `count` distinct patterns from `catalog` without replacement.
///
/// Every subset of size `count` is equally likely.  The order of the
/// returned patterns is random as well, but callers must not rely on it
/// being uniform.  The catalog itself is left untouched.
///
/// # Errors
///
/// Returns [`SampleError::InsufficientSupply`] if `count` exceeds the
/// catalog size.  Nothing is truncated.
pub fn sample<R>(catalog: &Catalog, count: usize, rng: &mut R) -> Result<Vec<DotPattern>, SampleError>
where
    R: Rng + ?Sized,
{
    let available = catalog.len();
    if count > available {
        return Err(SampleError::InsufficientSupply {
            requested: count,
            available,
        });
    }

    let members = catalog.as_slice();
    let drawn: Vec<DotPattern> = rand::seq::index::sample(rng, available, count)
        .into_iter()
        .map(|index| members[index])
        .collect();

    debug!(requested = count, available, "sampled domino patterns");
    Ok(drawn)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
