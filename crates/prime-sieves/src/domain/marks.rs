//! Per-call marker set
//!
//! Records the values a sieve has crossed out: composites for the Sieve of
//! Eratosthenes, excluded indices for the Sieve of Sundaram. The set is keyed
//! by the actual value, and absence means "not marked".
//!
//! Two storage policies share one API:
//! - default: dense bit array, one bit per value in `[0, bound]`
//! - `sparse-markers` feature: `FxHashSet` holding only the marked values
//!
//! Values outside `[0, bound]` are never stored and always read as unmarked.

use crate::domain::error::SieveError;

#[cfg(not(feature = "sparse-markers"))]
use crate::constants::MARKER_WORD_BITS;

#[cfg(feature = "sparse-markers")]
use rustc_hash::FxHashSet;

// =============================================================================
// Dense bit array (default)
// =============================================================================

/// Marker set over `[0, bound]`
#[cfg(not(feature = "sparse-markers"))]
#[derive(Clone, Debug)]
pub struct MarkerSet {
    bound: i64,
    words: Vec<u64>,
    marked: usize,
}

#[cfg(not(feature = "sparse-markers"))]
impl MarkerSet {
    /// Create an empty marker set covering `[0, bound]`
    ///
    /// # Errors
    /// - `SieveError::LimitTooLarge` if the bit array cannot be indexed by `usize`
    /// - `SieveError::Allocation` if the allocator refuses the bit array
    pub fn with_bound(bound: i64) -> Result<Self, SieveError> {
        let word_count = match u64::try_from(bound) {
            Ok(bound_u64) => usize::try_from(bound_u64 / MARKER_WORD_BITS + 1)
                .map_err(|_| SieveError::LimitTooLarge { limit: bound })?,
            // Negative bound: nothing is in range
            Err(_) => 0,
        };

        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| SieveError::Allocation { limit: bound })?;
        words.resize(word_count, 0);

        Ok(Self {
            bound,
            words,
            marked: 0,
        })
    }

    /// Mark a value (no-op outside `[0, bound]`)
    #[inline]
    pub fn mark(&mut self, value: i64) {
        if let Some((word, bit)) = self.slot(value) {
            let slot = &mut self.words[word];
            if *slot & bit == 0 {
                *slot |= bit;
                self.marked += 1;
            }
        }
    }

    /// Check whether a value has been marked
    #[inline]
    pub fn is_marked(&self, value: i64) -> bool {
        self.slot(value)
            .is_some_and(|(word, bit)| self.words[word] & bit != 0)
    }

    /// Number of distinct marked values
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Word index and bit mask for an in-range value
    #[inline]
    fn slot(&self, value: i64) -> Option<(usize, u64)> {
        if value < 0 || value > self.bound {
            return None;
        }
        let value = value as u64;
        // word index < words.len(), which fits usize
        Some((
            (value / MARKER_WORD_BITS) as usize,
            1u64 << (value % MARKER_WORD_BITS),
        ))
    }
}

// =============================================================================
// Sparse hash set (sparse-markers feature)
// =============================================================================

/// Marker set over `[0, bound]`
#[cfg(feature = "sparse-markers")]
#[derive(Clone, Debug)]
pub struct MarkerSet {
    bound: i64,
    marked: FxHashSet<i64>,
}

#[cfg(feature = "sparse-markers")]
impl MarkerSet {
    /// Create an empty marker set covering `[0, bound]`
    ///
    /// Storage grows with the number of marked values, so this never fails;
    /// the `Result` keeps the signature shared with the dense policy.
    pub fn with_bound(bound: i64) -> Result<Self, SieveError> {
        Ok(Self {
            bound,
            marked: FxHashSet::default(),
        })
    }

    /// Mark a value (no-op outside `[0, bound]`)
    #[inline]
    pub fn mark(&mut self, value: i64) {
        if (0..=self.bound).contains(&value) {
            self.marked.insert(value);
        }
    }

    /// Check whether a value has been marked
    #[inline]
    pub fn is_marked(&self, value: i64) -> bool {
        self.marked.contains(&value)
    }

    /// Number of distinct marked values
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }
}

// =============================================================================
// Shared
// =============================================================================

impl MarkerSet {
    /// Inclusive upper bound of the markable range
    pub fn bound(&self) -> i64 {
        self.bound
    }
}
