//! Binomial coefficients used as weights in the bernstein sum.
//!
//! Two strategies are available: [`binomial`] computes a coefficient on demand
//! and [`BinomialTable`] precomputes pascal's triangle once.
//! Both yield identical integers for every row up to [`MAX_DEGREE`].

use serde::{Deserialize, Serialize};

/// Largest row whose coefficients are guaranteed to fit into a `u64`.
///
/// `C(64, 32)` is the largest value the curve ever needs with 64 control points.
pub const MAX_DEGREE: usize = 64;

/// Computes `C(n, k)` using the multiplicative recurrence `res = res * (n - i) / (i + 1)`.
///
/// Each intermediate `res` is itself a binomial coefficient, so the division is always exact.
/// The product is formed in `u128` to stay exact for all rows up to [`MAX_DEGREE`].
/// Returns `0` for `k > n`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut res: u128 = 1;
    for i in 0..k {
        res = res * (n - i) as u128 / (i + 1) as u128;
    }
    res as u64
}

/// Pascal's triangle up to a fixed row stored in one contiguous buffer.
///
/// Only the left half of every row (`k <= n / 2`) is stored,
/// the other half is mirrored through `C(n, k) = C(n, n - k)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinomialTable {
    max_n: usize,
    buffer: Vec<u64>,
}

impl BinomialTable {
    /// Builds the table for all rows `0..=max_n`.
    ///
    /// `max_n` is capped at [`MAX_DEGREE`].
    pub fn new(max_n: usize) -> Self {
        let max_n = max_n.min(MAX_DEGREE);
        let mut table = BinomialTable {
            max_n,
            buffer: vec![0; Self::row_offset(max_n + 1)],
        };

        for n in 0..=max_n {
            let offset = Self::row_offset(n);
            table.buffer[offset] = 1;
            for k in 1..=n / 2 {
                let value = if n % 2 == 0 && k == n / 2 {
                    // C(n-1, n/2) lies in the mirrored half of the previous row
                    2 * table.canonical(n - 1, k - 1)
                } else {
                    table.canonical(n - 1, k - 1) + table.canonical(n - 1, k)
                };
                table.buffer[offset + k] = value;
            }
        }

        log::debug!(
            "built binomial table up to row {} ({} entries)",
            max_n,
            table.buffer.len()
        );
        table
    }

    /// The largest row contained in the table
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Looks up `C(n, k)`.
    ///
    /// Returns `None` if `n` lies outside the table or `k > n`.
    pub fn get(&self, n: usize, k: usize) -> Option<u64> {
        if n > self.max_n || k > n {
            return None;
        }
        let k = if k <= n / 2 { k } else { n - k };
        Some(self.canonical(n, k))
    }

    /// Entry of the stored half, `k` must be at most `n / 2`.
    fn canonical(&self, n: usize, k: usize) -> u64 {
        self.buffer[Self::row_offset(n) + k]
    }

    /// Index of row `n`'s first entry.
    ///
    /// Row `m` holds `m / 2 + 1` entries, summing them over `m < n` gives
    /// `n + (n / 2) * ((n - 1) / 2)`.
    fn row_offset(n: usize) -> usize {
        n + (n / 2) * (n.saturating_sub(1) / 2)
    }
}

/// Selects how [`Binomial`] obtains its coefficients.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinomialStrategy {
    /// Compute every coefficient on demand
    #[default]
    Direct,

    /// Precompute pascal's triangle once
    Table,
}

/// Source of binomial coefficients chosen at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binomial {
    /// See [`binomial`]
    Direct,

    /// See [`BinomialTable`]
    Table(BinomialTable),
}

impl Binomial {
    /// Creates a source for all rows up to `max_n` using the given strategy.
    pub fn new(strategy: BinomialStrategy, max_n: usize) -> Self {
        match strategy {
            BinomialStrategy::Direct => Binomial::Direct,
            BinomialStrategy::Table => Binomial::Table(BinomialTable::new(max_n)),
        }
    }

    /// The strategy this source was built with
    pub fn strategy(&self) -> BinomialStrategy {
        match self {
            Binomial::Direct => BinomialStrategy::Direct,
            Binomial::Table(_) => BinomialStrategy::Table,
        }
    }

    /// Get `C(n, k)`
    ///
    /// Rows outside a table fall back to direct computation.
    pub fn coefficient(&self, n: usize, k: usize) -> u64 {
        match self {
            Binomial::Direct => binomial(n, k),
            Binomial::Table(table) => table.get(n, k).unwrap_or_else(|| binomial(n, k)),
        }
    }
}
