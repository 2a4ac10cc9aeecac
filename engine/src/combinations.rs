//! Lexicographic k-combinations of `0..n`
//!
//! Iterative successor walk over index tuples, no recursion. A walk can
//! start at any lexicographic rank and stop after a fixed count, which is how
//! the equity solver splits the board space into independent shards.

use std::ops::Range;

/// Binomial coefficient C(n, k); zero when k > n
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

/// Step `indices` to the next k-subset of `0..n` in lexicographic order
///
/// Returns false, leaving `indices` untouched, when it is already the last.
pub fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    for i in (0..k).rev() {
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// The k-subset of `0..n` at lexicographic position `rank`
///
/// `rank` must be below `binomial(n, k)`.
pub fn unrank(n: usize, k: usize, mut rank: u64) -> Vec<usize> {
    debug_assert!(rank < binomial(n, k), "rank {} out of range", rank);
    let mut indices = Vec::with_capacity(k);
    let mut next = 0;
    for i in 0..k {
        loop {
            let below = binomial(n - next - 1, k - i - 1);
            if rank < below {
                indices.push(next);
                next += 1;
                break;
            }
            rank -= below;
            next += 1;
        }
    }
    indices
}

/// Lexicographic position of a k-subset of `0..n`
pub fn rank_of(indices: &[usize], n: usize) -> u64 {
    let k = indices.len();
    let mut rank = 0;
    let mut next = 0;
    for (i, &index) in indices.iter().enumerate() {
        for skipped in next..index {
            rank += binomial(n - skipped - 1, k - i - 1);
        }
        next = index + 1;
    }
    rank
}

/// Split `0..total` into at most `parts` contiguous, non-empty ranges
pub fn shards(total: u64, parts: usize) -> Vec<Range<u64>> {
    let parts = (parts.max(1) as u64).min(total);
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + u64::from(i < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// A restartable walk over a contiguous run of k-subsets of `0..n`
///
/// Yields borrowed index slices, so a walk over millions of boards does not
/// allocate after construction.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    span: Range<u64>,
    indices: Vec<usize>,
    remaining: u64,
    started: bool,
}

impl Combinations {
    /// Every k-subset of `0..n`
    pub fn new(n: usize, k: usize) -> Self {
        Self::range(n, k, 0..binomial(n, k))
    }

    /// The k-subsets at lexicographic positions `span`
    pub fn range(n: usize, k: usize, span: Range<u64>) -> Self {
        let total = binomial(n, k);
        let span = span.start.min(total)..span.end.min(total);
        let indices = if span.start < span.end {
            unrank(n, k, span.start)
        } else {
            Vec::new()
        };
        Combinations {
            n,
            k,
            remaining: span.end - span.start.min(span.end),
            span,
            indices,
            started: false,
        }
    }

    /// Number of subsets this walk visits in total
    pub fn len(&self) -> u64 {
        self.span.end.saturating_sub(self.span.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewind to the first subset of the span
    pub fn reset(&mut self) {
        *self = Self::range(self.n, self.k, self.span.clone());
    }

    /// The next subset, or `None` once the span is exhausted
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.remaining == 0 {
            return None;
        }
        if self.started {
            let advanced = advance(&mut self.indices, self.n);
            debug_assert!(advanced, "walk ran past the last subset");
        }
        self.started = true;
        self.remaining -= 1;
        Some(&self.indices)
    }
}
