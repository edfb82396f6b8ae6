use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Domain, UniformValue, ValueAdapter};
use crate::error::{ChartError, ChartResult};

/// Default bin target, matching the fixed threshold count of a plain chart.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Interval `[x0, x1)` with its member count.
///
/// The last bin of a `BinSet` is closed on the right so the domain maximum
/// has a home.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin<V> {
    pub x0: V,
    pub x1: V,
    pub count: usize,
}

/// Ordered, contiguous bins covering a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSet<V> {
    pub bins: Vec<Bin<V>>,
    /// Values outside the domain, which no bin holds.
    pub out_of_domain: usize,
}

impl<V> BinSet<V> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bins: Vec::new(),
            out_of_domain: 0,
        }
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

/// Partitions values into at most `bin_count + 1` bins at nice thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binner {
    bin_count: usize,
}

impl Binner {
    pub fn new(bin_count: usize) -> ChartResult<Self> {
        if bin_count == 0 {
            return Err(ChartError::InvalidBinCount(bin_count));
        }
        Ok(Self { bin_count })
    }

    #[must_use]
    pub fn bin_count(self) -> usize {
        self.bin_count
    }

    /// Bins `values` over `domain` using the adapter's ticks as thresholds.
    pub fn bin<A: ValueAdapter>(
        self,
        adapter: &A,
        domain: Domain<A::Value>,
        values: &[A::Value],
    ) -> BinSet<A::Value> {
        let thresholds = adapter.ticks(domain, self.bin_count);
        bin_with_thresholds(values, domain, &thresholds)
    }
}

/// Bins `values` at `thresholds`.
///
/// Only thresholds strictly inside the domain are used, so `n` usable
/// thresholds give `n + 1` bins: `[min, t0), [t0, t1), ..., [tn, max]`.
pub fn bin_with_thresholds<V: UniformValue>(
    values: &[V],
    domain: Domain<V>,
    thresholds: &[V],
) -> BinSet<V> {
    let mut inner: Vec<V> = thresholds
        .iter()
        .copied()
        .filter(|t| domain.min() < *t && *t < domain.max())
        .collect();
    inner.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    inner.dedup();

    let mut bins: Vec<Bin<V>> = Vec::with_capacity(inner.len() + 1);
    let mut lower = domain.min();
    for threshold in &inner {
        bins.push(Bin {
            x0: lower,
            x1: *threshold,
            count: 0,
        });
        lower = *threshold;
    }
    bins.push(Bin {
        x0: lower,
        x1: domain.max(),
        count: 0,
    });

    let mut out_of_domain = 0;
    for value in values {
        if !domain.contains(*value) {
            out_of_domain += 1;
            continue;
        }
        // Right bisect: a value equal to a threshold opens the next bin.
        let index = inner.partition_point(|t| *t <= *value);
        bins[index].count += 1;
    }

    for (index, bin) in bins.iter().enumerate() {
        trace!(index, x0 = ?bin.x0, x1 = ?bin.x1, count = bin.count, "bin");
    }

    BinSet {
        bins,
        out_of_domain,
    }
}

#[cfg(test)]
mod tests {
    use super::bin_with_thresholds;
    use crate::core::Domain;

    #[test]
    fn threshold_values_open_the_next_bin() {
        let domain = Domain::new(0.0, 20.0).expect("domain");
        let set = bin_with_thresholds(&[0.0, 10.0, 20.0], domain, &[10.0]);
        let counts: Vec<usize> = set.bins.iter().map(|bin| bin.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn thresholds_on_domain_edges_are_ignored() {
        let domain = Domain::new(0.0, 20.0).expect("domain");
        let set = bin_with_thresholds(&[5.0], domain, &[0.0, 20.0, 30.0]);
        assert_eq!(set.bins.len(), 1);
        assert_eq!(set.bins[0].count, 1);
    }

    #[test]
    fn values_outside_domain_are_counted_separately() {
        let domain = Domain::new(0.0, 10.0).expect("domain");
        let set = bin_with_thresholds(&[-1.0, 3.0, 11.0], domain, &[5.0]);
        assert_eq!(set.total_count(), 1);
        assert_eq!(set.out_of_domain, 2);
    }
}
