use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear map from a continuous domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how count
/// scales put larger values closer to the top edge. A zero-span domain maps
/// every value to `range_start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            round: false,
        })
    }

    /// Rounds mapped output to whole pixels.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_rounded(self) -> bool {
        self.round
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }

        let normalized = (value - self.domain_start) / span;
        let mapped = self.range_start + normalized * (self.range_end - self.range_start);
        if self.round { mapped.round() } else { mapped }
    }

    /// Maps a range position back to the domain.
    ///
    /// A degenerate domain inverts to its single value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.is_degenerate() {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
