use serde::{Deserialize, Serialize};

use crate::core::UniformValue;
use crate::error::{ChartError, ChartResult};

/// Closed value interval `[min, max]` with `min <= max`.
///
/// A degenerate domain (`min == max`) is legal; scales built on it map every
/// value to the start of their range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain<V> {
    min: V,
    max: V,
}

impl<V: UniformValue> Domain<V> {
    pub fn new(min: V, max: V) -> ChartResult<Self> {
        if !min.axis_position().is_finite() || !max.axis_position().is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "domain min {min:?} must be <= max {max:?}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Zero-extent domain at `value`.
    #[must_use]
    pub fn point(value: V) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn min(self) -> V {
        self.min
    }

    #[must_use]
    pub fn max(self) -> V {
        self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: V) -> bool {
        self.min <= value && value <= self.max
    }

    /// Domain bounds on the continuous axis.
    #[must_use]
    pub fn axis_bounds(self) -> (f64, f64) {
        (self.min.axis_position(), self.max.axis_position())
    }
}

/// Returns `(min, max)` of `values`, or `None` when empty.
///
/// Values that are unordered against the running bounds (NaN) are skipped.
pub fn extent<V: UniformValue>(values: &[V]) -> Option<(V, V)> {
    let mut iter = values.iter().copied();
    let first = iter.find(|value| value.partial_cmp(value).is_some())?;
    Some(iter.fold((first, first), |(min, max), value| {
        let min = if value < min { value } else { min };
        let max = if value > max { value } else { max };
        (min, max)
    }))
}
