use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::adapter::{RejectedValue, adapt_records};
use crate::core::{
    Bin, BinSet, Binner, Domain, InvalidValuePolicy, LinearScale, RawRecord, UniformValue,
    ValueAdapter, ValueKind, Viewport,
};
use crate::error::{ChartError, ChartResult};

/// Result of one `plot` computation: everything a layout or renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramPlot<V> {
    pub kind: ValueKind,
    pub field: String,
    pub plot_area: Viewport,
    pub domain: Domain<V>,
    /// Maps axis positions of domain values to `[0, plot_area.width]`.
    pub width_scale: LinearScale,
    /// Maps counts `[0, max count]` to `[plot_area.height, 0]`.
    pub height_scale: LinearScale,
    pub bins: Vec<Bin<V>>,
    /// Number of values that parsed successfully.
    pub value_count: usize,
    pub out_of_domain: usize,
    pub rejected: Vec<RejectedValue>,
}

impl<V: UniformValue> HistogramPlot<V> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Pixel x of a domain value inside the plot area.
    #[must_use]
    pub fn x_of(&self, value: V) -> f64 {
        self.width_scale.map(value.axis_position())
    }

    /// Pixel y of a count inside the plot area.
    #[must_use]
    pub fn y_of(&self, count: usize) -> f64 {
        self.height_scale.map(count as f64)
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

/// A histogram over one record field, parameterized by its value adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<A: ValueAdapter> {
    adapter: A,
    field: String,
    binner: Binner,
    invalid_value_policy: InvalidValuePolicy,
}

impl<A: ValueAdapter> Histogram<A> {
    pub fn new(adapter: A, field: impl Into<String>, bin_count: usize) -> ChartResult<Self> {
        Ok(Self {
            adapter,
            field: field.into(),
            binner: Binner::new(bin_count)?,
            invalid_value_policy: InvalidValuePolicy::default(),
        })
    }

    #[must_use]
    pub fn with_invalid_value_policy(mut self, policy: InvalidValuePolicy) -> Self {
        self.invalid_value_policy = policy;
        self
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.binner.bin_count()
    }

    #[must_use]
    pub fn invalid_value_policy(&self) -> InvalidValuePolicy {
        self.invalid_value_policy
    }

    /// Adapts, bins and scales `records` for a plot area.
    ///
    /// Pure: repeated calls with the same input return equal results. Empty
    /// input (or input whose every record was rejected) yields an empty plot
    /// with a zero-extent domain instead of an error.
    pub fn plot(
        &self,
        records: &[RawRecord],
        plot_area: Viewport,
    ) -> ChartResult<HistogramPlot<A::Value>> {
        if !plot_area.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: plot_area.width,
                height: plot_area.height,
            });
        }

        let adapted = adapt_records(
            &self.adapter,
            records,
            &self.field,
            self.invalid_value_policy,
        )?;

        let (domain, bin_set) = match self.adapter.domain(&adapted.values) {
            Ok(domain) => {
                let bin_set = self.binner.bin(&self.adapter, domain, &adapted.values);
                (domain, bin_set)
            }
            Err(ChartError::EmptyInput) => {
                debug!(
                    records = records.len(),
                    rejected = adapted.rejected.len(),
                    "no plottable values, producing empty histogram"
                );
                (self.adapter.empty_domain(), BinSet::empty())
            }
            Err(err) => return Err(err),
        };

        if bin_set.out_of_domain > 0 {
            warn!(
                out_of_domain = bin_set.out_of_domain,
                "values outside the plotted domain were not binned"
            );
        }

        let width_scale =
            LinearScale::new(domain.axis_bounds(), (0.0, f64::from(plot_area.width)))?.rounded();
        let height_scale = LinearScale::new(
            (0.0, bin_set.max_count() as f64),
            (f64::from(plot_area.height), 0.0),
        )?;

        debug!(
            kind = ?self.adapter.kind(),
            field = %self.field,
            values = adapted.values.len(),
            rejected = adapted.rejected.len(),
            bins = bin_set.bins.len(),
            "computed histogram"
        );

        Ok(HistogramPlot {
            kind: self.adapter.kind(),
            field: self.field.clone(),
            plot_area,
            domain,
            width_scale,
            height_scale,
            value_count: adapted.values.len(),
            out_of_domain: bin_set.out_of_domain,
            bins: bin_set.bins,
            rejected: adapted.rejected,
        })
    }
}
