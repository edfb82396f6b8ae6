//! Record-to-value adapters.
//!
//! An adapter is the per-chart strategy that decides how a raw field becomes
//! a uniform value, which domain those values span, and how ticks are placed
//! and labeled on that domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::domain::extent;
use crate::core::format::{format_date, format_number};
use crate::core::ticks::{date_ticks, linear_axis_ticks, linear_ticks};
use crate::core::{Domain, RawRecord, RawScalar, UniformValue, ValueKind};
use crate::error::{ChartError, ChartResult};

/// Default `chrono` format for temporal fields, e.g. `2004-04-15`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

pub trait ValueAdapter {
    type Value: UniformValue;

    fn kind(&self) -> ValueKind;

    /// Converts one raw scalar; the error string explains the rejection.
    fn parse(&self, raw: &RawScalar) -> Result<Self::Value, String>;

    /// Domain spanned by `values`; `ChartError::EmptyInput` when empty.
    fn domain(&self, values: &[Self::Value]) -> ChartResult<Domain<Self::Value>>;

    /// Zero-extent domain reported for an empty plot.
    fn empty_domain(&self) -> Domain<Self::Value>;

    /// Nice ticks inside `domain`, aiming for about `count` of them.
    fn ticks(&self, domain: Domain<Self::Value>, count: usize) -> Vec<Self::Value>;

    /// Ticks for drawing an axis over `domain`; defaults to the bin ticks.
    fn axis_ticks(&self, domain: Domain<Self::Value>, count: usize) -> Vec<Self::Value> {
        self.ticks(domain, count)
    }

    fn format_tick(&self, value: Self::Value) -> String;
}

/// What happens to a record whose field is missing or unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidValuePolicy {
    /// Drop the record, report it in the plot and log a warning.
    #[default]
    Skip,
    /// Abort the plot with `ChartError::InvalidField`.
    Fail,
}

/// A record excluded from the plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedValue {
    pub index: usize,
    pub reason: String,
}

/// Values extracted from a record sequence, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedValues<V> {
    pub values: Vec<V>,
    pub rejected: Vec<RejectedValue>,
}

/// Reads `field` from every record through `adapter`.
pub fn adapt_records<A: ValueAdapter>(
    adapter: &A,
    records: &[RawRecord],
    field: &str,
    policy: InvalidValuePolicy,
) -> ChartResult<AdaptedValues<A::Value>> {
    let mut values = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let parsed = match record.get(field) {
            Some(raw) => adapter.parse(raw),
            None => Err("field is missing".to_owned()),
        };

        match parsed {
            Ok(value) => values.push(value),
            Err(reason) => match policy {
                InvalidValuePolicy::Fail => {
                    return Err(ChartError::InvalidField {
                        index,
                        field: field.to_owned(),
                        reason,
                    });
                }
                InvalidValuePolicy::Skip => {
                    warn!(index, field, reason = %reason, "skipping invalid record");
                    rejected.push(RejectedValue { index, reason });
                }
            },
        }
    }

    Ok(AdaptedValues { values, rejected })
}

/// How the numeric domain lower bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericDomainPolicy {
    /// `[0, max]`: bars share a zero baseline; negative values fall outside.
    #[default]
    ZeroAnchored,
    /// `[min, max]` of the values.
    Extent,
}

/// Adapter for numeric fields (numbers or numeric strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericAdapter {
    domain_policy: NumericDomainPolicy,
}

impl NumericAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_domain_policy(mut self, domain_policy: NumericDomainPolicy) -> Self {
        self.domain_policy = domain_policy;
        self
    }

    #[must_use]
    pub fn domain_policy(&self) -> NumericDomainPolicy {
        self.domain_policy
    }
}

impl ValueAdapter for NumericAdapter {
    type Value = f64;

    fn kind(&self) -> ValueKind {
        ValueKind::Numeric
    }

    fn parse(&self, raw: &RawScalar) -> Result<f64, String> {
        let value = match raw {
            RawScalar::Number(value) => *value,
            RawScalar::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{raw} is not a number"))?,
            RawScalar::Bool(_) | RawScalar::Null => {
                return Err(format!("{raw} is not a number"));
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("{raw} is not a finite number"))
        }
    }

    fn domain(&self, values: &[f64]) -> ChartResult<Domain<f64>> {
        let (min, max) = extent(values).ok_or(ChartError::EmptyInput)?;
        match self.domain_policy {
            NumericDomainPolicy::ZeroAnchored => Domain::new(0.0, max.max(0.0)),
            NumericDomainPolicy::Extent => Domain::new(min, max),
        }
    }

    fn empty_domain(&self) -> Domain<f64> {
        Domain::point(0.0)
    }

    fn ticks(&self, domain: Domain<f64>, count: usize) -> Vec<f64> {
        linear_ticks(domain.min(), domain.max(), count)
    }

    fn axis_ticks(&self, domain: Domain<f64>, count: usize) -> Vec<f64> {
        linear_axis_ticks(domain.min(), domain.max(), count)
    }

    fn format_tick(&self, value: f64) -> String {
        format_number(value)
    }
}

/// Adapter for calendar-date fields given as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalAdapter {
    format: String,
}

impl Default for TemporalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(DEFAULT_DATE_FORMAT)
    }

    /// Uses a custom `chrono` parse format, e.g. `%d/%m/%Y`.
    #[must_use]
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl ValueAdapter for TemporalAdapter {
    type Value = NaiveDate;

    fn kind(&self) -> ValueKind {
        ValueKind::Temporal
    }

    fn parse(&self, raw: &RawScalar) -> Result<NaiveDate, String> {
        match raw {
            RawScalar::Text(text) => NaiveDate::parse_from_str(text.trim(), &self.format)
                .map_err(|e| format!("{raw} does not match `{}`: {e}", self.format)),
            _ => Err(format!("{raw} is not a date string")),
        }
    }

    fn domain(&self, values: &[NaiveDate]) -> ChartResult<Domain<NaiveDate>> {
        let (min, max) = extent(values).ok_or(ChartError::EmptyInput)?;
        Domain::new(min, max)
    }

    fn empty_domain(&self) -> Domain<NaiveDate> {
        Domain::point(NaiveDate::default())
    }

    fn ticks(&self, domain: Domain<NaiveDate>, count: usize) -> Vec<NaiveDate> {
        date_ticks(domain.min(), domain.max(), count)
    }

    fn format_tick(&self, value: NaiveDate) -> String {
        format_date(value)
    }
}
