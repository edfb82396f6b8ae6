//! histogram-chart: histogram charts over numeric and calendar-date fields.
//!
//! The crate keeps a strict split between pure computation (`core`: value
//! adaptation, domains, scales, binning), geometry (`api::layout`) and
//! drawing (`render`), tied together by the `api::HistogramChart` facade.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartConfig, ChartMargins, DateHistogramChart, HistogramChart, NumericHistogramChart,
};
pub use crate::core::{Histogram, HistogramPlot, NumericAdapter, RawRecord, TemporalAdapter};
pub use error::{ChartError, ChartResult};
