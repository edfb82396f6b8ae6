mod chart;
mod chart_config;
mod json_contract;
pub mod layout;

pub use chart::{DateHistogramChart, HistogramChart, NumericHistogramChart};
pub use chart_config::{ChartConfig, ChartMargins};
pub use json_contract::{HISTOGRAM_PLOT_JSON_SCHEMA_V1, HistogramPlotJsonContractV1};
pub use layout::{
    AxisTick, AxisTicks, BarGeometry, HistogramLayout, build_render_frame, compose_layout,
};
