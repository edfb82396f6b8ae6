pub mod adapter;
pub mod binner;
pub mod domain;
pub mod format;
pub mod histogram;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod value;

pub use adapter::{
    AdaptedValues, InvalidValuePolicy, NumericAdapter, NumericDomainPolicy, RejectedValue,
    TemporalAdapter, ValueAdapter, adapt_records,
};
pub use binner::{Bin, BinSet, Binner, DEFAULT_BIN_COUNT, bin_with_thresholds};
pub use domain::{Domain, extent};
pub use histogram::{Histogram, HistogramPlot};
pub use record::{RawRecord, RawScalar, records_from_json_str, records_from_values};
pub use scale::LinearScale;
pub use types::{ValueKind, Viewport};
pub use value::UniformValue;
