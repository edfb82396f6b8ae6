use std::fmt::Debug;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A value in a single ordered plotting domain.
///
/// `axis_position` places the value on a continuous axis so scales can
/// interpolate linearly. Positions must be strictly monotonic with the value
/// ordering.
pub trait UniformValue: Copy + PartialOrd + Debug + Serialize {
    fn axis_position(self) -> f64;
}

impl UniformValue for f64 {
    fn axis_position(self) -> f64 {
        self
    }
}

/// Dates sit on a day axis counted from the common era.
impl UniformValue for NaiveDate {
    fn axis_position(self) -> f64 {
        f64::from(self.num_days_from_ce())
    }
}
