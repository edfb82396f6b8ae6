//! "Nice" tick generation for numeric and calendar-date domains.
//!
//! Both generators pick a step no smaller than `span / count`, so at most
//! `count` ticks fall strictly inside a domain. The binner relies on this to
//! keep the bin count at or below `count + 1`.

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::warn;

/// Upper bound on the requested tick count.
///
/// Both generators emit at most `count + 1` ticks, so capping the request
/// keeps every tick list within `MAX_TICK_COUNT + 1` entries while still reaching the domain
/// maximum.
pub const MAX_TICK_COUNT: usize = 9_999;
const MAX_TICKS: usize = MAX_TICK_COUNT + 1;

/// Clamps a requested tick count to [`MAX_TICK_COUNT`], logging when it does.
#[must_use]
pub fn clamp_tick_count(count: usize) -> usize {
    if count > MAX_TICK_COUNT {
        warn!(
            requested = count,
            max = MAX_TICK_COUNT,
            "tick count capped, steps are coarser than requested"
        );
        MAX_TICK_COUNT
    } else {
        count
    }
}

/// Smallest value in `{1, 2, 5, 10} x 10^p` that is `>= raw_step`.
///
/// Returns `0.0` for non-finite or non-positive input.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 0.0;
    }

    let power = 10_f64.powi(raw_step.log10().floor() as i32);
    for factor in [1.0, 2.0, 5.0, 10.0] {
        let candidate = factor * power;
        if candidate >= raw_step {
            return candidate;
        }
    }
    10.0 * power
}

/// Value in `{1, 2, 5, 10} x 10^p` closest to `raw_step` on a log scale.
///
/// Used for axis ticks, where readability matters more than a hard upper
/// bound on the tick count.
#[must_use]
pub fn nearest_nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 0.0;
    }

    let exponent = raw_step.log10().floor() as i32;
    let power = 10_f64.powi(exponent);
    let error = raw_step / power;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Multiples of the nice step for `count` that lie inside `[min, max]`.
///
/// The step never drops below `(max - min) / count`, so at most `count`
/// ticks fall strictly inside the range.
#[must_use]
pub fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    ticks_with_step_rule(min, max, count, nice_step)
}

/// Axis ticks for `[min, max]`: like [`linear_ticks`] but with the nearest
/// nice step, so `[0, 12]` ticks every 1 instead of every 2.
#[must_use]
pub fn linear_axis_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    ticks_with_step_rule(min, max, count, nearest_nice_step)
}

fn ticks_with_step_rule(min: f64, max: f64, count: usize, step_rule: fn(f64) -> f64) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }

    let count = clamp_tick_count(count);
    let step = step_rule((max - min) / count as f64);
    if step <= 0.0 {
        return vec![min, max];
    }

    // Sub-unit steps divide by the integral inverse so 0.1-style ticks come
    // out exact instead of accumulating representation error.
    let ticks: Vec<f64> = if step >= 1.0 {
        let start = (min / step).ceil() as i64;
        let stop = (max / step).floor() as i64;
        (start..=stop)
            .take(MAX_TICKS)
            .map(|i| i as f64 * step)
            .collect()
    } else {
        let inverse = (1.0 / step).round();
        let start = (min * inverse).ceil() as i64;
        let stop = (max * inverse).floor() as i64;
        (start..=stop)
            .take(MAX_TICKS)
            .map(|i| i as f64 / inverse)
            .collect()
    };

    ticks
        .into_iter()
        .filter(|tick| *tick >= min && *tick <= max)
        .collect()
}

/// Calendar interval used for date ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInterval {
    /// Every `n` days, aligned to the day count from the common era.
    Days(u32),
    /// Sundays.
    Weeks,
    /// First day of every `n`-th month (January-aligned).
    Months(u32),
    /// January 1st of every `n`-th year.
    Years(u32),
}

impl DateInterval {
    /// Lower bound for the length of one interval, in days.
    #[must_use]
    pub fn min_days(self) -> f64 {
        match self {
            Self::Days(n) => f64::from(n),
            Self::Weeks => 7.0,
            Self::Months(n) => 28.0 * f64::from(n),
            Self::Years(n) => 365.0 * f64::from(n),
        }
    }

    /// First interval boundary on or after `date`.
    #[must_use]
    pub fn first_on_or_after(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(n) => {
                let n = n.max(1);
                let rem = date.num_days_from_ce().rem_euclid(n as i32) as u32;
                if rem == 0 {
                    Some(date)
                } else {
                    date.checked_add_days(Days::new(u64::from(n - rem)))
                }
            }
            Self::Weeks => {
                let offset = date.weekday().num_days_from_sunday();
                if offset == 0 {
                    Some(date)
                } else {
                    date.checked_add_days(Days::new(u64::from(7 - offset)))
                }
            }
            Self::Months(n) => {
                let n = n.max(1);
                let mut cursor = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
                if cursor < date {
                    cursor = cursor.checked_add_months(Months::new(1))?;
                }
                while cursor.month0() % n != 0 {
                    cursor = cursor.checked_add_months(Months::new(1))?;
                }
                Some(cursor)
            }
            Self::Years(n) => {
                let n = n.max(1) as i32;
                let mut year = date.year();
                if date.ordinal() != 1 {
                    year += 1;
                }
                let rem = year.rem_euclid(n);
                if rem != 0 {
                    year += n - rem;
                }
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
        }
    }

    /// Next boundary after `date`, which must itself be a boundary.
    #[must_use]
    pub fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(n) => date.checked_add_days(Days::new(u64::from(n.max(1)))),
            Self::Weeks => date.checked_add_days(Days::new(7)),
            Self::Months(n) => date.checked_add_months(Months::new(n.max(1))),
            Self::Years(n) => NaiveDate::from_ymd_opt(date.year() + n.max(1) as i32, 1, 1),
        }
    }
}

/// Picks the finest calendar interval whose length is at least
/// `span_days / count`.
#[must_use]
pub fn select_date_interval(span_days: f64, count: usize) -> DateInterval {
    let raw = span_days / count.max(1) as f64;
    let candidates = [
        DateInterval::Days(1),
        DateInterval::Days(2),
        DateInterval::Weeks,
        DateInterval::Months(1),
        DateInterval::Months(3),
    ];
    if let Some(interval) = candidates
        .into_iter()
        .find(|interval| interval.min_days() >= raw)
    {
        return interval;
    }

    let years = nice_step(raw / 365.0).ceil().max(1.0);
    DateInterval::Years(years.min(f64::from(u32::MAX)) as u32)
}

/// Calendar-aligned ticks inside `[min, max]`.
#[must_use]
pub fn date_ticks(min: NaiveDate, max: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if count == 0 || min > max {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }

    let span_days = (max - min).num_days() as f64;
    let interval = select_date_interval(span_days, clamp_tick_count(count));

    let mut ticks = Vec::new();
    let mut cursor = interval.first_on_or_after(min);
    while let Some(date) = cursor {
        if date > max || ticks.len() >= MAX_TICKS {
            break;
        }
        ticks.push(date);
        cursor = interval.advance(date);
    }
    ticks
}
