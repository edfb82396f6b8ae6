use chrono::{Datelike, NaiveDate, Weekday};
use histogram_chart::core::format::{format_count, format_date, format_number};
use histogram_chart::core::ticks::{
    MAX_TICK_COUNT, date_ticks, linear_axis_ticks, linear_ticks, nice_step,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn linear_ticks_use_nice_steps() {
    let ticks = linear_ticks(0.0, 87.0, 10);
    assert_eq!(
        ticks,
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
    );

    let ticks = linear_ticks(0.0, 35.0, 10);
    assert_eq!(ticks, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
}

#[test]
fn linear_ticks_handle_fractional_steps_exactly() {
    let ticks = linear_ticks(0.0, 1.0, 5);
    assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn linear_ticks_for_degenerate_or_invalid_ranges() {
    assert_eq!(linear_ticks(4.0, 4.0, 10), vec![4.0]);
    assert!(linear_ticks(5.0, 1.0, 10).is_empty());
    assert!(linear_ticks(0.0, 10.0, 0).is_empty());
    assert!(linear_ticks(0.0, f64::NAN, 10).is_empty());
}

#[test]
fn at_most_count_ticks_fall_inside_the_domain() {
    for (max, count) in [(87.0, 10), (35.0, 10), (1_234.0, 7), (3.0, 1)] {
        let inner = linear_ticks(0.0, max, count)
            .into_iter()
            .filter(|tick| *tick > 0.0 && *tick < max)
            .count();
        assert!(inner <= count, "max={max} count={count} inner={inner}");
    }
    assert_eq!(nice_step(0.35), 0.5);
}

#[test]
fn short_date_spans_tick_daily() {
    let ticks = date_ticks(ymd(2004, 4, 15), ymd(2004, 4, 20), 10);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks.first().copied(), Some(ymd(2004, 4, 15)));
    assert_eq!(ticks.last().copied(), Some(ymd(2004, 4, 20)));
}

#[test]
fn medium_date_spans_tick_on_sundays() {
    let ticks = date_ticks(ymd(2004, 4, 15), ymd(2004, 6, 20), 10);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|date| date.weekday() == Weekday::Sun));
    assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0]).num_days() == 7));
}

#[test]
fn long_date_spans_tick_on_year_starts() {
    let ticks = date_ticks(ymd(1995, 6, 1), ymd(2024, 6, 1), 10);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|date| date.ordinal() == 1));
    assert!(ticks.len() <= 10);
}

#[test]
fn labels_are_formatted_for_axes() {
    assert_eq!(format_count(1_234), "1,234");
    assert_eq!(format_number(12_500.0), "12,500");
    assert_eq!(format_number(0.25), "0.25");
    assert_eq!(format_number(-1e-7), "0");
    assert_eq!(format_date(ymd(2005, 1, 1)), "2005");
    assert_eq!(format_date(ymd(2004, 7, 1)), "July");
    assert_eq!(format_date(ymd(2004, 4, 18)), "Apr 18");
}

#[test]
fn axis_ticks_round_to_the_nearest_nice_step() {
    let ticks = linear_axis_ticks(0.0, 12.0, 10);
    assert_eq!(ticks.len(), 13);
    assert_eq!(ticks[1], 1.0);

    // Binning thresholds never go finer than span / count.
    assert_eq!(linear_ticks(0.0, 12.0, 10)[1], 2.0);
}

#[test]
fn oversized_tick_requests_are_capped_but_cover_the_range() {
    let ticks = linear_ticks(0.0, 1.0, 1_000_000);

    assert!(ticks.len() <= MAX_TICK_COUNT + 1);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(1.0));

    let dates = date_ticks(ymd(1900, 1, 1), ymd(2000, 1, 1), 1_000_000);
    assert!(dates.len() <= MAX_TICK_COUNT + 1);
    assert!(dates.last().copied().is_some_and(|date| date > ymd(1999, 12, 1)));
}
