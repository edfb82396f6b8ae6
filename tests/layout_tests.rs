use histogram_chart::api::layout::{BAR_OFFSET_PX, TICK_SIZE_PX};
use histogram_chart::api::{ChartConfig, build_render_frame, compose_layout};
use histogram_chart::core::{
    Histogram, NumericAdapter, NumericDomainPolicy, records_from_json_str, records_from_values,
};
use histogram_chart::render::{Color, TextHAlign};

fn three_record_layout() -> (histogram_chart::api::HistogramLayout, ChartConfig) {
    let config = ChartConfig::default();
    let plot_area = config.plot_viewport().expect("plot area");
    let adapter = NumericAdapter::new();
    let histogram = Histogram::new(adapter, "value", 10).expect("valid histogram");
    let records = records_from_json_str(r#"[{"value":"5"},{"value":"1"},{"value":"35"}]"#)
        .expect("records json");

    let plot = histogram.plot(&records, plot_area).expect("plot");
    (compose_layout(&plot, &adapter), config)
}

#[test]
fn bars_follow_bin_edges_with_one_pixel_gap() {
    let (layout, _) = three_record_layout();

    assert_eq!(layout.bars.len(), 7);
    let first = &layout.bars[0];
    assert_eq!(first.x, BAR_OFFSET_PX);
    assert_eq!(first.width, 128.0);
    assert_eq!(first.y, 0.0);
    assert_eq!(first.height, 460.0);

    let second = &layout.bars[1];
    assert_eq!(second.x, 129.0 + BAR_OFFSET_PX);
    assert_eq!(second.width, 127.0);

    let empty = &layout.bars[2];
    assert_eq!(empty.count, 0);
    assert_eq!(empty.y, 460.0);
    assert_eq!(empty.height, 0.0);
}

#[test]
fn axis_ticks_use_domain_and_count_ranges() {
    let (layout, _) = three_record_layout();

    let x_labels: Vec<&str> = layout.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(x_labels, vec!["0", "5", "10", "15", "20", "25", "30", "35"]);
    assert_eq!(layout.x_ticks.last().map(|tick| tick.position), Some(900.0));

    let y_labels: Vec<&str> = layout.y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(y_labels, vec!["0", "1"]);
}

#[test]
fn degenerate_domain_bar_spans_plot_width() {
    let config = ChartConfig::default();
    let plot_area = config.plot_viewport().expect("plot area");
    let adapter = NumericAdapter::new().with_domain_policy(NumericDomainPolicy::Extent);
    let histogram = Histogram::new(adapter, "value", 10).expect("valid histogram");
    let records = records_from_values("value", [4.0, 4.0, 4.0]);

    let plot = histogram.plot(&records, plot_area).expect("plot");
    let layout = compose_layout(&plot, &adapter);

    assert_eq!(layout.bars.len(), 1);
    assert_eq!(layout.bars[0].x, BAR_OFFSET_PX);
    assert_eq!(layout.bars[0].width, 899.0);
    assert_eq!(layout.bars[0].label, "3");
}

#[test]
fn count_labels_use_thousands_separators() {
    let config = ChartConfig::default();
    let plot_area = config.plot_viewport().expect("plot area");
    let adapter = NumericAdapter::new();
    let histogram = Histogram::new(adapter, "value", 1).expect("valid histogram");
    let records = records_from_values("value", std::iter::repeat_n(1.0, 1_234));

    let plot = histogram.plot(&records, plot_area).expect("plot");
    let layout = compose_layout(&plot, &adapter);

    assert_eq!(layout.bars.len(), 1);
    assert_eq!(layout.bars[0].label, "1,234");
}

#[test]
fn render_frame_is_translated_by_margins() {
    let (layout, config) = three_record_layout();

    let frame = build_render_frame(&layout, &config);
    frame.validate().expect("valid frame");

    assert_eq!(frame.viewport, config.viewport());
    assert_eq!(frame.rects.len(), 7);
    assert_eq!(frame.rects[0].x, 30.0 + BAR_OFFSET_PX);
    assert_eq!(frame.rects[0].y, 10.0);
    assert_eq!(frame.rects[0].fill_color, Color::STEEL_BLUE);

    // 2 axis lines, 8 x ticks, 2 y ticks.
    assert_eq!(frame.lines.len(), 12);
    // 7 count labels, 8 x tick labels, 2 y tick labels.
    assert_eq!(frame.texts.len(), 17);

    let x_axis = frame.lines[0];
    assert_eq!((x_axis.x1, x_axis.y1), (30.0, 470.0));
    assert_eq!((x_axis.x2, x_axis.y2), (930.0, 470.0));
    let first_tick = frame.lines[1];
    assert_eq!(first_tick.y2 - first_tick.y1, TICK_SIZE_PX);
}

#[test]
fn count_labels_sit_inside_tall_bars_and_above_short_ones() {
    let (layout, config) = three_record_layout();

    let frame = build_render_frame(&layout, &config);

    let tall = &frame.texts[0];
    assert_eq!(tall.text, "1");
    assert_eq!(tall.h_align, TextHAlign::Center);
    assert_eq!(tall.color, Color::WHITE);
    assert!(tall.y > frame.rects[0].y);

    let short = &frame.texts[2];
    assert_eq!(short.text, "0");
    assert_eq!(short.color, Color::BLACK);
    assert!(short.y < frame.rects[2].y);
}

#[test]
fn x_axis_ticks_use_the_nearest_nice_step() {
    let config = ChartConfig::default();
    let plot_area = config.plot_viewport().expect("plot area");
    let adapter = NumericAdapter::new();
    let histogram = Histogram::new(adapter, "value", 10).expect("valid histogram");
    let records = records_from_values("value", [0.5, 3.0, 12.0]);

    let plot = histogram.plot(&records, plot_area).expect("plot");
    let layout = compose_layout(&plot, &adapter);

    assert_eq!((plot.domain.min(), plot.domain.max()), (0.0, 12.0));
    assert_eq!(plot.bins.len(), 6);
    let labels: Vec<&str> = layout.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[..3], ["0", "1", "2"]);
    assert_eq!(labels.last().copied(), Some("12"));
}
