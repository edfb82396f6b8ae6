//! Pixel geometry for a computed histogram.
//!
//! All coordinates here are relative to the plot area's top-left corner.
//! `build_render_frame` applies the margin translation.

use smallvec::SmallVec;
use tracing::trace;

use crate::api::ChartConfig;
use crate::core::format::{format_count, format_number};
use crate::core::ticks::linear_axis_ticks;
use crate::core::{HistogramPlot, ValueAdapter, Viewport};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Requested tick count for both axes.
pub const AXIS_TICK_COUNT: usize = 10;
/// Outer length of axis tick marks.
pub const TICK_SIZE_PX: f64 = 6.0;
/// Horizontal gap left between neighbouring bars.
pub const BAR_GAP_PX: f64 = 1.0;
/// Every bar is shifted right by this amount.
pub const BAR_OFFSET_PX: f64 = 1.0;

const TICK_LABEL_PADDING_PX: f64 = 3.0;
const COUNT_LABEL_INSET_PX: f64 = 6.0;
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;

pub type AxisTicks = SmallVec<[AxisTick; 12]>;

/// One bar plus its count label.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub count: usize,
    pub label: String,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// A tick position along an axis with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLayout {
    pub plot_area: Viewport,
    pub bars: Vec<BarGeometry>,
    /// Positions are x pixels inside the plot area.
    pub x_ticks: AxisTicks,
    /// Positions are y pixels inside the plot area.
    pub y_ticks: AxisTicks,
}

/// Builds bar rectangles and axis ticks for `plot`.
///
/// A degenerate domain has a single bar that spans the plot width.
#[must_use]
pub fn compose_layout<A: ValueAdapter>(
    plot: &HistogramPlot<A::Value>,
    adapter: &A,
) -> HistogramLayout {
    let plot_width = f64::from(plot.plot_area.width);
    let plot_height = f64::from(plot.plot_area.height);
    let degenerate = plot.domain.is_degenerate();

    let bars: Vec<BarGeometry> = plot
        .bins
        .iter()
        .map(|bin| {
            let (left, right) = if degenerate {
                (0.0, plot_width)
            } else {
                (plot.x_of(bin.x0), plot.x_of(bin.x1))
            };
            let y = plot.y_of(bin.count);
            BarGeometry {
                x: left + BAR_OFFSET_PX,
                y,
                width: (right - left - BAR_GAP_PX).max(0.0),
                height: (plot_height - y).max(0.0),
                count: bin.count,
                label: format_count(bin.count),
            }
        })
        .collect();

    let x_ticks: AxisTicks = if plot.is_empty() {
        AxisTicks::new()
    } else {
        adapter
            .axis_ticks(plot.domain, AXIS_TICK_COUNT)
            .into_iter()
            .map(|tick| AxisTick {
                position: plot.x_of(tick),
                label: adapter.format_tick(tick),
            })
            .collect()
    };

    // Counts are whole numbers, so fractional count ticks are dropped.
    let max_count = plot.max_count() as f64;
    let y_ticks: AxisTicks = linear_axis_ticks(0.0, max_count, AXIS_TICK_COUNT)
        .into_iter()
        .filter(|tick| tick.fract() == 0.0)
        .map(|tick| AxisTick {
            position: plot.height_scale.map(tick),
            label: format_number(tick),
        })
        .collect();

    trace!(
        bars = bars.len(),
        x_ticks = x_ticks.len(),
        y_ticks = y_ticks.len(),
        "composed histogram layout"
    );

    HistogramLayout {
        plot_area: plot.plot_area,
        bars,
        x_ticks,
        y_ticks,
    }
}

/// Turns a layout into draw commands for the full chart viewport.
///
/// Count labels sit inside the top of their bar; bars too short to hold one
/// get the label just above them instead.
#[must_use]
pub fn build_render_frame(layout: &HistogramLayout, config: &ChartConfig) -> RenderFrame {
    let plot_width = f64::from(layout.plot_area.width);
    let plot_height = f64::from(layout.plot_area.height);
    let font = config.font_size_px;

    let mut frame = RenderFrame::new(config.viewport()).with_background(config.background);

    for bar in &layout.bars {
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            config.bar_color,
        ));

        let inside = bar.height >= COUNT_LABEL_INSET_PX + font;
        let (label_y, label_color) = if inside {
            (bar.y + COUNT_LABEL_INSET_PX + 0.75 * font, config.label_color_on_bar)
        } else {
            (bar.y - TICK_LABEL_PADDING_PX, config.label_color)
        };
        frame.texts.push(TextPrimitive::new(
            bar.label.clone(),
            bar.center_x(),
            label_y,
            font,
            label_color,
            TextHAlign::Center,
        ));
    }

    // x axis along the bottom edge.
    frame.lines.push(LinePrimitive::new(
        0.0,
        plot_height,
        plot_width,
        plot_height,
        AXIS_STROKE_WIDTH_PX,
        config.axis_color,
    ));
    for tick in &layout.x_ticks {
        frame.lines.push(LinePrimitive::new(
            tick.position,
            plot_height,
            tick.position,
            plot_height + TICK_SIZE_PX,
            AXIS_STROKE_WIDTH_PX,
            config.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            tick.position,
            plot_height + TICK_SIZE_PX + TICK_LABEL_PADDING_PX + 0.71 * font,
            font,
            config.label_color,
            TextHAlign::Center,
        ));
    }

    // y axis along the left edge.
    frame.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        plot_height,
        AXIS_STROKE_WIDTH_PX,
        config.axis_color,
    ));
    for tick in &layout.y_ticks {
        frame.lines.push(LinePrimitive::new(
            -TICK_SIZE_PX,
            tick.position,
            0.0,
            tick.position,
            AXIS_STROKE_WIDTH_PX,
            config.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            -(TICK_SIZE_PX + TICK_LABEL_PADDING_PX),
            tick.position + 0.32 * font,
            font,
            config.label_color,
            TextHAlign::Right,
        ));
    }

    frame.translate(f64::from(config.margins.left), f64::from(config.margins.top));
    frame
}
