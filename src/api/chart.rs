use tracing::debug;

use crate::api::ChartConfig;
use crate::api::layout::{HistogramLayout, build_render_frame, compose_layout};
use crate::core::{
    Histogram, HistogramPlot, NumericAdapter, RawRecord, TemporalAdapter, ValueAdapter, Viewport,
};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Histogram chart over numeric fields.
pub type NumericHistogramChart<R> = HistogramChart<NumericAdapter, R>;
/// Histogram chart over calendar-date fields.
pub type DateHistogramChart<R> = HistogramChart<TemporalAdapter, R>;

/// Chart facade: owns configuration and a renderer and runs the whole
/// records-to-drawing pipeline.
///
/// Every `plot` call starts from scratch; nothing from a previous call
/// leaks into the next one.
#[derive(Debug)]
pub struct HistogramChart<A: ValueAdapter, R: Renderer> {
    renderer: R,
    config: ChartConfig,
    histogram: Histogram<A>,
    plot_area: Viewport,
}

impl<R: Renderer> HistogramChart<NumericAdapter, R> {
    pub fn numeric(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::new(NumericAdapter::new(), renderer, config)
    }
}

impl<R: Renderer> HistogramChart<TemporalAdapter, R> {
    pub fn temporal(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::new(TemporalAdapter::new(), renderer, config)
    }
}

impl<A: ValueAdapter, R: Renderer> HistogramChart<A, R> {
    pub fn new(adapter: A, renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot_area = config.plot_viewport()?;
        let histogram = Histogram::new(adapter, config.field.clone(), config.bin_count)?
            .with_invalid_value_policy(config.invalid_value_policy);

        debug!(
            width = config.width,
            height = config.height,
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            field = %config.field,
            bin_count = config.bin_count,
            "created histogram chart"
        );

        Ok(Self {
            renderer,
            config,
            histogram,
            plot_area,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn histogram(&self) -> &Histogram<A> {
        &self.histogram
    }

    #[must_use]
    pub fn plot_area(&self) -> Viewport {
        self.plot_area
    }

    /// Computes the plot without drawing anything.
    pub fn compute(&self, records: &[RawRecord]) -> ChartResult<HistogramPlot<A::Value>> {
        self.histogram.plot(records, self.plot_area)
    }

    #[must_use]
    pub fn layout(&self, plot: &HistogramPlot<A::Value>) -> HistogramLayout {
        compose_layout(plot, self.histogram.adapter())
    }

    /// Computes the plot and the frame that would be rendered for it.
    pub fn build_frame(
        &self,
        records: &[RawRecord],
    ) -> ChartResult<(HistogramPlot<A::Value>, RenderFrame)> {
        let plot = self.compute(records)?;
        let layout = self.layout(&plot);
        let frame = build_render_frame(&layout, &self.config);
        Ok((plot, frame))
    }

    /// Runs the full pipeline and hands the frame to the renderer.
    pub fn plot(&mut self, records: &[RawRecord]) -> ChartResult<HistogramPlot<A::Value>> {
        let (plot, frame) = self.build_frame(records)?;
        self.renderer.render(&frame)?;
        Ok(plot)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
