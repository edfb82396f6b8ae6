use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BIN_COUNT, InvalidValuePolicy, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Pixel gaps between the outer chart edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl ChartMargins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self::new(10, 30, 30, 30)
    }
}

/// Public histogram chart configuration.
///
/// Serializable so hosts can persist chart setup; every field has a default,
/// so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub margins: ChartMargins,
    #[serde(default = "default_field")]
    pub field: String,
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,
    #[serde(default)]
    pub invalid_value_policy: InvalidValuePolicy,
    #[serde(default = "default_bar_color")]
    pub bar_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_color")]
    pub label_color: Color,
    #[serde(default = "default_label_color_on_bar")]
    pub label_color_on_bar: Color,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margins: ChartMargins::default(),
            field: default_field(),
            bin_count: default_bin_count(),
            invalid_value_policy: InvalidValuePolicy::default(),
            bar_color: default_bar_color(),
            axis_color: default_axis_color(),
            label_color: default_axis_color(),
            label_color_on_bar: default_label_color_on_bar(),
            background: None,
            font_size_px: default_font_size_px(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the record field the histogram reads.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    #[must_use]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    #[must_use]
    pub fn with_invalid_value_policy(mut self, policy: InvalidValuePolicy) -> Self {
        self.invalid_value_policy = policy;
        self
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_label_color_on_bar(mut self, color: Color) -> Self {
        self.label_color_on_bar = color;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Plot area left after subtracting margins from the outer size.
    pub fn plot_viewport(&self) -> ChartResult<Viewport> {
        let horizontal = self.margins.left.saturating_add(self.margins.right);
        let vertical = self.margins.top.saturating_add(self.margins.bottom);
        let plot = Viewport::new(
            self.width.saturating_sub(horizontal),
            self.height.saturating_sub(vertical),
        );
        if !plot.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: plot.width,
                height: plot.height,
            });
        }
        Ok(plot)
    }

    /// Checks everything `HistogramChart::new` relies on.
    pub fn validate(&self) -> ChartResult<()> {
        self.plot_viewport()?;
        if self.bin_count == 0 {
            return Err(ChartError::InvalidBinCount(self.bin_count));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.bar_color.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()?;
        self.label_color_on_bar.validate()?;
        if let Some(background) = self.background {
            background.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_width() -> u32 {
    960
}

fn default_height() -> u32 {
    500
}

fn default_field() -> String {
    "value".to_owned()
}

fn default_bin_count() -> usize {
    DEFAULT_BIN_COUNT
}

fn default_bar_color() -> Color {
    Color::STEEL_BLUE
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_label_color_on_bar() -> Color {
    Color::WHITE
}

fn default_font_size_px() -> f64 {
    10.0
}
