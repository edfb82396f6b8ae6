//! SVG document backend.
//!
//! Each `render` call replaces the stored document, so the renderer can be
//! reused across plots without carrying state from earlier frames.

use std::fmt::Write as _;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Renders frames into a standalone SVG document string.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    font_family: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `font-family` attribute on text (default `sans-serif`).
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Document produced by the last successful `render`, empty before that.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or("sans-serif")
    }

    fn write_document(&self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::with_capacity(
            256 + 96 * (frame.rects.len() + frame.lines.len() + frame.texts.len()),
        );

        writeln!(
            svg,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        if let Some(background) = frame.background {
            writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                css_color(background)
            )?;
        }
        for rect in &frame.rects {
            write_rect(&mut svg, rect)?;
        }
        for line in &frame.lines {
            write_line(&mut svg, line)?;
        }
        for text in &frame.texts {
            write_text(&mut svg, text, self.font_family())?;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = self
            .write_document(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            bytes = self.document.len(),
            "rendered svg document"
        );
        Ok(())
    }
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        css_color(rect.fill_color)
    )
}

fn write_line(svg: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        css_color(line.color),
        line.stroke_width
    )
}

fn write_text(svg: &mut String, text: &TextPrimitive, font_family: &str) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    writeln!(
        svg,
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}" font-family="{}">{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        css_color(text.color),
        escape_xml(font_family),
        escape_xml(&text.text)
    )
}

/// CSS color string: `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
#[must_use]
pub fn css_color(color: Color) -> String {
    let (red, green, blue) = color.to_rgb8();
    if color.alpha >= 1.0 {
        format!("rgb({red},{green},{blue})")
    } else {
        format!("rgba({red},{green},{blue},{:.3})", color.alpha)
    }
}

/// Escapes the XML special characters in attribute values and text nodes.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
