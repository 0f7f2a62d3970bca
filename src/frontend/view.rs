//! Waveform rendering
//!
//! [`WaveformView`] draws a finished [`Waveform`] into a [`DrawingSink`]:
//! the midline first, then the cell boundaries, then the waveform on top.
//! [`PainterSink`] is the egui implementation of the sink.

use crate::config::UiConfig;
use crate::waveform::{Point, Segment, Waveform};
use egui::{Color32, Painter, Pos2, Shape, Stroke};

/// Anything that can stroke lines in screen coordinates
#[cfg_attr(test, mockall::automock)]
pub trait DrawingSink {
    /// Stroke a single line segment
    fn draw_line(&mut self, segment: Segment, color: Color32);

    /// Stroke a connected polyline
    fn draw_polyline(&mut self, points: &[Point], color: Color32);
}

/// Colours used to draw a waveform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformView {
    pub grid_color: Color32,
    pub waveform_color: Color32,
}

impl Default for WaveformView {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl WaveformView {
    /// Create a view from UI configuration
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            grid_color: rgba(config.grid_color),
            waveform_color: rgba(config.waveform_color),
        }
    }

    /// Draw `waveform` into `sink`
    pub fn render(&self, sink: &mut dyn DrawingSink, waveform: &Waveform) {
        if let Some(midline) = waveform.midline {
            sink.draw_line(midline, self.grid_color);
        }

        for gridline in &waveform.gridlines {
            sink.draw_line(*gridline, self.grid_color);
        }

        if waveform.polyline.len() >= 2 {
            sink.draw_polyline(&waveform.polyline, self.waveform_color);
        }
    }
}

fn rgba(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

fn to_pos2(point: Point) -> Pos2 {
    egui::pos2(point.x, point.y)
}

/// [`DrawingSink`] backed by an egui [`Painter`]
pub struct PainterSink<'a> {
    painter: &'a Painter,
    line_width: f32,
}

impl<'a> PainterSink<'a> {
    pub fn new(painter: &'a Painter, line_width: f32) -> Self {
        Self {
            painter,
            line_width,
        }
    }
}

impl DrawingSink for PainterSink<'_> {
    fn draw_line(&mut self, segment: Segment, color: Color32) {
        self.painter.line_segment(
            [to_pos2(segment.from), to_pos2(segment.to)],
            Stroke::new(self.line_width, color),
        );
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color32) {
        let points: Vec<Pos2> = points.iter().copied().map(to_pos2).collect();
        self.painter
            .add(Shape::line(points, Stroke::new(self.line_width, color)));
    }
}
