//! Waveform builder
//!
//! Turns a bit sequence into drawable geometry for one line code:
//!
//! 1. The drawing bounds are split into one equal-width cell per bit.
//! 2. Each bit is run through an [`Encoder`], threading the carried state.
//! 3. The emitted [`SignalLevel`] becomes two points (a flat run) or four
//!    points (a mid-cell step) inside that cell.
//! 4. Points are appended to a single polyline, skipping any point equal to
//!    the one just before it.
//!
//! Coordinates are screen coordinates: `y` grows downward, so a high level
//! is drawn at `y_min` and a low level at `y_max`.
//!
//! The builder also records the vertical cell boundaries and the horizontal
//! midline, which the view draws underneath the waveform.

use crate::encoder::Encoder;
use crate::error::{LineCodeError, Result};
use crate::sequence::MAX_DIGITS;
use crate::types::{LineCode, SignalLevel};

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Rectangular drawing region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    /// Create bounds from explicit edges
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create bounds from a top-left corner and a size
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, x + width, y, y + height)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Vertical centre, where the zero level is drawn
    pub fn y_mid(&self) -> f32 {
        self.y_min + self.height() / 2.0
    }

    /// X coordinate of the left edge of cell `index` out of `cells`.
    ///
    /// `index == cells` is the right edge of the last cell, pinned to `x_max`.
    fn cell_edge(&self, index: usize, cells: usize) -> f32 {
        if index >= cells {
            self.x_max
        } else {
            self.x_min + (self.width() / cells as f32) * index as f32
        }
    }

    fn vertical_at(&self, x: f32) -> Segment {
        Segment::new(Point::new(x, self.y_min), Point::new(x, self.y_max))
    }

    fn midline(&self) -> Segment {
        let y = self.y_mid();
        Segment::new(Point::new(self.x_min, y), Point::new(self.x_max, y))
    }
}

/// Horizontal extent of one bit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub left: f32,
    pub right: f32,
}

impl Cell {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn middle(&self) -> f32 {
        self.left + (self.right - self.left) / 2.0
    }
}

/// Geometry for one level inside one cell.
///
/// Flat levels yield two points; transitions yield four, stepping at the
/// middle of the cell.
pub fn level_points(level: SignalLevel, cell: &Cell, bounds: &Bounds) -> Vec<Point> {
    let flat = |y: f32| vec![Point::new(cell.left, y), Point::new(cell.right, y)];
    let step = |from: f32, to: f32| {
        let mid = cell.middle();
        vec![
            Point::new(cell.left, from),
            Point::new(mid, from),
            Point::new(mid, to),
            Point::new(cell.right, to),
        ]
    };

    match level {
        SignalLevel::Low => flat(bounds.y_max),
        SignalLevel::High => flat(bounds.y_min),
        SignalLevel::Zero => flat(bounds.y_mid()),
        SignalLevel::LowToHigh => step(bounds.y_max, bounds.y_min),
        SignalLevel::HighToLow => step(bounds.y_min, bounds.y_max),
    }
}

/// Polyline accumulator that drops consecutive duplicate points
///
/// Only the immediately preceding point is compared. Revisiting an earlier
/// coordinate, or extending a straight run, still adds a vertex.
#[derive(Debug, Clone, Default)]
pub struct PolylineBuilder {
    points: Vec<Point>,
}

impl PolylineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point. Returns false if it duplicated the previous point.
    pub fn push(&mut self, point: Point) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            self.push(point);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Drawable output of [`build`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waveform {
    /// Emitted level for each bit, in order
    pub levels: Vec<SignalLevel>,
    /// The waveform itself
    pub polyline: Vec<Point>,
    /// Vertical cell boundaries, left to right (one more than the bit count)
    pub gridlines: Vec<Segment>,
    /// Horizontal centre line, absent for an empty sequence
    pub midline: Option<Segment>,
}

impl Waveform {
    /// Number of bits rendered
    pub fn bit_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Build the waveform for `bits` under `code`, fitted to `bounds`.
///
/// An empty sequence yields an empty [`Waveform`]. Sequences longer than
/// [`MAX_DIGITS`] and non-binary characters are errors; nothing is returned
/// for a sequence that fails part-way.
pub fn build(bits: &str, code: LineCode, bounds: Bounds) -> Result<Waveform> {
    let n = bits.chars().count();
    if n == 0 {
        return Ok(Waveform::default());
    }
    if n > MAX_DIGITS {
        return Err(LineCodeError::OversizeSequence {
            len: n,
            max: MAX_DIGITS,
        });
    }

    let mut encoder = Encoder::new(code);
    let mut levels = Vec::with_capacity(n);
    let mut polyline = PolylineBuilder::with_capacity(n * 4);
    let mut gridlines = Vec::with_capacity(n + 1);

    for (i, bit) in bits.chars().enumerate() {
        let cell = Cell::new(bounds.cell_edge(i, n), bounds.cell_edge(i + 1, n));
        let level = encoder.push(bit)?;

        gridlines.push(bounds.vertical_at(cell.left));
        polyline.extend(level_points(level, &cell, &bounds));
        levels.push(level);
    }
    gridlines.push(bounds.vertical_at(bounds.x_max));

    tracing::trace!(
        code = %code,
        bits = n,
        points = polyline.len(),
        "built waveform"
    );

    Ok(Waveform {
        levels,
        polyline: polyline.into_points(),
        gridlines,
        midline: Some(bounds.midline()),
    })
}
