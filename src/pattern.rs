//! Cursor movement patterns.
//!
//! Each pattern is a pure function of a [`Canvas`] that yields a finite
//! sequence of [`Point`]s. The iterators are lazy and `Clone`, so a pattern
//! can be replayed by cloning it or by calling [`Pattern::points`] again.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Horizontal step between zigzag corners, and the zigzag amplitude.
pub const ZIGZAG_STEP: u32 = 20;

/// Vertical margin subtracted from half the screen height.
pub const DEFAULT_MARGIN: u32 = 10;

/// Physical display size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A cursor position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates toward zero, the way host cursor APIs treat fractional input.
    fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }
}

/// The area patterns are drawn in.
///
/// `height` is the vertical center line of the patterns, not the full
/// display height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: u32, height: f64) -> Self {
        Self { width, height }
    }

    /// Derive the canvas from the display: full width, half height minus `margin`.
    ///
    /// Small displays are not clamped; a negative height simply produces
    /// patterns above the top edge.
    pub fn from_screen(screen: ScreenSize, margin: u32) -> Self {
        Self {
            width: screen.width,
            height: f64::from(screen.height) / 2.0 - f64::from(margin),
        }
    }
}

/// The available movement patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[serde(rename = "sine")]
    SineWave,
    Zigzag,
    Circle,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::SineWave, Pattern::Zigzag, Pattern::Circle];

    /// Stable lowercase name used in config files, CLI flags and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SineWave => "sine",
            Self::Zigzag => "zigzag",
            Self::Circle => "circle",
        }
    }

    /// Lazily generate the pattern's points for `canvas`.
    pub fn points(&self, canvas: Canvas) -> Points {
        match self {
            Self::SineWave => Points::SineWave(SineWave::new(canvas)),
            Self::Zigzag => Points::Zigzag(Zigzag::new(canvas)),
            Self::Circle => Points::Circle(Circle::new(canvas)),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sinewave" | "sine-wave" => Ok(Self::SineWave),
            "zigzag" => Ok(Self::Zigzag),
            "circle" => Ok(Self::Circle),
            other => Err(format!(
                "unknown pattern '{}' (expected sine, zigzag or circle)",
                other
            )),
        }
    }
}

/// `y = h * sin(2πx / w) + h` for every integer `x` in `[0, w)`.
#[derive(Debug, Clone)]
pub struct SineWave {
    canvas: Canvas,
    x: u32,
}

impl SineWave {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, x: 0 }
    }
}

impl Iterator for SineWave {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x >= self.canvas.width {
            return None;
        }
        let x = f64::from(self.x);
        let width = f64::from(self.canvas.width);
        let y = self.canvas.height * (2.0 * PI * x / width).sin() + self.canvas.height;
        self.x += 1;
        Some(Point::from_f64(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.canvas.width.saturating_sub(self.x) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SineWave {}

/// Alternates between `h - 20` and `h + 20` every 20 pixels.
#[derive(Debug, Clone)]
pub struct Zigzag {
    canvas: Canvas,
    x: u32,
}

impl Zigzag {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, x: 0 }
    }
}

impl Iterator for Zigzag {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x >= self.canvas.width {
            return None;
        }
        let amplitude = f64::from(ZIGZAG_STEP);
        let y = if (self.x / ZIGZAG_STEP) % 2 == 0 {
            self.canvas.height - amplitude
        } else {
            self.canvas.height + amplitude
        };
        let point = Point::from_f64(f64::from(self.x), y);
        self.x = self.x.saturating_add(ZIGZAG_STEP);
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .canvas
            .width
            .saturating_sub(self.x)
            .div_ceil(ZIGZAG_STEP) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Zigzag {}

/// A full circle of radius `h / 2` around `(w / 2, h)`, one point per degree.
#[derive(Debug, Clone)]
pub struct Circle {
    canvas: Canvas,
    angle: u32,
}

impl Circle {
    pub const STEPS: u32 = 360;

    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, angle: 0 }
    }

    pub fn radius(&self) -> f64 {
        self.canvas.height / 2.0
    }

    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.canvas.width) / 2.0, self.canvas.height)
    }
}

impl Iterator for Circle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.angle >= Self::STEPS {
            return None;
        }
        let radian = f64::from(self.angle) * PI / 180.0;
        let (cx, cy) = self.center();
        let radius = self.radius();
        self.angle += 1;
        Some(Point::from_f64(
            cx + radius * radian.cos(),
            cy + radius * radian.sin(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (Self::STEPS - self.angle) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Circle {}

/// Iterator over the points of any [`Pattern`].
#[derive(Debug, Clone)]
pub enum Points {
    SineWave(SineWave),
    Zigzag(Zigzag),
    Circle(Circle),
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Self::SineWave(it) => it.next(),
            Self::Zigzag(it) => it.next(),
            Self::Circle(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::SineWave(it) => it.size_hint(),
            Self::Zigzag(it) => it.size_hint(),
            Self::Circle(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Points {}
