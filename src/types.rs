use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in surface-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Stroke color in the host's native string form (e.g. "#ff0000").
///
/// Never parsed or validated; it is handed to the canvas as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn black() -> Self {
        Self::new("#000000")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single mark left by a pointer-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub at: Point,
    pub color: Color,
}

impl Dot {
    pub fn new(at: Point, color: Color) -> Self {
        Self { at, color }
    }
}

/// Straight piece of a stroke between two consecutive input samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl LineSegment {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// Borrowed view of one renderable unit, in replay order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Dot(&'a Dot),
    Line(&'a LineSegment),
}
