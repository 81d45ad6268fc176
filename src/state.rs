use crate::types::{Color, Dot, LineSegment, Point, Primitive};

/// Everything drawn so far plus the color the next primitive will get.
///
/// Dots and lines are append-only; insertion order is draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingState {
    color: Color,
    dots: Vec<Dot>,
    lines: Vec<LineSegment>,
}

impl DrawingState {
    /// Create an empty drawing with the default (black) color
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stroke color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Replace the current color. Existing primitives keep theirs.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Append a dot stamped with the current color
    pub fn add_dot(&mut self, at: Point) -> &Dot {
        self.dots.push(Dot::new(at, self.color.clone()));
        &self.dots[self.dots.len() - 1]
    }

    /// Append a line segment stamped with the current color
    pub fn add_line(&mut self, start: Point, end: Point) -> &LineSegment {
        self.lines
            .push(LineSegment::new(start, end, self.color.clone()));
        &self.lines[self.lines.len() - 1]
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Number of recorded dots and lines
    pub fn primitive_count(&self) -> usize {
        self.dots.len() + self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// All primitives in replay order: every dot, then every line
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
        self.dots
            .iter()
            .map(Primitive::Dot)
            .chain(self.lines.iter().map(Primitive::Line))
    }
}
