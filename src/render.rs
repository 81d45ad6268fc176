use crate::config::PenStyle;
use crate::error::SurfaceError;
use crate::state::DrawingState;
use crate::stroke::PrimitiveSink;
use crate::types::{Color, Point, Primitive};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The drawing operations replay needs from a 2D surface
pub trait Surface2d {
    fn clear(&self);
    fn stroke_dot(&self, at: Point, color: &Color);
    fn stroke_line(&self, start: Point, end: Point, color: &Color);
}

pub fn draw_primitive<S: Surface2d + ?Sized>(surface: &S, primitive: Primitive<'_>) {
    match primitive {
        Primitive::Dot(dot) => surface.stroke_dot(dot.at, &dot.color),
        Primitive::Line(line) => surface.stroke_line(line.start, line.end, &line.color),
    }
}

/// Clear `surface` and redraw every recorded primitive, dots first, each
/// group in append order.
pub fn replay<S: Surface2d + ?Sized>(surface: &S, state: &DrawingState) {
    log::trace!("replaying {} primitives", state.primitive_count());
    surface.clear();
    for primitive in state.primitives() {
        draw_primitive(surface, primitive);
    }
}

/// Canvas 2D context with a fixed pen
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    pen: PenStyle,
}

impl CanvasSurface {
    /// Acquire the "2d" context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement, pen: PenStyle) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            pen,
        })
    }

    fn stroke_path(&self, start: Point, end: Point, color: &Color) {
        self.ctx.set_line_width(self.pen.line_width);
        self.ctx.set_line_cap(self.pen.line_cap.as_str());
        self.ctx.set_stroke_style_str(color.as_str());

        self.ctx.begin_path();
        self.ctx.move_to(start.x, start.y);
        self.ctx.line_to(end.x, end.y);
        self.ctx.stroke();
    }
}

impl Surface2d for CanvasSurface {
    fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_dot(&self, at: Point, color: &Color) {
        // Zero-length path; the round cap makes it a disc one pen wide
        self.stroke_path(at, at, color);
    }

    fn stroke_line(&self, start: Point, end: Point, color: &Color) {
        self.stroke_path(start, end, color);
    }
}

/// Sink for immediate mode: draws each primitive in the color current at
/// the time of the event and keeps nothing.
pub struct ImmediatePainter<'a, S: Surface2d + ?Sized> {
    surface: &'a S,
    color: Color,
}

impl<'a, S: Surface2d + ?Sized> ImmediatePainter<'a, S> {
    pub fn new(surface: &'a S, color: Color) -> Self {
        Self { surface, color }
    }
}

impl<S: Surface2d + ?Sized> PrimitiveSink for ImmediatePainter<'_, S> {
    fn dot(&self, at: Point) {
        self.surface.stroke_dot(at, &self.color);
    }

    fn line(&self, start: Point, end: Point) {
        self.surface.stroke_line(start, end, &self.color);
    }
}
