use crate::types::Color;

pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 500;
pub const CANVAS_BORDER: &str = "1px solid #000000";
pub const LINE_WIDTH: f64 = 10.0;

/// How the drawing surface turns input into pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SurfaceMode {
    /// Record primitives in the store and replay them all on every change
    #[default]
    Recording,
    /// Paint straight from input events; nothing is kept
    Immediate,
}

/// Canvas `lineCap` values
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PenStyle {
    pub line_width: f64,
    pub line_cap: LineCap,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            line_width: LINE_WIDTH,
            line_cap: LineCap::Round,
        }
    }
}

/// Everything about the board that is fixed at mount time
#[derive(Clone, PartialEq, Debug)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub border: String,
    pub mode: SurfaceMode,
    pub pen: PenStyle,
    pub initial_color: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            border: CANVAS_BORDER.to_string(),
            mode: SurfaceMode::default(),
            pen: PenStyle::default(),
            initial_color: Color::black(),
        }
    }
}

impl BoardConfig {
    pub fn with_mode(mut self, mode: SurfaceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Inline style for the canvas element
    pub fn canvas_style(&self) -> String {
        format!("border: {};", self.border)
    }
}
