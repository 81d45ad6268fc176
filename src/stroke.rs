use crate::types::Point;

/// Receiver for the primitives a stroke produces.
///
/// The store records them; an immediate painter draws them and forgets.
pub trait PrimitiveSink {
    fn dot(&self, at: Point);
    fn line(&self, start: Point, end: Point);
}

/// Pointer input already translated to surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    /// Button held; `anchor` is the last sampled position
    Painting { anchor: Point },
}

/// Turns a pointer-down/move/up sequence into one dot followed by a
/// polyline of line segments.
#[derive(Debug, Clone, Default)]
pub struct StrokeCapture {
    state: StrokeState,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, StrokeState::Painting { .. })
    }

    pub fn handle<S: PrimitiveSink + ?Sized>(&mut self, input: PointerInput, sink: &S) {
        match input {
            PointerInput::Down(at) => self.pointer_down(at, sink),
            PointerInput::Move(at) => self.pointer_move(at, sink),
            PointerInput::Up => self.pointer_up(),
        }
    }

    /// Start a stroke at `at`, marking it with a dot.
    ///
    /// A down while already painting (the release happened off-surface)
    /// starts a fresh stroke.
    pub fn pointer_down<S: PrimitiveSink + ?Sized>(&mut self, at: Point, sink: &S) {
        log::debug!("stroke started at ({}, {})", at.x, at.y);
        self.state = StrokeState::Painting { anchor: at };
        sink.dot(at);
    }

    pub fn pointer_move<S: PrimitiveSink + ?Sized>(&mut self, at: Point, sink: &S) {
        if let StrokeState::Painting { anchor } = self.state {
            sink.line(anchor, at);
            self.state = StrokeState::Painting { anchor: at };
        }
    }

    pub fn pointer_up(&mut self) {
        if self.is_painting() {
            log::debug!("stroke finished");
        }
        self.state = StrokeState::Idle;
    }

    /// Forget any stroke in progress, e.g. when the surface is detached
    pub fn reset(&mut self) {
        self.state = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreHandle;
    use crate::types::{Color, Dot, LineSegment};

    fn stroke(capture: &mut StrokeCapture, store: &StoreHandle, points: &[(f64, f64)]) {
        let (first, rest) = points.split_first().unwrap();
        capture.pointer_down(Point::new(first.0, first.1), &**store);
        for &(x, y) in rest {
            capture.pointer_move(Point::new(x, y), &**store);
        }
        capture.pointer_up();
    }

    #[test]
    fn test_stroke_yields_one_dot_and_n_lines() {
        for moves in [0usize, 1, 5, 40] {
            let store = StoreHandle::new();
            let mut capture = StrokeCapture::new();
            let points: Vec<(f64, f64)> = (0..=moves).map(|i| (i as f64, 2.0 * i as f64)).collect();

            stroke(&mut capture, &store, &points);

            let state = store.state();
            assert_eq!(state.dots().len(), 1);
            assert_eq!(state.lines().len(), moves);
            assert_eq!(state.primitive_count(), 1 + moves);
        }
    }

    #[test]
    fn test_lines_chain_from_previous_anchor() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        stroke(&mut capture, &store, &[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]);

        let state = store.state();
        assert_eq!(state.lines()[0].start, Point::new(0.0, 0.0));
        assert_eq!(state.lines()[0].end, Point::new(5.0, 0.0));
        assert_eq!(state.lines()[1].start, Point::new(5.0, 0.0));
        assert_eq!(state.lines()[1].end, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_state_transitions() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();
        assert_eq!(capture.state(), StrokeState::Idle);

        capture.handle(PointerInput::Down(Point::new(1.0, 2.0)), &*store);
        assert_eq!(
            capture.state(),
            StrokeState::Painting {
                anchor: Point::new(1.0, 2.0)
            }
        );

        capture.handle(PointerInput::Move(Point::new(3.0, 4.0)), &*store);
        assert_eq!(
            capture.state(),
            StrokeState::Painting {
                anchor: Point::new(3.0, 4.0)
            }
        );

        capture.handle(PointerInput::Up, &*store);
        assert_eq!(capture.state(), StrokeState::Idle);
    }

    #[test]
    fn test_idle_moves_and_ups_are_ignored() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        capture.handle(PointerInput::Move(Point::new(3.0, 4.0)), &*store);
        capture.handle(PointerInput::Up, &*store);
        capture.handle(PointerInput::Move(Point::new(5.0, 6.0)), &*store);

        assert!(store.state().is_empty());
        assert!(!capture.is_painting());
    }

    #[test]
    fn test_down_while_painting_starts_new_stroke() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        capture.handle(PointerInput::Down(Point::new(0.0, 0.0)), &*store);
        capture.handle(PointerInput::Down(Point::new(50.0, 50.0)), &*store);
        capture.handle(PointerInput::Move(Point::new(60.0, 50.0)), &*store);

        let state = store.state();
        assert_eq!(state.dots().len(), 2);
        assert_eq!(state.lines()[0].start, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_reset_ends_stroke() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        capture.handle(PointerInput::Down(Point::zero()), &*store);
        capture.reset();
        capture.handle(PointerInput::Move(Point::new(1.0, 1.0)), &*store);

        assert_eq!(store.state().primitive_count(), 1);
    }

    #[test]
    fn test_color_captured_per_event() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        capture.handle(PointerInput::Down(Point::zero()), &*store);
        store.set_color(Color::from("#ff0000"));
        capture.handle(PointerInput::Move(Point::new(1.0, 0.0)), &*store);
        store.set_color(Color::from("#00ff00"));
        capture.handle(PointerInput::Move(Point::new(2.0, 0.0)), &*store);
        capture.handle(PointerInput::Up, &*store);
        store.set_color(Color::from("#0000ff"));

        let state = store.state();
        assert_eq!(state.dots()[0].color, Color::black());
        assert_eq!(state.lines()[0].color, Color::from("#ff0000"));
        assert_eq!(state.lines()[1].color, Color::from("#00ff00"));
    }

    #[test]
    fn test_two_strokes_with_color_change() {
        let store = StoreHandle::new();
        let mut capture = StrokeCapture::new();

        stroke(&mut capture, &store, &[(10.0, 10.0), (20.0, 10.0)]);
        let black = Color::from("#000000");
        let first_dot = Dot::new(Point::new(10.0, 10.0), black.clone());
        let first_line = LineSegment::new(Point::new(10.0, 10.0), Point::new(20.0, 10.0), black);
        assert_eq!(store.state().dots(), &[first_dot.clone()]);
        assert_eq!(store.state().lines(), &[first_line.clone()]);

        store.set_color(Color::from("#ff0000"));
        capture.handle(PointerInput::Down(Point::new(0.0, 0.0)), &*store);

        let state = store.state();
        assert_eq!(
            state.dots(),
            &[
                first_dot,
                Dot::new(Point::new(0.0, 0.0), Color::from("#ff0000"))
            ]
        );
        assert_eq!(state.lines(), &[first_line]);
    }
}
