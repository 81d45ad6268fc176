use crate::config::{BoardConfig, SurfaceMode};
use crate::error::SurfaceError;
use crate::render::{replay, CanvasSurface, ImmediatePainter};
use crate::store::{StoreEvent, StoreHandle, Subscription};
use crate::stroke::{PointerInput, StrokeCapture};
use crate::types::Point;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Mouse position relative to the canvas' top-left corner
pub fn surface_point(event: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();

    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();

    Point::new(x, y)
}

/// mousedown/mousemove listeners on a canvas plus a mouseup listener on the
/// window, so a release off the canvas still ends the stroke.
///
/// All three are removed when dropped.
pub struct PointerListeners {
    _listeners: [EventListener; 3],
}

impl PointerListeners {
    pub fn attach<F>(canvas: &HtmlCanvasElement, on_input: F) -> Result<Self, SurfaceError>
    where
        F: Fn(PointerInput) + 'static,
    {
        let on_input: Rc<dyn Fn(PointerInput)> = Rc::new(on_input);

        Ok(Self {
            _listeners: [
                listen(canvas, "mousedown", on_input.clone(), |e, canvas| {
                    PointerInput::Down(surface_point(e, canvas))
                }),
                listen(canvas, "mousemove", on_input.clone(), |e, canvas| {
                    PointerInput::Move(surface_point(e, canvas))
                }),
                release_listener(on_input)?,
            ],
        })
    }
}

fn listen(
    canvas: &HtmlCanvasElement,
    event_type: &'static str,
    on_input: Rc<dyn Fn(PointerInput)>,
    to_input: fn(&MouseEvent, &HtmlCanvasElement) -> PointerInput,
) -> EventListener {
    let element = canvas.clone();
    EventListener::new(canvas, event_type, move |event| {
        if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
            on_input(to_input(mouse_event, &element));
        }
    })
}

fn release_listener(on_input: Rc<dyn Fn(PointerInput)>) -> Result<EventListener, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    Ok(EventListener::new(&window, "mouseup", move |_event| {
        on_input(PointerInput::Up);
    }))
}

/// A canvas wired to the store for as long as this value lives.
///
/// In recording mode input goes into the store and every primitive change
/// replays the whole drawing; in immediate mode input is painted directly.
/// Dropping the binding detaches listeners and the store subscription.
pub struct SurfaceBinding {
    _listeners: PointerListeners,
    _subscription: Option<Subscription>,
    capture: Rc<RefCell<StrokeCapture>>,
    mode: SurfaceMode,
}

impl SurfaceBinding {
    pub fn mount(
        canvas: HtmlCanvasElement,
        store: StoreHandle,
        config: &BoardConfig,
    ) -> Result<Self, SurfaceError> {
        let surface = Rc::new(CanvasSurface::new(&canvas, config.pen)?);
        let capture = Rc::new(RefCell::new(StrokeCapture::new()));

        let (subscription, listeners) = match config.mode {
            SurfaceMode::Recording => {
                // Strokes recorded before a remount must show up again
                replay(&*surface, &store.state());

                let target = surface.clone();
                let subscription = store.subscribe(move |event, state| {
                    if event == StoreEvent::PrimitivesChanged {
                        replay(&*target, state);
                    }
                });

                let capture = capture.clone();
                let listeners = PointerListeners::attach(&canvas, move |input| {
                    capture.borrow_mut().handle(input, &*store);
                })?;

                (Some(subscription), listeners)
            }
            SurfaceMode::Immediate => {
                let capture = capture.clone();
                let listeners = PointerListeners::attach(&canvas, move |input| {
                    let painter = ImmediatePainter::new(&*surface, store.color());
                    capture.borrow_mut().handle(input, &painter);
                })?;

                (None, listeners)
            }
        };

        log::info!(
            "drawing surface mounted ({}x{}, {:?})",
            canvas.width(),
            canvas.height(),
            config.mode
        );

        Ok(Self {
            _listeners: listeners,
            _subscription: subscription,
            capture,
            mode: config.mode,
        })
    }

    pub fn is_painting(&self) -> bool {
        self.capture.borrow().is_painting()
    }
}

impl Drop for SurfaceBinding {
    fn drop(&mut self) {
        self.capture.borrow_mut().reset();
        log::info!("drawing surface detached ({:?})", self.mode);
    }
}
