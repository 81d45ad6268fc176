use crate::state::DrawingState;
use crate::stroke::PrimitiveSink;
use crate::types::{Color, Point};
use std::cell::{Cell, Ref, RefCell};
use std::ops::Deref;
use std::rc::{Rc, Weak};

/// What changed in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ColorChanged,
    PrimitivesChanged,
}

type Listener = Rc<dyn Fn(StoreEvent, &DrawingState)>;

/// Observable wrapper around [`DrawingState`].
///
/// Every mutation runs synchronously and then notifies subscribers in the
/// order they subscribed. Listeners get a read-only view of the state and
/// must not mutate the store re-entrantly.
#[derive(Default)]
pub struct DrawingStore {
    state: RefCell<DrawingState>,
    subscribers: RefCell<Vec<(u64, Listener)>>,
    next_subscriber_id: Cell<u64>,
}

impl DrawingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current state
    pub fn state(&self) -> Ref<'_, DrawingState> {
        self.state.borrow()
    }

    pub fn color(&self) -> Color {
        self.state.borrow().color().clone()
    }

    pub fn set_color(&self, color: Color) {
        log::debug!("stroke color set to {}", color);
        self.state.borrow_mut().set_color(color);
        self.notify(StoreEvent::ColorChanged);
    }

    pub fn add_dot(&self, at: Point) {
        self.state.borrow_mut().add_dot(at);
        self.notify(StoreEvent::PrimitivesChanged);
    }

    pub fn add_line(&self, start: Point, end: Point) {
        self.state.borrow_mut().add_line(start, end);
        self.notify(StoreEvent::PrimitivesChanged);
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self, event: StoreEvent) {
        // Snapshot the list so a listener may drop its own subscription
        let listeners: Vec<Listener> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        let state = self.state.borrow();
        for listener in listeners {
            listener(event, &*state);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

impl PrimitiveSink for DrawingStore {
    fn dot(&self, at: Point) {
        self.add_dot(at);
    }

    fn line(&self, start: Point, end: Point) {
        self.add_line(start, end);
    }
}

/// Shared handle to the application's store.
///
/// Cheap to clone; two handles are equal when they point at the same store,
/// which is what Yew's context propagation compares on.
#[derive(Clone, Default)]
pub struct StoreHandle(Rc<DrawingStore>);

impl StoreHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every subsequent mutation.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(StoreEvent, &DrawingState) + 'static,
    {
        let id = self.0.next_subscriber_id.get();
        self.0.next_subscriber_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.0.subscribers.borrow_mut().push((id, listener));

        Subscription {
            store: Rc::downgrade(&self.0),
            id,
        }
    }
}

impl Deref for StoreHandle {
    type Target = DrawingStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Keeps a store listener registered; unsubscribes on drop
pub struct Subscription {
    store: Weak<DrawingStore>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}
