//! In-memory scroll host for deterministic tests and CLI replays

use super::{ListenerId, ScrollBehavior, ScrollEvent, ScrollHost, ScrollListener};
use std::cell::{Cell, RefCell};

/// A single-threaded stand-in for a browser window.
///
/// Offsets are not clamped: hosts may report negative values (overscroll) and
/// listeners must cope. Smooth scrolls emit `smooth_steps` intermediate events
/// before the final one.
pub struct SimulatedWindow {
    scroll_y: Cell<f64>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    next_id: Cell<u64>,
    attached: Cell<usize>,
    detached: Cell<usize>,
    smooth_steps: u32,
    last_request: Cell<Option<(f64, ScrollBehavior)>>,
}

impl SimulatedWindow {
    pub fn new() -> Self {
        SimulatedWindow {
            scroll_y: Cell::new(0.0),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            attached: Cell::new(0),
            detached: Cell::new(0),
            smooth_steps: 0,
            last_request: Cell::new(None),
        }
    }

    /// Animate smooth scrolls through `steps` intermediate offsets
    pub fn with_smooth_steps(mut self, steps: u32) -> Self {
        self.smooth_steps = steps;
        self
    }

    /// Simulate the user scrolling to `y`; dispatches one scroll event
    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
        self.dispatch(y);
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Total successful `add_scroll_listener` calls
    pub fn attach_count(&self) -> usize {
        self.attached.get()
    }

    /// Total successful `remove_scroll_listener` calls
    pub fn detach_count(&self) -> usize {
        self.detached.get()
    }

    /// Target and behavior of the most recent `scroll_to`
    pub fn last_scroll_request(&self) -> Option<(f64, ScrollBehavior)> {
        self.last_request.get()
    }

    fn dispatch(&self, y: f64) {
        // Snapshot so listeners may detach themselves while being notified.
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        let event = ScrollEvent { scroll_y: y };
        for listener in listeners {
            listener(&event);
        }
    }
}

impl Default for SimulatedWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHost for SimulatedWindow {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        self.attached.set(self.attached.get() + 1);
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        let removed = listeners.len() != before;
        if removed {
            self.detached.set(self.detached.get() + 1);
        }
        removed
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.last_request.set(Some((top, behavior)));
        if behavior == ScrollBehavior::Smooth && self.smooth_steps > 0 {
            let start = self.scroll_y.get();
            let steps = self.smooth_steps + 1;
            for i in 1..steps {
                let y = start + (top - start) * f64::from(i) / f64::from(steps);
                self.set_scroll_y(y);
            }
        }
        self.set_scroll_y(top);
    }
}
