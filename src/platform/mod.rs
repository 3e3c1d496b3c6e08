//! Host platform surface: the scroll signal, the back-to-top monitor and an
//! accessibility export of rendered markup.
//!
//! Everything here runs on a single UI event loop. Listeners are `Rc`
//! closures and shared state lives in `Cell`s; no type in this module is
//! meant to cross threads.

pub mod accessibility;
pub mod scroll;
pub mod window;

pub use accessibility::{AccessibilityNode, AccessibilityProvider, AccessibilityTree, MarkupAccessibility};
pub use scroll::{is_past_threshold, ScrollMonitor, ScrollPhase, ScrollState, SCROLL_THRESHOLD};
pub use window::SimulatedWindow;

use std::rc::Rc;

/// A scroll notification delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Vertical scroll offset at the time of the event
    pub scroll_y: f64,
}

/// How a programmatic scroll should move the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump straight to the target
    #[default]
    Auto,
    /// Animate towards the target
    Smooth,
}

/// Handle returned by `ScrollHost::add_scroll_listener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type ScrollListener = Rc<dyn Fn(&ScrollEvent)>;

/// The environment that owns the viewport and its global scroll signal.
///
/// A browser window in production; `SimulatedWindow` in tests and the CLI.
pub trait ScrollHost {
    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    /// Subscribe to scroll events. Every call registers a new listener.
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;

    /// Unsubscribe. Returns false when `id` was not registered.
    fn remove_scroll_listener(&self, id: ListenerId) -> bool;

    /// Request a programmatic scroll. Fire-and-forget: there is no completion
    /// signal and no failure.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}
