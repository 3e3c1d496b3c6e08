//! Back-to-top visibility driven by the host scroll signal.
//!
//! `ScrollMonitor` is a mount guard: creating it attaches exactly one scroll
//! listener to the host, dropping it detaches that listener. The derived flag
//! is a plain strict comparison against `SCROLL_THRESHOLD` with no debounce
//! and no hysteresis, so oscillating around the threshold toggles the flag on
//! every crossing event.

use super::{ListenerId, ScrollBehavior, ScrollEvent, ScrollHost};
use std::cell::Cell;
use std::rc::Rc;

/// Offset above which the back-to-top control is shown
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Whether `offset` is past the threshold. Exactly 100 is not.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// The two states of the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    BelowThreshold,
    PastThreshold,
}

impl From<bool> for ScrollPhase {
    fn from(past: bool) -> Self {
        if past {
            ScrollPhase::PastThreshold
        } else {
            ScrollPhase::BelowThreshold
        }
    }
}

/// The visibility flag. Starts below the threshold.
#[derive(Debug, Default)]
pub struct ScrollState {
    past: Cell<bool>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past.get()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.past.get().into()
    }

    /// Recompute from `offset`; returns the new phase when it changed
    pub fn update(&self, offset: f64) -> Option<ScrollPhase> {
        let past = is_past_threshold(offset);
        if self.past.replace(past) == past {
            None
        } else {
            Some(past.into())
        }
    }
}

/// Mounted back-to-top monitor.
///
/// Holds one listener on `host` for as long as it lives.
pub struct ScrollMonitor<'h> {
    host: &'h dyn ScrollHost,
    listener: Option<ListenerId>,
    state: Rc<ScrollState>,
}

impl<'h> ScrollMonitor<'h> {
    /// Attach to `host`. The flag starts false regardless of the host's
    /// current offset and follows the next scroll event.
    pub fn mount(host: &'h dyn ScrollHost) -> Self {
        let state = Rc::new(ScrollState::new());
        let handler_state = Rc::clone(&state);
        let id = host.add_scroll_listener(Rc::new(move |ev: &ScrollEvent| {
            if let Some(phase) = handler_state.update(ev.scroll_y) {
                log::debug!("scroll offset {} -> {:?}", ev.scroll_y, phase);
            }
        }));
        log::debug!("scroll monitor mounted ({:?})", id);
        ScrollMonitor {
            host,
            listener: Some(id),
            state,
        }
    }

    /// Whether the back-to-top control should be rendered
    pub fn is_past_threshold(&self) -> bool {
        self.state.is_past_threshold()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.phase()
    }

    /// Activate the back-to-top control: smooth-scroll the host to 0.
    ///
    /// Returns false, without scrolling, when the control is not shown.
    pub fn activate_back_to_top(&self) -> bool {
        if !self.is_past_threshold() {
            return false;
        }
        self.host.scroll_to(0.0, ScrollBehavior::Smooth);
        true
    }

    /// Detach now instead of at end of scope
    pub fn unmount(self) {}
}

impl Drop for ScrollMonitor<'_> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            if !self.host.remove_scroll_listener(id) {
                log::warn!("scroll listener {:?} was already detached", id);
            }
            log::debug!("scroll monitor unmounted ({:?})", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SimulatedWindow;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_past_threshold(99.9));
        assert!(!is_past_threshold(100.0));
        assert!(is_past_threshold(100.0001));
        assert!(!is_past_threshold(-20.0));
        assert!(!is_past_threshold(f64::NAN));
    }

    #[test]
    fn state_reports_transitions_only() {
        let s = ScrollState::new();
        assert_eq!(s.phase(), ScrollPhase::BelowThreshold);
        assert_eq!(s.update(50.0), None);
        assert_eq!(s.update(150.0), Some(ScrollPhase::PastThreshold));
        assert_eq!(s.update(300.0), None);
        assert_eq!(s.update(100.0), Some(ScrollPhase::BelowThreshold));
    }

    #[test]
    fn mount_ignores_initial_offset() {
        let w = SimulatedWindow::new();
        w.set_scroll_y(500.0);
        let m = ScrollMonitor::mount(&w);
        assert!(!m.is_past_threshold());
        w.set_scroll_y(501.0);
        assert!(m.is_past_threshold());
    }

    #[test]
    fn drop_detaches_listener() {
        let w = SimulatedWindow::new();
        {
            let _m = ScrollMonitor::mount(&w);
            assert_eq!(w.listener_count(), 1);
        }
        assert_eq!(w.listener_count(), 0);
        assert_eq!(w.detach_count(), 1);
    }

    #[test]
    fn hidden_control_does_not_scroll() {
        let w = SimulatedWindow::new();
        let m = ScrollMonitor::mount(&w);
        w.set_scroll_y(80.0);
        assert!(!m.activate_back_to_top());
        assert_eq!(w.last_scroll_request(), None);
        assert_eq!(w.scroll_y(), 80.0);
    }

    #[test]
    fn oscillation_follows_raw_events() {
        let w = SimulatedWindow::new();
        let m = ScrollMonitor::mount(&w);
        let mut flips = 0;
        let mut last = m.is_past_threshold();
        for y in [99.0, 101.0, 100.0, 101.0, 99.0] {
            w.set_scroll_y(y);
            if m.is_past_threshold() != last {
                flips += 1;
                last = m.is_past_threshold();
            }
        }
        assert_eq!(flips, 4);
    }
}
