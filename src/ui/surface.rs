// GTK scroll surface for the thumbnail strip
// Drives a ScrolledWindow's vertical adjustment, easing toward the target
// offset on the frame clock when an animated instruction arrives.

use gtk4::prelude::*;
use gtk4::{ScrolledWindow, TickCallbackId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scroll::ScrollSurface;

/// Fraction of the remaining distance covered per frame.
const EASE_FACTOR: f64 = 0.25;
/// Snap to the target once closer than this many pixels.
const SETTLE_DISTANCE: f64 = 0.5;

pub struct StripScrollSurface {
    scrolled: ScrolledWindow,
    target: Rc<Cell<f64>>,
    animation: Rc<RefCell<Option<TickCallbackId>>>,
}

impl StripScrollSurface {
    pub fn new(scrolled: &ScrolledWindow) -> Self {
        Self {
            scrolled: scrolled.clone(),
            target: Rc::new(Cell::new(0.0)),
            animation: Rc::new(RefCell::new(None)),
        }
    }

    fn is_animating(&self) -> bool {
        self.animation.borrow().is_some()
    }

    fn cancel_animation(&self) {
        if let Some(id) = self.animation.borrow_mut().take() {
            id.remove();
        }
    }

    fn clamp_to_range(&self, offset: f64) -> f64 {
        let adj = self.scrolled.vadjustment();
        let max = (adj.upper() - adj.page_size()).max(adj.lower());
        offset.clamp(adj.lower(), max)
    }

    fn start_animation(&self) {
        let target = self.target.clone();
        let animation = self.animation.clone();
        let id = self.scrolled.add_tick_callback(move |scrolled, _clock| {
            let adj = scrolled.vadjustment();
            let goal = target.get();
            let current = adj.value();
            let next = current + (goal - current) * EASE_FACTOR;
            if (goal - next).abs() < SETTLE_DISTANCE {
                adj.set_value(goal);
                // GTK drops the callback on Break; only forget the handle.
                animation.borrow_mut().take();
                return glib::ControlFlow::Break;
            }
            adj.set_value(next);
            glib::ControlFlow::Continue
        });
        *self.animation.borrow_mut() = Some(id);
    }
}

impl ScrollSurface for StripScrollSurface {
    fn scroll_to(&self, offset: f64, animated: bool) {
        let offset = self.clamp_to_range(offset);
        self.target.set(offset);

        if !animated {
            self.cancel_animation();
            self.scrolled.vadjustment().set_value(offset);
            return;
        }

        // A running animation picks up the new target on its next frame.
        if !self.is_animating() {
            self.start_animation();
        }
    }

    fn scroll_by(&self, delta: f64, animated: bool) {
        let base = if self.is_animating() {
            self.target.get()
        } else {
            self.scrolled.vadjustment().value()
        };
        self.scroll_to(base + delta, animated);
    }

    // Page size is the strip's own visible height, not the primary display's.
    fn max_offset(&self) -> Option<f64> {
        let adj = self.scrolled.vadjustment();
        if adj.upper() <= 0.0 || adj.page_size() <= 0.0 {
            return None;
        }
        Some((adj.upper() - adj.page_size()).max(adj.lower()))
    }
}

impl Drop for StripScrollSurface {
    fn drop(&mut self) {
        self.cancel_animation();
    }
}
