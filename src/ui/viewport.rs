// Viewport source backed by a GTK widget's allocated height.
// GTK4 has no size-allocate signal, so a tick callback watches the height and
// notifies subscribers when it moves.

use gtk4::prelude::*;
use gtk4::{TickCallbackId, Widget};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::viewport::{ResizeCallback, ResizeListeners, SubscriptionId, ViewportSource};

struct Watch {
    last_height: Cell<i32>,
    listeners: ResizeListeners,
}

pub struct WidgetViewportSource {
    widget: Widget,
    watch: Rc<Watch>,
    tick: RefCell<Option<TickCallbackId>>,
}

impl WidgetViewportSource {
    pub fn new(widget: &impl IsA<Widget>) -> Self {
        let widget = widget.clone().upcast::<Widget>();
        let watch = Rc::new(Watch {
            last_height: Cell::new(0),
            listeners: ResizeListeners::new(),
        });

        let watch_tick = watch.clone();
        let tick = widget.add_tick_callback(move |widget, _clock| {
            let height = widget.height();
            if height > 0 && height != watch_tick.last_height.get() {
                watch_tick.last_height.set(height);
                tracing::trace!(height, "Primary display resized");
                watch_tick.listeners.notify();
            }
            glib::ControlFlow::Continue
        });

        Self {
            widget,
            watch,
            tick: RefCell::new(Some(tick)),
        }
    }
}

impl ViewportSource for WidgetViewportSource {
    fn extent(&self) -> f64 {
        self.widget.height().max(0) as f64
    }

    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId {
        self.watch.listeners.add(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.watch.listeners.remove(id);
    }
}

impl Drop for WidgetViewportSource {
    fn drop(&mut self) {
        if let Some(tick) = self.tick.borrow_mut().take() {
            tick.remove();
        }
    }
}
