//! The dual carousel engine.
//!
//! [`CarouselEngine`] owns the authoritative selection index, the measured
//! viewport extent and the strip scrolling components. Every transition that
//! changes the index or the extent recomputes the strip offset before it
//! returns, so the primary display and the thumbnail strip never disagree.
//!
//! [`Carousel`] is the shared handle an event-loop host keeps around: it owns
//! the resize subscription (scoped to mount/unmount) and fans change events
//! out to listeners after the engine borrow is released.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::config::CarouselConfig;
use crate::error::NavigationError;
use crate::models::{Catalog, CatalogItem};
use crate::navigation::{Command, IndexChange, Indicator, SelectionState};
use crate::scroll::{ScrollSurface, ScrollSynchronizer, StepScroller, SyncOutcome};
use crate::viewport::{ExtentChange, ResizeSubscription, ViewportSource, ViewportTracker};

/// Observable state change produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    IndexChanged(IndexChange),
    ExtentChanged(ExtentChange),
}

pub struct CarouselEngine {
    catalog: Catalog,
    selection: SelectionState,
    viewport: ViewportTracker,
    synchronizer: ScrollSynchronizer,
    stepper: StepScroller,
    surface: Rc<dyn ScrollSurface>,
}

impl fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("items", &self.catalog.len())
            .field("selection", &self.selection)
            .field("viewport", &self.viewport)
            .field("synchronizer", &self.synchronizer)
            .field("stepper", &self.stepper)
            .finish()
    }
}

impl CarouselEngine {
    pub fn new(
        catalog: Catalog,
        surface: Rc<dyn ScrollSurface>,
        viewport: Rc<dyn ViewportSource>,
        config: &CarouselConfig,
    ) -> Self {
        let selection = SelectionState::new(catalog.count());
        Self {
            catalog,
            selection,
            viewport: ViewportTracker::new(viewport),
            synchronizer: ScrollSynchronizer::new(
                config.geometry,
                config.animate,
                config.clamp_to_content,
            ),
            stepper: StepScroller::new(config.step_delta, config.animate),
            surface,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.selection.index()
    }

    pub fn current_item(&self) -> &CatalogItem {
        // The selection index is always a valid catalog position.
        &self.catalog.items()[self.selection.index()]
    }

    pub fn extent(&self) -> f64 {
        self.viewport.extent()
    }

    /// "3 / 15" style position caption for the primary display.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.selection.index() + 1, self.selection.len())
    }

    /// One marker per item; the active one drives both thumbnails and dots.
    pub fn indicators(&self) -> Vec<Indicator> {
        let current = self.selection.index();
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, item)| Indicator {
                index,
                id: item.id,
                active: index == current,
            })
            .collect()
    }

    /// First measurement of the primary display.
    pub fn mount(&mut self) -> Option<CarouselEvent> {
        info!(items = self.catalog.len(), "Mounting carousel");
        self.measure()
    }

    /// Re-read the viewport extent; recenters the strip when it changed.
    pub fn measure(&mut self) -> Option<CarouselEvent> {
        let change = self.viewport.measure()?;
        self.resync();
        Some(CarouselEvent::ExtentChanged(change))
    }

    pub fn set_index(&mut self, index: usize) -> Result<Option<CarouselEvent>, NavigationError> {
        let change = self.selection.set_index(index)?;
        Ok(self.after_index_transition(change))
    }

    pub fn next(&mut self) -> Option<CarouselEvent> {
        let change = self.selection.next();
        self.after_index_transition(change)
    }

    pub fn previous(&mut self) -> Option<CarouselEvent> {
        let change = self.selection.previous();
        self.after_index_transition(change)
    }

    /// Scroll the strip up by one step; the selection is untouched.
    pub fn step_up(&self) -> f64 {
        self.stepper.step_up(self.surface.as_ref())
    }

    /// Scroll the strip down by one step; the selection is untouched.
    pub fn step_down(&self) -> f64 {
        self.stepper.step_down(self.surface.as_ref())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Option<CarouselEvent>, NavigationError> {
        match command {
            Command::SelectThumbnail(index) | Command::SelectIndicator(index) => {
                self.set_index(index)
            }
            Command::Previous => Ok(self.previous()),
            Command::Next => Ok(self.next()),
            Command::StepUp => {
                self.step_up();
                Ok(None)
            }
            Command::StepDown => {
                self.step_down();
                Ok(None)
            }
        }
    }

    /// Recenter for the current (index, extent) pair.
    pub fn resync(&mut self) -> SyncOutcome {
        self.synchronizer.sync(
            self.selection.index(),
            self.viewport.extent(),
            self.surface.as_ref(),
        )
    }

    /// Recenter even if the (index, extent) pair has not changed.
    pub fn recenter(&mut self) -> SyncOutcome {
        self.synchronizer.invalidate();
        self.resync()
    }

    fn after_index_transition(&mut self, change: Option<IndexChange>) -> Option<CarouselEvent> {
        let change = change?;
        debug!(
            previous = change.previous,
            current = change.current,
            "Selection changed"
        );
        self.resync();
        Some(CarouselEvent::IndexChanged(change))
    }
}

/// Callback type for selection changes
pub type IndexChangedCallback = Rc<dyn Fn(IndexChange)>;

/// Callback type for viewport extent changes
pub type ExtentChangedCallback = Rc<dyn Fn(ExtentChange)>;

struct Shared {
    engine: RefCell<CarouselEngine>,
    on_index_changed: RefCell<Vec<IndexChangedCallback>>,
    on_extent_changed: RefCell<Vec<ExtentChangedCallback>>,
}

/// Shared single-threaded handle around a [`CarouselEngine`].
#[derive(Clone)]
pub struct Carousel {
    shared: Rc<Shared>,
}

/// Non-owning [`Carousel`] reference for listeners and signal handlers.
#[derive(Clone)]
pub struct WeakCarousel {
    shared: Weak<Shared>,
}

impl WeakCarousel {
    pub fn upgrade(&self) -> Option<Carousel> {
        self.shared.upgrade().map(|shared| Carousel { shared })
    }
}

impl fmt::Debug for WeakCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakCarousel")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("engine", &self.shared.engine)
            .field("index_listeners", &self.shared.on_index_changed.borrow().len())
            .field("extent_listeners", &self.shared.on_extent_changed.borrow().len())
            .finish()
    }
}

impl Carousel {
    pub fn new(engine: CarouselEngine) -> Self {
        Self {
            shared: Rc::new(Shared {
                engine: RefCell::new(engine),
                on_index_changed: RefCell::new(Vec::new()),
                on_extent_changed: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakCarousel {
        WeakCarousel {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Subscribe to resizes and take the first measurement.
    ///
    /// Mounting twice replaces the previous subscription.
    pub fn mount(&self) {
        let source = self.shared.engine.borrow().viewport.source();
        let weak = self.downgrade();
        let subscription = ResizeSubscription::new(
            &source,
            Rc::new(move || {
                if let Some(carousel) = weak.upgrade() {
                    carousel.handle_resize();
                }
            }),
        );

        let event = {
            let mut engine = self.shared.engine.borrow_mut();
            engine.viewport.attach(subscription);
            engine.mount()
        };
        self.emit(event);
    }

    /// Release the resize subscription.
    pub fn unmount(&self) {
        let detached = self.shared.engine.borrow_mut().viewport.detach();
        if detached {
            info!("Unmounted carousel");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.engine.borrow().viewport.is_attached()
    }

    /// Resize handler: re-measure and recenter for the unchanged index.
    pub fn handle_resize(&self) {
        let event = self.shared.engine.borrow_mut().measure();
        self.emit(event);
    }

    pub fn set_index(&self, index: usize) -> Result<(), NavigationError> {
        let event = self.shared.engine.borrow_mut().set_index(index)?;
        self.emit(event);
        Ok(())
    }

    pub fn next(&self) {
        let event = self.shared.engine.borrow_mut().next();
        self.emit(event);
    }

    pub fn previous(&self) {
        let event = self.shared.engine.borrow_mut().previous();
        self.emit(event);
    }

    pub fn step_up(&self) {
        self.shared.engine.borrow().step_up();
    }

    pub fn step_down(&self) {
        self.shared.engine.borrow().step_down();
    }

    pub fn dispatch(&self, command: Command) -> Result<(), NavigationError> {
        let event = self.shared.engine.borrow_mut().dispatch(command)?;
        self.emit(event);
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.shared.engine.borrow().current_index()
    }

    pub fn current_item(&self) -> CatalogItem {
        self.shared.engine.borrow().current_item().clone()
    }

    pub fn extent(&self) -> f64 {
        self.shared.engine.borrow().extent()
    }

    pub fn counter_label(&self) -> String {
        self.shared.engine.borrow().counter_label()
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.shared.engine.borrow().indicators()
    }

    /// Connect callback for selection changes
    pub fn connect_index_changed<F>(&self, callback: F)
    where
        F: Fn(IndexChange) + 'static,
    {
        self.shared
            .on_index_changed
            .borrow_mut()
            .push(Rc::new(callback));
    }

    /// Connect callback for viewport extent changes
    pub fn connect_extent_changed<F>(&self, callback: F)
    where
        F: Fn(ExtentChange) + 'static,
    {
        self.shared
            .on_extent_changed
            .borrow_mut()
            .push(Rc::new(callback));
    }

    fn emit(&self, event: Option<CarouselEvent>) {
        match event {
            Some(CarouselEvent::IndexChanged(change)) => {
                let listeners = self.shared.on_index_changed.borrow().clone();
                for callback in listeners {
                    callback(change);
                }
            }
            Some(CarouselEvent::ExtentChanged(change)) => {
                let listeners = self.shared.on_extent_changed.borrow().clone();
                for callback in listeners {
                    callback(change);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{ScrollInstruction, ThumbnailGeometry};
    use crate::testing::{ManualViewportSource, RecordingSurface};
    use std::cell::Cell;

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| CatalogItem::new(i as u64 + 1, format!("{}.jpg", i), format!("Item {}", i)))
                .collect(),
        )
        .unwrap()
    }

    struct Fixture {
        surface: Rc<RecordingSurface>,
        source: Rc<ManualViewportSource>,
        engine: CarouselEngine,
    }

    fn fixture(n: usize, extent: f64, config: CarouselConfig) -> Fixture {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(extent));
        let engine = CarouselEngine::new(catalog(n), surface.clone(), source.clone(), &config);
        Fixture {
            surface,
            source,
            engine,
        }
    }

    fn stride_88_config() -> CarouselConfig {
        CarouselConfig {
            geometry: ThumbnailGeometry::Fixed { length: 88.0, gap: 0.0 },
            ..CarouselConfig::default()
        }
    }

    #[test]
    fn test_select_three_centers_strip() {
        let mut f = fixture(6, 400.0, stride_88_config());
        f.engine.mount();

        let event = f.engine.set_index(3).unwrap();
        assert_eq!(
            event,
            Some(CarouselEvent::IndexChanged(IndexChange { previous: 0, current: 3 }))
        );
        assert_eq!(f.surface.scroll_to_calls().last(), Some(&(108.0, true)));
    }

    #[test]
    fn test_select_zero_clamps_to_top() {
        let mut f = fixture(6, 400.0, stride_88_config());
        f.engine.mount();
        f.engine.set_index(2).unwrap();
        f.engine.set_index(0).unwrap();
        assert_eq!(f.surface.scroll_to_calls().last(), Some(&(0.0, true)));
    }

    #[test]
    fn test_mount_measures_and_syncs_once() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        let event = f.engine.mount();
        assert_eq!(
            event,
            Some(CarouselEvent::ExtentChanged(ExtentChange { previous: 0.0, current: 400.0 }))
        );
        assert_eq!(f.surface.scroll_to_calls(), vec![(0.0, true)]);
        assert_eq!(f.engine.extent(), 400.0);
    }

    #[test]
    fn test_navigation_before_measurement_is_deferred() {
        let mut f = fixture(6, 0.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();
        assert!(f.surface.instructions().is_empty());

        f.source.set_extent(400.0);
        f.engine.measure();
        assert_eq!(f.surface.scroll_to_calls(), vec![(104.0, true)]);
    }

    #[test]
    fn test_wraparound() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.set_index(5).unwrap();
        f.engine.next();
        assert_eq!(f.engine.current_index(), 0);
        f.engine.previous();
        assert_eq!(f.engine.current_index(), 5);
    }

    #[test]
    fn test_repeated_set_index_is_silent() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        assert!(f.engine.set_index(4).unwrap().is_some());
        let issued = f.surface.instructions().len();
        assert!(f.engine.set_index(4).unwrap().is_none());
        assert_eq!(f.surface.instructions().len(), issued);
    }

    #[test]
    fn test_out_of_range_leaves_everything_untouched() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(2).unwrap();
        let issued = f.surface.instructions().len();

        assert!(f.engine.set_index(9).is_err());
        assert_eq!(f.engine.current_index(), 2);
        assert_eq!(f.surface.instructions().len(), issued);
    }

    #[test]
    fn test_unchanged_resize_issues_nothing() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();
        let issued = f.surface.instructions().len();

        assert!(f.engine.measure().is_none());
        assert_eq!(f.surface.instructions().len(), issued);
    }

    #[test]
    fn test_resize_recenters_for_same_index() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();

        f.source.set_extent(200.0);
        f.engine.measure();
        // 3 * 88 - 100 + 40
        assert_eq!(f.surface.scroll_to_calls().last(), Some(&(204.0, true)));
        assert_eq!(f.engine.current_index(), 3);
    }

    #[test]
    fn test_steps_do_not_touch_selection() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();
        let before = f.surface.offset();

        assert_eq!(f.engine.dispatch(Command::StepUp).unwrap(), None);
        assert_eq!(f.engine.dispatch(Command::StepDown).unwrap(), None);
        assert_eq!(f.engine.current_index(), 3);
        assert_eq!(f.surface.offset(), before);
        assert_eq!(
            &f.surface.instructions()[f.surface.instructions().len() - 2..],
            &[
                ScrollInstruction::By { delta: -100.0, animated: true },
                ScrollInstruction::By { delta: 100.0, animated: true },
            ]
        );
    }

    #[test]
    fn test_recenter_after_manual_steps() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();
        f.engine.step_down();
        assert_eq!(f.surface.offset(), 204.0);

        assert_eq!(f.engine.recenter(), SyncOutcome::Applied(104.0));
        assert_eq!(f.surface.offset(), 104.0);
    }

    #[test]
    fn test_dispatch_maps_commands_to_selection() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.dispatch(Command::SelectThumbnail(4)).unwrap();
        assert_eq!(f.engine.current_index(), 4);
        f.engine.dispatch(Command::SelectIndicator(1)).unwrap();
        assert_eq!(f.engine.current_index(), 1);
        f.engine.dispatch(Command::Next).unwrap();
        assert_eq!(f.engine.current_index(), 2);
        f.engine.dispatch(Command::Previous).unwrap();
        f.engine.dispatch(Command::Previous).unwrap();
        assert_eq!(f.engine.current_index(), 0);
        assert!(f.engine.dispatch(Command::SelectThumbnail(6)).is_err());
    }

    #[test]
    fn test_presentation_queries_share_the_index() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.set_index(2).unwrap();

        assert_eq!(f.engine.counter_label(), "3 / 6");
        assert_eq!(f.engine.current_item().title, "Item 2");
        let active: Vec<usize> = f
            .engine
            .indicators()
            .iter()
            .filter(|i| i.active)
            .map(|i| i.index)
            .collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_content_clamp_on_last_item() {
        let surface = Rc::new(RecordingSurface::with_visible_length(15.0 * 88.0 - 8.0, 400.0));
        let source = Rc::new(ManualViewportSource::new(400.0));
        let mut engine = CarouselEngine::new(
            catalog(15),
            surface.clone(),
            source,
            &CarouselConfig::default(),
        );
        engine.mount();
        engine.previous();
        assert_eq!(engine.current_index(), 14);
        assert_eq!(surface.scroll_to_calls().last(), Some(&(912.0, true)));
    }

    #[test]
    fn test_content_clamp_uses_strip_visible_length() {
        // Step buttons take 80 of the strip's height next to a 400 display.
        let surface = Rc::new(RecordingSurface::with_visible_length(1312.0, 320.0));
        let source = Rc::new(ManualViewportSource::new(400.0));
        let mut engine = CarouselEngine::new(
            catalog(15),
            surface.clone(),
            source,
            &CarouselConfig::default(),
        );
        engine.mount();
        engine.previous();
        assert_eq!(surface.scroll_to_calls().last(), Some(&(992.0, true)));
        // The active thumbnail's bottom edge is inside the visible range.
        assert!(14.0 * 88.0 + 80.0 <= 992.0 + 320.0);
    }

    #[test]
    fn test_hidden_then_shown_recenters() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();
        let before = f.surface.scroll_to_calls().len();

        f.source.set_extent(0.0);
        f.engine.measure();
        assert_eq!(f.surface.scroll_to_calls().len(), before);

        f.source.set_extent(400.0);
        let event = f.engine.measure();
        assert_eq!(
            event,
            Some(CarouselEvent::ExtentChanged(ExtentChange { previous: 0.0, current: 400.0 }))
        );
        assert_eq!(f.surface.scroll_to_calls().len(), before + 1);
        assert_eq!(f.surface.scroll_to_calls().last(), Some(&(104.0, true)));
    }

    #[test]
    fn test_index_round_trip_while_hidden_recenters() {
        let mut f = fixture(6, 400.0, CarouselConfig::default());
        f.engine.mount();
        f.engine.set_index(3).unwrap();

        f.source.set_extent(0.0);
        f.engine.measure();
        f.engine.set_index(4).unwrap();
        f.engine.set_index(3).unwrap();
        let before = f.surface.scroll_to_calls().len();

        f.source.set_extent(400.0);
        f.engine.measure();
        assert_eq!(f.surface.scroll_to_calls().len(), before + 1);
        assert_eq!(f.surface.scroll_to_calls().last(), Some(&(104.0, true)));
    }

    #[test]
    fn test_carousel_mount_follows_resizes() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(6),
            surface.clone(),
            source.clone(),
            &CarouselConfig::default(),
        ));

        let extents = Rc::new(RefCell::new(Vec::new()));
        let e = extents.clone();
        carousel.connect_extent_changed(move |change| e.borrow_mut().push(change.current));

        carousel.mount();
        assert!(carousel.is_mounted());
        assert_eq!(source.subscriber_count(), 1);

        carousel.set_index(3).unwrap();
        source.resize(200.0);
        source.resize(200.0);
        assert_eq!(*extents.borrow(), vec![400.0, 200.0]);
        assert_eq!(surface.scroll_to_calls().last(), Some(&(204.0, true)));

        carousel.unmount();
        assert!(!carousel.is_mounted());
        assert_eq!(source.subscriber_count(), 0);

        source.resize(600.0);
        assert_eq!(carousel.extent(), 200.0);
    }

    #[test]
    fn test_dropping_carousel_releases_subscription() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(3),
            surface,
            source.clone(),
            &CarouselConfig::default(),
        ));
        carousel.mount();
        assert_eq!(source.subscriber_count(), 1);

        drop(carousel);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_listeners_may_reenter_the_handle() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(6),
            surface,
            source,
            &CarouselConfig::default(),
        ));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = carousel.downgrade();
        let s = seen.clone();
        carousel.connect_index_changed(move |change| {
            let handle = handle.upgrade().unwrap();
            s.borrow_mut()
                .push((change.current, handle.counter_label(), handle.current_item().title));
        });

        carousel.next();
        carousel.dispatch(Command::SelectIndicator(5)).unwrap();
        carousel.dispatch(Command::SelectIndicator(5)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, "2 / 6".to_string(), "Item 1".to_string()),
                (5, "6 / 6".to_string(), "Item 5".to_string()),
            ]
        );
    }

    #[test]
    fn test_weak_handle_does_not_keep_carousel_alive() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(2),
            surface,
            source,
            &CarouselConfig::default(),
        ));
        let weak = carousel.downgrade();
        assert!(weak.upgrade().is_some());
        drop(carousel);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_single_owner_with_weak_handlers() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(4),
            surface,
            source.clone(),
            &CarouselConfig::default(),
        ));

        // Handlers keep weak handles; one slot owns the carousel.
        let on_next = {
            let weak = carousel.downgrade();
            move || {
                if let Some(carousel) = weak.upgrade() {
                    carousel.next();
                }
            }
        };
        let handle = carousel.downgrade();
        carousel.connect_index_changed({
            let weak = carousel.downgrade();
            move |_| assert!(weak.upgrade().is_some())
        });
        carousel.mount();
        let owner = RefCell::new(Some(carousel));

        on_next();
        assert_eq!(handle.upgrade().map(|c| c.current_index()), Some(1));

        if let Some(carousel) = owner.borrow_mut().take() {
            carousel.unmount();
        }
        assert!(handle.upgrade().is_none());
        assert_eq!(source.subscriber_count(), 0);
        on_next();
    }

    #[test]
    fn test_step_events_do_not_notify() {
        let surface = Rc::new(RecordingSurface::new());
        let source = Rc::new(ManualViewportSource::new(400.0));
        let carousel = Carousel::new(CarouselEngine::new(
            catalog(6),
            surface.clone(),
            source,
            &CarouselConfig::default(),
        ));

        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        carousel.connect_index_changed(move |_| h.set(h.get() + 1));

        carousel.step_down();
        carousel.step_up();
        assert_eq!(hits.get(), 0);
        assert_eq!(surface.offset(), 0.0);
    }
}
