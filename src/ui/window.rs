// Main window for the dual carousel
// Thumbnail strip on the left, primary display on the right, both driven by
// one Carousel handle.

use gdk4::Display;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, ContentFit, CssProvider, Label,
    Orientation, Overlay, Picture, PolicyType, ScrolledWindow, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use super::keybindings::Keybindings;
use super::surface::StripScrollSurface;
use super::viewport::WidgetViewportSource;
use crate::config::CarouselConfig;
use crate::engine::{Carousel, CarouselEngine, WeakCarousel};
use crate::models::{Catalog, CatalogItem};
use crate::navigation::Command;
use crate::scroll::ThumbnailGeometry;

const PRIMARY_MIN_SIZE: i32 = 480;
const STRIP_WIDTH: i32 = 96;
const WINDOW_MARGIN: i32 = 16;

const CAROUSEL_CSS: &str = r#"
.thumb {
    padding: 0;
    border: 2px solid #e5e7eb;
    border-radius: 8px;
}

.thumb.active {
    border-color: #3b82f6;
    box-shadow: 0 0 0 2px #bfdbfe;
}

.strip-step, .nav-arrow {
    background-color: rgba(0, 0, 0, 0.5);
    color: white;
}

.caption-title {
    color: white;
    font-size: 22px;
    font-weight: bold;
}

.caption-counter {
    color: rgba(255, 255, 255, 0.9);
    font-size: 12px;
}

.dot {
    min-width: 8px;
    min-height: 8px;
    padding: 0;
    border-radius: 4px;
    background-color: rgba(255, 255, 255, 0.5);
}

.dot.active {
    background-color: white;
}
"#;

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_string(CAROUSEL_CSS);
    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

fn show_item(picture: &Picture, item: &CatalogItem) {
    match item.local_path() {
        Some(path) => picture.set_filename(Some(path)),
        None => picture.set_filename(None::<&Path>),
    }
    picture.set_alternative_text(Some(item.title.as_str()));
}

fn set_active(widget: &impl IsA<gtk4::Widget>, active: bool) {
    if active {
        widget.add_css_class("active");
    } else {
        widget.remove_css_class("active");
    }
}

/// Widgets that mirror the selection; cheap to clone into signal handlers.
#[derive(Clone)]
struct SelectionView {
    picture: Picture,
    title_label: Label,
    counter_label: Label,
    thumbs: Rc<Vec<Button>>,
    dots: Rc<Vec<Button>>,
}

impl SelectionView {
    fn refresh(&self, carousel: &Carousel) {
        let item = carousel.current_item();
        show_item(&self.picture, &item);
        self.title_label.set_text(&item.title);
        self.counter_label.set_text(&carousel.counter_label());

        for indicator in carousel.indicators() {
            if let Some(thumb) = self.thumbs.get(indicator.index) {
                set_active(thumb, indicator.active);
            }
            if let Some(dot) = self.dots.get(indicator.index) {
                set_active(dot, indicator.active);
            }
        }
    }

    fn resize_thumbs(&self, length: f64) {
        let length = length.round().max(1.0) as i32;
        for thumb in self.thumbs.iter() {
            thumb.set_size_request(length, length);
        }
    }
}

fn dispatch(carousel: &WeakCarousel, command: Command) {
    let Some(carousel) = carousel.upgrade() else {
        return;
    };
    if let Err(err) = carousel.dispatch(command) {
        tracing::warn!(error = ?err, ?command, "Ignored carousel command");
    }
}

fn build_thumbnail(item: &CatalogItem, length: i32) -> Button {
    let button = Button::new();
    button.add_css_class("thumb");
    button.set_size_request(length, length);
    button.set_tooltip_text(Some(item.title.as_str()));

    match item.local_path() {
        Some(path) => {
            let picture = Picture::for_filename(path);
            picture.set_content_fit(ContentFit::Cover);
            picture.set_can_shrink(true);
            button.set_child(Some(&picture));
        }
        None => {
            let label = Label::new(Some(item.title.as_str()));
            label.set_wrap(true);
            label.set_max_width_chars(8);
            button.set_child(Some(&label));
        }
    }
    button
}

/// Main window for the carousel
///
/// Signal handlers only hold weak carousel handles. The close-request handler
/// owns the carousel and releases it when the window closes.
pub struct CarouselWindow {
    window: ApplicationWindow,
}

impl CarouselWindow {
    pub fn new(app: &Application, catalog: Catalog, config: CarouselConfig) -> Self {
        load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("dualview")
            .default_width(720)
            .default_height(600)
            .build();

        let root = GtkBox::new(Orientation::Horizontal, 16);
        root.set_margin_top(WINDOW_MARGIN);
        root.set_margin_bottom(WINDOW_MARGIN);
        root.set_margin_start(WINDOW_MARGIN);
        root.set_margin_end(WINDOW_MARGIN);

        // Secondary list: step buttons around a scrollable column of thumbnails.
        let initial_length = config.geometry.length(PRIMARY_MIN_SIZE as f64).round() as i32;
        let gap = config.geometry.gap().round() as i32;
        let strip = GtkBox::new(Orientation::Vertical, 0);
        strip.set_size_request(STRIP_WIDTH, -1);
        let step_up_button = Button::with_label("▲");
        step_up_button.add_css_class("strip-step");
        let step_down_button = Button::with_label("▼");
        step_down_button.add_css_class("strip-step");
        let thumb_column = GtkBox::new(Orientation::Vertical, gap);
        thumb_column.set_halign(Align::Center);
        let thumbs: Vec<Button> = catalog
            .iter()
            .map(|item| build_thumbnail(item, initial_length.max(1)))
            .collect();
        for thumb in &thumbs {
            thumb_column.append(thumb);
        }
        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vscrollbar_policy(PolicyType::External)
            .vexpand(true)
            .child(&thumb_column)
            .build();
        strip.append(&step_up_button);
        strip.append(&scrolled);
        strip.append(&step_down_button);

        // Primary display with overlaid controls.
        let overlay = Overlay::new();
        overlay.set_hexpand(true);
        overlay.set_vexpand(true);
        overlay.set_size_request(PRIMARY_MIN_SIZE, PRIMARY_MIN_SIZE);
        let picture = Picture::new();
        picture.set_content_fit(ContentFit::Cover);
        picture.set_can_shrink(true);
        overlay.set_child(Some(&picture));

        let prev_button = Button::with_label("‹");
        prev_button.add_css_class("nav-arrow");
        prev_button.set_halign(Align::Start);
        prev_button.set_valign(Align::Center);
        prev_button.set_margin_start(16);
        overlay.add_overlay(&prev_button);

        let next_button = Button::with_label("›");
        next_button.add_css_class("nav-arrow");
        next_button.set_halign(Align::End);
        next_button.set_valign(Align::Center);
        next_button.set_margin_end(16);
        overlay.add_overlay(&next_button);

        let caption = GtkBox::new(Orientation::Vertical, 2);
        caption.set_halign(Align::Start);
        caption.set_valign(Align::End);
        caption.set_margin_start(16);
        caption.set_margin_bottom(16);
        let title_label = Label::new(None);
        title_label.add_css_class("caption-title");
        title_label.set_halign(Align::Start);
        let counter_label = Label::new(None);
        counter_label.add_css_class("caption-counter");
        counter_label.set_halign(Align::Start);
        caption.append(&title_label);
        caption.append(&counter_label);
        overlay.add_overlay(&caption);

        let dot_row = GtkBox::new(Orientation::Horizontal, 8);
        dot_row.set_halign(Align::End);
        dot_row.set_valign(Align::End);
        dot_row.set_margin_end(16);
        dot_row.set_margin_bottom(16);
        let dots: Vec<Button> = (0..catalog.len())
            .map(|_| {
                let dot = Button::new();
                dot.add_css_class("dot");
                dot.set_valign(Align::Center);
                dot
            })
            .collect();
        for dot in &dots {
            dot_row.append(dot);
        }
        overlay.add_overlay(&dot_row);

        root.append(&strip);
        root.append(&overlay);
        window.set_child(Some(&root));

        let len = catalog.len();
        let geometry = config.geometry;
        let engine = CarouselEngine::new(
            catalog,
            Rc::new(StripScrollSurface::new(&scrolled)),
            Rc::new(WidgetViewportSource::new(&overlay)),
            &config,
        );
        let carousel = Carousel::new(engine);

        let view = SelectionView {
            picture,
            title_label,
            counter_label,
            thumbs: Rc::new(thumbs),
            dots: Rc::new(dots),
        };

        Self::connect_controls(
            &carousel,
            &view,
            &step_up_button,
            &step_down_button,
            &prev_button,
            &next_button,
        );

        let view_index = view.clone();
        let carousel_weak = carousel.downgrade();
        carousel.connect_index_changed(move |_change| {
            if let Some(carousel) = carousel_weak.upgrade() {
                view_index.refresh(&carousel);
            }
        });

        if let ThumbnailGeometry::Proportional { .. } = geometry {
            let view_extent = view.clone();
            carousel.connect_extent_changed(move |change| {
                view_extent.resize_thumbs(geometry.length(change.current));
            });
        }

        let keybindings = Keybindings::new(len);
        let carousel_keys = carousel.downgrade();
        keybindings.connect_command(move |command| dispatch(&carousel_keys, command));
        keybindings.attach(&window);

        view.refresh(&carousel);
        carousel.mount();

        let owner = RefCell::new(Some(carousel));
        window.connect_close_request(move |_| {
            if let Some(carousel) = owner.borrow_mut().take() {
                carousel.unmount();
            }
            glib::Propagation::Proceed
        });

        Self { window }
    }

    fn connect_controls(
        carousel: &Carousel,
        view: &SelectionView,
        step_up_button: &Button,
        step_down_button: &Button,
        prev_button: &Button,
        next_button: &Button,
    ) {
        for (index, thumb) in view.thumbs.iter().enumerate() {
            let carousel = carousel.downgrade();
            thumb.connect_clicked(move |_| dispatch(&carousel, Command::SelectThumbnail(index)));
        }
        for (index, dot) in view.dots.iter().enumerate() {
            let carousel = carousel.downgrade();
            dot.connect_clicked(move |_| dispatch(&carousel, Command::SelectIndicator(index)));
        }

        let controls = [
            (step_up_button, Command::StepUp),
            (step_down_button, Command::StepDown),
            (prev_button, Command::Previous),
            (next_button, Command::Next),
        ];
        for (button, command) in controls {
            let carousel = carousel.downgrade();
            button.connect_clicked(move |_| dispatch(&carousel, command));
        }
    }

    pub fn present(&self) {
        self.window.present();
    }
}
