use gtk4::prelude::*;
use gtk4::Application;
use std::path::Path;

use dualview::ui::CarouselWindow;
use dualview::{Catalog, CarouselConfig};

const APP_ID: &str = "com.dualview.Carousel";

pub struct DualviewApp {
    app: Application,
}

impl DualviewApp {
    pub fn new() -> Self {
        let app = Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::HANDLES_OPEN)
            .build();

        app.connect_activate(Self::on_activate);
        app.connect_open(Self::on_open);

        Self { app }
    }

    pub fn run(&self) -> i32 {
        self.app.run().into()
    }

    fn on_activate(app: &Application) {
        Self::present(app, Catalog::sample());
    }

    fn on_open(app: &Application, files: &[gio::File], _hint: &str) {
        let catalog = match files.first().and_then(|f| f.path()) {
            Some(path) => Self::load_directory(&path),
            None => Catalog::sample(),
        };
        Self::present(app, catalog);
    }

    fn load_directory(path: &Path) -> Catalog {
        match Catalog::from_directory(path, false) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Falling back to sample catalog");
                Catalog::sample()
            }
        }
    }

    // GTK keeps the window alive; its close handler owns the carousel.
    fn present(app: &Application, catalog: Catalog) {
        let window = CarouselWindow::new(app, catalog, CarouselConfig::from_env());
        window.present();
    }
}

impl Default for DualviewApp {
    fn default() -> Self {
        Self::new()
    }
}
