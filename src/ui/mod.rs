pub mod keybindings;
pub mod surface;
pub mod viewport;
pub mod window;

pub use keybindings::Keybindings;
pub use surface::StripScrollSurface;
pub use viewport::WidgetViewportSource;
pub use window::CarouselWindow;
