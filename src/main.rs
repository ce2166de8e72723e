mod app;

use app::DualviewApp;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dualview=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = DualviewApp::new();
    std::process::exit(app.run());
}
