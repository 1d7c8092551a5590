//! eterna-web - The Eterna Tower Nashville site as a Dioxus web app

use eterna_web::config::SiteConfig;

fn main() {
    let config = SiteConfig::from_build_env();
    // Only fails if a subscriber is already installed
    let _ = dioxus::logger::init(config.log_level);
    tracing::info!(
        "Starting site, backend {} (narrow below {}px)",
        config.backend_url,
        config.narrow_breakpoint
    );
    dioxus::launch(eterna_web::App);
}
