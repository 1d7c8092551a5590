pub mod api;
pub mod config;
pub mod pages;

use config::SiteConfig;
use dioxus::prelude::*;
use pages::Home;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const BROCHURE_PDF: Asset = asset!("/assets/luxury-residences-brochure.pdf");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_build_env);
    use_context_provider(|| config.breakpoint());

    rsx! {
        document::Title { "Eterna Tower Nashville" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-black", Home {} }
    }
}
