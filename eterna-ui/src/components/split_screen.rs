//! Scroll-driven split screen of the views from the tower

use crate::components::ImageLightbox;
use crate::content::{view_images, VIEW_PANELS};
use crate::hooks::use_scroll_progress;
use crate::style::PanelStyle;
use dioxus::prelude::*;
use eterna_common::{panel_opacity, LightboxState};

const SPLIT_SCREEN_ID: &str = "views";

/// One column of the triptych on wide viewports, one row on narrow ones
const PANEL_LAYOUT: &str = "relative w-full md:w-1/3 h-1/3 md:h-full";

/// Triptych of panels side by side inside a 300vh track. Scrolling through the
/// track fades each panel in over its third of the progress. Narrow viewports
/// stack the panels instead.
#[component]
pub fn SplitScreenSection() -> Element {
    let images = use_hook(view_images);
    let mut lightbox = use_signal(LightboxState::closed);
    let progress = use_scroll_progress(SPLIT_SCREEN_ID.to_string());
    let count = VIEW_PANELS.len();
    let opacities: Vec<f64> = (0..count)
        .map(|index| panel_opacity(progress(), index, count))
        .collect();

    rsx! {
        section { id: SPLIT_SCREEN_ID, class: "relative h-[300vh] bg-black",
            div { class: "sticky top-0 h-screen flex flex-col md:flex-row overflow-hidden",
                for (index , (panel , opacity)) in VIEW_PANELS.iter().zip(opacities).enumerate() {
                    div {
                        key: "{index}",
                        class: PANEL_LAYOUT,
                        class: PanelStyle::for_opacity(opacity).pointer(),
                        style: "opacity: {opacity};",
                        onclick: move |_| {
                            tracing::info!("Opening view {index}");
                            lightbox.write().open(index);
                        },
                        img {
                            src: "{panel.url}",
                            alt: "{panel.title}",
                            class: "absolute inset-0 w-full h-full object-cover",
                        }
                        div { class: "absolute inset-0 bg-black/30" }
                        div { class: "absolute bottom-8 md:bottom-20 left-6 right-6 md:left-10 md:right-10 text-white",
                            h3 { class: "text-2xl md:text-4xl font-bold mb-2 md:mb-4", "{panel.title}" }
                            p { class: "text-sm md:text-xl", "{panel.description}" }
                        }
                    }
                }
            }

            ImageLightbox {
                images,
                state: lightbox(),
                on_close: move |_| lightbox.write().close(),
                on_navigate: move |index| lightbox.write().navigate(index),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_sit_side_by_side_in_thirds() {
        assert_eq!(VIEW_PANELS.len(), 3);
        assert!(PANEL_LAYOUT.contains("md:w-1/3"));
        assert!(!PANEL_LAYOUT.contains("inset-0"));
    }
}
