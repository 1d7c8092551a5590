//! Amenities masonry gallery

use crate::components::{ImageLightbox, Reveal};
use crate::content::{amenity_images, AMENITY_TILES};
use crate::style::{RevealMotion, RevealStyle};
use dioxus::prelude::*;
use eterna_common::LightboxState;

#[component]
pub fn AmenitiesSection() -> Element {
    let images = use_hook(amenity_images);
    let mut lightbox = use_signal(LightboxState::closed);

    rsx! {
        section { id: "amenities", class: "py-24 px-4 md:px-8 bg-black",
            div { class: "max-w-7xl mx-auto",
                Reveal { style: RevealStyle::new(RevealMotion::Rise),
                    h2 { class: "text-4xl md:text-6xl font-bold text-white text-center mb-4",
                        "Amenities"
                    }
                    p { class: "text-white/70 text-center text-lg mb-16 max-w-2xl mx-auto",
                        "Spaces designed for living well, from sunrise laps to evenings under the stars."
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 auto-rows-[280px] gap-4",
                    for (index , tile) in AMENITY_TILES.iter().enumerate() {
                        Reveal {
                            key: "{index}",
                            style: RevealStyle::staggered(RevealMotion::Rise, index, 0.1),
                            class: Some(format!("relative group overflow-hidden rounded-xl {}", tile.span.row_class())),
                            img {
                                src: "{tile.url}",
                                alt: "{tile.title}",
                                class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-110",
                            }
                            div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent" }
                            div { class: "absolute bottom-0 left-0 right-0 p-6 flex items-end justify-between",
                                h3 { class: "text-2xl font-semibold text-white", "{tile.title}" }
                                button {
                                    class: "px-4 py-2 text-sm rounded-full bg-white/10 backdrop-blur-sm text-white hover:bg-white/20 transition-colors",
                                    onclick: move |_| {
                                        tracing::info!("Opening amenity {index}");
                                        lightbox.write().open(index);
                                    },
                                    "View Details"
                                }
                            }
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
