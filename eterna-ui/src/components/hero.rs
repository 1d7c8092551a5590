//! Full-screen hero carousel

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{ChromelessButton, HaloIconButton};
use crate::content::HERO_SLIDES;
use crate::hooks::use_window_listener;
use crate::style::{BulletStyle, SlideStyle};
use crate::wasm_utils;
use dioxus::prelude::*;
use eterna_common::CarouselState;

/// DOM id of the hero section
pub const HERO_ID: &str = "home";

/// Cross-fading slides with arrows, bullets and wheel paging.
///
/// Wheel events page the carousel only while the hero still reaches into the
/// viewport, so scrolling further down the page leaves it alone.
#[component]
pub fn HeroCarousel() -> Element {
    let mut carousel = use_signal(|| CarouselState::new(HERO_SLIDES.len()));

    use_window_listener("wheel", move |event| {
        let Some(delta_y) = wasm_utils::event_number(&event, "deltaY") else {
            return;
        };
        let in_view = wasm_utils::element_top_and_height(HERO_ID)
            .is_some_and(|(top, height)| top + height > 0.0);
        if in_view {
            carousel.write().on_wheel(delta_y);
        }
    });

    let current = carousel.read().index();

    rsx! {
        section { id: HERO_ID, class: "relative h-screen w-full overflow-hidden bg-black",
            for (i , slide) in HERO_SLIDES.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "absolute inset-0 transition-opacity duration-1000",
                    class: SlideStyle::for_active(i == current).layer,
                    img {
                        src: "{slide.url}",
                        alt: "{slide.title}",
                        class: "w-full h-full object-cover",
                    }
                    div { class: "absolute inset-0 bg-gradient-to-b from-black/30 via-black/20 to-black/70" }
                    div { class: "absolute inset-0 flex flex-col items-center justify-center text-center px-6",
                        p { class: "text-sm uppercase tracking-[0.3em] text-white/70 mb-4",
                            "{slide.location}"
                        }
                        h1 { class: "text-5xl md:text-7xl font-bold text-white mb-6",
                            "{slide.title}"
                        }
                        p { class: "text-lg md:text-2xl text-white/80 max-w-2xl",
                            "{slide.description}"
                        }
                    }
                }
            }

            div { class: "absolute left-4 md:left-10 top-1/2 -translate-y-1/2 z-10",
                HaloIconButton {
                    aria_label: "Previous slide",
                    onclick: move |_| carousel.write().previous(),
                    ChevronLeftIcon { class: "w-8 h-8" }
                }
            }
            div { class: "absolute right-20 md:right-28 top-1/2 -translate-y-1/2 z-10",
                HaloIconButton {
                    aria_label: "Next slide",
                    onclick: move |_| carousel.write().next(),
                    ChevronRightIcon { class: "w-8 h-8" }
                }
            }

            div { class: "absolute bottom-10 left-1/2 -translate-x-1/2 z-10 flex gap-3",
                for (i , number) in (1..=HERO_SLIDES.len()).enumerate() {
                    ChromelessButton {
                        key: "{i}",
                        class: Some(BulletStyle::for_active(i == current).class()),
                        aria_label: Some(format!("Go to slide {number}")),
                        onclick: move |_| carousel.write().go_to(i),
                        span { class: "sr-only", "Slide {number}" }
                    }
                }
            }
        }
    }
}
