//! Full-height video band between the views and the listing

use crate::components::{Button, ButtonSize, ButtonVariant, Reveal};
use crate::style::{RevealMotion, RevealStyle};
use dioxus::prelude::*;

const REEL_URL: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-photographer-in-a-forest-taking-pictures-34671-large.mp4";

#[component]
pub fn VideoSection() -> Element {
    rsx! {
        section { class: "relative h-screen overflow-hidden",
            video {
                class: "absolute inset-0 w-full h-full object-cover",
                autoplay: true,
                muted: true,
                r#loop: true,
                playsinline: true,
                source { src: REEL_URL, r#type: "video/mp4" }
            }

            div { class: "absolute inset-0 bg-gradient-to-r from-black/80 via-black/50 to-transparent flex items-center justify-center",
                Reveal {
                    style: RevealStyle::new(RevealMotion::RiseFar),
                    class: Some("text-center w-full max-w-4xl px-8".to_string()),
                    h2 { class: "text-4xl md:text-6xl font-bold text-white mb-8", "Life in Motion" }
                    p { class: "text-xl max-w-2xl mx-auto mb-12 text-gray-300",
                        "Experience the tower in motion, where every floor frames the city and every evening becomes a view worth keeping."
                    }
                    div { class: "flex flex-wrap items-center justify-center gap-6",
                        Button {
                            variant: ButtonVariant::Light,
                            size: ButtonSize::Pill,
                            onclick: move |_| tracing::debug!("Watch Reel pressed"),
                            "Watch Reel"
                        }
                        Button {
                            variant: ButtonVariant::Glass,
                            size: ButtonSize::Pill,
                            onclick: move |_| tracing::debug!("Behind the Scenes pressed"),
                            "Behind the Scenes"
                        }
                    }
                }
            }
        }
    }
}
