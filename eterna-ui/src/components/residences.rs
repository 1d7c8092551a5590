//! Residence stories and the overlapping layer stack

use crate::components::{Button, ButtonSize, ButtonVariant, GlowHalo, ImageLightbox, Reveal};
use crate::content::{residence_images, story_images, ResidenceLayer, RESIDENCE_LAYERS, STORIES};
use crate::style::{RevealMotion, RevealStyle};
use dioxus::prelude::*;
use eterna_common::LightboxState;

#[component]
pub fn ResidencesSection() -> Element {
    rsx! {
        section { id: "residences", class: "bg-black",
            StoryTiles {}
            OverlappingLayers {}
        }
    }
}

/// Alternating image/text rows
#[component]
fn StoryTiles() -> Element {
    let images = use_hook(story_images);
    let mut lightbox = use_signal(LightboxState::closed);

    rsx! {
        div { class: "py-24 px-4 md:px-8 bg-gradient-to-b from-black to-gray-900",
            Reveal { style: RevealStyle::new(RevealMotion::RiseFar),
                h2 { class: "text-4xl md:text-5xl font-bold text-white text-center mb-24",
                    "Residences"
                }
            }

            div { class: "max-w-7xl mx-auto space-y-32",
                for (index , story) in STORIES.iter().enumerate() {
                    Reveal {
                        key: "{index}",
                        style: RevealStyle::new(RevealMotion::RiseFar),
                        class: Some(format!("flex flex-col {} items-center gap-16", story.align.row_class())),
                        div { class: "w-full md:w-1/2",
                            div {
                                class: "relative group cursor-pointer",
                                onclick: move |_| {
                                    tracing::info!("Opening story {index}");
                                    lightbox.write().open(index);
                                },
                                GlowHalo {
                                    shape: "-inset-4 rounded-lg",
                                    opacity: "opacity-75 group-hover:opacity-100",
                                }
                                div { class: "relative aspect-video rounded-lg overflow-hidden",
                                    img {
                                        src: "{story.url}",
                                        alt: "{story.title}",
                                        class: "object-cover w-full h-full transition-transform duration-700 group-hover:scale-110",
                                    }
                                }
                            }
                        }
                        div { class: "w-full md:w-1/2 space-y-6",
                            h3 { class: "text-3xl md:text-4xl font-bold text-white", "{story.title}" }
                            p { class: "text-xl leading-relaxed text-gray-300", "{story.description}" }
                            Button {
                                variant: ButtonVariant::Glass,
                                size: ButtonSize::Pill,
                                onclick: move |_| lightbox.write().open(index),
                                "Read More"
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

/// Each layer with its left offset in percent and its stacking order
fn layer_placements() -> impl Iterator<Item = (usize, &'static ResidenceLayer, usize, usize)> {
    let count = RESIDENCE_LAYERS.len();
    RESIDENCE_LAYERS
        .iter()
        .enumerate()
        .map(move |(index, layer)| (index, layer, index * 10, count - index))
}

/// Sticky cards stacked with a growing left offset, first card on top
#[component]
fn OverlappingLayers() -> Element {
    let images = use_hook(residence_images);
    let mut lightbox = use_signal(LightboxState::closed);

    rsx! {
        div { class: "min-h-screen py-24 px-4 md:px-8 relative overflow-hidden",
            Reveal { style: RevealStyle::new(RevealMotion::RiseFar),
                h2 { class: "text-4xl md:text-5xl font-bold text-white text-center mb-24",
                    "Depth in Every Floor"
                }
            }

            div { class: "max-w-7xl mx-auto relative h-[150vh]",
                for (index , layer , margin , depth) in layer_placements() {
                    div {
                        key: "{index}",
                        class: "sticky top-[20vh] w-full max-w-2xl",
                        style: "margin-left: {margin}%; z-index: {depth};",
                        Reveal { style: RevealStyle::staggered(RevealMotion::Tilt, index, 0.2),
                            div {
                                class: "relative rounded-lg overflow-hidden cursor-pointer transition-transform duration-500 hover:scale-105",
                                onclick: move |_| {
                                    tracing::info!("Opening residence layer {index}");
                                    lightbox.write().open(index);
                                },
                                img {
                                    src: "{layer.url}",
                                    alt: "{layer.title}",
                                    class: "object-cover w-full aspect-[4/3]",
                                }
                                div { class: "absolute inset-0 bg-gradient-to-t from-black/70 to-transparent flex flex-col justify-end p-8",
                                    h3 { class: "text-3xl font-bold text-white mb-2", "{layer.title}" }
                                    p { class: "text-lg text-gray-300", "{layer.text}" }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_step_right_and_stack_first_on_top() {
        let placements: Vec<_> = layer_placements()
            .map(|(index, _, margin, depth)| (index, margin, depth))
            .collect();
        assert_eq!(placements, vec![(0, 0, 3), (1, 10, 2), (2, 20, 1)]);
    }
}
