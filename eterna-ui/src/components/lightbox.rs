//! Full-screen image lightbox
//!
//! Callers own both the image list and the [`LightboxState`]; this view only
//! reads the selection and reports navigation back through `on_navigate`.
//! Wide viewports get the fitted image. Narrow viewports get a 1.5x zoomed
//! image that can be dragged within its [`DragBounds`].

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::components::{HaloIconButton, Modal};
use crate::hooks::{use_element_id, use_narrow_breakpoint, use_window_size};
use crate::style::LightboxVariant;
use crate::wasm_utils::element_client_size;
use dioxus::prelude::*;
use eterna_common::{
    Direction, DragBounds, GalleryImage, LightboxState, PanOffset, PanState, Size, ZOOM_SCALE,
};

/// Index a previous/next step lands on, leaving the caller's state untouched
fn step_target(state: LightboxState, direction: Direction, len: usize) -> Option<usize> {
    let mut moved = state;
    moved.step(direction, len)
}

/// Lightbox over a caller-supplied image list
#[component]
pub fn ImageLightbox(
    images: Vec<GalleryImage>,
    state: LightboxState,
    on_close: EventHandler<()>,
    /// Receives the index to show next; route it through
    /// [`LightboxState::navigate`]
    on_navigate: EventHandler<usize>,
) -> Element {
    let resolved = state.resolve(&images).map(|(i, image)| (i, image.clone()));
    let total = images.len();

    // Keep the dialog in step with whether anything resolves
    let mut is_open = use_signal(|| resolved.is_some());
    if *is_open.peek() != resolved.is_some() {
        is_open.set(resolved.is_some());
    }
    let is_open: ReadSignal<bool> = is_open.into();

    let viewport = use_window_size();
    let narrow_below = use_narrow_breakpoint();
    let variant = LightboxVariant::for_width(viewport().width, narrow_below);

    let step = move |direction: Direction| {
        if let Some(next) = step_target(state, direction, total) {
            tracing::debug!("Lightbox {direction:?} -> {next}");
            on_navigate.call(next);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowLeft => step(Direction::Previous),
        Key::ArrowRight => step(Direction::Next),
        _ => {}
    };

    rsx! {
        Modal {
            is_open,
            on_close,
            overlay_class: Some("p-4 animate-fade-in".to_string()),
            if let Some((index, image)) = resolved {
                div {
                    class: "contents",
                    onkeydown: on_keydown,

                    div { class: "absolute left-4 md:left-40 top-1/2 -translate-y-1/2 z-10",
                        HaloIconButton {
                            aria_label: "Previous image",
                            onclick: move |_| step(Direction::Previous),
                            ChevronLeftIcon { class: "w-8 h-8" }
                        }
                    }

                    div { class: "absolute right-4 md:right-40 top-1/2 -translate-y-1/2 z-10",
                        HaloIconButton {
                            aria_label: "Next image",
                            onclick: move |_| step(Direction::Next),
                            ChevronRightIcon { class: "w-8 h-8" }
                        }
                    }

                    div { class: "absolute top-6 right-6 md:top-20 md:right-20 z-10",
                        HaloIconButton {
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            XIcon { class: "w-6 h-6" }
                        }
                    }

                    match variant {
                        LightboxVariant::Contained => rsx! {
                            ContainedImage { image: image.clone() }
                        },
                        LightboxVariant::Pannable => rsx! {
                            PannableImage { key: "{index}", image: image.clone(), viewport: viewport() }
                        },
                    }
                }
            }
        }
    }
}

/// Title and optional description band along the bottom of the image
#[component]
fn Caption(image: GalleryImage) -> Element {
    rsx! {
        div { class: "absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-black/80 via-black/50 to-transparent pointer-events-none",
            h3 { class: "text-2xl md:text-3xl font-bold text-white mb-2", "{image.title}" }
            if let Some(description) = &image.description {
                p { class: "text-white/80 text-base md:text-lg", "{description}" }
            }
        }
    }
}

/// Wide viewports: image fitted to the viewport
#[component]
fn ContainedImage(image: GalleryImage) -> Element {
    rsx! {
        div {
            class: "relative max-w-7xl w-full max-h-[90vh] flex flex-col items-center animate-zoom-in",
            onclick: move |evt| evt.stop_propagation(),
            img {
                src: "{image.url}",
                alt: "{image.title}",
                class: "w-full h-full max-h-[90vh] object-contain rounded-lg",
            }
            Caption { image: image.clone() }
        }
    }
}

/// Narrow viewports: zoomed image dragged within its bounds.
///
/// Keyed by image index by the parent, so each image starts centred with
/// fresh bounds.
#[component]
fn PannableImage(image: GalleryImage, viewport: Size) -> Element {
    let stage_id = use_element_id("lightbox-stage");
    let image_id = use_element_id("lightbox-image");
    let mut pan = use_signal(PanState::default);

    let mut measure = {
        let stage_id = stage_id.clone();
        let image_id = image_id.clone();
        move || {
            let (Some(fitted), Some(stage)) = (
                element_client_size(&image_id),
                element_client_size(&stage_id),
            ) else {
                return;
            };
            let bounds = DragBounds::compute(fitted, stage);
            tracing::debug!("Lightbox drag bounds {bounds:?}");
            pan.write().set_bounds(bounds);
        }
    };

    // The stage is 80vh tall, so a height-only resize moves the bounds too
    let mut last_viewport = use_signal(|| viewport);
    if viewport.differs_from(*last_viewport.peek()) {
        last_viewport.set(viewport);
    }
    let mut measure_on_resize = measure.clone();
    use_effect(move || {
        let _ = last_viewport();
        measure_on_resize();
    });

    let PanOffset { x, y } = pan.read().offset();
    let dragging = pan.read().is_dragging();
    let cursor = if dragging { "cursor-grabbing" } else { "cursor-grab" };

    let point = |evt: &PointerEvent| {
        let p = evt.client_coordinates();
        PanOffset { x: p.x, y: p.y }
    };

    rsx! {
        div {
            id: "{stage_id}",
            class: "relative w-full h-[80vh] overflow-hidden rounded-lg touch-none select-none {cursor}",
            onclick: move |evt| evt.stop_propagation(),
            onpointerdown: move |evt| pan.write().begin(point(&evt)),
            onpointermove: move |evt| {
                if pan.peek().is_dragging() {
                    pan.write().update(point(&evt));
                }
            },
            onpointerup: move |_| pan.write().end(),
            onpointercancel: move |_| pan.write().end(),
            onpointerleave: move |_| pan.write().end(),
            img {
                id: "{image_id}",
                src: "{image.url}",
                alt: "{image.title}",
                draggable: "false",
                class: "absolute top-1/2 left-1/2 w-full h-auto max-w-none",
                style: "transform: translate(-50%, -50%) translate({x}px, {y}px) scale({ZOOM_SCALE});",
                onload: move |_| measure(),
            }
            Caption { image: image.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap_around_an_open_lightbox() {
        let mut state = LightboxState::closed();
        state.open(0);
        assert_eq!(step_target(state, Direction::Previous, 4), Some(3));
        assert_eq!(step_target(state, Direction::Next, 4), Some(1));
        // the caller's state only changes through on_navigate
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn arrows_do_nothing_while_closed() {
        assert_eq!(step_target(LightboxState::closed(), Direction::Next, 4), None);
    }

    #[test]
    fn navigation_reported_after_close_is_ignored() {
        let mut state = LightboxState::closed();
        state.open(2);
        let next = step_target(state, Direction::Next, 4);
        state.close();
        if let Some(index) = next {
            state.navigate(index);
        }
        assert!(!state.is_open());
    }
}
