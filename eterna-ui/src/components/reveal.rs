//! Scroll-triggered entrance animation

use crate::hooks::use_element_id;
use crate::style::RevealStyle;
use crate::wasm_utils::{IntersectionOptions, IntersectionWatcher};
use dioxus::prelude::*;

const REVEAL_OBSERVER: IntersectionOptions = IntersectionOptions {
    thresholds: &[0.1],
    root_margin: "0px",
};

/// Wraps `children` in a block that stays hidden until it first scrolls into
/// view, then transitions in according to `style`. Reveals once.
#[component]
pub fn Reveal(
    style: RevealStyle,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let id = use_element_id("reveal");
    let mut visible = use_signal(|| false);
    let mut watcher: Signal<Option<IntersectionWatcher>> = use_signal(|| None);

    let watch_id = id.clone();
    use_effect(move || {
        watcher.set(IntersectionWatcher::observe_ids(
            &[watch_id.as_str()],
            &REVEAL_OBSERVER,
            move |entries| {
                if !*visible.peek() && entries.iter().any(|entry| entry.is_intersecting) {
                    visible.set(true);
                }
            },
        ));
    });

    // Drop the observer outside its own callback once it has done its job
    use_effect(move || {
        if visible() {
            watcher.set(None);
        }
    });

    let extra = class.unwrap_or_default();
    let state = style.class(visible());

    rsx! {
        div {
            id: "{id}",
            class: "transition-all duration-700 ease-out {state} {extra}",
            style: style.transition_style(),
            {children}
        }
    }
}
