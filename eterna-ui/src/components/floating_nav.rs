//! Fixed section navigator

use crate::components::ChromelessButton;
use crate::style::NavButtonStyle;
use crate::wasm_utils::{scroll_to_section, IntersectionOptions, IntersectionWatcher};
use dioxus::prelude::*;
use eterna_common::{next_active_section, NAV_SECTIONS};

const SECTION_OBSERVER: IntersectionOptions = IntersectionOptions {
    thresholds: &[0.2, 0.5, 0.8],
    root_margin: "-10% 0px -10% 0px",
};

/// Vertical pill of section initials that highlights the section in view
#[component]
pub fn FloatingNav() -> Element {
    let mut active = use_signal(|| NAV_SECTIONS[0].id.to_string());
    let mut watcher: Signal<Option<IntersectionWatcher>> = use_signal(|| None);

    use_effect(move || {
        let ids: Vec<&str> = NAV_SECTIONS.iter().map(|section| section.id).collect();
        watcher.set(IntersectionWatcher::observe_ids(
            &ids,
            &SECTION_OBSERVER,
            move |entries| {
                let next = {
                    let current = active.peek();
                    next_active_section(&current, &entries).to_string()
                };
                if *active.peek() != next {
                    tracing::debug!("Active section: {next}");
                    active.set(next);
                }
            },
        ));
    });

    rsx! {
        nav { class: "fixed right-4 md:right-8 top-1/2 -translate-y-1/2 z-50",
            div { class: "flex flex-col gap-2 p-2 bg-black/60 backdrop-blur-md rounded-full border border-white/10",
                for section in NAV_SECTIONS.iter() {
                    NavButton {
                        key: "{section.id}",
                        initial: section.initial,
                        target: section.id,
                        active: active() == section.id,
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(initial: &'static str, target: &'static str, active: bool) -> Element {
    let style = NavButtonStyle::for_active(active);

    rsx! {
        div { class: "relative",
            if style.show_indicator {
                div { class: "absolute inset-0 rounded-full bg-gradient-to-r from-purple-600 to-pink-600 blur-sm opacity-60" }
            }
            ChromelessButton {
                class: Some(format!(
                    "relative w-10 h-10 rounded-full text-sm font-semibold transition-all duration-300 {}",
                    style.button,
                )),
                aria_label: Some(format!("Go to {target}")),
                onclick: move |_| scroll_to_section(target),
                "{initial}"
            }
        }
    }
}
