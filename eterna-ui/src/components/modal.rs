//! Full-screen overlay on a native `<dialog>`
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling and
//! `::backdrop` styling for free. The dialog keeps its own `display`, so the
//! layout lives on an inner fixed container instead.

use crate::hooks::use_element_id;
use crate::wasm_utils::set_dialog_open;
use dioxus::prelude::*;

/// Overlay whose open state follows `is_open`. Escape and clicks on the
/// overlay container both report `on_close`; content that should not close
/// it must stop propagation.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    children: Element,
    /// Extra classes for the container around the content
    #[props(default)]
    overlay_class: Option<String>,
) -> Element {
    let dialog_id = use_element_id("modal");

    let sync_id = dialog_id.clone();
    use_effect(move || set_dialog_open(&sync_id, is_open()));

    let overlay_class = overlay_class.unwrap_or_default();

    // No display utilities on the dialog itself: they would show it while closed
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 m-0 max-w-none max-h-none bg-transparent backdrop:bg-black/90",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center {overlay_class}",
                    onclick: move |_| on_close.call(()),
                    {children}
                }
            }
        }
    }
}
