//! Hooks wrapping browser subscriptions
//!
//! Each hook keeps its guard from [`crate::wasm_utils`] in hook state, so the
//! listener lives exactly as long as the component that called the hook.

use crate::style::{NarrowBreakpoint, NARROW_BREAKPOINT};
use crate::wasm_utils::{self, EventListener};
use dioxus::prelude::*;
use eterna_common::Size;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique element IDs
static ELEMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A DOM id unique to this component instance, e.g. `reveal-3`
pub fn use_element_id(prefix: &'static str) -> String {
    use_hook(|| {
        let id = ELEMENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id}")
    })
}

/// Run `handler` for every `event_name` event on the window while mounted.
pub fn use_window_listener(
    event_name: &'static str,
    handler: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
) {
    use_hook(move || Rc::new(EventListener::on_window(event_name, handler)));
}

/// Window inner size, updated when either dimension changes.
///
/// Mobile browsers resize only the height as the URL bar shows and hides, so
/// both axes are tracked.
pub fn use_window_size() -> ReadSignal<Size> {
    let mut size = use_signal(|| {
        wasm_utils::window_size().unwrap_or(Size::new(NARROW_BREAKPOINT, NARROW_BREAKPOINT))
    });

    use_window_listener("resize", move |_| {
        if let Some(next) = wasm_utils::window_size() {
            if next.differs_from(*size.peek()) {
                size.set(next);
            }
        }
    });

    size.into()
}

/// Width below which narrow layouts apply, from a provided
/// [`NarrowBreakpoint`] or the default
pub fn use_narrow_breakpoint() -> f64 {
    try_use_context::<NarrowBreakpoint>()
        .map(|breakpoint| breakpoint.0)
        .unwrap_or(NARROW_BREAKPOINT)
}

/// Scroll progress (0.0 - 1.0) of the page through the element with `id`.
/// See [`eterna_common::scroll_progress`].
pub fn use_scroll_progress(id: String) -> ReadSignal<f64> {
    let progress = use_signal(|| 0.0_f64);

    let mount_id = id.clone();
    use_effect(move || measure_progress(progress, &mount_id));

    let scroll_id = id.clone();
    use_window_listener("scroll", move |_| measure_progress(progress, &scroll_id));
    use_window_listener("resize", move |_| measure_progress(progress, &id));

    progress.into()
}

fn measure_progress(mut progress: Signal<f64>, id: &str) {
    let Some((top, height)) = wasm_utils::element_top_and_height(id) else {
        return;
    };
    let viewport = wasm_utils::window_height().unwrap_or(height);
    let next = eterna_common::scroll_progress(top, height, viewport);
    if (*progress.peek() - next).abs() > 0.001 {
        progress.set(next);
    }
}
