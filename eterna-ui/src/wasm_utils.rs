//! WASM utilities for browser interop
//!
//! # Subscription Cleanup Pattern
//!
//! A JavaScript listener or observer backed by a Rust `Closure` must not outlive
//! the closure, and `closure.forget()` leaks both. Every subscription here is a
//! guard struct that registers on construction and deregisters in `Drop`:
//!
//! ```ignore
//! // Listener is attached when WindowListener is created
//! let listener = EventListener::on_window("resize", callback);
//!
//! // ...and removed when it is dropped
//! drop(listener);
//! ```
//!
//! Components keep guards in a `Signal<Option<_>>` (set to `None` to release) or
//! in hook state, so unmounting the component releases them on every exit path.

use eterna_common::IntersectionSample;
use wasm_bindgen_x::prelude::*;

/// An event listener on a window or document that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attaches a passive listener to `target`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attaches to the global window, if there is one.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Observer settings, mirroring `IntersectionObserverInit`
pub struct IntersectionOptions {
    pub thresholds: &'static [f64],
    pub root_margin: &'static str,
}

/// An intersection observer watching elements by id, disconnected when dropped.
pub struct IntersectionWatcher {
    observer: web_sys_x::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)>,
}

impl IntersectionWatcher {
    /// Observe every element in `ids` that exists in the document. Missing ids
    /// are skipped. Each batch of entries is handed to `on_entries`.
    pub fn observe_ids(
        ids: &[&str],
        options: &IntersectionOptions,
        mut on_entries: impl FnMut(Vec<IntersectionSample>) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;

        let callback: Closure<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)> =
            Closure::wrap(Box::new(
                move |entries: js_sys_x::Array, _observer: web_sys_x::IntersectionObserver| {
                    let samples = entries
                        .iter()
                        .filter_map(|entry| {
                            entry.dyn_into::<web_sys_x::IntersectionObserverEntry>().ok()
                        })
                        .map(|entry| IntersectionSample {
                            id: entry.target().id(),
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        })
                        .collect();
                    on_entries(samples);
                },
            ));

        let init = web_sys_x::IntersectionObserverInit::new();
        let thresholds: js_sys_x::Array = options
            .thresholds
            .iter()
            .map(|t| wasm_bindgen_x::JsValue::from_f64(*t))
            .collect();
        init.set_threshold(&thresholds);
        init.set_root_margin(options.root_margin);

        let observer = web_sys_x::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .ok()?;

        for id in ids {
            if let Some(element) = document.get_element_by_id(id) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Current window height in CSS pixels
pub fn window_height() -> Option<f64> {
    web_sys_x::window()?.inner_height().ok()?.as_f64()
}

/// Current window inner size in CSS pixels
pub fn window_size() -> Option<eterna_common::Size> {
    let window = web_sys_x::window()?;
    Some(eterna_common::Size::new(
        window.inner_width().ok()?.as_f64()?,
        window.inner_height().ok()?.as_f64()?,
    ))
}

/// Layout size (transforms ignored) of the element with `id`
pub fn element_client_size(id: &str) -> Option<eterna_common::Size> {
    let element = web_sys_x::window()?.document()?.get_element_by_id(id)?;
    Some(eterna_common::Size::new(
        element.client_width() as f64,
        element.client_height() as f64,
    ))
}

/// Bounding-rect top and height of the element with `id`
pub fn element_top_and_height(id: &str) -> Option<(f64, f64)> {
    let element = web_sys_x::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

/// Smooth-scroll the element with `id` to the top of the viewport
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!("No section with id {id} to scroll to");
        return;
    };
    let options = web_sys_x::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    options.set_block(web_sys_x::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Open or close the `<dialog>` with `id` through `showModal()`/`close()`.
///
/// `showModal()` throws on an already open dialog, so the current `open`
/// attribute decides whether anything is called.
pub fn set_dialog_open(id: &str, open: bool) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let method = match (open, element.has_attribute("open")) {
        (true, false) => "showModal",
        (false, true) => "close",
        _ => return,
    };
    if let Ok(func) = js_sys_x::Reflect::get(&element, &method.into())
        .and_then(|value| value.dyn_into::<js_sys_x::Function>())
    {
        let _ = func.call0(&element);
    }
}

/// Read a numeric field such as `deltaY` off a raw event
pub fn event_number(event: &wasm_bindgen_x::JsValue, field: &str) -> Option<f64> {
    js_sys_x::Reflect::get(event, &field.into()).ok()?.as_f64()
}
