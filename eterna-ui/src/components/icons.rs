//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

/// Chevron right icon (next)
#[component]
pub fn ChevronRightIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

/// Chevron left icon (previous)
#[component]
pub fn ChevronLeftIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

/// X icon (close/dismiss)
#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Phone icon (handset)
#[component]
pub fn PhoneIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

/// Mail icon (envelope)
#[component]
pub fn MailIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect {
                width: "20",
                height: "16",
                x: "2",
                y: "4",
                rx: "2",
            }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

/// Map pin icon (location)
#[component]
pub fn MapPinIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

/// Pen tool icon (architecture credit)
#[component]
pub fn PenToolIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m12 19 7-7 3 3-7 7-3-3z" }
            path { d: "m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" }
            path { d: "m2 2 7.586 7.586" }
            circle { cx: "11", cy: "11", r: "2" }
        }
    }
}

/// Building icon (developer credit)
#[component]
pub fn BuildingIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect {
                width: "16",
                height: "20",
                x: "4",
                y: "2",
                rx: "2",
            }
            path { d: "M9 22v-4h6v4" }
            path { d: "M8 6h.01" }
            path { d: "M16 6h.01" }
            path { d: "M12 6h.01" }
            path { d: "M12 10h.01" }
            path { d: "M12 14h.01" }
            path { d: "M16 10h.01" }
            path { d: "M16 14h.01" }
            path { d: "M8 10h.01" }
            path { d: "M8 14h.01" }
        }
    }
}

/// Camera icon (renders credit)
#[component]
pub fn CameraIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

/// Palette icon (branding credit)
#[component]
pub fn PaletteIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "13.5", cy: "6.5", r: ".5", fill: "currentColor" }
            circle { cx: "17.5", cy: "10.5", r: ".5", fill: "currentColor" }
            circle { cx: "8.5", cy: "7.5", r: ".5", fill: "currentColor" }
            circle { cx: "6.5", cy: "12.5", r: ".5", fill: "currentColor" }
            path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
        }
    }
}
