//! Reusable button components

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Purple-to-pink gradient - form submission
    Gradient,
    /// Solid white - the main call to action over imagery
    Light,
    /// Frosted translucent white - secondary actions over imagery
    Glass,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Rounded pill sized to its label
    Pill,
    /// Full-width block
    Block,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let shape = match size {
        ButtonSize::Pill => "px-8 py-3 rounded-full",
        ButtonSize::Block => "w-full py-3 px-6 rounded-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Gradient => "bg-gradient-to-r from-purple-600 to-pink-600 text-white",
        ButtonVariant::Light => "bg-white text-black hover:bg-opacity-90",
        ButtonVariant::Glass => "bg-white/10 backdrop-blur-sm text-white hover:bg-white/20",
    };

    let base = "font-semibold transition-colors duration-300";

    let computed_class = match &class {
        Some(extra) => format!("{base} {shape} {variant_class} {extra}"),
        None => format!("{base} {shape} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            r#type,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}

/// Gradient halo drawn behind a control; sits inside a `relative group` wrapper.
#[component]
pub fn GlowHalo(
    /// Inset and corner classes, e.g. `-inset-1 rounded-md`
    #[props(default = "-inset-1 rounded-lg")]
    shape: &'static str,
    /// Opacity classes, e.g. `opacity-50 group-hover:opacity-75`
    opacity: &'static str,
) -> Element {
    rsx! {
        div { class: "absolute {shape} bg-gradient-to-r from-purple-600 to-pink-600 {opacity} blur transition duration-1000" }
    }
}

/// Round black icon button with a glowing halo, used over dark overlays
#[component]
pub fn HaloIconButton(
    aria_label: &'static str,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "relative group",
            GlowHalo {
                shape: "-inset-2 rounded-full",
                opacity: "opacity-50 group-hover:opacity-75",
            }
            ChromelessButton {
                class: Some("relative p-2 bg-black rounded-full text-white/80 hover:text-white transition-colors".to_string()),
                aria_label: Some(aria_label.to_string()),
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    onclick.call(e);
                },
                {children}
            }
        }
    }
}
