//! Unit availability listing with filter toggles and the partner credits

use crate::components::icons::{BuildingIcon, CameraIcon, PaletteIcon, PenToolIcon};
use crate::components::{ChromelessButton, GlowHalo, Reveal};
use crate::style::{status_class, RevealMotion, RevealStyle, ToggleStyle};
use dioxus::prelude::*;
use eterna_common::{filter_units, FilterKey, FilterState, Partner, PartnerKind, Unit, PARTNERS};

/// File name offered when the brochure link is followed
pub const BROCHURE_FILE_NAME: &str = "luxury-residences-brochure.pdf";

/// Filter toggles over `units`, the matching rows, then the partner grid.
///
/// The filter state is local; it starts with every toggle off.
#[component]
pub fn AvailabilityPanel(
    /// Listing in display order
    units: &'static [Unit],
    /// Link target for each row's "View Details"
    brochure_url: String,
) -> Element {
    let mut filters = use_signal(FilterState::default);
    let state = filters();
    let visible = filter_units(units, &state);

    rsx! {
        section { id: "availability", class: "py-24 bg-black",
            Reveal { style: RevealStyle::new(RevealMotion::Rise),
                h2 { class: "text-4xl md:text-6xl font-bold text-white text-center mb-4",
                    "Availability"
                }
            }

            div { class: "w-full max-w-4xl mx-auto p-4 md:p-8",
                div { class: "flex flex-col space-y-8",
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for filter in FilterKey::ALL {
                            FilterToggle {
                                key: "{filter:?}",
                                label: filter.label(),
                                active: state.is_active(filter),
                                on_toggle: move |_| {
                                    filters.write().toggle(filter);
                                    tracing::info!(
                                        "Filter {filter:?} -> {}",
                                        filters.peek().is_active(filter)
                                    );
                                },
                            }
                        }
                    }

                    div { class: "space-y-6",
                        for (index , unit) in visible.iter().enumerate() {
                            UnitRow {
                                key: "{unit.floor}",
                                unit: **unit,
                                index,
                                brochure_url: brochure_url.clone(),
                            }
                        }
                        if visible.is_empty() {
                            div { class: "text-center text-white/70 py-8 animate-fade-in",
                                "No units match your selected filters"
                            }
                        }
                    }

                    PartnersGrid {}
                }
            }
        }
    }
}

#[component]
fn FilterToggle(label: &'static str, active: bool, on_toggle: EventHandler<()>) -> Element {
    let style = ToggleStyle::for_active(active);

    rsx! {
        div { class: "relative",
            GlowHalo { shape: "-inset-1 rounded-md", opacity: style.glow }
            ChromelessButton {
                class: Some(format!("relative w-full p-3 rounded-md transition-colors {}", style.button)),
                onclick: move |_| on_toggle.call(()),
                "{label}"
            }
        }
    }
}

#[component]
fn UnitRow(unit: Unit, index: usize, brochure_url: String) -> Element {
    rsx! {
        Reveal {
            style: RevealStyle::staggered(RevealMotion::Rise, index, 0.1),
            class: Some("relative group".to_string()),
            GlowHalo { opacity: "opacity-75 group-hover:opacity-100" }
            div { class: "relative p-6 rounded-lg bg-black",
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 items-center text-white",
                    div {
                        h4 { class: "text-xl font-semibold", "{unit.floor}" }
                        p { class: "text-sm mt-2 {status_class(unit.available)}", "{unit.status_label()}" }
                    }
                    div { class: "text-center",
                        p { class: "text-white/80", "{unit.bedrooms} Bedrooms" }
                        p { class: "text-white/80 mt-1", "{unit.sqft} sq ft" }
                    }
                    div { class: "text-center",
                        p { class: "text-2xl font-bold", "{unit.price}" }
                    }
                    div { class: "flex justify-end",
                        div { class: "relative group/button",
                            GlowHalo {
                                shape: "-inset-1 rounded-md",
                                opacity: "opacity-0 group-hover/button:opacity-75",
                            }
                            a {
                                href: "{brochure_url}",
                                download: BROCHURE_FILE_NAME,
                                class: "relative px-4 py-2 bg-black text-white rounded-md transition-colors",
                                "View Details"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PartnersGrid() -> Element {
    rsx! {
        Reveal {
            style: RevealStyle::new(RevealMotion::Rise),
            class: Some("mt-24".to_string()),
            h3 { class: "text-3xl font-bold text-center text-white mb-12", "Our Partners" }
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                for (index , partner) in PARTNERS.iter().enumerate() {
                    PartnerCard { key: "{index}", partner: *partner, index }
                }
            }
        }
    }
}

#[component]
fn PartnerCard(partner: Partner, index: usize) -> Element {
    rsx! {
        Reveal {
            style: RevealStyle::staggered(RevealMotion::Rise, index, 0.1),
            class: Some("relative group h-full".to_string()),
            GlowHalo { opacity: "opacity-50 group-hover:opacity-75" }
            div { class: "relative p-4 rounded-lg bg-black h-full",
                div { class: "flex flex-col items-center text-center space-y-2 h-full justify-center",
                    div { class: "p-2 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full text-white",
                        match partner.kind {
                            PartnerKind::Architecture => rsx! { PenToolIcon { class: "w-6 h-6" } },
                            PartnerKind::Development => rsx! { BuildingIcon { class: "w-6 h-6" } },
                            PartnerKind::Renders => rsx! { CameraIcon { class: "w-6 h-6" } },
                            PartnerKind::Branding => rsx! { PaletteIcon { class: "w-6 h-6" } },
                        }
                    }
                    h4 { class: "text-lg font-semibold text-white", "{partner.name}" }
                    p { class: "text-sm text-white/80", "{partner.description}" }
                }
            }
        }
    }
}
