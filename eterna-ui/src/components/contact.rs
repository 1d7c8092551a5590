//! Contact section: enquiry form, contact details and footer

use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, Reveal};
use crate::content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::stores::{ContactState, ContactStateStoreExt};
use crate::style::{FieldStyle, RevealMotion, RevealStyle, SubmitStyle};
use chrono::Datelike;
use dioxus::prelude::*;
use eterna_common::{ContactField, FloorType, SubmitStatus};

/// Footer line for the given calendar year
pub fn copyright_line(year: i32) -> String {
    format!("{year} Black Navy - Eterna Tower Nashville - All rights reserved.")
}

/// Contact section view
///
/// Reads the form through a store so each input only re-renders with its own
/// field. Editing and submitting are reported to the owner, which runs
/// validation and the request.
#[component]
pub fn ContactSectionView(
    state: ReadStore<ContactState>,
    on_field_change: EventHandler<(ContactField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        section { id: "contact", class: "bg-black text-white py-12 md:py-20",
            Reveal { style: RevealStyle::new(RevealMotion::RiseFar),
                h2 { class: "text-3xl md:text-5xl font-bold text-center mb-8 md:mb-24", "Contact" }
            }

            Reveal {
                style: RevealStyle { motion: RevealMotion::Rise, delay: 0.2 },
                class: Some("max-w-3xl mx-auto text-center space-y-4 md:space-y-6 px-4 md:px-0".to_string()),
                p { class: "text-base md:text-lg leading-relaxed text-white/80",
                    "We're here to help you find your ideal home in Eterna Tower Nashville. Complete our contact form to request more information or schedule an appointment visit."
                }
                p { class: "text-base md:text-lg leading-relaxed text-white/80 pb-12 md:pb-40",
                    "You can also call us or write to us by email. Our team, together with Black Navy Real Estate, is ready to assist you and answer all your questions."
                }
            }

            div { class: "max-w-7xl mx-auto px-4",
                div { class: "flex flex-col lg:grid lg:grid-cols-2 gap-8 lg:gap-16",
                    Reveal {
                        style: RevealStyle::new(RevealMotion::SlideLeft),
                        class: Some("lg:order-2 bg-white/5 backdrop-blur-sm p-6 md:p-8 rounded-lg".to_string()),
                        h3 { class: "text-xl md:text-2xl font-bold mb-6 bg-gradient-to-r from-gray-100 to-gray-400 bg-clip-text text-transparent",
                            "Get in Touch"
                        }
                        ContactFormBody { state, on_field_change, on_submit }
                    }

                    div { class: "space-y-8 md:space-y-16 lg:order-1",
                        Reveal {
                            style: RevealStyle::new(RevealMotion::Rise),
                            class: Some("flex flex-col gap-3 mt-4".to_string()),
                            div { class: "flex items-center gap-3",
                                PhoneIcon { class: "w-5 h-5 text-gray-400" }
                                span { class: "text-gray-300", "{CONTACT_PHONE}" }
                            }
                            div { class: "flex items-center gap-3",
                                MailIcon { class: "w-5 h-5 text-gray-400" }
                                span { class: "text-gray-300", "{CONTACT_EMAIL}" }
                            }
                            div { class: "flex items-center gap-3",
                                MapPinIcon { class: "w-5 h-5 text-gray-400" }
                                span { class: "text-gray-300", "{CONTACT_ADDRESS}" }
                            }
                        }
                        InfoBlock {
                            title: "Location",
                            body: "Located in the heart of Nashville, at 1201 Demonbreun Street, Eterna Tower Nashville puts you at the epicenter of culture, entertainment and style. Minutes away from major business centers, award-winning restaurants and iconic attractions, living here means enjoying the best the city has to offer. Its privileged location in The Gulch guarantees unparalleled accessibility and views.",
                        }
                        InfoBlock {
                            title: "Legal",
                            body: "In this section you will find the terms and conditions of our website, as well as our privacy policy. We are committed to protecting your information and ensuring transparency in every interaction, in line with the highest standards in the sector.",
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 mt-16 pt-8 pb-12 md:pb-8 border-t border-gray-800",
                p { class: "text-center text-gray-500", "{copyright_line(year)}" }
            }
        }
    }
}

#[component]
fn InfoBlock(title: &'static str, body: &'static str) -> Element {
    rsx! {
        Reveal {
            style: RevealStyle::new(RevealMotion::Rise),
            class: Some("space-y-4".to_string()),
            h3 { class: "text-xl md:text-2xl font-bold bg-gradient-to-r from-gray-100 to-gray-400 bg-clip-text text-transparent",
                "{title}"
            }
            p { class: "text-sm md:text-base text-gray-300 leading-relaxed", "{body}" }
        }
    }
}

/// The form itself, or the thank-you panel once a send succeeded
#[component]
fn ContactFormBody(
    state: ReadStore<ContactState>,
    on_field_change: EventHandler<(ContactField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let status = state.status().read().clone();

    if let SubmitStatus::Success(message) = &status {
        return rsx! {
            div { class: "p-6 rounded-lg bg-green-500/20 text-green-200 border border-green-500/30",
                p { class: "text-lg font-medium mb-2", "Thank you!" }
                p { class: "text-sm", "{message}" }
            }
        };
    }

    let submit = SubmitStyle::for_sending(status.is_sending());

    rsx! {
        form {
            class: "space-y-4 md:space-y-6",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            FormField { state, field: ContactField::Name, label: "Name",
                FieldInput { state, field: ContactField::Name, kind: "text", on_field_change }
            }
            FormField { state, field: ContactField::Email, label: "Email",
                FieldInput { state, field: ContactField::Email, kind: "email", on_field_change }
            }
            FormField { state, field: ContactField::Phone, label: "Phone",
                FieldInput { state, field: ContactField::Phone, kind: "tel", on_field_change }
            }
            FormField { state, field: ContactField::FloorType, label: "Floor Type",
                FloorTypeSelect { state, on_field_change }
            }
            FormField { state, field: ContactField::Message, label: "Message",
                MessageInput { state, on_field_change }
            }

            if let SubmitStatus::Error(message) = &status {
                div { class: "p-4 rounded-lg bg-red-500/20 text-red-200 border border-red-500/30 text-sm",
                    "{message}"
                }
            }

            Button {
                variant: ButtonVariant::Gradient,
                size: ButtonSize::Block,
                r#type: Some("submit"),
                disabled: status.is_sending(),
                class: Some(submit.state.to_string()),
                onclick: |_| {},
                "{submit.label}"
            }
        }
    }
}

/// DOM id for a field's control, shared by its label
fn field_id(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "name",
        ContactField::Email => "email",
        ContactField::Phone => "phone",
        ContactField::FloorType => "floorType",
        ContactField::Message => "message",
    }
}

fn control_class(state: ReadStore<ContactState>, field: ContactField) -> String {
    let has_error = state.errors().read().contains_key(&field);
    format!(
        "w-full px-4 py-3 bg-white/10 border {} rounded-lg focus:outline-none focus:ring-2 focus:ring-gray-400 text-white",
        FieldStyle::for_error(has_error).border(),
    )
}

/// Label, control and inline error for one field
#[component]
fn FormField(
    state: ReadStore<ContactState>,
    field: ContactField,
    label: &'static str,
    children: Element,
) -> Element {
    let error = state.errors().read().get(&field).copied();

    rsx! {
        div {
            label {
                r#for: field_id(field),
                class: "block text-sm font-medium text-gray-300 mb-2",
                "{label}"
            }
            {children}
            if let Some(message) = error {
                p { class: "mt-1 text-sm text-red-500", "{message}" }
            }
        }
    }
}

#[component]
fn FieldInput(
    state: ReadStore<ContactState>,
    field: ContactField,
    kind: &'static str,
    on_field_change: EventHandler<(ContactField, String)>,
) -> Element {
    let value = state.form().read().value(field).to_string();

    rsx! {
        input {
            r#type: kind,
            id: field_id(field),
            name: field_id(field),
            class: control_class(state, field),
            value: "{value}",
            oninput: move |e| on_field_change.call((field, e.value())),
        }
    }
}

#[component]
fn FloorTypeSelect(
    state: ReadStore<ContactState>,
    on_field_change: EventHandler<(ContactField, String)>,
) -> Element {
    let field = ContactField::FloorType;
    let value = state.form().read().value(field).to_string();

    rsx! {
        select {
            id: field_id(field),
            name: field_id(field),
            class: control_class(state, field),
            value: "{value}",
            onchange: move |e| on_field_change.call((field, e.value())),
            option { value: "", "Select floor type" }
            for floor in FloorType::ALL {
                option {
                    key: "{floor.label()}",
                    value: floor.label(),
                    selected: value == floor.label(),
                    "{floor.label()}"
                }
            }
        }
    }
}

#[component]
fn MessageInput(
    state: ReadStore<ContactState>,
    on_field_change: EventHandler<(ContactField, String)>,
) -> Element {
    let field = ContactField::Message;
    let value = state.form().read().value(field).to_string();

    rsx! {
        textarea {
            id: field_id(field),
            name: field_id(field),
            rows: "4",
            class: control_class(state, field),
            value: "{value}",
            oninput: move |e| on_field_change.call((field, e.value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(
            copyright_line(2026),
            "2026 Black Navy - Eterna Tower Nashville - All rights reserved."
        );
    }

    #[test]
    fn field_ids_match_the_request_keys() {
        assert_eq!(field_id(ContactField::FloorType), "floorType");
        assert_eq!(field_id(ContactField::Email), "email");
    }
}
