use crate::api;
use crate::config::SiteConfig;
use dioxus::prelude::*;
use eterna_common::{ContactField, SubmitStatus, UNITS};
use eterna_ui::stores::{ContactState, ContactStateStoreExt};
use eterna_ui::{
    AmenitiesSection, AvailabilityPanel, ContactSectionView, FloatingNav, HeroCarousel,
    ResidencesSection, SplitScreenSection, VideoSection,
};

/// The whole site, top to bottom
#[component]
pub fn Home() -> Element {
    let config: SiteConfig = use_context();
    let mut contact = use_store(ContactState::default);

    let on_field_change = move |(field, value): (ContactField, String)| {
        contact.write().edit(field, value);
    };

    let on_submit = move |_: ()| {
        if contact.status().read().is_sending() {
            return;
        }

        let validated = contact.form().read().to_request();
        let request = match validated {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!("Contact form has {} invalid fields", errors.len());
                contact.errors().set(errors);
                return;
            }
        };

        contact.errors().set(Default::default());
        contact.status().set(SubmitStatus::Sending);
        let config = config.clone();

        spawn(async move {
            match api::send_contact(&config, &request).await {
                Ok(()) => {
                    tracing::info!("Contact request sent for {}", request.floor_type);
                    contact.status().set(SubmitStatus::success(&request.floor_type));
                    contact.write().reset_form();
                }
                Err(e) => {
                    tracing::warn!("Contact request failed: {e}");
                    contact.status().set(SubmitStatus::failure());
                }
            }
        });
    };

    rsx! {
        main { class: "bg-black text-white",
            FloatingNav {}
            HeroCarousel {}
            AmenitiesSection {}
            SplitScreenSection {}
            VideoSection {}
            AvailabilityPanel { units: UNITS, brochure_url: crate::BROCHURE_PDF.to_string() }
            ResidencesSection {}
            ContactSectionView { state: contact, on_field_change, on_submit }
        }
    }
}
