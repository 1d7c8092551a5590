//! Shared UI components

pub mod amenities;
pub mod availability;
pub mod button;
pub mod contact;
pub mod floating_nav;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod modal;
pub mod residences;
pub mod reveal;
pub mod split_screen;
pub mod video;

pub use amenities::AmenitiesSection;
pub use availability::{AvailabilityPanel, BROCHURE_FILE_NAME};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton, GlowHalo, HaloIconButton};
pub use contact::{copyright_line, ContactSectionView};
pub use floating_nav::FloatingNav;
pub use hero::{HeroCarousel, HERO_ID};
pub use icons::{
    BuildingIcon, CameraIcon, ChevronLeftIcon, ChevronRightIcon, MailIcon, MapPinIcon,
    PaletteIcon, PenToolIcon, PhoneIcon, XIcon,
};
pub use lightbox::ImageLightbox;
pub use modal::Modal;
pub use residences::ResidencesSection;
pub use reveal::Reveal;
pub use split_screen::SplitScreenSection;
pub use video::VideoSection;
