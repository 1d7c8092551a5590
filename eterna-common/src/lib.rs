//! eterna-common - Framework-free page state for the Eterna Tower site
//!
//! Everything here is plain data and pure transitions: the unit listing and its
//! filters, lightbox selection, pan bounds, carousel cycling, scroll-driven
//! panel fades, floating-nav selection and contact form validation. The view
//! layer in `eterna-ui` owns the signals and calls into these types.

pub mod carousel;
pub mod contact;
pub mod drag;
pub mod filter;
pub mod gallery;
pub mod lightbox;
pub mod nav;
pub mod scroll;
pub mod unit;

pub use carousel::CarouselState;
pub use contact::{
    ContactField, ContactForm, ContactRequest, FieldErrors, FloorType, SubmitStatus,
    FAILURE_MESSAGE,
};
pub use drag::{DragBounds, PanOffset, PanState, Size, ZOOM_SCALE};
pub use filter::{filter_units, FilterKey, FilterState};
pub use gallery::GalleryImage;
pub use lightbox::{cycle_index, Direction, LightboxState};
pub use nav::{next_active_section, IntersectionSample, NavSection, ACTIVE_RATIO, NAV_SECTIONS};
pub use scroll::{panel_opacity, scroll_progress};
pub use unit::{Partner, PartnerKind, Unit, PARTNERS, UNITS};
