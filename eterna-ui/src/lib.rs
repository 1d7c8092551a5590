//! eterna-ui - View components for the Eterna Tower site
//!
//! Contains the section views, stores, style descriptors and browser
//! subscription guards. Network access lives in the web crate; views here
//! report user intent through event handlers.

pub mod components;
pub mod content;
pub mod hooks;
pub mod stores;
pub mod style;
pub mod wasm_utils;

pub use components::*;
