//! Store types for UI state management
//!
//! Page state that the web crate owns and hands to views as `ReadStore`s.
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod contact;

pub use contact::*;
