//! Browser bindings, compiled only with the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`dom::DomSurface`] implements [`crate::surface::UiSurface`] with web-sys;
//! [`boot`] attaches the controllers to DOM events and exports the WASM entry
//! points; [`bootstrap`] binds the Bootstrap tooltip and toast widgets the
//! server templates load.

pub mod boot;
pub mod bootstrap;
pub mod dom;

pub use boot::{mount_results, mount_upload};
pub use dom::DomSurface;
