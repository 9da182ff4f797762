//! # analyzer-ui
//!
//! Browser-side controllers for the missing-items analyzer's server-rendered
//! pages, compiled to WebAssembly.
//!
//! The upload page gets drag-and-drop, an immediate size/extension preview,
//! and a double-submit guard. The results page gets tooltip activation and a
//! copy-to-clipboard button with a legacy fallback. The server stays the
//! authority for validation; everything here is advisory.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`upload`] | [`upload::UploadWidget`]: selection preview, drop zone, submit latch |
//! | [`results`] | [`results::ResultsPage`]: tooltips and the copy state machine |
//! | [`surface`] | [`surface::UiSurface`], the browser capability both controllers use |
//! | [`file`] | Upload candidate model and advisory checks |
//! | [`config`] | Element ids, defaulting to the server templates |
//! | [`error`] | [`error::UiError`] |
//! | [`consts`] | Limits, delays, classes, and user-facing text |
//! | `web` | web-sys surface and event wiring (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod error;
pub mod file;
pub mod results;
pub mod surface;
pub mod upload;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod testing;
