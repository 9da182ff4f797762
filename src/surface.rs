//! The browser capabilities the controllers depend on.
//!
//! Controllers never touch `document` or `window` directly. They address
//! elements by id through [`UiSurface`], which the `web` module implements
//! with web-sys and the test suite implements with an in-memory fake.

use futures::future::LocalBoxFuture;

use crate::error::UiError;
use crate::file::FileLike;

/// Pending async clipboard write. `'static` so callers can await it without
/// holding a borrow of the controller.
pub type ClipboardWrite = LocalBoxFuture<'static, Result<(), UiError>>;

/// Element access plus the page-level affordances (alerts, clipboard,
/// toolkit widgets) used by the upload widget and results page.
///
/// Setters on a missing id are no-ops; controllers check required ids once
/// at attach time.
pub trait UiSurface {
    /// Native file handle carried by file inputs and drop events.
    type File: FileLike;

    // --- Queries ---

    fn has_element(&self, id: &str) -> bool;
    fn text_content(&self, id: &str) -> Option<String>;
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    fn inner_html(&self, id: &str) -> Option<String>;

    // --- Mutations ---

    fn set_text(&mut self, id: &str, text: &str);
    fn set_attribute(&mut self, id: &str, name: &str, value: &str);
    fn set_inner_html(&mut self, id: &str, html: &str);
    fn set_class_name(&mut self, id: &str, class_name: &str);
    /// Remove one class token and add another.
    fn swap_class(&mut self, id: &str, remove: &str, add: &str);
    fn set_style(&mut self, id: &str, property: &str, value: &str);
    fn set_disabled(&mut self, id: &str, disabled: bool);

    // --- File input ---

    /// Files currently held by the file input `id`, in selection order.
    fn input_files(&self, id: &str) -> Vec<Self::File>;
    /// Replace the input's file list with exactly `file`.
    fn assign_input_file(&mut self, id: &str, file: &Self::File) -> Result<(), UiError>;
    fn open_file_picker(&mut self, id: &str) -> Result<(), UiError>;

    // --- Page affordances ---

    fn alert(&mut self, message: &str);
    /// Activate toolkit tooltips on every match; returns how many were activated.
    fn activate_tooltips(&mut self, selector: &str) -> usize;
    fn show_toast(&mut self, id: &str);

    // --- Clipboard ---

    /// Async clipboard present and the page is a secure context.
    fn clipboard_available(&self) -> bool;
    fn write_clipboard(&mut self, text: &str) -> ClipboardWrite;
    /// Off-screen textarea plus `execCommand("copy")`. The scratch element is
    /// removed before returning, on success and failure alike.
    fn legacy_copy(&mut self, text: &str) -> Result<(), UiError>;
}

/// Open the picker for `input_id` without a mounted widget.
///
/// Backs the page-global fallback used by markup that cannot bind listeners.
pub fn open_picker<S: UiSurface>(surface: &mut S, input_id: &str) -> Result<(), UiError> {
    if !surface.has_element(input_id) {
        return Err(UiError::MissingElement(input_id.to_owned()));
    }
    surface.open_file_picker(input_id)
}
