//! In-memory [`UiSurface`] used by the controller tests.

use std::collections::HashMap;

use futures::future;

use crate::error::UiError;
use crate::file::SelectedFile;
use crate::results::RevertTimer;
use crate::surface::{ClipboardWrite, UiSurface};

#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    pub text: String,
    pub html: String,
    pub classes: Vec<String>,
    pub styles: HashMap<String, String>,
    pub attributes: HashMap<String, String>,
    pub disabled: bool,
    pub files: Vec<SelectedFile>,
}

/// Behavior of the async clipboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipboardMode {
    #[default]
    Available,
    Rejects,
    Unavailable,
}

#[derive(Debug, Default)]
pub struct FakeSurface {
    pub elements: HashMap<String, FakeElement>,
    pub alerts: Vec<String>,
    pub pickers_opened: Vec<String>,
    pub tooltip_selectors: Vec<String>,
    pub tooltip_matches: usize,
    pub toasts: Vec<String>,
    pub clipboard_mode: ClipboardMode,
    pub clipboard: Option<String>,
    pub legacy_fails: bool,
    pub legacy_copies: Vec<String>,
    pub scratch_elements: usize,
    pub fail_assign: bool,
}

impl FakeSurface {
    #[must_use]
    pub fn with_ids(ids: &[&str]) -> Self {
        let mut surface = Self::default();
        for id in ids {
            surface.add(id);
        }
        surface
    }

    pub fn add(&mut self, id: &str) -> &mut FakeElement {
        self.elements.entry(id.to_owned()).or_default()
    }

    #[must_use]
    pub fn el(&self, id: &str) -> FakeElement {
        self.elements.get(id).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn style(&self, id: &str, property: &str) -> Option<String> {
        self.elements.get(id)?.styles.get(property).cloned()
    }
}

impl UiSurface for FakeSurface {
    type File = SelectedFile;

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|el| el.text.clone())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|el| el.html.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.text = text.to_owned();
        }
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.html = html.to_owned();
        }
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.classes = class_name.split_whitespace().map(str::to_owned).collect();
        }
    }

    fn swap_class(&mut self, id: &str, remove: &str, add: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.classes.retain(|c| c != remove);
            if !el.classes.iter().any(|c| c == add) {
                el.classes.push(add.to_owned());
            }
        }
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(el) = self.elements.get_mut(id) {
            el.disabled = disabled;
        }
    }

    fn input_files(&self, id: &str) -> Vec<SelectedFile> {
        self.elements.get(id).map(|el| el.files.clone()).unwrap_or_default()
    }

    fn assign_input_file(&mut self, id: &str, file: &SelectedFile) -> Result<(), UiError> {
        if self.fail_assign {
            return Err(UiError::Dom("DataTransfer unsupported".into()));
        }
        let el = self
            .elements
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement(id.to_owned()))?;
        el.files = vec![file.clone()];
        Ok(())
    }

    fn open_file_picker(&mut self, id: &str) -> Result<(), UiError> {
        self.pickers_opened.push(id.to_owned());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn activate_tooltips(&mut self, selector: &str) -> usize {
        self.tooltip_selectors.push(selector.to_owned());
        self.tooltip_matches
    }

    fn show_toast(&mut self, id: &str) {
        if self.elements.contains_key(id) {
            self.toasts.push(id.to_owned());
        }
    }

    fn clipboard_available(&self) -> bool {
        self.clipboard_mode != ClipboardMode::Unavailable
    }

    fn write_clipboard(&mut self, text: &str) -> ClipboardWrite {
        let result = match self.clipboard_mode {
            ClipboardMode::Available => {
                self.clipboard = Some(text.to_owned());
                Ok(())
            }
            ClipboardMode::Rejects => Err(UiError::Clipboard("NotAllowedError".into())),
            ClipboardMode::Unavailable => Err(UiError::Clipboard("navigator.clipboard undefined".into())),
        };
        Box::pin(future::ready(result))
    }

    fn legacy_copy(&mut self, text: &str) -> Result<(), UiError> {
        self.scratch_elements += 1;
        let result = if self.legacy_fails {
            Err(UiError::LegacyCopy("copy command was refused".into()))
        } else {
            self.legacy_copies.push(text.to_owned());
            Ok(())
        };
        self.scratch_elements -= 1;
        result
    }
}

/// Virtual clock holding at most one pending revert, replaced on each arm the
/// way the browser host replaces its `Timeout`.
#[derive(Debug, Default)]
pub struct FakeClock {
    now_ms: u64,
    pending: Option<(u64, u64)>,
}

impl FakeClock {
    pub fn arm(&mut self, timer: RevertTimer) {
        self.pending = Some((self.now_ms + u64::from(timer.delay_ms), timer.token));
    }

    /// Move time forward; returns the token of a timer that came due.
    pub fn advance(&mut self, ms: u64) -> Option<u64> {
        self.now_ms += ms;
        match self.pending {
            Some((due, token)) if due <= self.now_ms => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}
