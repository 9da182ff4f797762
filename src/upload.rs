//! Upload page controller: file preview, drop zone, and submit guard.
//!
//! ARCHITECTURE
//! ============
//! All three selection channels (input change, click-to-open, drop) funnel
//! into [`UploadWidget::select`], so the info panel and submit control always
//! reflect the same rules. The widget owns the one-way submit latch; a page
//! reload is the only reset.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::config::UploadConfig;
use crate::consts::{
    DROP_ACTIVE_BACKGROUND, DROP_ACTIVE_BORDER, DROP_IDLE_BACKGROUND, DROP_IDLE_BORDER, MOUNTED_ATTRIBUTE,
    NO_FILE_ALERT, OVERSIZE_HTML, PANEL_ERROR_CLASS, PANEL_INFO_CLASS, PROCESSING_HTML, WRONG_TYPE_ALERT,
};
use crate::error::UiError;
use crate::file::{SelectedFile, has_accepted_extension};
use crate::surface::UiSurface;

/// How a selection was rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Within the size limit; submit enabled.
    Accepted(SelectedFile),
    /// Over the size limit; submit disabled until another file is chosen.
    Oversized(SelectedFile),
}

/// Whether the native form submission may continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    /// The form was already submitted once; this attempt is dropped silently.
    Blocked,
}

pub struct UploadWidget<S: UiSurface> {
    surface: S,
    config: UploadConfig,
    submitted: bool,
    selected: Option<SelectedFile>,
}

impl<S: UiSurface> UploadWidget<S> {
    /// Bind to the page. Fails with the first required id that is absent, or
    /// if another widget already owns the form.
    pub fn attach(mut surface: S, config: UploadConfig) -> Result<Self, UiError> {
        if let Some(missing) = config.required_ids().into_iter().find(|id| !surface.has_element(id)) {
            return Err(UiError::MissingElement(missing.to_owned()));
        }
        if surface.attribute(&config.form, MOUNTED_ATTRIBUTE).is_some() {
            return Err(UiError::AlreadyMounted(config.form.clone()));
        }
        surface.set_attribute(&config.form, MOUNTED_ATTRIBUTE, "upload");
        Ok(Self { surface, config, submitted: false, selected: None })
    }

    // --- Event handlers ---

    /// The file input changed. Only the first file is considered.
    pub fn on_input_change(&mut self) -> Option<Selection> {
        let first = self.surface.input_files(&self.config.file_input).into_iter().next()?;
        Some(self.select(SelectedFile::from_file(&first)))
    }

    /// A click landed in the drop area. Clicks on (or inside) a button are
    /// left to that button's own handler. Returns whether the picker opened.
    pub fn on_area_click(&mut self, target_in_button: bool) -> bool {
        if target_in_button {
            return false;
        }
        match self.surface.open_file_picker(&self.config.file_input) {
            Ok(()) => true,
            Err(err) => {
                log::error!("could not open file picker: {err}");
                false
            }
        }
    }

    pub fn on_drag_over(&mut self) {
        self.paint_drop_area(true);
    }

    pub fn on_drag_leave(&mut self) {
        self.paint_drop_area(false);
    }

    /// Files were dropped on the area.
    ///
    /// An empty drop is ignored. A first file without the accepted extension
    /// is rejected with an alert and leaves the input untouched; otherwise the
    /// file is moved into the input so native submission carries it.
    pub fn on_drop(&mut self, files: Vec<S::File>) -> Result<Option<Selection>, UiError> {
        self.paint_drop_area(false);
        let Some(file) = files.into_iter().next() else {
            return Ok(None);
        };
        let meta = SelectedFile::from_file(&file);
        if !has_accepted_extension(&meta.name) {
            self.surface.alert(WRONG_TYPE_ALERT);
            return Err(UiError::InvalidFileType(meta.name));
        }
        self.surface.assign_input_file(&self.config.file_input, &file)?;
        Ok(Some(self.select(meta)))
    }

    /// The form is about to submit. Any outcome other than `Ok(Proceed)`
    /// must cancel the native submission.
    ///
    /// # Errors
    ///
    /// [`UiError::NoFileSelected`] when the input is empty; the user has
    /// already been alerted and the latch stays open.
    pub fn on_submit(&mut self) -> Result<SubmitDecision, UiError> {
        if self.submitted {
            log::debug!("duplicate submit suppressed");
            return Ok(SubmitDecision::Blocked);
        }
        if self.surface.input_files(&self.config.file_input).is_empty() {
            self.surface.alert(NO_FILE_ALERT);
            return Err(UiError::NoFileSelected);
        }

        self.submitted = true;
        let submit = &self.config.submit_button;
        self.surface.set_inner_html(submit, PROCESSING_HTML);
        self.surface.set_disabled(submit, true);
        Ok(SubmitDecision::Proceed)
    }

    // --- Queries ---

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Internals ---

    fn select(&mut self, file: SelectedFile) -> Selection {
        let UploadConfig { file_info, submit_button, file_name, file_size, .. } = &self.config;

        self.surface.set_text(file_name, &file.name);
        self.surface.set_text(file_size, &file.size_label());
        self.surface.set_style(file_info, "display", "block");

        let selection = if file.is_oversized() {
            self.surface.set_class_name(file_info, PANEL_ERROR_CLASS);
            self.surface.set_inner_html(file_info, OVERSIZE_HTML);
            self.surface.set_disabled(submit_button, true);
            Selection::Oversized(file.clone())
        } else {
            self.surface.set_class_name(file_info, PANEL_INFO_CLASS);
            self.surface.set_inner_html(file_info, &file.info_html());
            self.surface.set_disabled(submit_button, false);
            Selection::Accepted(file.clone())
        };
        self.selected = Some(file);
        selection
    }

    fn paint_drop_area(&mut self, active: bool) {
        let (border, background) = if active {
            (DROP_ACTIVE_BORDER, DROP_ACTIVE_BACKGROUND)
        } else {
            (DROP_IDLE_BORDER, DROP_IDLE_BACKGROUND)
        };
        let area = &self.config.drop_area;
        self.surface.set_style(area, "border-color", border);
        self.surface.set_style(area, "background-color", background);
    }
}
