//! Results page helper: tooltip activation and copy-to-clipboard.
//!
//! DESIGN
//! ======
//! A copy runs in two halves around the clipboard await. [`ResultsPage::begin_copy`]
//! resolves the payload and starts the write; [`ResultsPage::finish_copy`] applies
//! the outcome. The controller is never borrowed across the await, so other
//! handlers (including a pending revert) may run in between.
//!
//! Each acknowledgment arms a fresh revert token. Only the newest token can
//! revert the control, so an older timer firing late is a no-op and the
//! original label captured before the first acknowledgment is preserved.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use std::cell::RefCell;

use crate::config::ResultsConfig;
use crate::consts::{
    COPIED_HTML, COPY_DONE_CLASS, COPY_FAILED_ALERT, COPY_IDLE_CLASS, COPY_REVERT_DELAY_MS, MOUNTED_ATTRIBUTE,
};
use crate::error::UiError;
use crate::surface::{ClipboardWrite, UiSurface};

/// Visual state of the copy control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    /// Showing the acknowledgment until the revert for `token` fires.
    Copied { token: u64, original_html: String },
}

/// Request to call [`ResultsPage::revert`] with `token` after `delay_ms`.
///
/// The host keeps at most one pending timer; arming a new one cancels the old.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTimer {
    pub token: u64,
    pub delay_ms: u32,
}

/// A copy in flight.
pub enum CopyAttempt {
    /// Async clipboard write still pending.
    Pending(ClipboardWrite),
    /// Legacy path, already complete.
    Finished(Result<(), UiError>),
}

pub struct ResultsPage<S: UiSurface> {
    surface: S,
    config: ResultsConfig,
    copy_enabled: bool,
    tooltips: usize,
    state: CopyState,
    last_token: u64,
}

impl<S: UiSurface> ResultsPage<S> {
    /// Activate tooltips and bind the copy control if the page has one.
    ///
    /// A copy control already claimed by an earlier mount is left to that
    /// mount, so repeated mounting never doubles the copy listener.
    pub fn attach(mut surface: S, config: ResultsConfig) -> Self {
        let tooltips = surface.activate_tooltips(&config.tooltip_selector);
        let button = &config.copy_button;
        let copy_enabled = if surface.attribute(button, MOUNTED_ATTRIBUTE).is_some() {
            log::debug!("copy control #{button} already bound");
            false
        } else if surface.has_element(button) {
            surface.set_attribute(button, MOUNTED_ATTRIBUTE, "copy");
            true
        } else {
            log::debug!("copy control #{button} absent; copy not bound");
            false
        };
        Self { surface, config, copy_enabled, tooltips, state: CopyState::Idle, last_token: 0 }
    }

    /// Text to copy: the control's payload attribute, else the trimmed list text.
    pub fn resolve_payload(&self) -> Result<String, UiError> {
        let ResultsConfig { copy_button, missing_list, payload_attribute, .. } = &self.config;
        if let Some(text) = self.surface.attribute(copy_button, payload_attribute)
            && !text.is_empty()
        {
            return Ok(text);
        }
        self.surface
            .text_content(missing_list)
            .map(|text| text.trim().to_owned())
            .ok_or(UiError::EmptyPayload)
    }

    /// Resolve the payload and start whichever clipboard path is available.
    pub fn begin_copy(&mut self) -> Result<CopyAttempt, UiError> {
        if !self.copy_enabled {
            return Err(UiError::MissingElement(self.config.copy_button.clone()));
        }
        let text = self.resolve_payload()?;
        if self.surface.clipboard_available() {
            Ok(CopyAttempt::Pending(self.surface.write_clipboard(&text)))
        } else {
            log::debug!("async clipboard unavailable; using legacy copy");
            Ok(CopyAttempt::Finished(self.surface.legacy_copy(&text)))
        }
    }

    /// Apply a copy outcome. Success returns the revert timer to arm.
    pub fn finish_copy(&mut self, result: Result<(), UiError>) -> Option<RevertTimer> {
        match result {
            Ok(()) => Some(self.acknowledge()),
            Err(err) => {
                log::error!("copy failed: {err}");
                if err.is_copy_failure() {
                    self.surface.alert(COPY_FAILED_ALERT);
                }
                None
            }
        }
    }

    /// Restore the control if `token` is still the newest acknowledgment.
    pub fn revert(&mut self, token: u64) -> bool {
        if !matches!(&self.state, CopyState::Copied { token: current, .. } if *current == token) {
            return false;
        }
        let CopyState::Copied { original_html, .. } = std::mem::take(&mut self.state) else {
            return false;
        };
        let button = &self.config.copy_button;
        self.surface.set_inner_html(button, &original_html);
        self.surface.swap_class(button, COPY_DONE_CLASS, COPY_IDLE_CLASS);
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &CopyState {
        &self.state
    }

    #[must_use]
    pub fn copy_enabled(&self) -> bool {
        self.copy_enabled
    }

    #[must_use]
    pub fn tooltip_count(&self) -> usize {
        self.tooltips
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Internals ---

    fn acknowledge(&mut self) -> RevertTimer {
        let button = &self.config.copy_button;
        let original_html = match std::mem::take(&mut self.state) {
            CopyState::Copied { original_html, .. } => original_html,
            CopyState::Idle => self.surface.inner_html(button).unwrap_or_default(),
        };

        self.surface.set_inner_html(button, COPIED_HTML);
        self.surface.swap_class(button, COPY_IDLE_CLASS, COPY_DONE_CLASS);
        self.surface.show_toast(&self.config.toast);

        self.last_token += 1;
        self.state = CopyState::Copied { token: self.last_token, original_html };
        RevertTimer { token: self.last_token, delay_ms: COPY_REVERT_DELAY_MS }
    }
}

/// Run one copy end to end against a shared controller.
///
/// The borrow is released while the clipboard write is pending.
pub async fn run_copy<S: UiSurface>(page: &RefCell<ResultsPage<S>>) -> Option<RevertTimer> {
    let attempt = page.borrow_mut().begin_copy();
    let result = match attempt {
        Ok(CopyAttempt::Pending(write)) => write.await,
        Ok(CopyAttempt::Finished(result)) => result,
        Err(err) => Err(err),
    };
    page.borrow_mut().finish_copy(result)
}
