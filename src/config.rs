//! Element-id configuration for both controllers.
//!
//! Defaults match the server-rendered templates. Pages with different markup
//! pass a JSON object of overrides; unknown keys are rejected and missing keys
//! keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::consts;
use crate::error::UiError;

/// Element ids the upload widget binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct UploadConfig {
    pub file_input: String,
    pub drop_area: String,
    pub file_info: String,
    pub submit_button: String,
    pub form: String,
    pub file_name: String,
    pub file_size: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            file_input: consts::FILE_INPUT_ID.to_owned(),
            drop_area: consts::DROP_AREA_ID.to_owned(),
            file_info: consts::FILE_INFO_ID.to_owned(),
            submit_button: consts::SUBMIT_BUTTON_ID.to_owned(),
            form: consts::UPLOAD_FORM_ID.to_owned(),
            file_name: consts::FILE_NAME_ID.to_owned(),
            file_size: consts::FILE_SIZE_ID.to_owned(),
        }
    }
}

impl UploadConfig {
    /// Ids that must be present for the widget to mount, in lookup order.
    #[must_use]
    pub fn required_ids(&self) -> [&str; 5] {
        [
            self.file_input.as_str(),
            self.drop_area.as_str(),
            self.file_info.as_str(),
            self.submit_button.as_str(),
            self.form.as_str(),
        ]
    }
}

/// Element ids and selectors the results page binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResultsConfig {
    pub copy_button: String,
    pub missing_list: String,
    pub toast: String,
    pub tooltip_selector: String,
    pub payload_attribute: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            copy_button: consts::COPY_BUTTON_ID.to_owned(),
            missing_list: consts::MISSING_LIST_ID.to_owned(),
            toast: consts::TOAST_ID.to_owned(),
            tooltip_selector: consts::TOOLTIP_SELECTOR.to_owned(),
            payload_attribute: consts::PAYLOAD_ATTRIBUTE.to_owned(),
        }
    }
}

/// Parse an optional JSON override; `None` or blank input yields the defaults.
pub fn from_json<T: Default + DeserializeOwned>(raw: Option<&str>) -> Result<T, UiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
