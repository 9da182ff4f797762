//! [`UiSurface`] over the live document.

use futures::FutureExt;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DataTransfer, Document, Element, File, FileList, HtmlButtonElement, HtmlDocument, HtmlElement,
    HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::error::UiError;
use crate::file::FileLike;
use crate::surface::{ClipboardWrite, UiSurface};
use crate::web::bootstrap::{Toast, Tooltip};

impl FileLike for File {
    fn file_name(&self) -> String {
        self.name()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Render a thrown JS value for logs and error messages.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Collect a `FileList` in order.
pub(crate) fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

#[derive(Clone)]
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn from_window() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".into()))?;
        let document = window.document().ok_or_else(|| UiError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_ref::<HtmlElement>().cloned()
    }

    fn file_input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_ref::<HtmlInputElement>().cloned()
    }

    fn exec_copy(&self) -> Result<(), UiError> {
        let html = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| UiError::LegacyCopy("not an HTML document".into()))?;
        match html.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(UiError::LegacyCopy("copy command was refused".into())),
            Err(err) => Err(UiError::LegacyCopy(describe(&err))),
        }
    }

    fn scratch_textarea(&self, text: &str) -> Result<HtmlTextAreaElement, UiError> {
        let area = self
            .document
            .create_element("textarea")
            .map_err(|err| UiError::LegacyCopy(describe(&err)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| UiError::LegacyCopy("textarea cast failed".into()))?;
        area.set_value(text);
        let style = area.style();
        for (property, value) in [("position", "fixed"), ("opacity", "0")] {
            if let Err(err) = style.set_property(property, value) {
                log::warn!("scratch textarea style {property}: {}", describe(&err));
            }
        }
        Ok(area)
    }
}

impl UiSurface for DomSurface {
    type File = File;

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.get_attribute(name)
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.inner_html())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Err(err) = el.set_attribute(name, value) {
            log::warn!("#{id} attribute {name}: {}", describe(&err));
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) {
        if let Some(el) = self.element(id) {
            el.set_inner_html(html);
        }
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) {
        if let Some(el) = self.element(id) {
            el.set_class_name(class_name);
        }
    }

    fn swap_class(&mut self, id: &str, remove: &str, add: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        let classes = el.class_list();
        if let Err(err) = classes.remove_1(remove).and_then(|()| classes.add_1(add)) {
            log::warn!("#{id}: class swap {remove} -> {add} failed: {}", describe(&err));
        }
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        let Some(el) = self.html_element(id) else {
            return;
        };
        if let Err(err) = el.style().set_property(property, value) {
            log::warn!("#{id}: style {property} failed: {}", describe(&err));
        }
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let result = if disabled { el.set_attribute("disabled", "") } else { el.remove_attribute("disabled") };
        if let Err(err) = result {
            log::warn!("#{id}: toggling disabled failed: {}", describe(&err));
        }
    }

    fn input_files(&self, id: &str) -> Vec<File> {
        self.file_input(id)
            .and_then(|input| input.files())
            .map(|list| files_of(&list))
            .unwrap_or_default()
    }

    fn assign_input_file(&mut self, id: &str, file: &File) -> Result<(), UiError> {
        let input = self.file_input(id).ok_or_else(|| UiError::MissingElement(id.to_owned()))?;
        let transfer = DataTransfer::new().map_err(|err| UiError::Dom(describe(&err)))?;
        transfer
            .items()
            .add_with_file(file)
            .map_err(|err| UiError::Dom(describe(&err)))?;
        input.set_files(transfer.files().as_ref());
        Ok(())
    }

    fn open_file_picker(&mut self, id: &str) -> Result<(), UiError> {
        let input = self.html_element(id).ok_or_else(|| UiError::MissingElement(id.to_owned()))?;
        input.click();
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert suppressed: {}", describe(&err));
        }
    }

    fn activate_tooltips(&mut self, selector: &str) -> usize {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::error!("tooltip selector {selector}: {}", describe(&err));
                return 0;
            }
        };
        let mut activated = 0;
        for index in 0..nodes.length() {
            let Some(el) = nodes.item(index).and_then(|node| node.dyn_ref::<Element>().cloned()) else {
                continue;
            };
            match Tooltip::get_or_create_instance(&el) {
                Ok(_) => activated += 1,
                Err(err) => log::error!("tooltip activation failed: {}", describe(&err)),
            }
        }
        activated
    }

    fn show_toast(&mut self, id: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        match Toast::get_or_create_instance(&el) {
            Ok(toast) => toast.show(),
            Err(err) => log::error!("toast #{id} unavailable: {}", describe(&err)),
        }
    }

    fn clipboard_available(&self) -> bool {
        let present = Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .map_or(false, |value| !value.is_undefined() && !value.is_null());
        present && self.window.is_secure_context()
    }

    fn write_clipboard(&mut self, text: &str) -> ClipboardWrite {
        let promise = self.window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .map(|result| result.map(|_| ()).map_err(|err| UiError::Clipboard(describe(&err))))
            .boxed_local()
    }

    fn legacy_copy(&mut self, text: &str) -> Result<(), UiError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| UiError::LegacyCopy("document has no body".into()))?;
        let area = self.scratch_textarea(text)?;
        body.append_child(&area)
            .map_err(|err| UiError::LegacyCopy(describe(&err)))?;

        if let Err(err) = area.focus() {
            log::debug!("scratch textarea focus: {}", describe(&err));
        }
        area.select();
        let outcome = self.exec_copy();

        if let Err(err) = body.remove_child(&area) {
            log::warn!("scratch textarea not removed: {}", describe(&err));
        }
        outcome
    }
}
