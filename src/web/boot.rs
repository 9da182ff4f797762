//! WASM entry points and DOM event wiring.
//!
//! Each controller lives in an `Rc<RefCell<_>>` shared by its listeners.
//! Handlers use `try_borrow_mut` because `input.click()` dispatches a
//! synchronous click that can bubble back into the drop area's own handler.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Element, Event, EventTarget};

use crate::config::{self, ResultsConfig, UploadConfig};
use crate::consts::{FILE_INPUT_ID, PICKER_GLOBAL};
use crate::error::UiError;
use crate::results::{ResultsPage, run_copy};
use crate::surface::open_picker;
use crate::upload::{SubmitDecision, UploadWidget};
use crate::web::dom::{DomSurface, describe, files_of};

type SharedWidget = Rc<RefCell<UploadWidget<DomSurface>>>;

/// Module start: install logging, then mount controllers once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {err}")));
    }
    if let Err(err) = install_picker_global() {
        log::error!("{PICKER_GLOBAL} not installed: {err}");
    }
    when_dom_ready(|| {
        let defaults = UploadConfig::default();
        if page_has_any(&defaults.required_ids()) {
            report("upload widget", mount_upload(defaults));
        }
        report("results page", mount_results(ResultsConfig::default()));
    });
}

/// Open the upload file picker. Exposed as `window.selecionarArquivo`, the
/// name the upload template's inline `onclick` calls.
#[wasm_bindgen(js_name = selecionarArquivo)]
pub fn select_file() {
    let result = DomSurface::from_window().and_then(|mut surface| open_picker(&mut surface, FILE_INPUT_ID));
    if let Err(err) = result {
        log::error!("file picker unavailable: {err}");
    }
}

/// Publish [`select_file`] on `window` so inline handlers resolve it without
/// going through the module's export object.
fn install_picker_global() -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".into()))?;
    let picker = Closure::wrap(Box::new(select_file) as Box<dyn Fn()>);
    let installed = js_sys::Reflect::set(&window, &JsValue::from_str(PICKER_GLOBAL), picker.as_ref())
        .map_err(|err| UiError::Dom(describe(&err)))?;
    if !installed {
        return Err(UiError::Dom("window property is read-only".into()));
    }
    picker.forget();
    Ok(())
}

/// Mount the upload widget against custom element ids (JSON, camelCase keys).
///
/// A form already claimed by the automatic mount is refused with a logged
/// error rather than bound twice.
#[wasm_bindgen(js_name = mountUploadWidget)]
pub fn mount_upload_widget(config_json: Option<String>) {
    let result = config::from_json(config_json.as_deref()).and_then(mount_upload);
    report("upload widget", result);
}

/// Mount the results helper against custom element ids (JSON, camelCase keys).
///
/// Tooltips are re-activated idempotently. A copy control bound by an earlier
/// mount keeps its single listener.
#[wasm_bindgen(js_name = mountResultsPage)]
pub fn mount_results_page(config_json: Option<String>) {
    let result = config::from_json(config_json.as_deref()).and_then(mount_results);
    report("results page", result);
}

// --- Upload page ---

pub fn mount_upload(config: UploadConfig) -> Result<(), UiError> {
    let surface = DomSurface::from_window()?;
    let document = surface.document().clone();
    let widget: SharedWidget = Rc::new(RefCell::new(UploadWidget::attach(surface, config.clone())?));
    let lookup = |id: &str| document.get_element_by_id(id).ok_or_else(|| UiError::MissingElement(id.to_owned()));

    let input = lookup(&config.file_input)?;
    listen(&input, "change", with_widget(&widget, |widget, _event| {
        if let Some(selection) = widget.on_input_change() {
            log::debug!("file picked: {selection:?}");
        }
    }))?;

    let area = lookup(&config.drop_area)?;
    listen(&area, "click", with_widget(&widget, |widget, event| {
        widget.on_area_click(target_in_button(event));
    }))?;
    listen(&area, "dragover", with_widget(&widget, |widget, event| {
        event.prevent_default();
        widget.on_drag_over();
    }))?;
    listen(&area, "dragleave", with_widget(&widget, |widget, event| {
        event.prevent_default();
        widget.on_drag_leave();
    }))?;
    listen(&area, "drop", with_widget(&widget, |widget, event| {
        event.prevent_default();
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files())
            .map(|list| files_of(&list))
            .unwrap_or_default();
        match widget.on_drop(files) {
            Ok(Some(selection)) => log::debug!("file dropped: {selection:?}"),
            Ok(None) => {}
            Err(err) => log::warn!("drop ignored: {err}"),
        }
    }))?;

    let form = lookup(&config.form)?;
    listen(&form, "submit", with_widget(&widget, |widget, event| match widget.on_submit() {
        Ok(SubmitDecision::Proceed) => {}
        Ok(SubmitDecision::Blocked) => event.prevent_default(),
        Err(err) => {
            log::warn!("submit blocked: {err}");
            event.prevent_default();
        }
    }))?;

    log::debug!("upload widget mounted on #{}", config.form);
    Ok(())
}

/// Wrap a widget handler so a re-entrant dispatch is dropped instead of
/// panicking on a double borrow.
fn with_widget(
    widget: &SharedWidget,
    handler: impl Fn(&mut UploadWidget<DomSurface>, &Event) + 'static,
) -> impl FnMut(Event) + 'static {
    let widget = Rc::clone(widget);
    move |event: Event| {
        let Ok(mut widget) = widget.try_borrow_mut() else {
            log::debug!("re-entrant {} ignored", event.type_());
            return;
        };
        handler(&mut widget, &event);
    }
}

fn target_in_button(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<Element>() else {
        return false;
    };
    el.tag_name().eq_ignore_ascii_case("button") || matches!(el.closest("button"), Ok(Some(_)))
}

// --- Results page ---

pub fn mount_results(config: ResultsConfig) -> Result<(), UiError> {
    let surface = DomSurface::from_window()?;
    let document = surface.document().clone();
    let page = ResultsPage::attach(surface, config.clone());
    log::debug!("{} tooltip(s) activated", page.tooltip_count());
    if !page.copy_enabled() {
        return Ok(());
    }

    let button = document
        .get_element_by_id(&config.copy_button)
        .ok_or_else(|| UiError::MissingElement(config.copy_button.clone()))?;
    let page = Rc::new(RefCell::new(page));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();

    listen(&button, "click", move |_event: Event| {
        let page = Rc::clone(&page);
        let pending = Rc::clone(&pending);
        wasm_bindgen_futures::spawn_local(async move {
            let Some(timer) = run_copy(&page).await else {
                return;
            };
            let page_for_revert = Rc::clone(&page);
            let timeout = Timeout::new(timer.delay_ms, move || {
                if !page_for_revert.borrow_mut().revert(timer.token) {
                    log::debug!("stale revert {} skipped", timer.token);
                }
            });
            // Dropping the previous handle cancels its timer.
            *pending.borrow_mut() = Some(timeout);
        });
    })
}

// --- Plumbing ---

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| UiError::Dom(format!("{event} listener: {}", describe(&err))))?;
    // Listeners live for the page.
    closure.forget();
    Ok(())
}

fn when_dom_ready(init: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        init();
        return;
    }
    let callback = Closure::once_into_js(init);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("DOMContentLoaded listener: {}", describe(&err));
    }
}

fn page_has_any(ids: &[&str]) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    ids.iter().any(|id| document.get_element_by_id(id).is_some())
}

fn report(what: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::error!("{what} not mounted: {err}");
    }
}
