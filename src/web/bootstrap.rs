//! Bindings to the page's Bootstrap bundle (`window.bootstrap`).
//!
//! Instances come from `getOrCreateInstance`, so activating an element twice
//! reuses the widget Bootstrap already attached. Calls are `catch` so a page
//! without the bundle degrades to a logged error instead of a thrown
//! `ReferenceError`.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(catch, static_method_of = Tooltip, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    pub fn get_or_create_instance(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(catch, static_method_of = Toast, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    pub fn get_or_create_instance(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}
