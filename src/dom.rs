use crate::core::constants::CONFIG_ELEMENT_ID;
use crate::core::{StyleDecl, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Scroll offset and client height of the root element.
pub fn current_viewport(window: &web::Window) -> Option<Viewport> {
    let height = window.document()?.document_element()?.client_height() as f64;
    let scroll_top = window.page_y_offset().unwrap_or(0.0);
    Some(Viewport::new(scroll_top, height))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("[dom] bad selector '{}'", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn set_styles(element: &web::Element, styles: &[StyleDecl]) {
    let style = if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        el.style()
    } else if let Some(el) = element.dyn_ref::<web::SvgElement>() {
        el.style()
    } else {
        return;
    };
    for decl in styles {
        _ = style.set_property(decl.property, &decl.value);
    }
}

#[inline]
pub fn config_text(document: &web::Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

pub fn add_once_listener(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnOnce() + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        callback.unchecked_ref(),
        &options,
    )
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
