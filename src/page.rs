use crate::core::constants::trigger_selector;
use crate::core::{Band, EffectAction, EffectPage, StyleDecl, Surface, Viewport};
use crate::dom;
use web_sys as web;

/// The live document as seen by the evaluator and the effect registry.
pub struct WebPage {
    document: web::Document,
    trigger_selector: String,
}

impl WebPage {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            trigger_selector: trigger_selector(),
        }
    }
}

impl Surface for WebPage {
    type Element = web::Element;
    type Action = EffectAction;

    fn measure(&self, viewport: &Viewport, element: &web::Element) -> Option<Band> {
        // Detached nodes report an all-zero rect
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(Band::from_client_rect(viewport, rect.top(), rect.height()))
    }

    fn perform(&mut self, target: &web::Element, action: &EffectAction) {
        dom::set_styles(target, &action.styles());
    }
}

impl EffectPage for WebPage {
    type Element = web::Element;

    fn select_all(&self, selector: &str) -> Vec<web::Element> {
        dom::query_all(&self.document, selector)
    }

    fn trigger_for(&self, element: &web::Element) -> web::Element {
        element
            .closest(&self.trigger_selector)
            .ok()
            .flatten()
            .unwrap_or_else(|| element.clone())
    }

    fn set_styles(&self, element: &web::Element, styles: &[StyleDecl]) {
        dom::set_styles(element, styles);
    }
}
