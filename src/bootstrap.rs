use crate::core::constants::{
    ATTR_AUTOFOCUS, ATTR_DEFERRED_SRC, ATTR_INITIAL_SRC, ATTR_UNLOADED, CLASS_LOADING, CLASS_READY,
    EVENT_LOAD_ELEMENTS,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Activate deferred media: iframe sources, autoplay video, autofocus field.
pub fn load_elements(document: &web::Document) {
    activate_iframes(document);
    start_videos(document);
    focus_marked_field(document);
}

fn activate_iframes(document: &web::Document) {
    let selector = format!("iframe[{}]", ATTR_DEFERRED_SRC);
    let mut count = 0;
    for el in dom::query_all(document, &selector) {
        let Some(src) = el.get_attribute(ATTR_DEFERRED_SRC) else {
            continue;
        };
        if let Some(iframe) = el.dyn_ref::<web::HtmlIFrameElement>() {
            iframe.set_src(&src);
        }
        _ = el.set_attribute(ATTR_INITIAL_SRC, &src);
        _ = el.remove_attribute(ATTR_DEFERRED_SRC);
        count += 1;
    }
    if count > 0 {
        log::debug!("[bootstrap] activated {} iframe(s)", count);
    }
}

fn start_videos(document: &web::Document) {
    for el in dom::query_all(document, "video[autoplay]") {
        let Ok(media) = el.dyn_into::<web::HtmlMediaElement>() else {
            continue;
        };
        if !media.paused() {
            continue;
        }
        match media.play() {
            Ok(promise) => spawn_local(async move {
                // Browsers reject autoplay without a user gesture
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[bootstrap] autoplay rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("[bootstrap] play failed: {:?}", e),
        }
    }
}

fn focus_marked_field(document: &web::Document) {
    let marker = format!("[{}=\"1\"]", ATTR_AUTOFOCUS);
    let field = document
        .query_selector(&marker)
        .ok()
        .flatten()
        .and_then(|container| container.query_selector("input, select, textarea").ok().flatten())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(field) = field {
        _ = field.focus();
    }
}

/// Clear the unloaded marker once the host dispatches `loadelements` on it.
pub fn wire_unloaded(document: &web::Document) {
    let selector = format!("[{}]", ATTR_UNLOADED);
    for el in dom::query_all(document, &selector) {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = target.remove_attribute(ATTR_UNLOADED);
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback(
            EVENT_LOAD_ELEMENTS,
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }
}

/// Swap the body's loading class for the ready class after `delay_ms`.
pub fn schedule_ready(
    window: &web::Window,
    document: &web::Document,
    delay_ms: u32,
) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let callback = Closure::once_into_js(move || {
        let classes = body.class_list();
        _ = classes.remove_1(CLASS_LOADING);
        _ = classes.add_1(CLASS_READY);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
