#![cfg(target_arch = "wasm32")]
use crate::core::lifecycle;
use crate::core::PageConfig;
use crate::session::Session;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod bootstrap;
pub mod core;
mod dom;
mod page;
mod session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("onvisible starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if lifecycle::waits_for_dom(&document.ready_state()) {
        dom::add_once_listener(&document, "DOMContentLoaded", run)?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = PageConfig::load_or_default(dom::config_text(&document).as_deref());

    // Targets are rewound from here on, so nothing below may drop the session early
    let mut session = Session::new(window.clone(), document.clone(), &config);
    if let Err(e) = session.wire() {
        log::warn!("[session] {:?}", e);
    }
    session.evaluate();
    keep_until_unload(&window, session);

    bootstrap::wire_unloaded(&document);
    bootstrap::load_elements(&document);
    if let Err(e) = bootstrap::schedule_ready(&window, &document, config.ready_delay_ms) {
        log::warn!("[bootstrap] {:?}", e);
    }
    Ok(())
}

/// Hand the session to a `pagehide` listener that drops it once the page is
/// unloaded for good. Pages entering the back/forward cache keep it.
fn keep_until_unload(window: &web::Window, session: Session) {
    let mut slot = Some(session);
    let on_hide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if lifecycle::tears_down_on_hide(ev.persisted()) {
            drop(slot.take());
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    if let Err(e) =
        window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())
    {
        log::warn!("[session] pagehide listener: {:?}", e);
    }
    // Owns the session if the listener could not be attached
    on_hide.forget();
}
