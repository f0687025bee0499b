use crate::core::geometry::{Mode, Rule};
use crate::core::{apply_effect, Debounce, EffectAction, Evaluator, PageConfig};
use crate::dom::{self, Listener};
use crate::page::WebPage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedEvaluator = Rc<RefCell<Evaluator<web::Element, EffectAction>>>;
type SharedPage = Rc<RefCell<WebPage>>;
type SharedDebounce = Rc<RefCell<Debounce<i32>>>;

/// Owns the evaluator for one page lifetime together with the scroll/resize
/// listeners driving it. Dropping the session detaches everything.
pub struct Session {
    window: web::Window,
    evaluator: SharedEvaluator,
    page: SharedPage,
    resize: SharedDebounce,
    // Reused for every resize timer; superseded timers are cleared, never leaked
    on_resize_timer: Rc<Closure<dyn FnMut()>>,
    listeners: Vec<Listener>,
}

impl Session {
    pub fn new(window: web::Window, document: web::Document, config: &PageConfig) -> Self {
        let page = WebPage::new(document);
        let mut evaluator = Evaluator::new();
        let rule = Rule {
            mode: Mode::InnerBand,
            threshold: config.threshold,
            offset: 0.0,
        };
        for effect in &config.effects {
            apply_effect(
                &mut evaluator,
                &page,
                &effect.selector,
                &effect.style,
                &effect.options,
                rule,
            );
        }
        log::info!("[session] watching {} element(s)", evaluator.len());

        let evaluator = Rc::new(RefCell::new(evaluator));
        let page = Rc::new(RefCell::new(page));
        let resize = Rc::new(RefCell::new(Debounce::new(config.resize_debounce_ms)));
        let on_resize_timer = {
            let (window, evaluator, page, resize) =
                (window.clone(), evaluator.clone(), page.clone(), resize.clone());
            Closure::wrap(Box::new(move || {
                let due = resize.borrow_mut().fire();
                if due {
                    evaluate_now(&window, &evaluator, &page);
                }
            }) as Box<dyn FnMut()>)
        };
        Self {
            window,
            evaluator,
            page,
            resize,
            on_resize_timer: Rc::new(on_resize_timer),
            listeners: Vec::new(),
        }
    }

    pub fn evaluate(&self) {
        evaluate_now(&self.window, &self.evaluator, &self.page);
    }

    /// Evaluate on every scroll, and on resize once events settle.
    pub fn wire(&mut self) -> anyhow::Result<()> {
        let (window, evaluator, page) =
            (self.window.clone(), self.evaluator.clone(), self.page.clone());
        let scroll = Listener::new(&self.window, "scroll", move || {
            evaluate_now(&window, &evaluator, &page);
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.listeners.push(scroll);

        let (window, resize, timer) = (
            self.window.clone(),
            self.resize.clone(),
            self.on_resize_timer.clone(),
        );
        let on_resize = Listener::new(&self.window, "resize", move || {
            schedule_resize(&window, &resize, &timer);
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.listeners.push(on_resize);
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.resize.borrow_mut().cancel() {
            self.window.clear_timeout_with_handle(handle);
        }
        self.evaluator.borrow_mut().clear();
        log::info!("[session] torn down");
    }
}

fn evaluate_now(window: &web::Window, evaluator: &SharedEvaluator, page: &SharedPage) {
    if let Some(viewport) = dom::current_viewport(window) {
        evaluator
            .borrow_mut()
            .evaluate(&viewport, &mut *page.borrow_mut());
    }
}

fn schedule_resize(window: &web::Window, resize: &SharedDebounce, timer: &Closure<dyn FnMut()>) {
    let delay_ms = resize.borrow().delay_ms();
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        timer.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        Ok(handle) => {
            if let Some(stale) = resize.borrow_mut().arm(handle) {
                window.clear_timeout_with_handle(stale);
            }
        }
        Err(e) => log::warn!("[session] resize timer: {:?}", e),
    }
}
