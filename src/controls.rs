use crate::dom;
use crate::pile::PileView;
use crate::style;
use pile_core::{ParamKey, PileSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub session: Rc<RefCell<PileSession>>,
    pub view: Rc<PileView>,
}

pub fn wire_controls(w: ControlWiring) {
    wire_sliders(&w);
    wire_buttons(&w);
    wire_drag_to_front(&w);
}

fn sliders(document: &web::Document) -> Vec<(ParamKey, web::HtmlInputElement)> {
    let Some(body) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all::<web::HtmlInputElement>(&body, "input[data-param]")
        .into_iter()
        .filter_map(|input| {
            let name = input.get_attribute("data-param")?;
            match name.parse::<ParamKey>() {
                Ok(key) => Some((key, input)),
                Err(e) => {
                    log::warn!("[controls] {e}");
                    None
                }
            }
        })
        .collect()
}

/// Push the session's parameter values back into the slider widgets.
fn sync_sliders(document: &web::Document, session: &PileSession) {
    for (key, input) in sliders(document) {
        let value = session.params.get(key);
        input.set_value_as_number(value);
        update_readout(document, &input, key, value);
    }
}

fn update_readout(document: &web::Document, input: &web::HtmlInputElement, key: ParamKey, value: f64) {
    let _ = input.set_attribute("style", &style::slider_fill_style(key.slider(), value));
    let selector = format!("[data-param-value=\"{}\"]", key.wire_name());
    if let Ok(Some(el)) = document.query_selector(&selector) {
        el.set_text_content(Some(&value.to_string()));
    }
}

fn wire_sliders(w: &ControlWiring) {
    for (key, input) in sliders(&w.document) {
        let spec = key.slider();
        input.set_min(&spec.min.to_string());
        input.set_max(&spec.max.to_string());
        input.set_step(&spec.step.to_string());

        let w = w.clone();
        let target = input.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let raw = target.value_as_number();
            if raw.is_nan() {
                return;
            }
            let value = {
                let mut session = w.session.borrow_mut();
                session.apply_slider(key, raw);
                session.params.get(key)
            };
            update_readout(&w.document, &target, key, value);
            w.view.render(&w.session.borrow());
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    sync_sliders(&w.document, &w.session.borrow());
}

fn wire_buttons(w: &ControlWiring) {
    let reshuffle = w.clone();
    dom::add_click_listener(&w.document, "pile-reshuffle", move || {
        let seed = reshuffle.session.borrow_mut().reshuffle();
        log::info!("[controls] reshuffle seed={seed}");
        reshuffle.view.render(&reshuffle.session.borrow());
    });

    let save = w.clone();
    dom::add_click_listener(&w.document, "pile-save", move || {
        match save.session.borrow().snapshot().to_json() {
            Ok(json) => {
                log::info!("Pile config:\n{json}");
                if let Some(out) = save.document.get_element_by_id("pile-config") {
                    out.set_text_content(Some(&json));
                }
            }
            Err(e) => log::error!("[controls] save failed: {e}"),
        }
    });

    let reset = w.clone();
    dom::add_click_listener(&w.document, "pile-reset", move || {
        reset.session.borrow_mut().reset_params();
        sync_sliders(&reset.document, &reset.session.borrow());
        reset.view.render(&reset.session.borrow());
    });
}

fn wire_drag_to_front(w: &ControlWiring) {
    for index in 0..w.view.photo_count() {
        let Some(el) = w.view.photo(index) else {
            continue;
        };
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            // primary button only; touch drags scroll the page
            if ev.button() != 0 || ev.pointer_type() == "touch" {
                return;
            }
            let z = w.session.borrow_mut().bring_to_front(index);
            if let Some(el) = w.view.photo(index) {
                let _ = el.style().set_property("z-index", &z.to_string());
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
