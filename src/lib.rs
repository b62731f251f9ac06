#![cfg(target_arch = "wasm32")]
use pile_core::{ConfigSnapshot, ParamKey, PileSession, Theme};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod controls;
mod dom;
mod pile;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pile-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without a pile (the grid page) only use the exported handle
    if document.get_element_by_id("pile").is_none() {
        log::info!("[init] no #pile on this page");
        return Ok(());
    }

    let view = Rc::new(pile::PileView::find(&document)?);
    let session = Rc::new(RefCell::new(PileSession::new(
        view.theme(),
        view.photo_count(),
    )));
    log::info!(
        "[init] photos={} theme={}",
        view.photo_count(),
        session.borrow().theme()
    );
    view.render(&session.borrow());

    controls::wire_controls(controls::ControlWiring {
        document,
        session,
        view,
    });
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotOut {
    left: f64,
    top: f64,
    rotation: f64,
    z_index: i64,
    aspect: &'static str,
    delay_ms: f64,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Layout session for JS callers that render the pile themselves.
#[wasm_bindgen]
pub struct PileHandle {
    session: PileSession,
}

#[wasm_bindgen]
impl PileHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(theme: &str, photo_count: usize) -> Result<PileHandle, JsValue> {
        let theme: Theme = theme.parse().map_err(js_err)?;
        Ok(Self {
            session: PileSession::new(theme, photo_count),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> f64 {
        self.session.seed() as f64
    }

    #[wasm_bindgen(js_name = setPhotoCount)]
    pub fn set_photo_count(&mut self, count: usize) {
        self.session.set_photo_count(count);
    }

    /// Apply a slider reading (rounded to one decimal).
    #[wasm_bindgen(js_name = setParam)]
    pub fn set_param(&mut self, key: &str, value: f64) -> Result<(), JsValue> {
        let key: ParamKey = key.parse().map_err(js_err)?;
        self.session.apply_slider(key, value);
        Ok(())
    }

    #[wasm_bindgen(js_name = resetParams)]
    pub fn reset_params(&mut self) {
        self.session.reset_params();
    }

    pub fn reshuffle(&mut self) -> f64 {
        self.session.reshuffle() as f64
    }

    #[wasm_bindgen(js_name = bringToFront)]
    pub fn bring_to_front(&mut self, index: usize) -> f64 {
        self.session.bring_to_front(index) as f64
    }

    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        let stagger = self.session.params.stagger;
        let slots: Vec<SlotOut> = self
            .session
            .layout()
            .iter()
            .enumerate()
            .map(|(i, slot)| SlotOut {
                left: slot.left,
                top: slot.top,
                rotation: slot.rotation_deg,
                z_index: self.session.stack_index(i, slot),
                aspect: slot.aspect.as_css(),
                delay_ms: pile_core::animation_delay_ms(i, stagger),
            })
            .collect();
        serde_json::to_string(&slots).map_err(js_err)
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.session.snapshot().to_json().map_err(js_err)
    }

    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, json: &str) -> Result<(), JsValue> {
        let snapshot = ConfigSnapshot::from_json(json).map_err(js_err)?;
        self.session.restore(&snapshot);
        Ok(())
    }

    #[wasm_bindgen(js_name = widthStylesheet)]
    pub fn width_stylesheet(&self) -> String {
        style::width_stylesheet(&self.session.widths())
    }
}
