#![cfg(target_arch = "wasm32")]
use crate::constants::HERO_CONFIG_ID;
use crate::core::HeroConfig;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod form;
mod frame;
mod hero;
mod overlay;
mod render;
mod router;

thread_local! {
    // The router lives for the whole page; keep it out of reach of drop.
    static ROUTER: RefCell<Option<router::Router>> = const { RefCell::new(None) };
}

fn read_hero_config(document: &web::Document) -> HeroConfig {
    let Some(el) = document.get_element_by_id(HERO_CONFIG_ID) else {
        return HeroConfig::default();
    };
    match HeroConfig::from_attrs(|name| el.get_attribute(name)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] invalid hero config ({}); using defaults", e);
            HeroConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("exotu-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let hero_config = read_hero_config(&document);
    log::info!(
        "[config] hero={:?} image={}",
        hero_config.variant,
        hero_config.image_src
    );
    let router = router::Router::mount(&document, hero_config)?;
    log::info!("[nav] start at {:?}", router.store.borrow().current());
    ROUTER.with(|r| *r.borrow_mut() = Some(router));
    Ok(())
}
