#![cfg(target_arch = "wasm32")]
use crate::core::{SceneParams, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("toon-scroll starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector("canvas.webgl")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::read_viewport(&window);
    dom::apply_canvas_size(&canvas, &viewport);

    let state = Rc::new(RefCell::new(SceneState::new(SceneParams::default(), viewport)));
    {
        let st = state.borrow();
        log::info!(
            "[scene] sections={} particles={} color={} viewport={}x{} pr={:.2}",
            st.content.sections.len(),
            st.content.particles.len(),
            st.content.materials.color(),
            st.viewport.width,
            st.viewport.height,
            st.viewport.pixel_ratio()
        );
    }
    // Pick up a restored scroll position before the first frame.
    if let Ok(scroll_y) = window.scroll_y() {
        let mut st = state.borrow_mut();
        st.on_scroll(scroll_y);
        log::info!("[scroll] starting in section {}", st.scroll.section());
    }

    let gpu = {
        let st = state.borrow().content.clone();
        frame::init_gpu(&canvas, &st).await?
    };

    events::wire_resize(&window, state.clone(), canvas.clone());
    events::wire_scroll(&window, state.clone());
    events::wire_pointermove(&window, state.clone());
    panel::mount(&document, state.clone())?;
    events::wire_panel_toggle_h(&window, &document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        canvas,
        gpu,
        started: Instant::now(),
    }));
    let handle = frame::start_loop(frame_ctx);
    events::wire_page_lifecycle(&window, handle);

    Ok(())
}
