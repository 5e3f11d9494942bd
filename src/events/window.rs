use crate::core::SceneState;
use crate::dom;
use crate::frame::LoopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(
    window: &web::Window,
    state: Rc<RefCell<SceneState>>,
    canvas: web::HtmlCanvasElement,
) {
    let wnd = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let vp = dom::read_viewport(&wnd);
        let mut st = state.borrow_mut();
        if st.on_resize(vp.width, vp.height, vp.device_pixel_ratio) {
            dom::apply_canvas_size(&canvas, &st.viewport);
            // Section boundaries moved with the viewport height.
            let scroll_y = wnd.scroll_y().unwrap_or(st.scroll.offset());
            if let Some(i) = st.on_scroll(scroll_y) {
                log::info!("[scroll] section {} after resize", i);
            }
        }
    });
}

pub fn wire_scroll(window: &web::Window, state: Rc<RefCell<SceneState>>) {
    let wnd = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let Ok(scroll_y) = wnd.scroll_y() else {
            return;
        };
        let mut st = state.borrow_mut();
        if let Some(i) = st.on_scroll(scroll_y) {
            log::info!("[scroll] entered section {} kicks={}", i, st.active_kicks());
        }
    });
}

/// Pause the frame loop while the page is hidden and resume it when a
/// back/forward-cache restore brings the page back.
pub fn wire_page_lifecycle(window: &web::Window, handle: LoopHandle) {
    let on_hide = handle.clone();
    dom::listen(window, "pagehide", move |ev: web::PageTransitionEvent| {
        log::info!("[page] hide persisted={}", ev.persisted());
        on_hide.stop();
    });
    dom::listen(window, "pageshow", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            handle.resume();
        }
    });
}
