use crate::core::SceneState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer anywhere in the window for camera parallax.
pub fn wire_pointermove(window: &web::Window, state: Rc<RefCell<SceneState>>) {
    dom::listen(window, "pointermove", move |ev: web::PointerEvent| {
        state
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}
