use crate::dom;
use crate::panel;
use web_sys as web;

#[inline]
pub fn is_panel_toggle_key(key: &str) -> bool {
    matches!(key, "h" | "H")
}

/// Toggle the debug panel with the `h` key, ignoring typing in inputs.
pub fn wire_panel_toggle_h(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if !is_panel_toggle_key(&ev.key()) {
            return;
        }
        let typing = doc
            .active_element()
            .map(|el| el.tag_name().eq_ignore_ascii_case("input"))
            .unwrap_or(false);
        if !typing {
            panel::toggle(&doc);
        }
    });
}
