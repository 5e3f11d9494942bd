use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current window size (CSS pixels) and device pixel ratio.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    Viewport::new(
        px(window.inner_width()),
        px(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Size the canvas like a renderer `setSize` + `setPixelRatio`: CSS box at
/// the viewport size, backing store scaled by the clamped pixel ratio.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
