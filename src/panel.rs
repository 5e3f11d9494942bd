use crate::core::{Color, SceneState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";
const COLLAPSED_CLASS: &str = "closed";

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Build the debug panel: a collapsible "Controls" box with a single color
/// field whose edits go to both materials.
pub fn mount(document: &web::Document, state: Rc<RefCell<SceneState>>) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    let root = document.create_element("div").map_err(js_err)?;
    root.set_id(PANEL_ID);
    root.set_class_name("panel");

    let title = document.create_element("div").map_err(js_err)?;
    title.set_class_name("panel-title");
    title.set_text_content(Some("Controls"));

    let row = document.create_element("label").map_err(js_err)?;
    row.set_class_name("panel-row");
    let name = document.create_element("span").map_err(js_err)?;
    name.set_class_name("panel-name");
    name.set_text_content(Some("materialColor"));

    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_type("color");
    input.set_value(&state.borrow().content.materials.color().to_hex());

    row.append_child(&name).map_err(js_err)?;
    row.append_child(&input).map_err(js_err)?;
    root.append_child(&title).map_err(js_err)?;
    root.append_child(&row).map_err(js_err)?;
    body.append_child(&root).map_err(js_err)?;

    let input_for_change = input.clone();
    dom::listen(&input, "input", move |_: web::Event| {
        let value = input_for_change.value();
        match Color::from_hex(&value) {
            Some(color) => state.borrow_mut().set_material_color(color),
            None => log::warn!("[panel] ignoring color {:?}", value),
        }
    });

    let root_for_title = root.clone();
    dom::listen(&title, "click", move |_: web::Event| {
        _ = root_for_title.class_list().toggle(COLLAPSED_CLASS);
    });

    log::info!("[panel] mounted");
    Ok(())
}

pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let style = if is_hidden(document) { "" } else { "display:none" };
        _ = el.set_attribute("style", style);
    }
}
