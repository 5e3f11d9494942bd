pub mod keyboard;
pub mod pointer;
pub mod window;

pub use keyboard::wire_panel_toggle_h;
pub use pointer::wire_pointermove;
pub use window::{wire_page_lifecycle, wire_resize, wire_scroll};
