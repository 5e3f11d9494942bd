use crate::core::{SceneContent, SceneState};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let mut state = self.state.borrow_mut();
        if state.tick(elapsed).is_none() {
            return;
        }

        let g = &mut self.gpu;
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    content: &SceneContent,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, content).await
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle for pausing and resuming the animation-frame loop.
#[derive(Clone)]
pub struct LoopHandle {
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: TickSlot,
    // A frame request is outstanding.
    armed: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        let ctx = self.frame_ctx.borrow();
        let mut state = ctx.state.borrow_mut();
        if state.is_running() {
            state.stop();
            log::info!("[frame] loop stopped");
        }
    }

    /// Restart after `stop`, e.g. when the page comes back from the
    /// back/forward cache.
    pub fn resume(&self) {
        {
            let ctx = self.frame_ctx.borrow();
            let mut state = ctx.state.borrow_mut();
            if state.is_running() {
                return;
            }
            state.resume(ctx.started.elapsed().as_secs_f32());
        }
        log::info!("[frame] loop resumed");
        if !self.armed.get() {
            request_frame(&self.tick, &self.armed);
        }
    }
}

fn request_frame(tick: &TickSlot, armed: &Cell<bool>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let ok = w
            .request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
            .is_ok();
        armed.set(ok);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        frame_ctx: frame_ctx.clone(),
        tick: Rc::new(RefCell::new(None)),
        armed: Rc::new(Cell::new(false)),
    };
    let tick_clone = handle.tick.clone();
    let armed = handle.armed.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        armed.set(false);
        let running = frame_ctx.borrow().state.borrow().is_running();
        if !running {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &armed);
    }) as Box<dyn FnMut()>));
    request_frame(&handle.tick, &handle.armed);
    handle
}
