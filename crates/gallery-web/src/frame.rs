use crate::dom::TooltipElements;
use crate::render::CanvasRenderer;
use gallery_core::{EngineState, FrameClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<EngineState>>,
    pub renderer: CanvasRenderer,
    pub tooltip: Option<TooltipElements>,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.clock.seconds();
        let mut engine = self.engine.borrow_mut();
        engine.frame(t);
        engine.submit(&mut self.renderer);
        if let Some(tip) = self.tooltip.as_mut() {
            tip.apply(engine.tooltip());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
