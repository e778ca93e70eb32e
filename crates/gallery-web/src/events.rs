use crate::dom;
use crate::input;
use gallery_core::EngineState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub engine: Rc<RefCell<EngineState>>,
    pub canvas: web::HtmlCanvasElement,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    // pointermove
    {
        let engine_m = w.engine.clone();
        let canvas_m = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_m.get_bounding_client_rect();
            let sample = input::pointer_sample(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            let mut engine = engine_m.borrow_mut();
            match sample {
                Some(s) => engine.pointer_moved(s),
                None => engine.pointer_left(),
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let engine_l = w.engine.clone();
        dom::add_listener(&w.canvas, "pointerleave", move || {
            engine_l.borrow_mut().pointer_left();
        });
    }

    // resize
    {
        let engine_r = w.engine.clone();
        let canvas_r = w.canvas.clone();
        dom::add_listener(&window, "resize", move || {
            dom::sync_canvas_backing_size(&canvas_r);
            if let Some(vp) = dom::canvas_viewport(&canvas_r) {
                engine_r.borrow_mut().resize(vp);
            }
        });
    }
}
