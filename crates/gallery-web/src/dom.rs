use crate::constants::{TOOLTIP_CAPTION_ID, TOOLTIP_ID, TOOLTIP_IMG_ID};
use crate::input;
use gallery_core::{Tooltip, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// The canvas' CSS box as an engine viewport.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let rect = canvas.get_bounding_client_rect();
    input::viewport_for(rect.width(), rect.height())
}

/// Hover preview elements. The preview image is only reassigned when the
/// hovered path changes so the browser does not refetch it every frame.
pub struct TooltipElements {
    root: web::HtmlElement,
    image: Option<web::HtmlImageElement>,
    caption: Option<web::HtmlElement>,
    shown: bool,
}

impl TooltipElements {
    pub fn discover(document: &web::Document) -> Option<Self> {
        let root = element_by_id::<web::HtmlElement>(document, TOOLTIP_ID)?;
        let _ = root.style().set_property("display", "none");
        Some(Self {
            root,
            image: element_by_id(document, TOOLTIP_IMG_ID),
            caption: element_by_id(document, TOOLTIP_CAPTION_ID),
            shown: false,
        })
    }

    pub fn apply(&mut self, tip: &Tooltip) {
        let style = self.root.style();
        if tip.visible != self.shown {
            let _ = style.set_property("display", if tip.visible { "block" } else { "none" });
            self.shown = tip.visible;
        }
        if !tip.visible {
            return;
        }
        let _ = style.set_property("left", &input::css_px(tip.position.x));
        let _ = style.set_property("top", &input::css_px(tip.position.y));
        if tip.src_changed {
            if let (Some(img), Some(src)) = (&self.image, &tip.image_src) {
                img.set_src(src);
            }
            if let Some(caption) = &self.caption {
                caption.set_text_content(Some(&tip.caption));
            }
        }
    }
}
