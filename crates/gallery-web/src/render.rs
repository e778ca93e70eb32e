use crate::assets::AssetStore;
use crate::constants::*;
use crate::input;
use gallery_core::hover::label_for;
use gallery_core::{
    AssetStatus, LineBuffer, LineStyle, LinkKind, Payload, Renderer, Viewport, VisualItem,
};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D backend. Works in CSS pixels; the backing store scale is applied
/// once per frame as a transform.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    assets: Rc<RefCell<AssetStore>>,
    viewport: Viewport,
}

impl CanvasRenderer {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        assets: Rc<RefCell<AssetStore>>,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
            assets,
            viewport: Viewport::default(),
        })
    }

    #[inline]
    fn to_css(&self, world: glam::Vec2) -> (f64, f64) {
        let p = input::world_to_css(world, self.viewport);
        (p.x as f64, p.y as f64)
    }

    fn draw_placeholder(&self, x: f64, y: f64, size: f64, label: &str) {
        self.ctx.set_fill_style_str(PLACEHOLDER_FILL);
        self.ctx.fill_rect(x, y, size, size);
        self.ctx.set_fill_style_str(PLACEHOLDER_TEXT);
        self.ctx.set_font(PLACEHOLDER_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self
            .ctx
            .fill_text_with_max_width(label, x + size * 0.5, y + size * 0.5, size - 6.0);
    }
}

impl Renderer for CanvasRenderer {
    fn begin_frame(&mut self, viewport: &Viewport) {
        self.viewport = *viewport;
        let sx = self.canvas.width() as f64 / viewport.width.max(1.0) as f64;
        let sy = self.canvas.height() as f64 / viewport.height.max(1.0) as f64;
        let _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn draw_lines(&mut self, kind: LinkKind, lines: &LineBuffer, style: LineStyle) {
        self.ctx
            .set_stroke_style_str(&input::rgba(LINE_RGB[kind.slot()], style.opacity));
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.begin_path();
        for i in 0..lines.link_count() {
            let Some((a, b)) = lines.segment(i) else {
                break;
            };
            if a == b {
                continue;
            }
            let (x0, y0) = self.to_css(a.truncate());
            let (x1, y1) = self.to_css(b.truncate());
            self.ctx.move_to(x0, y0);
            self.ctx.line_to(x1, y1);
        }
        self.ctx.stroke();
    }

    fn draw_item(&mut self, item: &VisualItem) {
        let (cx, cy) = self.to_css(item.current.truncate());
        let size = item.scale as f64;
        let (x, y) = (cx - size * 0.5, cy - size * 0.5);
        let assets = self.assets.borrow();

        match &item.payload {
            Payload::None => {
                self.ctx.set_fill_style_str(NODE_FILL);
                self.ctx.begin_path();
                let _ = self.ctx.arc(cx, cy, size * 0.5, 0.0, TAU);
                self.ctx.fill();
            }
            Payload::Image {
                path,
                dataset_index,
                status,
            } => {
                match (status, assets.image(*dataset_index)) {
                    (AssetStatus::Ready, Some(img)) => {
                        let _ = self
                            .ctx
                            .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, size, size);
                    }
                    _ => self.draw_placeholder(x, y, size, label_for(path)),
                }
                if item.hovered {
                    self.ctx.set_stroke_style_str(HOVER_OUTLINE);
                    self.ctx.set_line_width(HOVER_OUTLINE_WIDTH);
                    self.ctx.stroke_rect(x, y, size, size);
                }
            }
            Payload::Video { source, status } => match (status, assets.video()) {
                (AssetStatus::Ready, Some(video)) => {
                    let _ = self
                        .ctx
                        .draw_image_with_html_video_element_and_dw_and_dh(video, x, y, size, size);
                }
                _ => self.draw_placeholder(x, y, size, label_for(source)),
            },
        }
    }

    fn end_frame(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }
}
