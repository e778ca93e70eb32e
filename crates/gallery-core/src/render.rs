use crate::lines::LineBuffer;
use crate::registry::VisualItem;
use crate::topology::LinkKind;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub opacity: f32,
    /// Lines are drawn before every item and without depth writes.
    pub behind: bool,
}

/// The rendering backend as the engine sees it. One frame is
/// `begin_frame`, any number of draws in back-to-front order, `end_frame`.
pub trait Renderer {
    fn begin_frame(&mut self, viewport: &Viewport);
    fn draw_lines(&mut self, kind: LinkKind, lines: &LineBuffer, style: LineStyle);
    fn draw_item(&mut self, item: &VisualItem);
    fn end_frame(&mut self);
}
