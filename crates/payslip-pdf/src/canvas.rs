//! A small drawing surface over a `pdf-writer` content stream.
//!
//! The renderer positions everything in absolute page points, so the
//! canvas only offers the primitives the payslip layout needs: stroked
//! and filled rectangles, straight lines, and left/center/right anchored
//! text in the current font size.

use pdf_writer::{Content, Name, Str};

use crate::metrics::{string_width, winansi};

/// Resource name the page registers Helvetica under.
pub(crate) const FONT_NAME: &[u8] = b"F1";

pub(crate) struct Canvas {
    content: Content,
    font_size: f32,
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self {
            content: Content::new(),
            font_size: 9.0,
        }
    }

    pub(crate) fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub(crate) fn set_fill_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.content.set_fill_rgb(r, g, b);
    }

    pub(crate) fn set_fill_black(&mut self) {
        self.content.set_fill_rgb(0.0, 0.0, 0.0);
    }

    pub(crate) fn set_line_width(&mut self, width: f32) {
        self.content.set_line_width(width);
    }

    /// Stroke a rectangle with corner at (x, y) in page coordinates.
    pub(crate) fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.content.rect(x, y, w, h);
        self.content.stroke();
    }

    /// Fill a rectangle without stroking its outline.
    pub(crate) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.content.rect(x, y, w, h);
        self.content.fill_nonzero();
    }

    pub(crate) fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.content.move_to(x1, y1);
        self.content.line_to(x2, y2);
        self.content.stroke();
    }

    /// Draw text with its left edge at `x` and baseline at `y`.
    pub(crate) fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        let bytes = winansi(text);
        self.content
            .begin_text()
            .set_font(Name(FONT_NAME), self.font_size)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
    }

    /// Draw text horizontally centered on `cx`.
    pub(crate) fn draw_centred_string(&mut self, cx: f32, y: f32, text: &str) {
        let width = string_width(text, self.font_size);
        self.draw_string(cx - width / 2.0, y, text);
    }

    /// Draw text with its right edge at `rx`.
    pub(crate) fn draw_right_string(&mut self, rx: f32, y: f32, text: &str) {
        let width = string_width(text, self.font_size);
        self.draw_string(rx - width, y, text);
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.content.finish().into_vec()
    }
}
