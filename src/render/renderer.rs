use kurbo::{Line, Rect, Shape as _};

use crate::color::codec::Color;
use crate::color::gradient::LinearGradient;
use crate::config::MountainConfig;
use crate::render::canvas::Canvas;
use crate::terrain::compositor::ColumnPainter;

/// Owns the canvas for the duration of a run: paints the background, then one stroked
/// vertical segment per column per layer.
#[derive(Debug)]
pub struct CanvasRenderer {
    canvas: Canvas,
    floor: f64,
    stroke_width: f64,
}

impl CanvasRenderer {
    /// A renderer over a fresh canvas of `width` x `height`.
    ///
    /// Columns are drawn up from `y = height`.
    pub fn new(width: u32, height: u32, stroke_width: f64) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            floor: f64::from(height),
            stroke_width,
        }
    }

    /// A renderer sized and stroked per `cfg`.
    pub fn from_config(cfg: &MountainConfig) -> Self {
        Self::new(cfg.width, cfg.height, cfg.stroke_width)
    }

    /// The canvas drawn so far.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Finish and take ownership of the canvas.
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Color every pixel from `gradient`.
    pub fn paint_background(&mut self, gradient: &LinearGradient) {
        if gradient.is_solid() {
            let c = gradient.color_at(0.0, 0.0).to_rgb8();
            self.canvas
                .fill_span(0, 0, self.canvas.width(), self.canvas.height(), c);
            return;
        }
        for y in 0..self.canvas.height() {
            for x in 0..self.canvas.width() {
                let c = gradient.color_at(f64::from(x), f64::from(y));
                self.canvas.set_pixel(x, y, c.to_rgb8());
            }
        }
    }

    /// Area covered by column `x` drawn up to `height`, clipped to the canvas.
    ///
    /// The segment runs through the pixel center from the floor to `height`. Its outline widens
    /// it by half the stroke on either side and above the summit.
    pub fn column_footprint(&self, x: u32, height: f64) -> Rect {
        let cx = f64::from(x) + 0.5;
        let segment = Line::new((cx, self.floor), (cx, height));
        let half = self.stroke_width / 2.0;
        let bbox = segment.bounding_box();
        let stroked = Rect::new(bbox.x0 - half, bbox.y0 - half, bbox.x1 + half, bbox.y1);
        let bounds = Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        stroked.intersect(bounds)
    }

    /// Fill every pixel whose center lies inside `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x0 = pixel_lower_bound(rect.x0);
        let x1 = pixel_lower_bound(rect.x1);
        let y0 = pixel_lower_bound(rect.y0);
        let y1 = pixel_lower_bound(rect.y1);
        self.canvas.fill_span(x0, y0, x1, y1, color.to_rgb8());
    }
}

/// First pixel index whose center is at or past `edge`.
fn pixel_lower_bound(edge: f64) -> u32 {
    (edge - 0.5).ceil().max(0.0) as u32
}

impl ColumnPainter for CanvasRenderer {
    fn draw_column(&mut self, x: u32, height: f64, color: Color) {
        let footprint = self.column_footprint(x, height);
        self.fill_rect(footprint, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
