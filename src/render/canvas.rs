use crate::foundation::core::Rgb8;

/// An RGB8 pixel buffer, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// A black `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(Self::CHANNELS);
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * Self::CHANNELS
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the pixel at `(x, y)`; writes outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgb8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i..i + Self::CHANNELS].copy_from_slice(&c.to_array());
    }

    /// Fill the half-open pixel span `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_span(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, c: Rgb8) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = c.to_array();
        for y in y0..y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1, y);
            for chunk in self.data[start..end].chunks_exact_mut(Self::CHANNELS) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Copy into an [`image::RgbImage`].
    pub fn to_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
