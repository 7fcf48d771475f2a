//! A 2D drawing surface.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::{ImageBitmap, ImageData, VideoFrame};

/// An RGBA drawing surface, the shape the engine's canvas decode reads from.
///
/// A new canvas is fully transparent black.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    surface: RgbaImage,
}

impl Canvas {
    /// Creates a blank canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
        }
    }

    /// Wraps existing pixels as a canvas.
    pub fn from_pixels(surface: RgbaImage) -> Self {
        Self { surface }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.surface
    }

    /// Copies a pixel buffer onto the canvas at the origin.
    ///
    /// This is a direct transfer: no compositing, alpha included. Pixels that
    /// fall outside the canvas are clipped.
    pub fn put_image_data(&mut self, data: &ImageData) {
        imageops::replace(&mut self.surface, data.as_rgba(), 0, 0);
    }

    /// Draws an image at the origin at its own size, compositing over the
    /// current contents.
    pub fn draw_image(&mut self, image: &RgbaImage) {
        imageops::overlay(&mut self.surface, image, 0, 0);
    }

    /// Draws an image at the origin scaled to `width` x `height`.
    pub fn draw_image_scaled(&mut self, image: &RgbaImage, width: u32, height: u32) {
        if image.dimensions() == (width, height) {
            self.draw_image(image);
            return;
        }
        let scaled = imageops::resize(image, width, height, FilterType::Triangle);
        imageops::overlay(&mut self.surface, &scaled, 0, 0);
    }

    /// A canvas the size of the bitmap with the bitmap drawn onto it.
    pub fn from_bitmap(bitmap: &ImageBitmap) -> Self {
        let mut canvas = Self::new(bitmap.width(), bitmap.height());
        canvas.draw_image(bitmap.pixels());
        canvas
    }

    /// A canvas the size of the pixel buffer holding a copy of it.
    pub fn from_image_data(data: &ImageData) -> Self {
        let mut canvas = Self::new(data.width(), data.height());
        canvas.put_image_data(data);
        canvas
    }

    /// A canvas at the frame's display size with the frame drawn onto it.
    ///
    /// The coded size is only the storage grid; the display size is what the
    /// frame looks like, so that is what gets decoded.
    pub fn from_video_frame(frame: &VideoFrame) -> Self {
        let (width, height) = (frame.display_width(), frame.display_height());
        let mut canvas = Self::new(width, height);
        canvas.draw_image_scaled(frame.pixels(), width, height);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_put_image_data_copies_alpha_verbatim() {
        let data = ImageData::from(solid(2, 2, [10, 20, 30, 40]));
        let mut canvas = Canvas::new(2, 2);
        canvas.put_image_data(&data);
        assert_eq!(canvas.pixels().get_pixel(1, 1).0, [10, 20, 30, 40]);
    }

    #[test]
    fn test_from_image_data_matches_buffer() {
        let data = ImageData::new(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        let canvas = Canvas::from_image_data(&data);
        assert_eq!(canvas.dimensions(), (2, 1));
        assert_eq!(canvas.pixels().as_raw(), data.data());
    }

    #[test]
    fn test_from_bitmap_draws_opaque_pixels() {
        let bitmap = ImageBitmap::new(solid(5, 7, [200, 100, 50, 255]));
        let canvas = Canvas::from_bitmap(&bitmap);
        assert_eq!(canvas.dimensions(), (5, 7));
        assert_eq!(canvas.pixels().get_pixel(4, 6).0, [200, 100, 50, 255]);
    }

    #[test]
    fn test_from_video_frame_uses_display_size() {
        let frame = VideoFrame::with_display_size(solid(8, 4, [255, 255, 255, 255]), 4, 4);
        let canvas = Canvas::from_video_frame(&frame);
        assert_eq!(canvas.dimensions(), (4, 4));
        assert_eq!(canvas.pixels().get_pixel(3, 3).0, [255, 255, 255, 255]);
    }
}
