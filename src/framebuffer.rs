use log::warn;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};

/// # FrameBuffer
/// A monochrome grid of pixels stored row-major, 1 for on and 0 for off.
///
/// Pixels are only ever flipped by XORing sprites onto the grid or wiped by
/// `clear`. Either one raises the `dirty` flag, which the renderer takes once per
/// tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    dirty: bool,
}

impl FrameBuffer {
    /// A blank grid; a zero dimension is raised to a single pixel
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            warn!("{}x{} frame buffer has no pixels, using at least 1x1", width, height);
        }
        let (width, height) = (width.max(1), height.max(1));
        FrameBuffer {
            width,
            height,
            pixels: vec![0; width * height],
            dirty: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y * self.width + x] == 1
    }

    /// Every pixel, row by row
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks(self.width)
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = 0);
        self.dirty = true;
    }

    /// XORs a sprite onto the grid at (x, y), wrapping at both edges.
    ///
    /// Each byte of `sprite` is one 8 pixel row, most significant bit leftmost.
    /// Returns true if any pixel went from on to off.
    ///
    /// # Arguments
    /// * `x` the column of the sprite's left edge
    /// * `y` the row of the sprite's top edge
    /// * `sprite` the rows of the sprite
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let pixel_y = (y + row) % self.height;
            for col in 0..SPRITE_WIDTH {
                if (byte >> (7 - col)) & 1 == 0 {
                    continue;
                }
                let pixel_x = (x + col) % self.width;
                let pixel = &mut self.pixels[pixel_y * self.width + pixel_x];
                collision |= *pixel == 1;
                *pixel ^= 1;
                self.dirty = true;
            }
        }
        collision
    }

    /// Returns whether the grid changed since the last call and lowers the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_size_still_draws() {
        let mut frame = FrameBuffer::new(0, 0);
        assert_eq!((frame.width(), frame.height()), (1, 1));
        assert!(!frame.draw_sprite(3, 3, &[0x80]));
        assert_eq!(frame.rows().count(), 1);
        assert!(frame.pixel(0, 0));
    }

    #[test]
    fn test_draws_sprite() {
        let mut frame = FrameBuffer::default();
        let collision = frame.draw_sprite(1, 1, &[0xF0, 0x90]);
        assert!(!collision);
        assert_eq!(frame.rows().nth(1).unwrap()[0..6], [0, 1, 1, 1, 1, 0]);
        assert_eq!(frame.rows().nth(2).unwrap()[0..6], [0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_xors_with_existing_pixels() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(2, 0, &[0x50]);
        let collision = frame.draw_sprite(2, 0, &[0xC0]);
        assert!(collision);
        assert_eq!(frame.rows().next().unwrap()[2..6], [1, 0, 0, 1]);
    }

    #[test]
    fn test_drawing_twice_restores_frame() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(10, 10, &[0xFF]);
        let before = frame.clone();

        assert!(!frame.draw_sprite(20, 5, &[0x3C, 0x42]));
        assert!(frame.draw_sprite(20, 5, &[0x3C, 0x42]));
        assert_eq!(frame.pixels(), before.pixels());
    }

    #[test]
    fn test_wraps_horizontally() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(60, 0, &[0xFF]);
        for x in 0..64 {
            let expected = x < 4 || x >= 60;
            assert_eq!(frame.pixel(x, 0), expected, "pixel {} of row 0", x);
        }
    }

    #[test]
    fn test_wraps_vertically() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(0, 31, &[0x80, 0x80]);
        assert!(frame.pixel(0, 31));
        assert!(frame.pixel(0, 0));
    }

    #[test]
    fn test_clear_wipes_every_pixel() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(0, 0, &[0xFF; 15]);
        frame.take_dirty();
        frame.clear();
        assert!(frame.pixels().iter().all(|&p| p == 0));
        assert!(frame.take_dirty());
    }

    #[test]
    fn test_takes_dirty_flag_once() {
        let mut frame = FrameBuffer::default();
        assert!(!frame.take_dirty());
        frame.draw_sprite(0, 0, &[0x01]);
        assert!(frame.take_dirty());
        assert!(!frame.take_dirty());
    }

    #[test]
    fn test_blank_sprite_leaves_frame_clean() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite(0, 0, &[0x00]);
        assert!(!frame.take_dirty());
    }
}
