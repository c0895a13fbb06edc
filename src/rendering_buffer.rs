//! Rendering buffer: owned, row-oriented pixel storage.
//!
//! Rows are `stride` bytes apart, top row first. The pixmaps in
//! `pixfmt_rgba` and `pixfmt_rgb_packed` sit on top of this and interpret
//! the bytes.

// ============================================================================
// RenderingBuffer
// ============================================================================

/// A rectangular byte buffer addressed by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    bpp: usize,
    stride: usize,
}

impl RenderingBuffer {
    /// Zero-filled buffer of `width * height` pixels of `bpp` bytes each.
    pub fn new(width: u32, height: u32, bpp: usize) -> Self {
        let stride = width as usize * bpp;
        Self {
            data: vec![0; stride * height as usize],
            width,
            height,
            bpp,
            stride,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn bpp(&self) -> usize {
        self.bpp
    }

    /// Full row `y`. Panics if `y >= height`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Full mutable row `y`. Panics if `y >= height`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// The `bpp` bytes of pixel `(x, y)`.
    #[inline]
    pub fn pix_slice(&self, x: u32, y: u32) -> &[u8] {
        let start = y as usize * self.stride + x as usize * self.bpp;
        &self.data[start..start + self.bpp]
    }

    #[inline]
    pub fn pix_slice_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride + x as usize * self.bpp;
        &mut self.data[start..start + self.bpp]
    }

    /// Write `pixel` into every pixel of the buffer.
    pub fn fill(&mut self, pixel: &[u8]) {
        debug_assert_eq!(pixel.len(), self.bpp);
        for chunk in self.data.chunks_exact_mut(self.bpp) {
            chunk.copy_from_slice(pixel);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
