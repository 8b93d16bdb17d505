/// Pixel raster backing the window presentation path
use orbit3d_core::{DrawSurface, Rgb};

fn pack(color: Rgb) -> u32 {
    (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b)
}

/// Offscreen 0RGB buffer in the layout `minifb` presents directly.
pub struct PixelRaster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelRaster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    /// Recreate the buffer for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height) as usize];
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl DrawSurface for PixelRaster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = pack(color);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let packed = pack(color);
        let x0 = x.clamp(0, self.width as i32) as u32;
        let y0 = y.clamp(0, self.height as i32) as u32;
        let x1 = (x.saturating_add(w as i32)).clamp(0, self.width as i32) as u32;
        let y1 = (y.saturating_add(h as i32)).clamp(0, self.height as i32) as u32;

        for row in y0..y1 {
            let start = (row * self.width + x0) as usize;
            let end = (row * self.width + x1) as usize;
            self.pixels[start..end].fill(packed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit3d_core::ScreenPoint;

    #[test]
    fn test_pack_channel_order() {
        assert_eq!(pack(Rgb::new(0x12, 0x34, 0x56)), 0x0012_3456);
    }

    #[test]
    fn test_fill_rect_clamps_to_buffer() {
        let mut raster = PixelRaster::new(8, 8);
        raster.fill_rect(-4, -4, 100, 6, Rgb::new(255, 255, 255));
        // Rows 0..2 filled, rest untouched
        assert!(raster.pixels[..16].iter().all(|&p| p == 0x00FF_FFFF));
        assert!(raster.pixels[16..].iter().all(|&p| p == 0));
    }

    #[test]
    fn test_plot_and_line_land_in_buffer() {
        let mut raster = PixelRaster::new(16, 16);
        let color = Rgb::new(230, 126, 34);
        raster.draw_line(ScreenPoint::new(2.0, 2.0), ScreenPoint::new(13.0, 2.0), color);
        for x in 2..=13u32 {
            assert_eq!(raster.pixels[(2 * 16 + x) as usize], pack(color));
        }
        assert_eq!(raster.pixels[(2 * 16 + 1) as usize], 0);
    }

    #[test]
    fn test_resize_recreates_buffer() {
        let mut raster = PixelRaster::new(4, 4);
        raster.plot(0, 0, Rgb::new(1, 1, 1));
        raster.resize(2, 2);
        assert_eq!(raster.size(), (2, 2));
        assert_eq!(raster.pixels().len(), 4);
        assert!(raster.pixels().iter().all(|&p| p == 0));
    }
}
