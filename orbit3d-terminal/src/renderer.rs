/// Character-cell raster for terminal presentation
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use orbit3d_core::{DrawSurface, Rgb};
use std::io::{self, Write};

const CELL_GLYPH: char = '█';

/// Offscreen buffer of colored cells, one per terminal character.
///
/// The compositor draws into it through `DrawSurface`; `present` queues the
/// whole grid to the terminal in one pass so the frame appears atomically.
pub struct CellRaster {
    width: u32,
    height: u32,
    cells: Vec<Rgb>,
}

impl CellRaster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgb::new(0, 0, 0); (width * height) as usize],
        }
    }

    /// Recreate the buffer for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells = vec![Rgb::new(0, 0, 0); (width * height) as usize];
    }

    /// Queue the buffer contents to the terminal.
    ///
    /// Color changes are only emitted when adjacent cells differ, which keeps
    /// the escape-sequence volume low for large flat areas.
    pub fn present<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut current: Option<Rgb> = None;

        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[(y * self.width + x) as usize];
                if current != Some(cell) {
                    writer.queue(SetForegroundColor(Color::Rgb {
                        r: cell.r,
                        g: cell.g,
                        b: cell.b,
                    }))?;
                    current = Some(cell);
                }
                writer.queue(Print(CELL_GLYPH))?;
            }
        }

        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for CellRaster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            self.cells[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit3d_core::ScreenPoint;

    #[test]
    fn test_plot_ignores_out_of_bounds() {
        let mut raster = CellRaster::new(4, 4);
        raster.plot(-1, 0, Rgb::new(1, 2, 3));
        raster.plot(0, 99, Rgb::new(1, 2, 3));
        assert!(raster.cells.iter().all(|&c| c == Rgb::new(0, 0, 0)));

        raster.plot(2, 3, Rgb::new(9, 9, 9));
        assert_eq!(raster.cells[(3 * 4 + 2) as usize], Rgb::new(9, 9, 9));
    }

    #[test]
    fn test_resize_recreates_buffer() {
        let mut raster = CellRaster::new(4, 4);
        raster.plot(1, 1, Rgb::new(5, 5, 5));
        raster.resize(8, 2);
        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.cells.len(), 16);
        assert!(raster.cells.iter().all(|&c| c == Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_line_draws_through_cells() {
        let mut raster = CellRaster::new(8, 8);
        let color = Rgb::new(70, 78, 90);
        raster.draw_line(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(7.0, 7.0), color);
        for i in 0..8 {
            assert_eq!(raster.cells[(i * 8 + i) as usize], color);
        }
    }

    #[test]
    fn test_present_writes_ansi_stream() {
        let mut raster = CellRaster::new(3, 2);
        raster.plot(0, 0, Rgb::new(255, 0, 0));
        let mut out: Vec<u8> = Vec::new();
        raster.present(&mut out).unwrap();
        assert!(!out.is_empty());
        // One glyph per cell ends up in the stream
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches(CELL_GLYPH).count(), 6);
    }
}
