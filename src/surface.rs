//! 2D drawing surface for the fractal canvas
//!
//! Mirrors the path-based drawing contract of the web canvas the page demo
//! replaces: begin a path, walk its outline, fill with the current color.
//! The terminal implementation rasterizes into a braille dot grid (2x4 dots
//! per cell) for sub-cell resolution.

use crate::terminal::Terminal;
use crossterm::style::Color;

/// Path-based fill surface
pub trait Surface {
    /// Logical width in drawing units
    fn width(&self) -> f32;
    /// Logical height in drawing units
    fn height(&self) -> f32;
    /// Erase everything drawn so far
    fn clear(&mut self);
    /// Set the fill color used by subsequent fills
    fn set_fill(&mut self, color: Color, bold: bool);
    /// Start a new path, discarding the previous one
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Close the outline back to its starting point
    fn close_path(&mut self);
    /// Fill the current path (even-odd rule)
    fn fill(&mut self);
}

/// Braille-cell surface backed by a dot grid
pub struct BrailleSurface {
    cells_w: usize,
    cells_h: usize,
    dot_w: usize,
    dot_h: usize,
    dots: Vec<Vec<bool>>,
    // Color resolves per cell, last fill wins
    cell_color: Vec<Vec<Option<(Color, bool)>>>,
    path: Vec<(f32, f32)>,
    fill_color: (Color, bool),
}

impl BrailleSurface {
    /// Create a surface covering `cells_w` x `cells_h` terminal cells
    pub fn new(cells_w: u16, cells_h: u16) -> Self {
        let cells_w = cells_w.max(1) as usize;
        let cells_h = cells_h.max(1) as usize;
        let dot_w = cells_w * 2;
        let dot_h = cells_h * 4;
        Self {
            cells_w,
            cells_h,
            dot_w,
            dot_h,
            dots: vec![vec![false; dot_w]; dot_h],
            cell_color: vec![vec![None; cells_w]; cells_h],
            path: Vec::new(),
            fill_color: (Color::White, false),
        }
    }

    fn set_dot(&mut self, x: i32, y: i32) {
        if x < 0 || x >= self.dot_w as i32 || y < 0 || y >= self.dot_h as i32 {
            return;
        }
        self.dots[y as usize][x as usize] = true;
        self.cell_color[y as usize / 4][x as usize / 2] = Some(self.fill_color);
    }

    /// Copy the dot grid into the terminal back buffer as braille characters
    pub fn blit(&self, term: &mut Terminal, origin_x: i32, origin_y: i32) {
        for cy in 0..self.cells_h {
            let by = cy * 4;
            for cx in 0..self.cells_w {
                let bx = cx * 2;

                let mut bits: u8 = 0;
                // Standard braille dot numbering
                if self.dots[by][bx] {
                    bits |= 0x01;
                }
                if self.dots[by + 1][bx] {
                    bits |= 0x02;
                }
                if self.dots[by + 2][bx] {
                    bits |= 0x04;
                }
                if self.dots[by][bx + 1] {
                    bits |= 0x08;
                }
                if self.dots[by + 1][bx + 1] {
                    bits |= 0x10;
                }
                if self.dots[by + 2][bx + 1] {
                    bits |= 0x20;
                }
                if self.dots[by + 3][bx] {
                    bits |= 0x40;
                }
                if self.dots[by + 3][bx + 1] {
                    bits |= 0x80;
                }

                if bits == 0 {
                    continue;
                }
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                let (color, bold) = self.cell_color[cy][cx].unwrap_or(self.fill_color);
                term.set(origin_x + cx as i32, origin_y + cy as i32, ch, Some(color), bold);
            }
        }
    }
}

impl Surface for BrailleSurface {
    fn width(&self) -> f32 {
        self.dot_w as f32
    }

    fn height(&self) -> f32 {
        self.dot_h as f32
    }

    fn clear(&mut self) {
        for row in &mut self.dots {
            for dot in row {
                *dot = false;
            }
        }
        for row in &mut self.cell_color {
            for cell in row {
                *cell = None;
            }
        }
    }

    fn set_fill(&mut self, color: Color, bold: bool) {
        self.fill_color = (color, bold);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        if let Some(&first) = self.path.first() {
            if self.path.last() != Some(&first) {
                self.path.push(first);
            }
        }
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }

        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for &(_, y) in &self.path {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let row_start = min_y.floor().max(0.0) as i32;
        let row_end = (max_y.ceil() as i32).min(self.dot_h as i32);

        let mut crossings: Vec<f32> = Vec::new();
        for y in row_start..row_end {
            // Sample each dot at its center
            let yc = y as f32 + 0.5;

            crossings.clear();
            let n = self.path.len();
            for i in 0..n {
                let (ax, ay) = self.path[i];
                let (bx, by) = self.path[(i + 1) % n];
                if (ay <= yc) != (by <= yc) {
                    crossings.push(ax + (yc - ay) * (bx - ax) / (by - ay));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let x_start = (pair[0] - 0.5).ceil().max(0.0) as i32;
                let x_end = ((pair[1] - 0.5).ceil() as i32).min(self.dot_w as i32);
                for x in x_start..x_end {
                    self.set_dot(x, y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(surface: &mut BrailleSurface, x0: f32, y0: f32, x1: f32, y1: f32) {
        surface.begin_path();
        surface.move_to(x0, y0);
        surface.line_to(x1, y0);
        surface.line_to(x1, y1);
        surface.line_to(x0, y1);
        surface.close_path();
        surface.fill();
    }

    fn dot_count(surface: &BrailleSurface) -> usize {
        surface
            .dots
            .iter()
            .map(|row| row.iter().filter(|d| **d).count())
            .sum()
    }

    #[test]
    fn full_rect_sets_every_dot() {
        let mut s = BrailleSurface::new(4, 2);
        let (w, h) = (s.width(), s.height());
        rect(&mut s, 0.0, 0.0, w, h);
        assert_eq!(dot_count(&s), 8 * 8);
    }

    #[test]
    fn clear_erases_dots_and_colors() {
        let mut s = BrailleSurface::new(4, 2);
        let (w, h) = (s.width(), s.height());
        rect(&mut s, 0.0, 0.0, w, h);
        s.clear();
        assert_eq!(dot_count(&s), 0);
        assert!(s.cell_color.iter().flatten().all(|c| c.is_none()));
    }

    #[test]
    fn triangle_covers_half_the_rect() {
        let mut s = BrailleSurface::new(8, 4);
        s.begin_path();
        s.move_to(0.0, 0.0);
        s.line_to(16.0, 0.0);
        s.line_to(0.0, 16.0);
        s.close_path();
        s.fill();

        // Near-diagonal coverage: inside corner filled, far corner empty
        assert!(s.dots[0][0]);
        assert!(!s.dots[15][15]);
        let count = dot_count(&s);
        assert!(count > 16 * 16 / 3 && count < 2 * 16 * 16 / 3, "count={}", count);
    }

    #[test]
    fn fill_marks_touched_cells_with_current_color() {
        let mut s = BrailleSurface::new(4, 2);
        s.set_fill(Color::Cyan, true);
        rect(&mut s, 0.0, 0.0, 2.0, 4.0);
        assert_eq!(s.cell_color[0][0], Some((Color::Cyan, true)));
        assert_eq!(s.cell_color[0][3], None);
    }

    #[test]
    fn degenerate_path_fills_nothing() {
        let mut s = BrailleSurface::new(4, 2);
        s.begin_path();
        s.move_to(1.0, 1.0);
        s.line_to(2.0, 2.0);
        s.fill();
        assert_eq!(dot_count(&s), 0);
    }
}
