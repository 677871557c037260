//! Character framebuffer the board is composed in before it is flushed.
//!
//! Pure data: no terminal I/O happens here.

pub use crate::types::Rgb;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Colors and weight of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    /// Foreground and background in one color.
    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::solid(BLACK)
    }
}

/// One character position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// Row-major grid of glyphs; writes outside the bounds are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); area(width, height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Change the dimensions and blank every glyph, keeping the allocation.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(area(width, height), Glyph::default());
    }

    /// Glyphs of row `y`.
    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.glyphs[start..start + self.width as usize])
    }

    /// Characters of row `y` (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).and_then(|row| row.get(x as usize)).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            let i = (y as usize) * (self.width as usize) + (x as usize);
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.set(col, row, glyph);
            }
        }
    }

    /// Write `text` left to right from (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, Glyph::new(ch, style));
        }
    }
}

fn area(width: u16, height: u16) -> usize {
    (width as usize) * (height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        let x = Glyph::new('X', Style::default());
        fb.set(3, 0, x);
        fb.set(0, 2, x);
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.row_text(1), "   ");
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "HELLO", Style::default());
        assert_eq!(fb.row_text(0), "  HE");
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill_rect(1, 1, 5, 5, Glyph::new('#', Style::default()));
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.row_text(1), " ##");
    }

    #[test]
    fn resize_blanks_and_changes_dimensions() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", Style::default());
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert_eq!(fb.row_text(0), "     ");
        assert_eq!(fb.row(3), None);
        assert!(!fb.same_size(&FrameBuffer::new(2, 2)));
    }

    #[test]
    fn bold_style_keeps_colors() {
        let style = Style::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)).bold();
        assert!(style.bold);
        assert_eq!(style.fg, Rgb::new(1, 2, 3));
        assert_eq!(Style::solid(Rgb::new(7, 7, 7)).bg, Rgb::new(7, 7, 7));
    }
}
