//! Terminal output for the board framebuffer.
//!
//! Each frame is encoded into a byte buffer of crossterm commands and written
//! with a single flush. The first frame after `enter`, a resize or
//! `invalidate` is sent whole; later frames only send the runs of glyphs that
//! changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Raw-mode, alternate-screen terminal output.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; None forces a full redraw.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.shown = None;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next `draw` repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.shown {
            Some(prev) => encode_diff_into(prev, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush()?;

        match self.shown.as_mut() {
            Some(prev) => prev.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a whole frame, clearing the screen first.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = GlyphWriter::new(out);
    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            writer.move_to(0, y)?;
            writer.print_all(row)?;
        }
    }
    writer.finish()
}

/// Encode only the glyphs of `next` that differ from `prev`.
///
/// Falls back to a full frame when the sizes differ.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !prev.same_size(next) {
        return encode_full_into(next, out);
    }
    let mut writer = GlyphWriter::new(out);
    for run in changed_runs(prev, next) {
        if let Some(row) = next.row(run.y) {
            let start = run.x as usize;
            writer.move_to(run.x, run.y)?;
            writer.print_all(&row[start..start + run.len as usize])?;
        }
    }
    writer.finish()
}

/// Horizontal stretch of glyphs that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Changed runs between two equally sized frames, top to bottom.
pub fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = Run> + 'a {
    (0..next.height()).flat_map(move |y| RowRuns {
        prev: prev.row(y).unwrap_or(&[]),
        next: next.row(y).unwrap_or(&[]),
        y,
        x: 0,
    })
}

struct RowRuns<'a> {
    prev: &'a [Glyph],
    next: &'a [Glyph],
    y: u16,
    x: usize,
}

impl Iterator for RowRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let len = self.next.len().min(self.prev.len());
        let differs = |i: usize| self.prev[i] != self.next[i];

        let start = (self.x..len).find(|&i| differs(i))?;
        let end = (start..len).find(|&i| !differs(i)).unwrap_or(len);
        self.x = end;
        Some(Run {
            x: start as u16,
            y: self.y,
            len: (end - start) as u16,
        })
    }
}

/// Prints glyphs, emitting style changes only when the style differs.
struct GlyphWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<Style>,
}

impl<'a> GlyphWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn print_all(&mut self, glyphs: &[Glyph]) -> Result<()> {
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                set_style(self.out, glyph.style)?;
                self.style = Some(glyph.style);
            }
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
    let weight = if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    };
    out.queue(SetAttribute(weight))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> FrameBuffer {
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut fb = FrameBuffer::new(width, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            fb.put_str(0, y as u16, row, Style::default());
        }
        fb
    }

    #[test]
    fn border_color_maps_to_truecolor() {
        assert_eq!(
            color(Rgb::new(93, 216, 228)),
            Color::Rgb {
                r: 93,
                g: 216,
                b: 228
            }
        );
    }

    #[test]
    fn full_encode_prints_every_row() {
        let mut out = Vec::new();
        encode_full_into(&frame(&["AB", "CD"]), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let fb = frame(&["XYZ"]);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('X'));
    }

    #[test]
    fn diff_with_new_size_sends_everything() {
        let mut out = Vec::new();
        encode_diff_into(&frame(&["AB"]), &frame(&["ABC", "DEF"]), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ABC"));
        assert!(text.contains("DEF"));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let prev = frame(&[".....", "....."]);
        let next = frame(&[".XXX.", "X...X"]);

        let runs: Vec<Run> = changed_runs(&prev, &next).collect();
        assert_eq!(
            runs,
            vec![
                Run { x: 1, y: 0, len: 3 },
                Run { x: 0, y: 1, len: 1 },
                Run { x: 4, y: 1, len: 1 },
            ]
        );
    }

    #[test]
    fn diff_only_prints_changed_glyphs() {
        let prev = frame(&["....."]);
        let next = frame(&["..Q.."]);
        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('Q'));
        assert!(!text.contains('.'));
    }
}
