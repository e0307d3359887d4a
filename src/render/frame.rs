//! Frame composition.
//!
//! A frame is, in order: hide cursor, home, one line per text row, the status bar, the
//! message bar, cursor placement, show cursor. Color switches are only emitted where the
//! highlight color actually changes between adjacent bytes.

use crate::buffer::{Row, TextBuffer};
use crate::error::Result;
use crate::render::output::OutputBuffer;
use crate::render::theme::ColorTheme;
use crate::view::Viewport;
use ratatui::crossterm::cursor;
use ratatui::crossterm::queue;
use ratatui::crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use ratatui::crossterm::terminal::{Clear, ClearType};

/// Longest filename prefix shown in the status bar.
const STATUS_FILENAME_MAX: usize = 20;

/// Everything a frame shows. The viewport must already be scrolled for this frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub buffer: &'a TextBuffer,
    pub view: &'a Viewport,
    pub filename: Option<&'a str>,
    /// Status message to show, already filtered for age.
    pub message: Option<&'a str>,
}

/// Builds complete frames from editor state.
#[derive(Debug, Clone, Default)]
pub struct FrameCompositor {
    theme: ColorTheme,
}

impl FrameCompositor {
    pub fn new(theme: ColorTheme) -> Self {
        Self { theme }
    }

    /// Compose one full frame.
    pub fn compose(&self, ctx: &FrameContext<'_>) -> Result<OutputBuffer> {
        let mut out = OutputBuffer::new();
        queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;

        self.draw_rows(&mut out, ctx)?;
        draw_status_bar(&mut out, ctx)?;
        draw_message_bar(&mut out, ctx)?;

        let view = ctx.view;
        let x = view.rx.saturating_sub(view.col_offset);
        let y = view.cursor.cy.saturating_sub(view.row_offset);
        queue!(
            out,
            cursor::MoveTo(to_cell(x), to_cell(y)),
            cursor::Show
        )?;
        Ok(out)
    }

    fn draw_rows(&self, out: &mut OutputBuffer, ctx: &FrameContext<'_>) -> Result<()> {
        let view = ctx.view;
        let buffer = ctx.buffer;
        for y in 0..view.screen_rows {
            let file_row = y + view.row_offset;
            match buffer.row(file_row) {
                Some(row) => self.draw_text_row(out, row, view)?,
                None if buffer.is_empty() && y == view.screen_rows / 3 => {
                    draw_welcome(out, view.screen_cols)
                }
                None => out.append(b"~"),
            }
            queue!(out, Clear(ClearType::UntilNewLine))?;
            out.append(b"\r\n");
        }
        Ok(())
    }

    fn draw_text_row(&self, out: &mut OutputBuffer, row: &Row, view: &Viewport) -> Result<()> {
        let render = row.render();
        let start = view.col_offset.min(render.len());
        let end = (start + view.screen_cols).min(render.len());
        let tags = &row.highlight()[start..end];

        let mut current: Option<Color> = None;
        for (&byte, &tag) in render[start..end].iter().zip(tags) {
            if byte.is_ascii_control() {
                let glyph = if byte <= 26 { b'@' + byte } else { b'?' };
                queue!(out, SetAttribute(Attribute::Reverse))?;
                out.append(&[glyph]);
                queue!(out, SetAttribute(Attribute::Reset))?;
                if let Some(color) = current {
                    queue!(out, SetForegroundColor(color))?;
                }
                continue;
            }

            let color = self.theme.color_for(tag);
            if color != current {
                queue!(out, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
                current = color;
            }
            out.append(&[byte]);
        }
        queue!(out, SetForegroundColor(Color::Reset))?;
        Ok(())
    }
}

fn draw_welcome(out: &mut OutputBuffer, screen_cols: usize) {
    let welcome = format!("Kedit editor -- version {}", crate::VERSION);
    let len = welcome.len().min(screen_cols);
    let mut padding = (screen_cols - len) / 2;
    if padding > 0 {
        out.append(b"~");
        padding -= 1;
    }
    out.append(" ".repeat(padding).as_bytes());
    out.append(&welcome.as_bytes()[..len]);
}

fn draw_status_bar(out: &mut OutputBuffer, ctx: &FrameContext<'_>) -> Result<()> {
    let buffer = ctx.buffer;
    let cols = ctx.view.screen_cols;

    let mut left = Vec::with_capacity(cols);
    match ctx.filename {
        Some(name) => {
            let name = name.as_bytes();
            left.extend_from_slice(&name[..name.len().min(STATUS_FILENAME_MAX)]);
        }
        None => left.extend_from_slice(b"[No Name]"),
    }
    left.extend_from_slice(format!(" - {} lines", buffer.num_rows()).as_bytes());
    if buffer.is_dirty() {
        left.extend_from_slice(b" (modified)");
    }
    let right = format!(
        "{} | {}/{}",
        buffer.syntax().map_or("no ft", |rules| rules.file_type),
        ctx.view.cursor.cy + 1,
        buffer.num_rows()
    );

    queue!(out, SetAttribute(Attribute::Reverse))?;
    let mut len = left.len().min(cols);
    out.append(&left[..len]);
    while len < cols {
        if cols - len == right.len() {
            out.append(right.as_bytes());
            break;
        }
        out.append(b" ");
        len += 1;
    }
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.append(b"\r\n");
    Ok(())
}

fn draw_message_bar(out: &mut OutputBuffer, ctx: &FrameContext<'_>) -> Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    if let Some(message) = ctx.message {
        let message = message.as_bytes();
        out.append(&message[..message.len().min(ctx.view.screen_cols)]);
    }
    Ok(())
}

fn to_cell(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
