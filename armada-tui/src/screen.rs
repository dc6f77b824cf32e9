//! Raw-mode terminal output.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use trellis::Row;

pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until the next input event.
    pub fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }

    /// Draw the visible rows and the status line at the bottom.
    pub fn draw(&mut self, rows: &[Row], status: &str, width: u16, height: u16) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;

        for (y, row) in rows.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            let mut used = 0usize;
            for span in &row.spans {
                let remaining = (width as usize).saturating_sub(used);
                if remaining == 0 {
                    break;
                }
                let content = clip(&span.content, remaining);
                used += content.width();

                if let Some(fg) = span.style.foreground {
                    queue!(
                        self.stdout,
                        SetForegroundColor(Color::Rgb {
                            r: fg.r,
                            g: fg.g,
                            b: fg.b,
                        })
                    )?;
                }
                if span.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                queue!(
                    self.stdout,
                    Print(content),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(clip(status, width as usize)),
            SetAttribute(Attribute::Reset)
        )?;

        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Clip text to a display width.
fn clip(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
