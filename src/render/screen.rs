//! Status block and summary rendering.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use terminal_size::{terminal_size, Width};

use super::progress::{progress_bar_width, render_progress_line};
use super::theme::Theme;
use crate::stats::ResourceSnapshot;
use crate::timefmt::{elapsed_ms, format_clock_12h, format_elapsed};

/// First line of every status block.
pub const BANNER: &str = "Mouse Mover is running. Press CTRL + C to exit.";

/// What one status block shows.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub started_at: DateTime<Local>,
    pub now: DateTime<Local>,
    pub cycles: u32,
    pub total_cycles: u32,
    pub resources: ResourceSnapshot,
}

/// What the final summary shows.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub cycles: u32,
    pub resources: ResourceSnapshot,
}

/// Writes the status screen to `out`.
///
/// In interactive mode the screen is cleared before every block and the
/// terminal cursor is hidden until the summary is printed. Otherwise blocks
/// are appended one after another.
pub struct StatusScreen<W: Write> {
    out: W,
    theme: Theme,
    interactive: bool,
    bar_width: usize,
    cursor_hidden: bool,
}

impl<W: Write> StatusScreen<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        let columns = if interactive {
            terminal_size().map(|(Width(w), _)| w)
        } else {
            None
        };
        Self {
            out,
            theme: Theme::for_output(interactive),
            interactive,
            bar_width: progress_bar_width(columns),
            cursor_hidden: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The underlying writer.
    pub fn output(&self) -> &W {
        &self.out
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn header(&mut self, started_at: &DateTime<Local>) -> io::Result<()> {
        writeln!(self.out, "{}", self.theme.secondary_text(BANNER))?;
        writeln!(
            self.out,
            "{}",
            self.theme.primary_text(&format!(
                "Program started at: {}",
                format_clock_12h(started_at)
            ))
        )
    }

    fn stat_lines(
        &mut self,
        elapsed: u64,
        cycles: u32,
        resources: &ResourceSnapshot,
    ) -> io::Result<()> {
        let lines = [
            format!("Elapsed Time: {}", format_elapsed(elapsed)),
            format!("Mouse Cycles: {}", cycles),
            format!("Memory Usage: {}", resources.memory_display()),
            format!("CPU Usage: {}", resources.load_display()),
        ];
        for line in &lines {
            writeln!(self.out, "{}", self.theme.primary_text(line))?;
        }
        Ok(())
    }

    fn progress(&mut self, value: u32, total: u32) -> io::Result<()> {
        let line = render_progress_line(&self.theme, self.bar_width, value, total);
        writeln!(self.out, "{}", line)
    }

    /// Initial screen: banner, start time and an empty progress bar.
    pub fn begin(&mut self, started_at: &DateTime<Local>, total_cycles: u32) -> io::Result<()> {
        self.clear()?;
        if self.interactive {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }
        self.header(started_at)?;
        self.progress(0, total_cycles)?;
        self.out.flush()
    }

    /// One status block, shown after every tick.
    pub fn status(&mut self, view: &StatusView) -> io::Result<()> {
        self.clear()?;
        self.header(&view.started_at)?;
        self.stat_lines(
            elapsed_ms(&view.started_at, &view.now),
            view.cycles,
            &view.resources,
        )?;
        self.progress(view.cycles, view.total_cycles)?;
        self.out.flush()
    }

    /// The final summary. Restores the terminal cursor.
    pub fn summary(&mut self, view: &SummaryView) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.theme.success_text("Summary:"))?;
        writeln!(
            self.out,
            "{}",
            self.theme.primary_text(&format!(
                "Start Time: {}",
                format_clock_12h(&view.started_at)
            ))
        )?;
        writeln!(
            self.out,
            "{}",
            self.theme
                .primary_text(&format!("End Time: {}", format_clock_12h(&view.ended_at)))
        )?;
        self.stat_lines(
            elapsed_ms(&view.started_at, &view.ended_at),
            view.cycles,
            &view.resources,
        )?;
        if self.cursor_hidden {
            queue!(self.out, Show)?;
            self.cursor_hidden = false;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for StatusScreen<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = queue!(self.out, Show);
            let _ = self.out.flush();
        }
    }
}
