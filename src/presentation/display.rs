//! Countdown label rendering

use std::io::{self, Write};

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};

use crate::{
    engine::Event,
    state::FontSize,
    time::{format, is_warning, progress_pct},
};

const PROGRESS_WIDTH: usize = 20;

/// How events are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single self-updating label line
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Renders countdown events for a terminal
pub struct Display<W> {
    out: W,
    font: FontSize,
    mode: OutputMode,
    total_seconds: u64,
}

impl<W: Write> Display<W> {
    pub fn new(out: W, font: FontSize, mode: OutputMode) -> Self {
        Self {
            out,
            font,
            mode,
            total_seconds: 0,
        }
    }

    pub fn render(&mut self, event: &Event) -> io::Result<()> {
        if let Event::Started { total_seconds, .. } = event {
            self.total_seconds = *total_seconds;
        }

        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
            OutputMode::Text => self.render_text(event)?,
        }

        self.out.flush()
    }

    fn render_text(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::Started { total_seconds, .. } => self.label(*total_seconds, false),
            Event::Tick {
                remaining_seconds, ..
            }
            | Event::Resumed {
                remaining_seconds, ..
            } => self.label(*remaining_seconds, false),
            Event::Paused {
                remaining_seconds, ..
            } => self.label(*remaining_seconds, true),
            Event::Finished { .. } => {
                let label = letter_spaced(&format(0), self.font.letter_spacing());
                queue!(
                    self.out,
                    MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    Print(label.red().bold()),
                    Print("\n"),
                    Print("Time's up!\n"),
                )
            }
            Event::Stopped { .. } => queue!(
                self.out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print("Countdown stopped.\n"),
            ),
        }
    }

    fn label(&mut self, remaining_seconds: u64, paused: bool) -> io::Result<()> {
        let text = letter_spaced(&format(remaining_seconds), self.font.letter_spacing());
        let pct = progress_pct(self.total_seconds, remaining_seconds);
        let bar = progress_bar(pct);

        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if is_warning(remaining_seconds) {
            queue!(self.out, Print(text.red().bold()))?;
        } else {
            queue!(self.out, Print(text.bold()))?;
        }
        queue!(self.out, Print(format!("  [{}] {:>3}%", bar, pct)))?;
        if paused {
            queue!(self.out, Print("  (paused)".yellow()))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Widen a label by putting `spacing` blanks between its characters
fn letter_spaced(text: &str, spacing: usize) -> String {
    let gap = " ".repeat(spacing);
    text.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(&gap)
}

fn progress_bar(pct: u8) -> String {
    let filled = PROGRESS_WIDTH * pct as usize / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}
