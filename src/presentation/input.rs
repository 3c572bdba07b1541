//! Setup prompts for duration and display size

use std::{
    io::{self, Write},
    ops::RangeInclusive,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use crate::{
    state::FontSize,
    time::{validate_and_combine, TimerDuration, MAX_INPUT_MINUTES},
};

const DEFAULT_MINUTES: i64 = 5;
const DEFAULT_SECONDS: i64 = 0;

/// Everything needed to launch a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub duration: TimerDuration,
    pub font: FontSize,
}

/// Line-based setup dialog.
///
/// Every prompt can be cancelled with `q` or end of input, in which case the
/// dialog yields `None` and no countdown is started.
pub struct InputDialog<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> InputDialog<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    /// Hand the remaining input back, e.g. for reading control keys
    pub fn into_lines(self) -> Lines<R> {
        self.lines
    }

    /// Collect whatever settings were not already provided
    pub async fn collect(
        &mut self,
        duration: Option<TimerDuration>,
        font: Option<FontSize>,
    ) -> io::Result<Option<Settings>> {
        let duration = match duration {
            Some(duration) => duration,
            None => match self.ask_duration().await? {
                Some(duration) => duration,
                None => return Ok(None),
            },
        };

        let font = match font {
            Some(font) => font,
            None => match self.ask_font_size().await? {
                Some(font) => font,
                None => return Ok(None),
            },
        };

        Ok(Some(Settings { duration, font }))
    }

    /// Ask for minutes and seconds until they form a usable duration
    pub async fn ask_duration(&mut self) -> io::Result<Option<TimerDuration>> {
        loop {
            let Some(minutes) = self
                .ask_integer(
                    "Enter countdown time in minutes",
                    0..=MAX_INPUT_MINUTES,
                    DEFAULT_MINUTES,
                )
                .await?
            else {
                return Ok(None);
            };

            let Some(seconds) = self
                .ask_integer("Enter additional seconds (0-59)", 0..=59, DEFAULT_SECONDS)
                .await?
            else {
                return Ok(None);
            };

            match validate_and_combine(minutes, seconds) {
                Ok(duration) => return Ok(Some(duration)),
                Err(e) => {
                    warn!("Rejected duration input: {}", e);
                    writeln!(self.out, "Please enter a valid time greater than 0.")?;
                }
            }
        }
    }

    pub async fn ask_font_size(&mut self) -> io::Result<Option<FontSize>> {
        writeln!(self.out, "Display size:")?;
        for (index, size) in FontSize::ALL.iter().enumerate() {
            writeln!(self.out, "  {}) {}", index + 1, size)?;
        }

        let default_choice = FontSize::ALL
            .iter()
            .position(|size| *size == FontSize::default())
            .map_or(1, |index| index as i64 + 1);

        let choice = self
            .ask_integer("Choose a size", 1..=FontSize::ALL.len() as i64, default_choice)
            .await?;

        Ok(choice.and_then(|choice| FontSize::ALL.get(choice as usize - 1).copied()))
    }

    /// Prompt until the answer is a whole number within `range`.
    ///
    /// An empty answer picks `default`.
    async fn ask_integer(
        &mut self,
        prompt: &str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> io::Result<Option<i64>> {
        loop {
            write!(self.out, "{} [{}]: ", prompt, default)?;
            self.out.flush()?;

            let Some(line) = self.lines.next_line().await? else {
                debug!("Input closed at prompt '{}'", prompt);
                return Ok(None);
            };

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("cancel") {
                debug!("Input cancelled at prompt '{}'", prompt);
                return Ok(None);
            }
            if answer.is_empty() {
                return Ok(Some(default));
            }

            match answer.parse::<i64>() {
                Ok(value) if range.contains(&value) => return Ok(Some(value)),
                _ => writeln!(
                    self.out,
                    "Please enter a whole number between {} and {}.",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(input: &str) -> (Option<Settings>, String) {
        let mut out = Vec::new();
        let settings = {
            let mut dialog = InputDialog::new(input.as_bytes(), &mut out);
            dialog.collect(None, None).await.unwrap()
        };
        (settings, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn collects_duration_and_font() {
        let (settings, _) = run("2\n30\n4\n").await;
        let settings = settings.unwrap();
        assert_eq!(settings.duration.as_secs(), 150);
        assert_eq!(settings.font, FontSize::ExtraLarge);
    }

    #[tokio::test]
    async fn empty_answers_take_defaults() {
        let (settings, _) = run("\n\n\n").await;
        let settings = settings.unwrap();
        assert_eq!(settings.duration.as_secs(), 300);
        assert_eq!(settings.font, FontSize::Large);
    }

    #[tokio::test]
    async fn zero_duration_reprompts() {
        let (settings, output) = run("0\n0\n0\n45\n1\n").await;
        let settings = settings.unwrap();
        assert_eq!(settings.duration.as_secs(), 45);
        assert_eq!(settings.font, FontSize::Small);
        assert!(output.contains("Please enter a valid time greater than 0."));
    }

    #[tokio::test]
    async fn out_of_range_answers_reprompt() {
        let (settings, output) = run("abc\n1000\n1\n75\n5\n2\n").await;
        let settings = settings.unwrap();
        assert_eq!(settings.duration.as_secs(), 65);
        assert_eq!(settings.font, FontSize::Medium);
        assert!(output.contains("between 0 and 999"));
        assert!(output.contains("between 0 and 59"));
    }

    #[tokio::test]
    async fn cancel_or_end_of_input_yields_none() {
        assert_eq!(run("q\n").await.0, None);
        assert_eq!(run("1\ncancel\n").await.0, None);
        assert_eq!(run("1\n0\n").await.0, None);
        assert_eq!(run("").await.0, None);
    }

    #[tokio::test]
    async fn preset_values_skip_their_prompts() {
        let mut out = Vec::new();
        let mut dialog = InputDialog::new("".as_bytes(), &mut out);
        let duration = TimerDuration::from_secs(90).unwrap();
        let settings = dialog
            .collect(Some(duration), Some(FontSize::Small))
            .await
            .unwrap();
        assert_eq!(
            settings,
            Some(Settings {
                duration,
                font: FontSize::Small
            })
        );
    }
}
