//! Terminal display and UI rendering
//!
//! Fixed 80-column layout:
//! - row 0: round number, miss count, accuracy
//! - row 2: the sentence as written
//! - rows 4-6: framed normalized sentence, cursor on the next character
//! - row 8: last mistake
//! - row 10: help line, replaced by the summary when the session ends

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use kana_kb_trainer::kana::Target;
use kana_kb_trainer::session::{Presenter, ProgressView, SessionResult, Verdict};
use kana_kb_trainer::TrainerError;
use std::io::{stdout, Write};
use unicode_width::UnicodeWidthStr;

const WIDTH: usize = 80;
const ROW_HEADER: u16 = 0;
const ROW_SENTENCE: u16 = 2;
const ROW_BOX_TOP: u16 = 4;
const ROW_TARGET: u16 = 5;
const ROW_BOX_BOTTOM: u16 = 6;
const ROW_MISTAKE: u16 = 8;
const ROW_RULE: u16 = 9;
const ROW_HELP: u16 = 10;

/// Column where the framed sentence starts
const TARGET_COL: u16 = 2;
/// Column of the right frame edge
const BORDER_COL: u16 = 79;
/// Header columns: "Miss:" label and the accuracy value after "Accuracy:"
const MISS_COL: usize = 54;
const ACCURACY_COL: u16 = 73;

/// Header row: `No: r/t`, miss count at 54, `Accuracy:` at 64, value at 73-77, `%` at 78
pub fn header_line(round: Option<(u32, u32)>, miss: u32, accuracy: Option<f64>) -> String {
    let number = match round {
        Some((round, total)) => format!("No: {:3}/{:3}", round, total),
        None => "No:".to_string(),
    };
    let accuracy = accuracy.map_or_else(|| "---.-".to_string(), |a| format!("{:>5.1}", a));
    format!(
        "{number:<width$}Miss: {miss:3} Accuracy:{accuracy}%",
        width = MISS_COL
    )
}

/// Terminal display manager
pub struct Display {
    /// Cleared once the terminal has been restored
    active: bool,
    /// (round, total) once the first round started
    round: Option<(u32, u32)>,
    miss: u32,
    /// None until the first keystroke
    accuracy: Option<f64>,
}

impl Display {
    /// Take over the terminal: raw mode, alternate screen, static frame
    pub fn new() -> Result<Self, TrainerError> {
        terminal::enable_raw_mode()?;
        let mut display = Display {
            active: true,
            round: None,
            miss: 0,
            accuracy: None,
        };
        execute!(stdout(), EnterAlternateScreen)?;
        display.draw_frame()?;
        Ok(display)
    }

    /// Clear screen and draw the parts that never change
    fn draw_frame(&mut self) -> Result<(), TrainerError> {
        let mut stdout = stdout();
        let border = format!("+{}+", "-".repeat(WIDTH - 2));

        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 1),
            Print("=".repeat(WIDTH)),
            cursor::MoveTo(0, ROW_BOX_TOP),
            Print(&border),
            cursor::MoveTo(0, ROW_TARGET),
            Print("|"),
            cursor::MoveTo(0, ROW_BOX_BOTTOM),
            Print(&border),
            cursor::MoveTo(0, ROW_RULE),
            Print("=".repeat(WIDTH)),
            cursor::MoveTo(0, ROW_HELP),
            SetForegroundColor(Color::DarkGrey),
            Print("Press ESC to exit"),
            ResetColor,
        )?;
        self.draw_header()?;
        stdout.flush()?;
        Ok(())
    }

    /// Round number, miss count and accuracy
    fn draw_header(&self) -> Result<(), TrainerError> {
        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, ROW_HEADER),
            terminal::Clear(ClearType::CurrentLine),
            Print(header_line(self.round, self.miss, self.accuracy)),
        )?;

        // Recolour the value in place; header_line already placed it
        if let Some(accuracy) = self.accuracy {
            queue!(
                stdout,
                cursor::MoveTo(ACCURACY_COL, ROW_HEADER),
                SetForegroundColor(if accuracy > 90.0 {
                    Color::Green
                } else if accuracy > 80.0 {
                    Color::Yellow
                } else {
                    Color::Red
                }),
                Print(format!("{:>5.1}", accuracy)),
                ResetColor,
            )?;
        }
        Ok(())
    }

    /// Restore the terminal
    pub fn shutdown(&mut self) -> Result<(), TrainerError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// Terminal column of the character at `cursor` (kana are double width)
pub fn cursor_column(target: &Target, cursor: usize) -> u16 {
    let typed: String = target.display().chars().take(cursor).collect();
    let col = usize::from(TARGET_COL) + typed.width();
    u16::try_from(col).unwrap_or(u16::MAX)
}

impl Presenter for Display {
    fn round_started(&mut self, round: u32, total: u32, target: &Target) -> Result<(), TrainerError> {
        self.round = Some((round, total));
        self.draw_header()?;

        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, ROW_SENTENCE),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Cyan),
            Print(target.original()),
            ResetColor,
            cursor::MoveTo(0, ROW_MISTAKE),
            terminal::Clear(ClearType::CurrentLine),
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn progress(&mut self, view: &ProgressView<'_>) -> Result<(), TrainerError> {
        let mut stdout = stdout();
        let typed: String = view.target.display().chars().take(view.cursor).collect();
        let rest: String = view.target.display().chars().skip(view.cursor).collect();

        queue!(
            stdout,
            cursor::MoveTo(TARGET_COL, ROW_TARGET),
            terminal::Clear(ClearType::UntilNewLine),
            SetForegroundColor(Color::Green),
            Print(typed),
            ResetColor,
            Print(rest),
            cursor::MoveTo(BORDER_COL, ROW_TARGET),
            Print("|"),
        )?;

        match view.verdict {
            Some(Verdict::Mistake { typed }) => queue!(
                stdout,
                cursor::MoveTo(0, ROW_MISTAKE),
                terminal::Clear(ClearType::CurrentLine),
                SetForegroundColor(Color::Red),
                Print(format!("Oops! You typed: {}", typed)),
                ResetColor,
            )?,
            Some(Verdict::Correct) => queue!(
                stdout,
                cursor::MoveTo(0, ROW_MISTAKE),
                terminal::Clear(ClearType::CurrentLine),
            )?,
            _ => {}
        }

        self.miss = view.stats.miss();
        if view.verdict.is_some() {
            self.accuracy = Some(view.stats.accuracy());
        }
        self.draw_header()?;
        queue!(
            stdout,
            cursor::MoveTo(cursor_column(view.target, view.cursor), ROW_TARGET)
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn finished(&mut self, result: &SessionResult) -> Result<(), TrainerError> {
        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, ROW_HELP),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "Rounds: {}/{}  |  Accuracy: {:.1}%  |  Speed: {:.0} keys/min",
                result.rounds_completed,
                result.rounds_total,
                result.accuracy,
                result.keystrokes_per_minute()
            )),
        )?;

        if !result.cancelled {
            queue!(
                stdout,
                cursor::MoveTo(0, ROW_HELP + 1),
                SetForegroundColor(Color::DarkGrey),
                Print("Press any key to exit"),
                ResetColor,
            )?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_kb_trainer::kana::KeyKanaTable;

    #[test]
    fn test_cursor_column_counts_double_width() {
        let target = Target::build("あかa", KeyKanaTable::global());
        assert_eq!(cursor_column(&target, 0), 2);
        assert_eq!(cursor_column(&target, 1), 4);
        assert_eq!(cursor_column(&target, 2), 6);
        assert_eq!(cursor_column(&target, 3), 7);
    }

    #[test]
    fn test_header_before_first_keystroke() {
        let line = header_line(None, 0, None);
        assert!(line.starts_with("No:"));
        assert_eq!(&line[54..63], "Miss:   0");
        assert_eq!(&line[64..], "Accuracy:---.-%");
        assert_eq!(line.len(), 79);
    }

    #[test]
    fn test_header_value_sits_between_label_and_percent() {
        let line = header_line(Some((3, 8)), 1, Some(200.0 / 3.0));
        assert!(line.starts_with("No:   3/  8"));
        assert_eq!(&line[64..], "Accuracy: 66.7%");
        assert_eq!(line.len(), 79);

        let perfect = header_line(Some((1, 8)), 0, Some(100.0));
        assert_eq!(&perfect[64..], "Accuracy:100.0%");
        assert_eq!(&perfect[usize::from(ACCURACY_COL)..78], "100.0");

        let capped = header_line(Some((8, 8)), 999, Some(0.0));
        assert_eq!(&capped[54..63], "Miss: 999");
        assert_eq!(&capped[64..], "Accuracy:  0.0%");
    }
}
