//! Line-oriented terminal front end.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{MenuChoice, Shell, ShellLayout, ABOUT_TEXT};
use crate::session::{AnswerOutcome, Question, SessionSummary};
use crate::Result;

const MENU_ITEMS: [(MenuChoice, &str); 3] = [
    (MenuChoice::Quiz, "Quiz"),
    (MenuChoice::About, "About"),
    (MenuChoice::Exit, "Exit"),
];

/// Terminal shell over any line reader and writer.
///
/// The binary wires it to stdin/stdout; tests use in-memory buffers.
pub struct TerminalShell<R, W> {
    input: R,
    output: W,
    layout: ShellLayout,
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    pub fn new(input: R, output: W, layout: ShellLayout) -> Self {
        Self {
            input,
            output,
            layout,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Shell for TerminalShell<R, W> {
    fn menu(&mut self) -> Result<MenuChoice> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Quiz Menu ===")?;
            for (i, (_, label)) in MENU_ITEMS.iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, label)?;
            }
            write!(self.output, "> ")?;

            let Some(line) = self.read_line()? else {
                return Ok(MenuChoice::Exit);
            };

            let picked = MENU_ITEMS.iter().enumerate().find_map(|(i, (choice, label))| {
                (line == (i + 1).to_string() || line.eq_ignore_ascii_case(label)).then_some(*choice)
            });

            match picked {
                Some(choice) => {
                    debug!(?choice, "menu selection");
                    return Ok(choice);
                }
                None => writeln!(self.output, "Unknown menu entry: {line}")?,
            }
        }
    }

    fn show_about(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== About ===")?;
        writeln!(self.output, "{ABOUT_TEXT}")?;
        Ok(())
    }

    fn render_question(&mut self, index: usize, total: usize, question: &Question) -> Result<()> {
        writeln!(self.output)?;
        if self.layout == ShellLayout::Menu {
            writeln!(self.output, "Question {}/{}", index + 1, total)?;
            if !question.category.is_empty() {
                writeln!(
                    self.output,
                    "[{}{}{}]",
                    question.category,
                    if question.difficulty.is_empty() { "" } else { " | " },
                    question.difficulty
                )?;
            }
        }
        writeln!(self.output, "{}", question.display_text())?;

        let chosen = question.user_answer();
        for (i, answer) in question.display_answers().iter().enumerate() {
            let marker = if chosen == Some(i + 1) { '*' } else { ' ' };
            writeln!(self.output, "{marker} {}. {answer}", i + 1)?;
        }
        Ok(())
    }

    fn read_choice(&mut self, count: usize) -> Result<Option<usize>> {
        loop {
            write!(self.output, "Your answer (1-{count}, q to quit): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "Please enter a number between 1 and {count}."
                )?,
            }
        }
    }

    fn show_result(&mut self, outcome: &AnswerOutcome) -> Result<()> {
        writeln!(
            self.output,
            "The correct answer is: {}",
            outcome.correct_answer
        )?;
        Ok(())
    }

    fn show_complete(&mut self, summary: &SessionSummary) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Game Over: game finished!")?;
        writeln!(
            self.output,
            "You got {} of {} right.",
            summary.correct, summary.total
        )?;
        Ok(())
    }

    fn ask_restart(&mut self) -> Result<bool> {
        write!(self.output, "Play again? [y/N] ")?;
        Ok(self
            .read_line()?
            .is_some_and(|line| matches!(line.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "Error: {message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell(input: &str, layout: ShellLayout) -> TerminalShell<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalShell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), layout)
    }

    fn text(shell: TerminalShell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(shell.into_output()).unwrap()
    }

    fn question() -> Question {
        let mut q = Question::new(
            "What does &quot;RAM&quot; stand for?",
            "Random Access Memory",
            vec!["Read Only Memory".into()],
        );
        q.category = "Science: Computers".into();
        q.difficulty = "easy".into();
        q.shuffle()
    }

    #[test]
    fn test_menu_by_number_and_name() {
        let mut s = shell("2\nquiz\n", ShellLayout::Menu);
        assert_eq!(s.menu().unwrap(), MenuChoice::About);
        assert_eq!(s.menu().unwrap(), MenuChoice::Quiz);
    }

    #[test]
    fn test_menu_retries_then_eof_exits() {
        let mut s = shell("nope\n", ShellLayout::Menu);
        assert_eq!(s.menu().unwrap(), MenuChoice::Exit);
        assert!(text(s).contains("Unknown menu entry: nope"));
    }

    #[test]
    fn test_read_choice_validates_range() {
        let mut s = shell("0\nabc\n5\n2\n", ShellLayout::Embedded);
        assert_eq!(s.read_choice(4).unwrap(), Some(1));
        let out = text(s);
        assert_eq!(out.matches("between 1 and 4").count(), 3);
    }

    #[test]
    fn test_read_choice_quit() {
        let mut s = shell("q\n", ShellLayout::Embedded);
        assert_eq!(s.read_choice(2).unwrap(), None);

        let mut s = shell("", ShellLayout::Embedded);
        assert_eq!(s.read_choice(2).unwrap(), None);
    }

    #[test]
    fn test_render_menu_layout() {
        let mut s = shell("", ShellLayout::Menu);
        s.render_question(0, 4, &question()).unwrap();
        let out = text(s);
        assert!(out.contains("Question 1/4"));
        assert!(out.contains("[Science: Computers | easy]"));
        assert!(out.contains("What does \"RAM\" stand for?"));
        assert!(out.contains("1. "));
        assert!(out.contains("2. "));
    }

    #[test]
    fn test_render_embedded_layout_has_no_header() {
        let mut s = shell("", ShellLayout::Embedded);
        s.render_question(0, 4, &question()).unwrap();
        let out = text(s);
        assert!(!out.contains("Question 1/4"));
        assert!(out.contains("What does \"RAM\" stand for?"));
    }

    #[test]
    fn test_render_marks_recorded_answer() {
        let mut q = question();
        q.record_answer(1);
        let mut s = shell("", ShellLayout::Embedded);
        s.render_question(0, 1, &q).unwrap();
        assert!(text(s).contains("* 2. "));
    }

    #[test]
    fn test_result_and_complete() {
        let mut s = shell("", ShellLayout::Menu);
        s.show_result(&AnswerOutcome {
            correct_answer: "Jean-Luc Picard & Co".into(),
            was_correct: false,
        })
        .unwrap();
        s.show_complete(&SessionSummary {
            total: 4,
            answered: 4,
            correct: 3,
        })
        .unwrap();
        let out = text(s);
        assert!(out.contains("The correct answer is: Jean-Luc Picard & Co"));
        assert!(out.contains("Game Over"));
        assert!(out.contains("3 of 4"));
    }

    #[test]
    fn test_ask_restart() {
        let mut s = shell("Y\nno\n", ShellLayout::Menu);
        assert!(s.ask_restart().unwrap());
        assert!(!s.ask_restart().unwrap());
        assert!(!s.ask_restart().unwrap());
    }
}
