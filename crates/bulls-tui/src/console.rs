//! Line input from the player.
//!
//! Ctrl+C never reaches us as a signal while a prompt is waiting: the terminal
//! console reads keys in raw mode and reports it as [`Input::Interrupted`].

use crossterm::{
    cursor::MoveLeft,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, BufRead, IsTerminal, Write};

/// One read from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line, without its trailing newline
    Line(String),
    /// Ctrl+C, or end of input
    Interrupted,
}

/// Source of player input
pub trait Console {
    fn read_line(&mut self) -> io::Result<Input>;
}

/// Console backed by the real terminal
pub struct TerminalConsole {
    interactive: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_raw_line(&mut self) -> io::Result<Input> {
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => {
                    queue!(stdout, Print("\r\n"))?;
                    stdout.flush()?;
                    return Ok(Input::Interrupted);
                }
                KeyCode::Char('d') if ctrl && line.is_empty() => {
                    queue!(stdout, Print("\r\n"))?;
                    stdout.flush()?;
                    return Ok(Input::Interrupted);
                }
                KeyCode::Enter => {
                    queue!(stdout, Print("\r\n"))?;
                    stdout.flush()?;
                    return Ok(Input::Line(line));
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        queue!(stdout, MoveLeft(1), Print(' '), MoveLeft(1))?;
                        stdout.flush()?;
                    }
                }
                KeyCode::Char(c) if !ctrl => {
                    line.push(c);
                    queue!(stdout, Print(c))?;
                    stdout.flush()?;
                }
                _ => {}
            }
        }
    }

    fn read_piped_line(&mut self) -> io::Result<Input> {
        read_buffered_line(&mut io::stdin().lock())
    }
}

/// Read one line from buffered input; end of input is an interrupt
fn read_buffered_line(reader: &mut impl BufRead) -> io::Result<Input> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Input::Interrupted);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Input::Line(line))
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Input> {
        if self.interactive {
            self.read_raw_line()
        } else {
            self.read_piped_line()
        }
    }
}

/// Raw mode for as long as the guard lives
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Console that replays canned input; `None` entries are interrupts
#[cfg(test)]
pub struct ScriptedConsole {
    lines: std::collections::VecDeque<Option<String>>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| l.map(Into::into)).collect(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Input> {
        // Running out of script behaves like end of input
        Ok(match self.lines.pop_front() {
            Some(Some(line)) => Input::Line(line),
            Some(None) | None => Input::Interrupted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new([Some("1"), None, Some("quit")]);
        assert_eq!(console.read_line().unwrap(), Input::Line("1".to_string()));
        assert_eq!(console.read_line().unwrap(), Input::Interrupted);
        assert_eq!(console.read_line().unwrap(), Input::Line("quit".to_string()));
        assert_eq!(console.read_line().unwrap(), Input::Interrupted);
    }

    #[test]
    fn test_buffered_lines() {
        let mut reader = io::Cursor::new("12\r\n 34 \n\n567");
        let mut next = || read_buffered_line(&mut reader).unwrap();
        assert_eq!(next(), Input::Line("12".to_string()));
        assert_eq!(next(), Input::Line(" 34 ".to_string()));
        assert_eq!(next(), Input::Line(String::new()));
        // Last line without a newline still counts
        assert_eq!(next(), Input::Line("567".to_string()));
        assert_eq!(next(), Input::Interrupted);
        assert_eq!(next(), Input::Interrupted);
    }
}
