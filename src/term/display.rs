use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult};
use mikeos_basic::config::Config;
use mikeos_basic::dev::{
    DialogStyle, Display, Position, Screen, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP,
};
use mikeos_basic::error;
use mikeos_basic::lang::Error;
use mikeos_basic::mach::{cp437, PalettePair, POLL_INTERVAL};
use mortal::{Event, Key, PrepareConfig, Terminal};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// VGA palette index to ANSI colour number.
const ANSI: [u8; 16] = [0, 4, 2, 6, 1, 5, 3, 7, 8, 12, 10, 14, 9, 13, 11, 15];

fn style(colour: PalettePair) -> Style {
    Colour::Fixed(ANSI[colour.text as usize]).on(Colour::Fixed(ANSI[colour.bg as usize]))
}

fn io_error(e: std::io::Error) -> Error {
    error!(InternalError; e.to_string())
}

/// ## ANSI terminal display
///
/// Mirrors everything into a `Screen` so cursor and cell queries work,
/// and writes escape sequences to stdout. Keys come from `mortal` in
/// raw mode, lines from `linefeed`.
pub struct TermDisplay {
    screen: Screen,
    exited: Arc<AtomicBool>,
    input: Option<Interface<linefeed::DefaultTerminal>>,
}

impl TermDisplay {
    pub fn new(config: &Config, exited: Arc<AtomicBool>) -> TermDisplay {
        TermDisplay {
            screen: Screen::new(config),
            exited,
            input: None,
        }
    }

    fn emit(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = write!(out, "{}", text);
        let _ = out.flush();
    }

    fn cancel(&self) -> Error {
        self.exited.store(true, Ordering::SeqCst);
        error!(Cancelled)
    }

    fn key(&self, timeout: Duration) -> Result<Option<u16>> {
        let terminal = Terminal::new().map_err(io_error)?;
        let state = terminal.prepare(PrepareConfig::default()).map_err(io_error)?;
        let event = terminal.read_event(Some(timeout));
        terminal.restore(state).map_err(io_error)?;
        let code = match event.map_err(io_error)? {
            Some(Event::Key(key)) => match key {
                Key::Ctrl('c') => return Err(self.cancel()),
                Key::Up => KEY_UP,
                Key::Down => KEY_DOWN,
                Key::Left => KEY_LEFT,
                Key::Right => KEY_RIGHT,
                Key::Enter => 13,
                Key::Escape => 27,
                Key::Backspace => 8,
                Key::Tab => 9,
                Key::Char(ch) => cp437::from_char(ch) as u16,
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(code))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if self.input.is_none() {
            self.input = Some(Interface::new("INPUT").map_err(io_error)?);
        }
        let result = match &self.input {
            Some(input) => {
                input.set_prompt(prompt).map_err(io_error)?;
                input.read_line().map_err(io_error)?
            }
            None => return Err(error!(InternalError)),
        };
        match result {
            ReadResult::Input(line) => {
                self.screen.print(prompt, None);
                self.screen.print(&line, None);
                self.screen.newline();
                Ok(line)
            }
            ReadResult::Eof | ReadResult::Signal(_) => Err(self.cancel()),
        }
    }
}

impl Display for TermDisplay {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn print(&mut self, text: &str, colour: Option<PalettePair>) {
        let colour = colour.unwrap_or_else(|| self.screen.colour());
        self.screen.print(text, Some(colour));
        self.emit(&style(colour).paint(text).to_string());
    }

    fn newline(&mut self) {
        self.screen.newline();
        self.emit("\n");
    }

    fn clear_screen(&mut self) {
        self.screen.clear();
        let blank = style(self.screen.colour()).paint(" ").to_string();
        self.emit("\x1b[2J\x1b[H");
        self.emit(&blank);
        self.emit("\x1b[H");
    }

    fn move_cursor(&mut self, position: Position) {
        self.screen.set_cursor(position);
        let position = self.screen.cursor();
        self.emit(&format!("\x1b[{};{}H", position.row + 1, position.col + 1));
    }

    fn show_cursor(&mut self) {
        self.screen.set_cursor_visible(true);
        self.emit("\x1b[?25h");
    }

    fn hide_cursor(&mut self) {
        self.screen.set_cursor_visible(false);
        self.emit("\x1b[?25l");
    }

    fn read_char(&mut self, blocking: bool) -> Result<u16> {
        if !blocking {
            return Ok(self.key(Duration::from_millis(0))?.unwrap_or(0));
        }
        loop {
            if self.exited.load(Ordering::SeqCst) {
                return Err(error!(Cancelled));
            }
            if let Some(key) = self.key(POLL_INTERVAL)? {
                return Ok(key);
            }
        }
    }

    fn input_string(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    fn show_alert_dialog(&mut self, message: &str, style: &DialogStyle) -> Result<()> {
        let width = message.chars().count() + 4;
        self.newline();
        self.print(&format!("+{}+", "-".repeat(width)), Some(style.outer));
        self.newline();
        self.print(&format!("|  {}  |", message), Some(style.inner));
        self.newline();
        self.print(&format!("+{}+", "-".repeat(width)), Some(style.outer));
        self.newline();
        while self.read_char(true)? != 13 {}
        Ok(())
    }

    /// Draws the box at the list geometry; items past its height are
    /// still selectable by number.
    fn show_list_dialog(
        &mut self,
        items: &[String],
        prompts: (&str, &str),
        style: &DialogStyle,
    ) -> Result<usize> {
        let width = style.width.max(8) as usize;
        let rows = style.height.max(4) as usize;
        let Position { col, row } = style.origin;
        let fit = |text: &str| -> String {
            let text: String = text.chars().take(width - 2).collect();
            format!(" {:<w$} ", text, w = width - 2)
        };
        let mut lines = vec![(fit(prompts.0), style.outer), (fit(prompts.1), style.outer)];
        for (index, item) in items.iter().enumerate().take(rows - 2) {
            lines.push((fit(&format!("{:>3} {}", index + 1, item)), style.inner));
        }
        for (offset, (text, colour)) in lines.iter().enumerate() {
            self.move_cursor(Position::new(col, row.saturating_add(offset as u16)));
            self.print(text, Some(*colour));
        }
        self.move_cursor(Position::new(col, row.saturating_add(lines.len() as u16)));
        self.print(&" ".repeat(width), Some(style.select));
        self.move_cursor(Position::new(col, row.saturating_add(lines.len() as u16)));
        let answer = self.read_line("? ")?;
        match answer.trim().parse::<usize>() {
            Ok(choice) if choice <= items.len() => Ok(choice),
            _ => Ok(0),
        }
    }
}
