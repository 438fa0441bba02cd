use crate::config::Config;
use crate::lang::Error;
use crate::mach::PalettePair;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Arrow keys come back from `read_char` as these codes.
pub const KEY_UP: u16 = 1;
pub const KEY_DOWN: u16 = 2;
pub const KEY_LEFT: u16 = 3;
pub const KEY_RIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub col: u16,
    pub row: u16,
}

impl Position {
    pub fn new(col: u16, row: u16) -> Position {
        Position { col, row }
    }
}

/// Dialog colours and list box geometry, taken from the palette and
/// runtime variables each time a dialog opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogStyle {
    pub outer: PalettePair,
    pub inner: PalettePair,
    pub select: PalettePair,
    pub origin: Position,
    pub width: u16,
    pub height: u16,
}

/// ## Text screen collaborator
///
/// Grid operations have default implementations over a `Screen`. Front
/// ends override what they need to render and supply the input side.
pub trait Display {
    fn screen(&self) -> &Screen;
    fn screen_mut(&mut self) -> &mut Screen;

    fn print(&mut self, text: &str, colour: Option<PalettePair>) {
        self.screen_mut().print(text, colour)
    }
    fn newline(&mut self) {
        self.screen_mut().newline()
    }
    fn clear_screen(&mut self) {
        self.screen_mut().clear()
    }
    fn cursor_position(&self) -> Position {
        self.screen().cursor()
    }
    fn move_cursor(&mut self, position: Position) {
        self.screen_mut().set_cursor(position)
    }
    fn show_cursor(&mut self) {
        self.screen_mut().set_cursor_visible(true)
    }
    fn hide_cursor(&mut self) {
        self.screen_mut().set_cursor_visible(false)
    }
    fn character_at_cursor(&self) -> char {
        let screen = self.screen();
        screen.cell(screen.cursor()).ch
    }
    fn colour_at_cursor(&self) -> PalettePair {
        let screen = self.screen();
        screen.cell(screen.cursor()).colour
    }
    fn colour(&self) -> PalettePair {
        self.screen().colour()
    }
    fn set_colour(&mut self, colour: PalettePair) {
        self.screen_mut().set_colour(colour)
    }

    /// 0 when `blocking` is false and no key is waiting.
    fn read_char(&mut self, blocking: bool) -> Result<u16>;
    fn input_string(&mut self, prompt: &str) -> Result<String>;
    fn show_alert_dialog(&mut self, message: &str, style: &DialogStyle) -> Result<()>;
    /// 1-based index of the chosen item, 0 when cancelled.
    fn show_list_dialog(
        &mut self,
        items: &[String],
        prompts: (&str, &str),
        style: &DialogStyle,
    ) -> Result<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub colour: PalettePair,
}

/// ## Character grid with a cursor
///
/// Printing past the last column wraps; a newline on the last row
/// scrolls everything up one row.
#[derive(Debug, Clone)]
pub struct Screen {
    columns: u16,
    lines: u16,
    cells: Vec<Cell>,
    cursor: Position,
    cursor_visible: bool,
    colour: PalettePair,
}

impl Screen {
    pub fn new(config: &Config) -> Screen {
        let columns = config.columns.max(1);
        let lines = config.lines.max(1);
        let blank = Cell {
            ch: ' ',
            colour: config.background_colour,
        };
        Screen {
            columns,
            lines,
            cells: vec![blank; columns as usize * lines as usize],
            cursor: Position::default(),
            cursor_visible: true,
            colour: config.background_colour,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn lines(&self) -> u16 {
        self.lines
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.columns as usize + position.col as usize
    }

    pub fn cell(&self, position: Position) -> Cell {
        let col = position.col.min(self.columns - 1);
        let row = position.row.min(self.lines - 1);
        self.cells[self.index(Position::new(col, row))]
    }

    pub fn row_text(&self, row: u16) -> String {
        (0..self.columns)
            .map(|col| self.cell(Position::new(col, row)).ch)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Positions off the grid are clamped to its edge.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = Position::new(
            position.col.min(self.columns - 1),
            position.row.min(self.lines - 1),
        );
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    pub fn colour(&self) -> PalettePair {
        self.colour
    }

    pub fn set_colour(&mut self, colour: PalettePair) {
        self.colour = colour;
    }

    pub fn print(&mut self, text: &str, colour: Option<PalettePair>) {
        let colour = colour.unwrap_or(self.colour);
        for ch in text.chars() {
            match ch {
                '\n' => self.newline(),
                '\r' => self.cursor.col = 0,
                _ => self.put(ch, colour),
            }
        }
    }

    fn put(&mut self, ch: char, colour: PalettePair) {
        let index = self.index(self.cursor);
        self.cells[index] = Cell { ch, colour };
        if self.cursor.col + 1 >= self.columns {
            self.newline();
        } else {
            self.cursor.col += 1;
        }
    }

    pub fn newline(&mut self) {
        self.cursor.col = 0;
        if self.cursor.row + 1 >= self.lines {
            self.scroll();
        } else {
            self.cursor.row += 1;
        }
    }

    fn scroll(&mut self) {
        let width = self.columns as usize;
        self.cells.drain(..width);
        let blank = Cell {
            ch: ' ',
            colour: self.colour,
        };
        self.cells.extend(std::iter::repeat(blank).take(width));
    }

    pub fn clear(&mut self) {
        let blank = Cell {
            ch: ' ',
            colour: self.colour,
        };
        for cell in self.cells.iter_mut() {
            *cell = blank;
        }
        self.cursor = Position::default();
    }
}

/// What a `Capture` display saw, and what it will answer with.
#[derive(Debug, Default)]
pub struct Recording {
    /// Everything printed, with newlines.
    pub output: String,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub keys: VecDeque<u16>,
    pub inputs: VecDeque<String>,
    pub choices: VecDeque<usize>,
    pub dialogs: Vec<DialogStyle>,
}

/// ## Headless display
///
/// Keeps a `Screen` like any other front end and appends all output to
/// a shared `Recording`. Input is answered from the recording's queues;
/// an empty queue reads as no key, an empty line or a cancelled dialog.
pub struct Capture {
    screen: Screen,
    recording: Rc<RefCell<Recording>>,
}

impl Capture {
    pub fn new(config: &Config) -> Capture {
        Capture {
            screen: Screen::new(config),
            recording: Rc::default(),
        }
    }

    pub fn recording(&self) -> Rc<RefCell<Recording>> {
        Rc::clone(&self.recording)
    }
}

impl Display for Capture {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn print(&mut self, text: &str, colour: Option<PalettePair>) {
        self.recording.borrow_mut().output.push_str(text);
        self.screen.print(text, colour);
    }

    fn newline(&mut self) {
        self.recording.borrow_mut().output.push('\n');
        self.screen.newline();
    }

    fn read_char(&mut self, _blocking: bool) -> Result<u16> {
        Ok(self.recording.borrow_mut().keys.pop_front().unwrap_or(0))
    }

    fn input_string(&mut self, prompt: &str) -> Result<String> {
        let mut recording = self.recording.borrow_mut();
        recording.prompts.push(prompt.to_string());
        Ok(recording.inputs.pop_front().unwrap_or_default())
    }

    fn show_alert_dialog(&mut self, message: &str, style: &DialogStyle) -> Result<()> {
        let mut recording = self.recording.borrow_mut();
        recording.alerts.push(message.to_string());
        recording.dialogs.push(*style);
        Ok(())
    }

    fn show_list_dialog(
        &mut self,
        items: &[String],
        prompts: (&str, &str),
        style: &DialogStyle,
    ) -> Result<usize> {
        let mut recording = self.recording.borrow_mut();
        recording.prompts.push(prompts.0.to_string());
        recording.prompts.push(prompts.1.to_string());
        recording.dialogs.push(*style);
        let choice = recording.choices.pop_front().unwrap_or(0);
        Ok(if choice <= items.len() { choice } else { 0 })
    }
}
