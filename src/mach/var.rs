use super::{Memory, PalettePair};
use crate::config::Config;
use crate::dev::{DialogStyle, Position};
use crate::error;
use crate::lang::Error;
use log::trace;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub const PROG_SIZE: &str = "prog_size";
pub const LIST_DIALOG_X: &str = "list_dialog_x";
pub const LIST_DIALOG_Y: &str = "list_dialog_y";
pub const LIST_DIALOG_WIDTH: &str = "list_dialog_width";
pub const LIST_DIALOG_HEIGHT: &str = "list_dialog_height";

pub const TEXT: &str = "text";
pub const BACKGROUND: &str = "background";
pub const DIALOG_OUTER: &str = "dialog_outer";
pub const DIALOG_INNER: &str = "dialog_inner";
pub const DIALOG_SELECT: &str = "dialog_select";

/// ## Variable memory
///
/// Numeric and string variables live in the shared `Memory` at the
/// addresses given by the configuration. Runtime and palette variables
/// are interpreter state with no address. All access goes through `&self`
/// so the store can be shared with every argument list of a line.

#[derive(Debug)]
pub struct Var {
    memory: Rc<RefCell<Memory>>,
    config: Config,
    runtime: RefCell<BTreeMap<String, i64>>,
    palette: RefCell<BTreeMap<String, PalettePair>>,
}

impl Var {
    pub fn new(memory: Rc<RefCell<Memory>>, config: &Config) -> Var {
        let var = Var {
            memory,
            config: config.clone(),
            runtime: RefCell::default(),
            palette: RefCell::default(),
        };
        var.reset();
        var
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Restore the runtime and palette maps to their defaults.
    pub fn reset(&self) {
        let c = &self.config;
        let mut runtime = self.runtime.borrow_mut();
        runtime.clear();
        runtime.insert(PROG_SIZE.into(), 0);
        runtime.insert(LIST_DIALOG_X.into(), c.list_dialog_x);
        runtime.insert(LIST_DIALOG_Y.into(), c.list_dialog_y);
        runtime.insert(LIST_DIALOG_WIDTH.into(), c.list_dialog_width);
        runtime.insert(LIST_DIALOG_HEIGHT.into(), c.list_dialog_height);
        let mut palette = self.palette.borrow_mut();
        palette.clear();
        palette.insert(TEXT.into(), c.print_colour);
        palette.insert(BACKGROUND.into(), c.background_colour);
        palette.insert(DIALOG_OUTER.into(), c.dialog_outer);
        palette.insert(DIALOG_INNER.into(), c.dialog_inner);
        palette.insert(DIALOG_SELECT.into(), c.dialog_selector);
    }

    pub fn numeric_variable_address(&self, name: char) -> Result<usize> {
        if !name.is_ascii_uppercase() {
            return Err(error!(InvalidVariable; format!("Invalid numeric variable: {}", name)));
        }
        let index = (name as u8 - b'A') as usize;
        Ok(self.config.numeric_variables + index * 2)
    }

    pub fn string_variable_address(&self, name: &str) -> Result<usize> {
        let mut chars = name.chars();
        if let (Some('$'), Some(digit), None) = (chars.next(), chars.next(), chars.next()) {
            if let Some(n @ 1..=8) = digit.to_digit(10) {
                let slot = (n - 1) as usize;
                return Ok(self.config.string_variables + slot * (self.config.string_length + 1));
            }
        }
        Err(error!(InvalidVariable; format!("Invalid string variable: {}", name)))
    }

    pub fn get_numeric(&self, name: char) -> Result<u16> {
        let address = self.numeric_variable_address(name)?;
        self.memory.borrow().read_word(address)
    }

    /// Values wrap into the machine word, so -1 is stored as 65535.
    pub fn set_numeric(&self, name: char, value: i64) -> Result<()> {
        let address = self.numeric_variable_address(name)?;
        let word = value.rem_euclid(0x10000) as u16;
        trace!("SET {} = {}", name, word);
        self.memory.borrow_mut().write_word(address, word)
    }

    pub fn get_string(&self, name: &str) -> Result<String> {
        let address = self.string_variable_address(name)?;
        self.memory
            .borrow()
            .read_string(address, self.config.string_length, 0)
    }

    /// Stores the text with a terminator; anything past the string length
    /// is dropped.
    pub fn set_string(&self, name: &str, value: &str) -> Result<()> {
        let address = self.string_variable_address(name)?;
        let limit = self.config.string_length;
        trace!("SET {} = {:?}", name, value);
        let mut memory = self.memory.borrow_mut();
        memory.write_string(address, value, limit)?;
        let len = super::cp437::encode(value).len().min(limit);
        memory.write_byte(address + len, 0)
    }

    /// Finds the line opening with `NAME:` in the loaded program text.
    /// Case does not matter.
    pub fn label_address(&self, label: &str) -> Result<usize> {
        let name = label.trim_end_matches(':');
        let start = self.config.load_point;
        let end = start + self.runtime(PROG_SIZE).max(0) as usize;
        let needle = format!("{}:", name);
        match self.memory.borrow().find_label(&needle, start, end) {
            Ok(address) => Ok(address),
            Err(_) => Err(error!(UndefinedLabel; format!("Invalid label: {}", name))),
        }
    }

    pub fn runtime(&self, name: &str) -> i64 {
        self.runtime.borrow().get(name).copied().unwrap_or(0)
    }

    pub fn set_runtime(&self, name: &str, value: i64) {
        trace!("SET runtime {} = {}", name, value);
        self.runtime.borrow_mut().insert(name.to_string(), value);
    }

    pub fn palette(&self, name: &str) -> Result<PalettePair> {
        match self.palette.borrow().get(name) {
            Some(pair) => Ok(*pair),
            None => Err(error!(UndefinedVariable; format!("Invalid palette variable: {}", name))),
        }
    }

    pub fn set_palette(&self, name: &str, value: PalettePair) {
        self.palette.borrow_mut().insert(name.to_string(), value);
    }

    /// Dialog colours and list box geometry as they stand now.
    pub fn dialog_style(&self) -> Result<DialogStyle> {
        let clamp = |name: &str| self.runtime(name).max(0).min(0xFFFF) as u16;
        Ok(DialogStyle {
            outer: self.palette(DIALOG_OUTER)?,
            inner: self.palette(DIALOG_INNER)?,
            select: self.palette(DIALOG_SELECT)?,
            origin: Position::new(clamp(LIST_DIALOG_X), clamp(LIST_DIALOG_Y)),
            width: clamp(LIST_DIALOG_WIDTH),
            height: clamp(LIST_DIALOG_HEIGHT),
        })
    }

    pub fn dump_numeric(&self) -> Result<Vec<String>> {
        (b'A'..=b'Z')
            .map(|ch| {
                let name = ch as char;
                Ok(format!("{}: {}", name, self.get_numeric(name)?))
            })
            .collect()
    }

    pub fn dump_string(&self) -> Result<Vec<String>> {
        (1..=8)
            .map(|n| {
                let name = format!("${}", n);
                let value = self.get_string(&name)?;
                Ok(format!("{}: \"{}\"", name, value))
            })
            .collect()
    }

    pub fn dump_runtime(&self) -> Vec<String> {
        self.runtime
            .borrow()
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect()
    }

    pub fn dump_palette(&self) -> Vec<String> {
        self.palette
            .borrow()
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn var() -> Var {
        Var::new(Rc::new(RefCell::new(Memory::new())), &Config::default())
    }

    #[test]
    fn test_numeric_addresses() {
        let v = var();
        let mut seen = std::collections::BTreeSet::new();
        for name in 'A'..='Z' {
            let address = v.numeric_variable_address(name).unwrap();
            assert!((0xF000..0xF034).contains(&address), "{} at {:04X}", name, address);
            assert!(seen.insert(address), "{} shares {:04X}", name, address);
        }
        assert_eq!(seen.len(), 26);
        assert_eq!(v.numeric_variable_address('A').unwrap(), 0xF000);
        assert_eq!(v.numeric_variable_address('Z').unwrap(), 0xF032);
        assert_eq!(
            v.numeric_variable_address('a').unwrap_err().code(),
            ErrorCode::InvalidVariable
        );
    }

    #[test]
    fn test_string_addresses() {
        let v = var();
        assert_eq!(v.string_variable_address("$1").unwrap(), 0xF100);
        assert_eq!(v.string_variable_address("$2").unwrap(), 0xF181);
        assert!(v.string_variable_address("$9").is_err());
        assert!(v.string_variable_address("$0").is_err());
        assert!(v.string_variable_address("1").is_err());
    }

    #[test]
    fn test_numeric_wraps() {
        let v = var();
        v.set_numeric('A', 70000).unwrap();
        assert_eq!(v.get_numeric('A').unwrap(), 4464);
        v.set_numeric('B', -1).unwrap();
        assert_eq!(v.get_numeric('B').unwrap(), 65535);
    }

    #[test]
    fn test_string_overwrite_shorter() {
        let v = var();
        v.set_string("$1", "longer text").unwrap();
        v.set_string("$1", "short").unwrap();
        assert_eq!(v.get_string("$1").unwrap(), "short");
    }

    #[test]
    fn test_string_truncated() {
        let v = var();
        let long: String = std::iter::repeat('x').take(200).collect();
        v.set_string("$8", &long).unwrap();
        assert_eq!(v.get_string("$8").unwrap().len(), 128);
    }

    #[test]
    fn test_runtime_defaults() {
        let v = var();
        assert_eq!(v.runtime(PROG_SIZE), 0);
        assert_eq!(v.runtime(LIST_DIALOG_WIDTH), 40);
        assert_eq!(v.runtime("nothing"), 0);
        assert!(v.palette(TEXT).is_ok());
        assert_eq!(v.palette("nothing").unwrap_err().code(), ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_label_search_is_bounded_by_program_size() {
        let v = var();
        v.memory
            .borrow_mut()
            .write_data(0x8000, b"GOTO DONE\nDONE:\n")
            .unwrap();
        assert!(v.label_address("DONE").is_err());
        v.set_runtime(PROG_SIZE, 16);
        assert_eq!(v.label_address("DONE").unwrap(), 0x800A);
        assert_eq!(v.label_address("DONE:").unwrap(), 0x800A);
        assert_eq!(
            v.label_address("MISSING").unwrap_err().code(),
            ErrorCode::UndefinedLabel
        );
    }

    #[test]
    fn test_dialog_style_follows_store() {
        let v = var();
        let style = v.dialog_style().unwrap();
        assert_eq!(style.outer, v.config().dialog_outer);
        assert_eq!(style.origin, Position::new(20, 2));
        assert_eq!(style.width, 40);
        let pair = PalettePair::from(0x1Eu16);
        v.set_palette(DIALOG_INNER, pair);
        v.set_runtime(LIST_DIALOG_HEIGHT, -5);
        let style = v.dialog_style().unwrap();
        assert_eq!(style.inner, pair);
        assert_eq!(style.height, 0);
    }
}
