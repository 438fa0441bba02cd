//! Machine configuration.
//!
//! The defaults reproduce the memory layout and look of MikeOS 4.7
//! running in BIOS text mode 3.

use crate::mach::{Palette, PalettePair};

#[derive(Debug, Clone)]
pub struct Config {
    /// Where programs are loaded. `PROGSTART` evaluates to this.
    pub load_point: usize,
    /// 52 bytes for the single letter variables A-Z, one word each.
    pub numeric_variables: usize,
    /// 8 slots of `string_length + 1` bytes for $1-$8.
    pub string_variables: usize,
    pub string_length: usize,
    /// The API version reported by `VERSION`.
    pub version: u16,
    pub version_string: String,
    pub columns: u16,
    pub lines: u16,
    pub print_colour: PalettePair,
    pub background_colour: PalettePair,
    pub dialog_outer: PalettePair,
    pub dialog_inner: PalettePair,
    pub dialog_selector: PalettePair,
    pub list_dialog_x: i64,
    pub list_dialog_y: i64,
    pub list_dialog_width: i64,
    pub list_dialog_height: i64,
    /// Hand control to the debugger when a program finishes.
    pub debug_on_exit: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            load_point: 0x8000,
            numeric_variables: 0xF000,
            string_variables: 0xF100,
            string_length: 128,
            version: 18,
            version_string: "4.7.0".to_string(),
            columns: 80,
            lines: 25,
            print_colour: PalettePair::new(Palette::LightGray, Palette::Black),
            background_colour: PalettePair::new(Palette::Black, Palette::Black),
            dialog_outer: PalettePair::new(Palette::White, Palette::Red),
            dialog_inner: PalettePair::new(Palette::Black, Palette::LightGray),
            dialog_selector: PalettePair::new(Palette::White, Palette::Black),
            list_dialog_x: 20,
            list_dialog_y: 2,
            list_dialog_width: 40,
            list_dialog_height: 20,
            debug_on_exit: false,
        }
    }
}
