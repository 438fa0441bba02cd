
/// The 16 colour VGA text mode palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

impl Palette {
    pub const ALL: [Palette; 16] = [
        Palette::Black,
        Palette::Blue,
        Palette::Green,
        Palette::Cyan,
        Palette::Red,
        Palette::Magenta,
        Palette::Brown,
        Palette::LightGray,
        Palette::DarkGray,
        Palette::LightBlue,
        Palette::LightGreen,
        Palette::LightCyan,
        Palette::LightRed,
        Palette::LightMagenta,
        Palette::Yellow,
        Palette::White,
    ];

    pub fn from_nibble(n: u8) -> Palette {
        Palette::ALL[(n & 0xF) as usize]
    }
}

/// A foreground/background pair as stored in a VGA attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PalettePair {
    pub text: Palette,
    pub bg: Palette,
}

impl PalettePair {
    pub fn new(text: Palette, bg: Palette) -> PalettePair {
        PalettePair { text, bg }
    }
}

impl From<PalettePair> for u16 {
    fn from(pair: PalettePair) -> u16 {
        pair.text as u16 | (pair.bg as u16) << 4
    }
}

impl From<u16> for PalettePair {
    fn from(code: u16) -> PalettePair {
        PalettePair {
            text: Palette::from_nibble(code as u8),
            bg: Palette::from_nibble((code >> 4) as u8),
        }
    }
}

impl std::fmt::Display for PalettePair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?} on {:?}", self.text, self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_byte() {
        let pair = PalettePair::new(Palette::Yellow, Palette::Blue);
        assert_eq!(u16::from(pair), 0x1E);
        assert_eq!(PalettePair::from(0x1E), pair);
    }
}
