//! IBM code page 437, the character set of the BIOS text screen.
//!
//! The low half is plain ASCII. Characters with no CP437 encoding become `?`.

const HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}', //
];

const REPLACEMENT: u8 = b'?';

pub fn to_char(byte: u8) -> char {
    if byte < 0x80 {
        byte as char
    } else {
        HIGH[(byte - 0x80) as usize]
    }
}

pub fn from_char(ch: char) -> u8 {
    if ch.is_ascii() {
        return ch as u8;
    }
    match HIGH.iter().position(|c| *c == ch) {
        Some(index) => 0x80 + index as u8,
        None => REPLACEMENT,
    }
}

pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| to_char(*b)).collect()
}

pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode("Hello\n"), b"Hello\n");
        assert_eq!(decode(b"Hello\n"), "Hello\n");
    }

    #[test]
    fn test_box_drawing() {
        assert_eq!(from_char('█'), 0xDB);
        assert_eq!(to_char(0xC4), '─');
    }

    #[test]
    fn test_unencodable() {
        assert_eq!(encode("日本"), b"??");
    }
}
