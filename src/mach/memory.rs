use super::cp437;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub const MEMORY_SIZE: usize = 0x10000;

const NEWLINE: u8 = 0x0A;
const LINE_LIMIT: usize = 255;

/// ## The 64K address space
///
/// Words are little-endian. Text is CP437. Every access that starts
/// outside the address space is an `IllegalAddress`; block transfers
/// and scans that run past the end are clipped.
pub struct Memory {
    data: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory({} bytes)", self.data.len())
    }
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    fn check(&self, address: usize, width: usize) -> Result<()> {
        if address + width > self.data.len() {
            Err(error!(IllegalAddress, address))
        } else {
            Ok(())
        }
    }

    fn clip(&self, address: usize, length: usize) -> Result<std::ops::Range<usize>> {
        self.check(address, 0)?;
        Ok(address..self.data.len().min(address.saturating_add(length)))
    }

    pub fn read_byte(&self, address: usize) -> Result<u8> {
        self.check(address, 1)?;
        Ok(self.data[address])
    }

    pub fn write_byte(&mut self, address: usize, value: u8) -> Result<()> {
        self.check(address, 1)?;
        self.data[address] = value;
        Ok(())
    }

    pub fn read_word(&self, address: usize) -> Result<u16> {
        self.check(address, 2)?;
        Ok(u16::from_le_bytes([self.data[address], self.data[address + 1]]))
    }

    pub fn write_word(&mut self, address: usize, value: u16) -> Result<()> {
        self.check(address, 2)?;
        self.data[address..address + 2].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Text up to `terminator`, or all `limit` bytes when none is found.
    pub fn read_string(&self, address: usize, limit: usize, terminator: u8) -> Result<String> {
        let bytes = &self.data[self.clip(address, limit)?];
        let len = bytes
            .iter()
            .position(|b| *b == terminator)
            .unwrap_or_else(|| bytes.len());
        Ok(cp437::decode(&bytes[..len]))
    }

    /// Encodes and truncates to `limit`. No terminator is added.
    pub fn write_string(&mut self, address: usize, text: &str, limit: usize) -> Result<()> {
        let mut encoded = cp437::encode(text);
        encoded.truncate(limit);
        self.check(address, encoded.len())?;
        self.data[address..address + encoded.len()].copy_from_slice(&encoded);
        Ok(())
    }

    /// The line at `address`, never reading at or past `end`.
    pub fn read_line(&self, address: usize, end: usize) -> Result<String> {
        let limit = end.saturating_sub(address).min(LINE_LIMIT);
        self.read_string(address, limit, NEWLINE)
    }

    /// Address just past the first newline at or after `address`.
    pub fn find_next_line(&self, address: usize) -> Result<usize> {
        let range = self.clip(address, MEMORY_SIZE)?;
        match self.data[range].iter().position(|b| *b == NEWLINE) {
            Some(offset) => Ok(address + offset + 1),
            None => Err(error!(NotFound, address; "No further lines")),
        }
    }

    /// First occurrence of `needle` wholly inside `[start, end)`.
    pub fn find_string(&self, needle: &str, start: usize, end: usize) -> Result<usize> {
        let encoded = cp437::encode(needle);
        let range = self.clip(start, end.saturating_sub(start))?;
        let haystack = &self.data[range];
        if !encoded.is_empty() && encoded.len() <= haystack.len() {
            if let Some(offset) = haystack
                .windows(encoded.len())
                .position(|w| w == encoded.as_slice())
            {
                return Ok(start + offset);
            }
        }
        Err(error!(NotFound; format!("String not found: {}", needle)))
    }

    /// First line inside `[start, end)` that opens with `needle`, ignoring
    /// ASCII case and leading blanks.
    pub fn find_label(&self, needle: &str, start: usize, end: usize) -> Result<usize> {
        let encoded = cp437::encode(needle);
        let range = self.clip(start, end.saturating_sub(start))?;
        let haystack = &self.data[range];
        let mut offset = 0;
        while !encoded.is_empty() && offset < haystack.len() {
            let line = &haystack[offset..];
            let indent = line.iter().take_while(|b| **b == b' ' || **b == b'\t').count();
            let text = &line[indent..];
            if text.len() >= encoded.len() && text[..encoded.len()].eq_ignore_ascii_case(&encoded) {
                return Ok(start + offset + indent);
            }
            match line.iter().position(|b| *b == NEWLINE) {
                Some(newline) => offset += newline + 1,
                None => break,
            }
        }
        Err(error!(NotFound; format!("Label not found: {}", needle)))
    }

    pub fn read_data(&self, address: usize, length: usize) -> Result<Vec<u8>> {
        Ok(self.data[self.clip(address, length)?].to_vec())
    }

    /// Returns the number of bytes actually written.
    pub fn write_data(&mut self, address: usize, data: &[u8]) -> Result<usize> {
        let range = self.clip(address, data.len())?;
        let len = range.len();
        self.data[range].copy_from_slice(&data[..len]);
        Ok(len)
    }
}
