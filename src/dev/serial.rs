use log::debug;

/// ## Serial port stub
///
/// Nothing is attached to the line, so reads return 0 and written
/// bytes collect in `buffer`.
#[derive(Debug, Default, Clone)]
pub struct SerialPort {
    enabled: bool,
    baud_rate: u32,
    buffer: Vec<u8>,
}

impl SerialPort {
    pub fn new() -> SerialPort {
        SerialPort::default()
    }

    pub fn setup(&mut self, baud_rate: u32) {
        debug!("serial port on at {} baud", baud_rate);
        self.enabled = true;
        self.baud_rate = baud_rate;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    pub fn read(&mut self) -> u8 {
        0
    }

    pub fn write(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}
