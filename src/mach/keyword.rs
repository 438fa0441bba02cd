use super::{var, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// BIOS timer ticks per second.
const TICKS_PER_SECOND: f64 = 18.206;

/// Words that read as numbers when used as an operand.
pub const KEYWORDS: [&str; 6] = ["PROGSTART", "RAMSTART", "VARIABLES", "VERSION", "TIMER", "INK"];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Evaluated on every call; nothing is cached.
pub fn value(name: &str, var: &Var) -> Result<i64> {
    let config = var.config();
    match name {
        "PROGSTART" => Ok(config.load_point as i64),
        "RAMSTART" => Ok(config.load_point as i64 + var.runtime(var::PROG_SIZE)),
        "VARIABLES" => Ok(config.numeric_variables as i64),
        "VERSION" => Ok(config.version as i64),
        "TIMER" => Ok(timer()),
        "INK" => Ok(u16::from(var.palette(var::TEXT)?) as i64),
        _ => Err(error!(TypeMismatch; format!("Invalid keyword: {}", name))),
    }
}

fn timer() -> i64 {
    let millis = chrono::Utc::now().timestamp_millis() as f64;
    (millis / 1000.0 * TICKS_PER_SECOND).round() as i64 % 0x10000
}
