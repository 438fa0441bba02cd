use super::{Result, Routine};
use crate::mach::{ArgumentList, Env};

pub const COMMANDS: &[(&str, Routine)] = &[("GETKEY", getkey), ("WAITKEY", waitkey)];

/// Stores 0 when no key is waiting.
fn getkey(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let key = env.display.read_char(false)?;
    args.set_numeric_variable(key as i64)
}

fn waitkey(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let key = env.wait_key()?;
    args.set_numeric_variable(key as i64)
}
