use super::{Result, Routine};
use crate::error;
use crate::mach::{ArgumentList, Env};
use rand::Rng;

pub const COMMANDS: &[(&str, Routine)] = &[
    ("PEEK", peek),
    ("PEEKINT", peekint),
    ("POKE", poke),
    ("POKEINT", pokeint),
    ("RAND", cmd_rand),
];

fn address(value: i64) -> Result<usize> {
    if value < 0 {
        Err(error!(IllegalAddress; format!("Negative address: {}", value)))
    } else {
        Ok(value as usize)
    }
}

/// `PEEK V address`
fn peek(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    let at = address(args.get_numeric()?)?;
    let value = env.memory.borrow().read_byte(at)?;
    env.var.set_numeric(name, value as i64)
}

/// `POKE value address`
fn poke(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let value = args.get_numeric()?;
    let at = address(args.get_numeric()?)?;
    env.memory
        .borrow_mut()
        .write_byte(at, value.rem_euclid(0x100) as u8)
}

fn peekint(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    let at = address(args.get_numeric()?)?;
    let value = env.memory.borrow().read_word(at)?;
    env.var.set_numeric(name, value as i64)
}

fn pokeint(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let value = args.get_numeric()?;
    let at = address(args.get_numeric()?)?;
    env.memory
        .borrow_mut()
        .write_word(at, value.rem_euclid(0x10000) as u16)
}

/// `RAND V low high`, both ends included.
fn cmd_rand(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    let low = args.get_numeric()?;
    let high = args.get_numeric()?;
    if low > high {
        return Err(error!(ArgumentError; format!("Empty range: {} to {}", low, high)));
    }
    let value = env.rng.gen_range(low..=high);
    env.var.set_numeric(name, value)
}
