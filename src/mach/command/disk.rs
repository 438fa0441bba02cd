//! Disk commands never fail on a disk error. They report through `R`,
//! and `S` receives a file size where there is one.

use super::{Result, Routine};
use crate::mach::{ArgumentList, Env};
use log::warn;
use std::io::{self, ErrorKind};

pub const COMMANDS: &[(&str, Routine)] = &[
    ("DELETE", delete),
    ("LOAD", load),
    ("RENAME", rename),
    ("SAVE", save),
    ("SIZE", size),
];

const RESULT: char = 'R';
const SIZE: char = 'S';

fn report(env: &mut Env, code: i64) -> Result<()> {
    env.var.set_numeric(RESULT, code)
}

fn failed(env: &mut Env, e: &io::Error, code: i64) -> Result<()> {
    warn!("disk: {}", e);
    report(env, code)
}

fn delete(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let filename = args.get_string()?;
    match env.disk.delete_file(&filename) {
        Ok(()) => report(env, 0),
        Err(e) if e.kind() == ErrorKind::NotFound => failed(env, &e, 2),
        Err(e) => failed(env, &e, 1),
    }
}

/// `LOAD "file" address`
fn load(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let filename = args.get_string()?;
    let address = args.get_numeric()?;
    let data = match env.disk.load_file(&filename) {
        Ok(data) => data,
        Err(e) => return failed(env, &e, 1),
    };
    env.memory
        .borrow_mut()
        .write_data(address.max(0) as usize, &data)?;
    report(env, 0)?;
    env.var.set_numeric(SIZE, data.len() as i64)
}

fn rename(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let old = args.get_string()?;
    let new = args.get_string()?;
    match env.disk.rename_file(&old, &new) {
        Ok(()) => report(env, 0),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => failed(env, &e, 3),
        Err(e) if e.kind() == ErrorKind::NotFound => failed(env, &e, 2),
        Err(e) => failed(env, &e, 1),
    }
}

/// `SAVE "file" address length`. Existing files are never overwritten.
fn save(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let filename = args.get_string()?;
    let address = args.get_numeric()?;
    let length = args.get_numeric()?;
    if env.disk.file_exists(&filename) {
        return report(env, 2);
    }
    let data = env
        .memory
        .borrow()
        .read_data(address.max(0) as usize, length.max(0) as usize)?;
    match env.disk.save_file(&filename, &data) {
        Ok(()) => report(env, 0),
        Err(e) => failed(env, &e, 1),
    }
}

fn size(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let filename = args.get_string()?;
    match env.disk.file_size(&filename) {
        Ok(size) => {
            report(env, 0)?;
            env.var.set_numeric(SIZE, size as i64)
        }
        Err(e) => failed(env, &e, 1),
    }
}
