use super::{Result, Routine};
use crate::error;
use crate::mach::{var, ArgumentList, Env, ForVariable};
use log::debug;

pub const COMMANDS: &[(&str, Routine)] = &[
    ("BREAK", cmd_break),
    ("CALL", call),
    ("DO", cmd_do),
    ("ELSE", cmd_else),
    ("END", end),
    ("FOR", cmd_for),
    ("GOSUB", gosub),
    ("GOTO", goto),
    ("IF", cmd_if),
    ("INCLUDE", include),
    ("LOOP", cmd_loop),
    ("NEXT", next),
    ("PAUSE", pause),
    ("RETURN", cmd_return),
];

fn jump(env: &mut Env, address: usize) {
    debug!("JUMP {:04X} -> {:04X}", env.program_counter, address);
    env.next_line_address = address;
}

fn cmd_break(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    env.break_requested = true;
    Ok(())
}

fn call(_args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    Err(error!(Unsupported; "CALL command not supported"))
}

fn cmd_do(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    env.do_stack.push(env.next_line_address)
}

fn cmd_else(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    if !env.last_if_true {
        env.next_command = Some(args.slice_remaining());
    }
    Ok(())
}

fn end(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    env.program_finished = true;
    Ok(())
}

/// `FOR X = start TO end`
fn cmd_for(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    args.get_specific_symbol('=')?;
    let start = args.evaluate_numeric_expression()?;
    args.get_specific_word("TO")?;
    let end = args.evaluate_numeric_expression()?;
    env.var.set_numeric(name, start)?;
    let for_variable = ForVariable {
        name,
        end,
        resume: env.next_line_address,
    };
    env.for_variables.insert(name, for_variable);
    Ok(())
}

fn next(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_numeric_variable()?;
    let for_variable = match env.for_variables.get(&name) {
        Some(f) => *f,
        None => return Err(error!(NextWithoutFor; format!("NEXT without FOR: {}", name))),
    };
    let value = env.var.get_numeric(name)? as i64 + 1;
    env.var.set_numeric(name, value)?;
    if value > for_variable.end {
        env.for_variables.remove(&name);
    } else {
        jump(env, for_variable.resume);
    }
    Ok(())
}

fn goto(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let address = args.get_program_pointer()?;
    jump(env, address);
    Ok(())
}

fn gosub(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let address = args.get_program_pointer()?;
    env.gosub_stack.push(env.next_line_address)?;
    jump(env, address);
    Ok(())
}

fn cmd_return(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let address = env.gosub_stack.pop()?;
    jump(env, address);
    Ok(())
}

/// `IF cond [AND cond ...] THEN command`
fn cmd_if(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let mut result = args.evaluate_condition()?;
    while args.has_specific_word("AND") {
        let clause = args.evaluate_condition()?;
        result = result && clause;
    }
    env.last_if_true = result;
    args.get_specific_word("THEN")?;
    if result {
        env.next_command = Some(args.slice_remaining());
    }
    Ok(())
}

/// Appends a file to the end of the loaded program.
fn include(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let filename = args.get_string()?;
    let data = match env.disk.load_file(&filename) {
        Ok(data) => data,
        Err(e) => return Err(error!(FileNotFound; format!("{}: {}", filename, e))),
    };
    let address = env.program_end();
    let written = env.memory.borrow_mut().write_data(address, &data)?;
    if written < data.len() {
        return Err(error!(OutOfMemory; format!("No room for {}", filename)));
    }
    let size = env.var.runtime(var::PROG_SIZE);
    env.var.set_runtime(var::PROG_SIZE, size + written as i64);
    Ok(())
}

/// `LOOP WHILE cond`, `LOOP UNTIL cond` or `LOOP ENDLESS`
fn cmd_loop(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let kind = args.get_word_from_list(&["WHILE", "UNTIL", "ENDLESS"])?;
    let repeat = match kind.as_str() {
        "WHILE" => args.evaluate_condition()?,
        "UNTIL" => !args.evaluate_condition()?,
        _ => true,
    };
    let start = env.do_stack.pop()?;
    if repeat {
        env.do_stack.push(start)?;
        jump(env, start);
    }
    Ok(())
}

fn pause(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let tenths = args.get_numeric()?;
    env.delay(tenths)
}
