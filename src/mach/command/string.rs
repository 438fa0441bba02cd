use super::{Result, Routine};
use crate::error;
use crate::mach::{cp437, ArgumentList, Env};

pub const COMMANDS: &[(&str, Routine)] = &[
    ("CASE", case),
    ("LEN", len),
    ("NUMBER", number),
    ("STRING", string),
];

/// `CASE UPPER $1` or `CASE LOWER $1`
fn case(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let upper = args.get_word_from_list(&["UPPER", "LOWER"])? == "UPPER";
    let name = args.get_string_variable()?;
    let text = env.var.get_string(&name)?;
    let text = if upper {
        text.to_uppercase()
    } else {
        text.to_lowercase()
    };
    env.var.set_string(&name, &text)
}

fn len(args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    let text = args.get_string()?;
    args.set_numeric_variable(text.chars().count() as i64)
}

/// `NUMBER "12" A` parses; `NUMBER A $1` formats.
fn number(args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    args.expect_more_arguments(2)?;
    if args.has_string() {
        let text = args.get_string()?;
        match text.trim().parse::<i64>() {
            Ok(n) => args.set_numeric_variable(n),
            Err(_) => Err(error!(ArgumentError; format!("Invalid number: \"{}\"", text))),
        }
    } else if args.has_numeric() {
        let value = args.get_numeric()?;
        args.set_string_variable(&value.to_string())
    } else {
        Err(args.syntax_error("Invalid argument type for NUMBER command"))
    }
}

/// `STRING $1 offset code` replaces one character, counting from 0.
/// Offsets past the end append.
fn string(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let name = args.get_string_variable()?;
    let offset = args.get_numeric()?.max(0) as usize;
    let code = args.get_numeric()?.rem_euclid(256) as u8;
    let mut chars: Vec<char> = env.var.get_string(&name)?.chars().collect();
    let ch = cp437::to_char(code);
    if offset < chars.len() {
        chars[offset] = ch;
    } else {
        chars.push(ch);
    }
    let text: String = chars.into_iter().collect();
    env.var.set_string(&name, &text)
}
