use super::{Result, Routine};
use crate::dev::Position;
use crate::error;
use crate::mach::{cp437, var, ArgumentList, Env, PalettePair};

pub const COMMANDS: &[(&str, Routine)] = &[
    ("ALERT", alert),
    ("ASKFILE", askfile),
    ("CLS", cls),
    ("CURSCHAR", curschar),
    ("CURSCOL", curscol),
    ("CURSOR", cursor),
    ("CURSPOS", curspos),
    ("FILES", files),
    ("INK", ink),
    ("INPUT", input),
    ("LISTBOX", listbox),
    ("MOVE", cmd_move),
    ("PRINT", print),
];

const FILES_PER_ROW: usize = 5;
const FILE_COLUMN_WIDTH: usize = 15;

fn screen_coordinate(n: i64) -> u16 {
    n.max(0).min(u16::max_value() as i64) as u16
}

fn print_text(env: &mut Env, text: &str) -> Result<()> {
    let colour = env.var.palette(var::TEXT)?;
    env.display.print(text, Some(colour));
    Ok(())
}

/// `PRINT` a string, a number, `CHR n` or `HEX n`. A trailing `;`
/// keeps the cursor on the same line.
fn print(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    args.expect_more_arguments(1)?;
    let text = if args.has_string() {
        args.get_string()?
    } else if args.has_numeric() {
        args.get_numeric()?.to_string()
    } else if args.has_word() {
        let word = args.get_word_from_list(&["CHR", "HEX"])?;
        let value = args.get_numeric()?.rem_euclid(256) as u8;
        if word == "CHR" {
            cp437::to_char(value).to_string()
        } else {
            format!("{:02X}", value)
        }
    } else {
        return Err(args.syntax_error("Invalid argument type for PRINT command"));
    };
    print_text(env, &text)?;
    if !args.has_specific_symbol(';') {
        env.display.newline();
    }
    Ok(())
}

fn cls(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let background = env.var.palette(var::BACKGROUND)?;
    env.display.set_colour(background);
    env.display.clear_screen();
    Ok(())
}

fn cursor(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    if args.get_word_from_list(&["ON", "OFF"])? == "ON" {
        env.display.show_cursor();
    } else {
        env.display.hide_cursor();
    }
    Ok(())
}

fn curschar(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let ch = env.display.character_at_cursor();
    args.set_numeric_variable(cp437::from_char(ch) as i64)
}

fn curscol(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let colour = env.display.colour_at_cursor();
    args.set_numeric_variable(u16::from(colour) as i64)
}

fn curspos(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let position = env.display.cursor_position();
    args.set_numeric_variable(position.col as i64)?;
    args.set_numeric_variable(position.row as i64)
}

fn ink(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let code = args.get_numeric()?.rem_euclid(256) as u16;
    env.var.set_palette(var::TEXT, PalettePair::from(code));
    Ok(())
}

fn cmd_move(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let col = screen_coordinate(args.get_numeric()?);
    let row = screen_coordinate(args.get_numeric()?);
    env.display.move_cursor(Position::new(col, row));
    Ok(())
}

fn input(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let value = env.display.input_string("")?;
    if args.has_string_variable() {
        args.set_string_variable(&value)
    } else if args.has_numeric_variable() {
        match value.trim().parse::<i64>() {
            Ok(n) => args.set_numeric_variable(n),
            Err(_) => Err(error!(ArgumentError; format!("Invalid numeric input: \"{}\"", value))),
        }
    } else {
        Err(args.syntax_error("Invalid argument type for INPUT command"))
    }
}

fn alert(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let message = args.get_string()?;
    let style = env.var.dialog_style()?;
    env.display.show_alert_dialog(&message, &style)
}

/// `LISTBOX "a,b,c" "prompt" "prompt" V`
fn listbox(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let items: Vec<String> = args
        .get_string()?
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();
    let prompt1 = args.get_string()?;
    let prompt2 = args.get_string()?;
    let style = env.var.dialog_style()?;
    let choice = env.display.show_list_dialog(&items, (&prompt1, &prompt2), &style)?;
    args.set_numeric_variable(choice as i64)
}

fn askfile(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let files = env.disk.list_files();
    let style = env.var.dialog_style()?;
    let choice = env.display.show_list_dialog(
        &files,
        (
            "Please select a file using the cursor",
            "keys from the list below...",
        ),
        &style,
    )?;
    let name = match choice.checked_sub(1).and_then(|i| files.get(i)) {
        Some(name) => name.as_str(),
        None => "",
    };
    args.set_string_variable(name)
}

fn files(_args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let files = env.disk.list_files();
    for row in files.chunks(FILES_PER_ROW) {
        let line: String = row
            .iter()
            .map(|name| format!("{:<width$}", name, width = FILE_COLUMN_WIDTH))
            .collect();
        print_text(env, &line)?;
        env.display.newline();
    }
    Ok(())
}
