use super::{Result, Routine};
use crate::error;
use crate::mach::{ArgumentList, Env};

pub const COMMANDS: &[(&str, Routine)] = &[("PORT", port), ("SERIAL", serial), ("SOUND", sound)];

fn port(_args: &mut ArgumentList, _env: &mut Env) -> Result<()> {
    Err(error!(Unsupported; "PORT command not supported"))
}

/// `SERIAL ON rate`, `SERIAL SEND n` or `SERIAL REC V`
fn serial(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    match args.get_word_from_list(&["ON", "SEND", "REC"])?.as_str() {
        "ON" => {
            let rate = args.get_numeric()?;
            env.serial.setup(rate.max(0) as u32);
        }
        "SEND" => {
            let value = args.get_numeric()?;
            env.serial.write(value.rem_euclid(256) as u8);
        }
        _ => {
            let value = env.serial.read();
            args.set_numeric_variable(value as i64)?;
        }
    }
    Ok(())
}

/// `SOUND frequency tenths`
fn sound(args: &mut ArgumentList, env: &mut Env) -> Result<()> {
    let frequency = args.get_numeric()?.rem_euclid(0x10000) as u16;
    let tenths = args.get_numeric()?;
    env.speaker
        .play_tone(frequency, tenths.max(0).min(u16::max_value() as i64) as u16);
    let paused = env.delay(tenths);
    env.speaker.stop();
    paused
}
