use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use log::LevelFilter;
use mikeos_basic::config::Config;
use mikeos_basic::dev::VirtualDisk;
use mikeos_basic::mach::{Env, Event, Message, Runtime, Worker, POLL_INTERVAL};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod debugger;
mod display;

use crossbeam_channel::RecvTimeoutError;
use debugger::Console;
use display::TermDisplay;

#[derive(Parser)]
#[command(name = "mikeos-basic", version)]
/// MikeOS BASIC on a simulated 16-bit machine
///
/// With a PROGRAM the program runs first. Afterwards lines typed at the
/// prompt run immediately; /RUN starts the program again and /EXIT quits.
struct Args {
    /// BASIC program to load.
    program: Option<PathBuf>,
    /// Address the program is loaded at, decimal or 0x hex.
    #[arg(long, default_value = "0x8000", value_parser = parse_address)]
    load_point: usize,
    /// Host directory used as the disk.
    #[arg(long)]
    disk: Option<PathBuf>,
    /// Enter the debugger on errors.
    #[arg(long)]
    debug: bool,
    /// Enter the debugger when a program ends.
    #[arg(long)]
    debug_on_exit: bool,
    /// error, warn, info, debug or trace. RUST_LOG overrides.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_address(val: &str) -> Result<usize, String> {
    let parsed = match val.strip_prefix("0x").or_else(|| val.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => val.parse::<usize>(),
    };
    match parsed {
        Ok(address) if address < 0x10000 => Ok(address),
        Ok(_) => Err("address must be below 0x10000".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

pub fn main() {
    let args = Args::parse();
    let level = args.log_level.parse().unwrap_or(LevelFilter::Warn);
    if let Err(error) = simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
    {
        eprintln!("{}", error);
    }
    let exited = Arc::new(AtomicBool::new(false));
    let int_moved = exited.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(args, exited) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: Args, exited: Arc<AtomicBool>) -> std::io::Result<()> {
    let config = Config {
        load_point: args.load_point,
        debug_on_exit: args.debug_on_exit,
        ..Config::default()
    };
    let program = match &args.program {
        Some(path) => Some(std::fs::read(path)?),
        None => None,
    };
    let disk = match &args.disk {
        Some(dir) => VirtualDisk::from_dir(dir)?,
        None => VirtualDisk::new(),
    };
    let banner = format!("MikeOS BASIC {}", config.version_string);
    let debug = args.debug;
    let flag = exited.clone();
    let worker = Worker::spawn(move || {
        let display = TermDisplay::new(&config, flag.clone());
        let env = Env::new(&config)
            .with_display(Box::new(display))
            .with_disk(Box::new(disk))
            .with_exit_flag(flag);
        let mut runtime =
            Runtime::new(env).with_debugger(Box::new(Console::new(debug, config.debug_on_exit)));
        if let Some(program) = program {
            if let Err(error) = runtime.load_program(&program) {
                log::error!("{}", error);
            }
        }
        runtime
    })?;

    println!("{}", Style::new().bold().paint(banner));
    let mut alive = true;
    if args.program.is_some() {
        alive = worker.send(Message::Run) && wait(&worker, &exited);
    }
    let command = Interface::new("MikeOS")?;
    command.set_prompt("> ")?;
    while alive {
        let line = match command.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if exited.load(Ordering::SeqCst) {
            break;
        }
        match line.trim().to_ascii_uppercase().as_str() {
            "" => continue,
            "/EXIT" => break,
            "/RUN" => alive = worker.send(Message::Run) && wait(&worker, &exited),
            _ => {
                command.add_history_unique(line.clone());
                alive = worker.send(Message::Line(line)) && wait(&worker, &exited);
            }
        }
    }
    if !alive {
        command.write_fmt(format_args!("{}\n", Style::new().bold().paint("HALTED")))?;
    }
    worker.send(Message::Halt);
    worker.join();
    Ok(())
}

/// Block until the interpreter is ready for another line. False once
/// it has halted. Ctrl-C halts a program stuck in a loop.
fn wait(worker: &Worker, exited: &AtomicBool) -> bool {
    loop {
        match worker.events().recv_timeout(POLL_INTERVAL) {
            Ok(Event::Ready) | Ok(Event::Finished) => return true,
            Ok(Event::Halted) => return false,
            Ok(Event::Running) => {}
            Err(RecvTimeoutError::Timeout) => {
                if exited.load(Ordering::SeqCst) {
                    worker.send(Message::Halt);
                }
            }
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }
}
