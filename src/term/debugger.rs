use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult};
use mikeos_basic::dev::{dump, Debugger, Resume};
use mikeos_basic::lang::Error;
use mikeos_basic::mach::Var;

const HELP: &str = "c: continue  s: stop  v: variables  q: quit  .LINE: execute LINE";

/// ## Interactive debugger
///
/// Reads commands on the terminal until told to continue. Errors only
/// stop here with `--debug`; otherwise they end the program.
pub struct Console {
    interface: Option<Interface<linefeed::DefaultTerminal>>,
    on_error: bool,
    on_exit: bool,
}

impl Console {
    pub fn new(on_error: bool, on_exit: bool) -> Console {
        Console {
            interface: None,
            on_error,
            on_exit,
        }
    }

    fn say(&self, text: &str) {
        println!("{}", Style::new().bold().paint(text));
    }

    fn read(&mut self) -> Option<String> {
        if self.interface.is_none() {
            match Interface::new("debug") {
                Ok(interface) => {
                    let _ = interface.set_prompt("debug> ");
                    self.interface = Some(interface);
                }
                Err(e) => {
                    log::error!("debugger: {}", e);
                    return None;
                }
            }
        }
        let interface = self.interface.as_ref()?;
        match interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                interface.add_history_unique(line.clone());
                Some(line)
            }
            Ok(_) => None,
            Err(e) => {
                log::error!("debugger: {}", e);
                None
            }
        }
    }

    fn prompt(&mut self, var: &Var) -> Resume {
        loop {
            let line = match self.read() {
                Some(line) => line,
                None => return Resume::Halt,
            };
            let line = line.trim();
            if let Some(basic) = line.strip_prefix('.') {
                return Resume::Execute(basic.to_string());
            }
            match line {
                "c" => return Resume::Continue,
                "s" => return Resume::Stop,
                "q" => return Resume::Halt,
                "v" => {
                    for entry in dump(var) {
                        println!("{}", entry);
                    }
                }
                _ => println!("{}", HELP),
            }
        }
    }
}

impl Debugger for Console {
    fn breakpoint(&mut self, var: &Var) -> Resume {
        self.say("Breakpoint hit.");
        self.prompt(var)
    }

    fn program_exit(&mut self, var: &Var) -> Resume {
        if !self.on_exit {
            return Resume::Continue;
        }
        self.say("Program exit.");
        self.prompt(var)
    }

    fn error(&mut self, error: &Error, var: &Var) -> Resume {
        println!("{}", Colour::Red.bold().paint(error.to_string()));
        if self.on_error {
            self.prompt(var)
        } else {
            Resume::Stop
        }
    }
}
