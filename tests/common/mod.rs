#![allow(dead_code)]

use mikeos_basic::config::Config;
use mikeos_basic::dev::{Capture, Debugger, Recording, Resume, VirtualDisk};
use mikeos_basic::lang::{Error, ErrorCode};
use mikeos_basic::mach::{Env, Event, Runtime, Var};
use std::cell::RefCell;
use std::rc::Rc;

/// What the debugger was told.
#[derive(Debug, Default)]
pub struct Journal {
    pub errors: Vec<ErrorCode>,
    pub breakpoints: usize,
    pub exits: usize,
}

/// Stops the program on the first error, like the default tracer.
pub struct Recorder {
    journal: Rc<RefCell<Journal>>,
}

impl Debugger for Recorder {
    fn breakpoint(&mut self, _var: &Var) -> Resume {
        self.journal.borrow_mut().breakpoints += 1;
        Resume::Continue
    }

    fn program_exit(&mut self, _var: &Var) -> Resume {
        self.journal.borrow_mut().exits += 1;
        Resume::Continue
    }

    fn error(&mut self, error: &Error, _var: &Var) -> Resume {
        self.journal.borrow_mut().errors.push(error.code());
        Resume::Stop
    }
}

pub struct Machine {
    pub runtime: Runtime,
    pub screen: Rc<RefCell<Recording>>,
    pub journal: Rc<RefCell<Journal>>,
}

pub fn machine() -> Machine {
    machine_with_disk(VirtualDisk::new())
}

pub fn machine_with_disk(disk: VirtualDisk) -> Machine {
    let config = Config::default();
    let display = Capture::new(&config);
    let screen = display.recording();
    let journal = Rc::new(RefCell::new(Journal::default()));
    let env = Env::new(&config)
        .with_display(Box::new(display))
        .with_disk(Box::new(disk))
        .with_seed(1);
    let runtime = Runtime::new(env).with_debugger(Box::new(Recorder {
        journal: Rc::clone(&journal),
    }));
    Machine {
        runtime,
        screen,
        journal,
    }
}

impl Machine {
    pub fn load(&mut self, program: &str) {
        self.runtime.load_program(program.as_bytes()).unwrap();
    }

    pub fn enter(&mut self, line: &str) -> Event {
        self.runtime.enter(line)
    }

    pub fn numeric(&self, name: char) -> u16 {
        self.runtime.env().var.get_numeric(name).unwrap()
    }

    pub fn string(&self, name: &str) -> String {
        self.runtime.env().var.get_string(name).unwrap()
    }

    pub fn errors(&self) -> Vec<ErrorCode> {
        self.journal.borrow().errors.clone()
    }

    /// Output printed since the last call.
    pub fn output(&self) -> String {
        std::mem::take(&mut self.screen.borrow_mut().output)
    }
}

/// Load, run and return what was printed.
pub fn run(program: &str) -> Machine {
    let mut m = machine();
    m.load(program);
    exec(&mut m);
    m
}

pub fn exec(m: &mut Machine) -> String {
    exec_n(m, 5000)
}

pub fn exec_n(m: &mut Machine, cycles: usize) -> String {
    m.runtime.run();
    let event = m.runtime.execute(cycles);
    let mut s = m.output();
    if event == Event::Running {
        s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
    }
    s
}
