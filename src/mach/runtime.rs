use super::{var, ArgumentList, Env, Registry};
use crate::config::Config;
use crate::dev::{Debugger, Resume, Tracer};
use crate::error;
use crate::lang::{Error, Line};
use log::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    RunningInteractive,
    RunningResident,
    Halted,
}

/// What happened during `execute` or `enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out with the program still going.
    Running,
    /// Waiting for commands.
    Ready,
    /// The resident program ended.
    Finished,
    Halted,
}

/// ## BASIC machine
///
/// Interactive lines go through `enter`. A program loaded with
/// `load_program` and started with `run` is stepped by `execute`,
/// one line per cycle, fetching each line from memory.
pub struct Runtime {
    env: Env,
    registry: Registry,
    debugger: Box<dyn Debugger>,
    state: State,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Env::new(&Config::default()))
    }
}

impl Runtime {
    pub fn new(env: Env) -> Runtime {
        Runtime {
            env,
            registry: Registry::new(),
            debugger: Box::new(Tracer::default()),
            state: State::Idle,
        }
    }

    pub fn with_debugger(self, debugger: Box<dyn Debugger>) -> Runtime {
        Runtime { debugger, ..self }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Copy program text to the load point and point the machine at it.
    pub fn load_program(&mut self, text: &[u8]) -> Result<()> {
        let load_point = self.env.config.load_point;
        let written = self.env.memory.borrow_mut().write_data(load_point, text)?;
        if written < text.len() {
            return Err(error!(OutOfMemory; "Program too large"));
        }
        self.env.var.set_runtime(var::PROG_SIZE, written as i64);
        self.rewind();
        Ok(())
    }

    fn rewind(&mut self) {
        let load_point = self.env.config.load_point;
        self.env.program_counter = load_point;
        self.env.next_line_address = load_point;
        self.env.reset_control_flow();
    }

    /// Start stepping through the program from the next line address.
    pub fn run(&mut self) {
        if self.state != State::Halted {
            self.env.program_finished = false;
            self.state = State::RunningResident;
        }
    }

    pub fn halt(&mut self) {
        self.state = State::Halted;
    }

    /// Decode and run one line, including whatever IF or ELSE leave
    /// pending. Errors are returned, not reported.
    pub fn execute_line(&mut self, text: &str) -> Result<()> {
        let line = Line::new(text)?;
        let mut args = ArgumentList::new(line.into_semantic_tokens(), self.env.var.clone());
        self.registry.dispatch(&mut args, &mut self.env)?;
        while let Some(mut pending) = self.env.next_command.take() {
            if self.env.program_finished {
                break;
            }
            self.registry.dispatch(&mut pending, &mut self.env)?;
        }
        Ok(())
    }

    /// Run an interactive line. Errors go to the debugger.
    pub fn enter(&mut self, text: &str) -> Event {
        let resume_state = match self.state {
            State::Halted => return Event::Halted,
            State::RunningInteractive => State::Idle,
            state => state,
        };
        self.state = State::RunningInteractive;
        let result = self.execute_line(text);
        let event = self.settle(result);
        if self.state == State::RunningInteractive {
            self.state = resume_state;
        }
        event.unwrap_or(Event::Ready)
    }

    /// Run up to `cycles` lines of the resident program.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            match self.state {
                State::Halted => return Event::Halted,
                State::Idle | State::RunningInteractive => return Event::Ready,
                State::RunningResident => {}
            }
            let result = self.cycle();
            if let Some(event) = self.settle(result) {
                return event;
            }
        }
        match self.state {
            State::Halted => Event::Halted,
            State::RunningResident => Event::Running,
            _ => Event::Ready,
        }
    }

    fn cycle(&mut self) -> Result<()> {
        let end = self.env.program_end();
        let address = self.env.next_line_address;
        if address >= end {
            return Err(error!(EndOfProgram, address));
        }
        let text = self.env.memory.borrow().read_line(address, end)?;
        let next = match self.env.memory.borrow().find_next_line(address) {
            Ok(next) => next.min(end),
            Err(_) => end,
        };
        self.env.program_counter = address;
        self.env.next_line_address = next;
        debug!("{:04X} {}", address, text);
        self.execute_line(&text).map_err(|e| e.in_address(address))
    }

    /// Apply the outcome of a line: end of program, `END`, `BREAK`,
    /// or an error for the debugger. `Some` stops the current call.
    fn settle(&mut self, result: Result<()>) -> Option<Event> {
        match result {
            Err(e) if e.is_end_of_program() => return Some(self.program_exit()),
            Err(e) if e.is_fatal() => {
                warn!("{}", e);
                self.state = State::Halted;
                return Some(Event::Halted);
            }
            Err(e) => {
                let resume = self.consult(|debugger, var| debugger.error(&e, var));
                if let Some(event) = self.resume(resume) {
                    return Some(event);
                }
            }
            Ok(()) => {}
        }
        if self.env.break_requested {
            self.env.break_requested = false;
            let resume = self.consult(|debugger, var| debugger.breakpoint(var));
            if let Some(event) = self.resume(resume) {
                return Some(event);
            }
        }
        if self.env.program_finished {
            return Some(self.program_exit());
        }
        None
    }

    fn program_exit(&mut self) -> Event {
        self.env.program_finished = true;
        let resume = self.consult(|debugger, var| debugger.program_exit(var));
        if resume == Resume::Halt {
            self.state = State::Halted;
            return Event::Halted;
        }
        self.finish()
    }

    fn finish(&mut self) -> Event {
        self.rewind();
        self.state = State::Idle;
        Event::Finished
    }

    fn resume(&mut self, resume: Resume) -> Option<Event> {
        match resume {
            Resume::Halt => {
                self.state = State::Halted;
                Some(Event::Halted)
            }
            Resume::Stop if self.state == State::RunningInteractive => None,
            Resume::Stop => Some(self.finish()),
            _ => None,
        }
    }

    /// Ask the debugger until it answers with something other than a
    /// line to execute.
    fn consult<F>(&mut self, mut ask: F) -> Resume
    where
        F: FnMut(&mut dyn Debugger, &super::Var) -> Resume,
    {
        loop {
            let var = self.env.var.clone();
            match ask(self.debugger.as_mut(), &*var) {
                Resume::Execute(line) => {
                    if let Err(e) = self.execute_line(&line) {
                        if e.is_fatal() {
                            return Resume::Halt;
                        }
                        self.env.display.print(&e.to_string(), None);
                        self.env.display.newline();
                    }
                }
                resume => return resume,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_run() {
        let mut r = Runtime::default();
        r.load_program(b"A = 1\n").unwrap();
        assert_eq!(r.execute(10), Event::Ready);
        r.run();
        assert_eq!(r.execute(10), Event::Finished);
        assert_eq!(r.env().var.get_numeric('A').unwrap(), 1);
        assert_eq!(r.state(), State::Idle);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut r = Runtime::default();
        r.load_program(b"A = 1\nB = 2").unwrap();
        r.run();
        assert_eq!(r.execute(10), Event::Finished);
        assert_eq!(r.env().var.get_numeric('B').unwrap(), 2);
    }

    #[test]
    fn test_cycle_budget() {
        let mut r = Runtime::default();
        r.load_program(b"L:\nGOTO L\n").unwrap();
        r.run();
        assert_eq!(r.execute(50), Event::Running);
        r.halt();
        assert_eq!(r.execute(50), Event::Halted);
        assert_eq!(r.enter("A = 1"), Event::Halted);
    }

    #[test]
    fn test_error_stops_program() {
        let mut r = Runtime::default();
        r.load_program(b"A = 1\nBOGUS\nA = 2\n").unwrap();
        r.run();
        assert_eq!(r.execute(10), Event::Finished);
        assert_eq!(r.env().var.get_numeric('A').unwrap(), 1);
    }

    #[test]
    fn test_interactive_error_keeps_ready() {
        let mut r = Runtime::default();
        assert_eq!(r.enter("BOGUS"), Event::Ready);
        assert_eq!(r.state(), State::Idle);
        assert!(r.execute_line("BOGUS").is_err());
    }
}
