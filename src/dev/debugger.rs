use crate::lang::Error;
use crate::mach::Var;
use log::{debug, error, info};

/// What the interpreter does after handing control to a debugger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resume {
    /// Carry on with the next line.
    Continue,
    /// End the running program and wait for commands.
    Stop,
    /// Shut the interpreter down.
    Halt,
    /// Run a line of BASIC, then ask again.
    Execute(String),
}

/// ## Debugger collaborator
///
/// Called on `BREAK`, when a program ends, and for every error the
/// interpreter does not handle itself.
pub trait Debugger {
    fn breakpoint(&mut self, var: &Var) -> Resume;
    fn program_exit(&mut self, var: &Var) -> Resume;
    fn error(&mut self, error: &Error, var: &Var) -> Resume;
}

/// Every variable the store knows, one per line.
pub fn dump(var: &Var) -> Vec<String> {
    let mut lines = vec![];
    match var.dump_numeric() {
        Ok(mut numeric) => lines.append(&mut numeric),
        Err(e) => lines.push(e.to_string()),
    }
    match var.dump_string() {
        Ok(mut strings) => lines.append(&mut strings),
        Err(e) => lines.push(e.to_string()),
    }
    lines.append(&mut var.dump_runtime());
    lines.append(&mut var.dump_palette());
    lines
}

/// Logs and never stops to ask. Errors end the running program.
#[derive(Debug, Default)]
pub struct Tracer;

impl Debugger for Tracer {
    fn breakpoint(&mut self, _var: &Var) -> Resume {
        info!("Breakpoint hit.");
        Resume::Continue
    }

    fn program_exit(&mut self, var: &Var) -> Resume {
        info!("Program exit.");
        for line in dump(var) {
            debug!("{}", line);
        }
        Resume::Continue
    }

    fn error(&mut self, e: &Error, _var: &Var) -> Resume {
        error!("{}", e);
        Resume::Stop
    }
}
