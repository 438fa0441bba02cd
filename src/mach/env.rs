use super::{ArgumentList, Memory, Stack, Var};
use crate::config::Config;
use crate::dev::{Capture, Display, Filesystem, SerialPort, Silent, Speaker, VirtualDisk};
use crate::error;
use crate::lang::{Error, ErrorCode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// How often blocking commands look at the exit flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One active FOR loop. The counter itself lives in the numeric variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForVariable {
    pub name: char,
    pub end: i64,
    pub resume: usize,
}

/// ## Execution context
///
/// Everything a command handler may touch. Owned by the interpreter
/// thread; the only thing shared with other threads is `exited`.
pub struct Env {
    pub memory: Rc<RefCell<Memory>>,
    pub var: Rc<Var>,
    pub config: Config,
    pub display: Box<dyn Display>,
    pub disk: Box<dyn Filesystem>,
    pub speaker: Box<dyn Speaker>,
    pub serial: SerialPort,
    pub rng: StdRng,
    exited: Arc<AtomicBool>,
    pub program_counter: usize,
    pub next_line_address: usize,
    pub do_stack: Stack<usize>,
    pub gosub_stack: Stack<usize>,
    pub for_variables: HashMap<char, ForVariable>,
    pub last_if_true: bool,
    pub next_command: Option<ArgumentList>,
    /// Set by `END`.
    pub program_finished: bool,
    /// Set by `BREAK`.
    pub break_requested: bool,
}

impl Env {
    /// A headless machine: `Capture` display, empty `VirtualDisk`, `Silent` speaker.
    pub fn new(config: &Config) -> Env {
        let memory = Rc::new(RefCell::new(Memory::new()));
        let var = Rc::new(Var::new(Rc::clone(&memory), config));
        Env {
            memory,
            var,
            config: config.clone(),
            display: Box::new(Capture::new(config)),
            disk: Box::new(VirtualDisk::new()),
            speaker: Box::new(Silent::default()),
            serial: SerialPort::new(),
            rng: StdRng::from_entropy(),
            exited: Arc::default(),
            program_counter: config.load_point,
            next_line_address: config.load_point,
            do_stack: Stack::new("DO NESTED TOO DEEP", ErrorCode::LoopWithoutDo),
            gosub_stack: Stack::new("GOSUB NESTED TOO DEEP", ErrorCode::ReturnWithoutGosub),
            for_variables: HashMap::new(),
            last_if_true: true,
            next_command: None,
            program_finished: false,
            break_requested: false,
        }
    }

    pub fn with_display(self, display: Box<dyn Display>) -> Env {
        Env { display, ..self }
    }

    pub fn with_disk(self, disk: Box<dyn Filesystem>) -> Env {
        Env { disk, ..self }
    }

    pub fn with_speaker(self, speaker: Box<dyn Speaker>) -> Env {
        Env { speaker, ..self }
    }

    pub fn with_exit_flag(self, exited: Arc<AtomicBool>) -> Env {
        Env { exited, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Env {
        Env {
            rng: StdRng::seed_from_u64(seed),
            ..self
        }
    }

    pub fn exit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.exited)
    }

    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }

    pub fn check_cancelled(&self) -> Result<()> {
        if self.has_exited() {
            Err(error!(Cancelled))
        } else {
            Ok(())
        }
    }

    /// Forget loops, subroutines and pending commands.
    pub fn reset_control_flow(&mut self) {
        self.do_stack.clear();
        self.gosub_stack.clear();
        self.for_variables.clear();
        self.last_if_true = true;
        self.next_command = None;
        self.program_finished = false;
        self.break_requested = false;
    }

    /// Sleep in `POLL_INTERVAL` steps.
    pub fn delay(&self, tenths: i64) -> Result<()> {
        let ticks = tenths.max(0) * 2;
        for _ in 0..ticks {
            self.check_cancelled()?;
            std::thread::sleep(POLL_INTERVAL);
        }
        self.check_cancelled()
    }

    pub fn wait_key(&mut self) -> Result<u16> {
        loop {
            self.check_cancelled()?;
            let key = self.display.read_char(false)?;
            if key != 0 {
                return Ok(key);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// First byte past the loaded program.
    pub fn program_end(&self) -> usize {
        self.config.load_point + self.var.runtime(super::var::PROG_SIZE).max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_cancelled() {
        let env = Env::new(&Config::default());
        env.exit_flag().store(true, Ordering::SeqCst);
        assert_eq!(env.delay(100).unwrap_err().code(), ErrorCode::Cancelled);
    }

    #[test]
    fn test_delay_zero() {
        let env = Env::new(&Config::default());
        assert!(env.delay(0).is_ok());
    }

    #[test]
    fn test_memory_is_shared_with_variables() {
        let env = Env::new(&Config::default());
        env.var.set_numeric('A', 0x1234).unwrap();
        assert_eq!(env.memory.borrow().read_word(0xF000).unwrap(), 0x1234);
    }
}
