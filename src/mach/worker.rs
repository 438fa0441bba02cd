use super::{Event, Runtime, State};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::debug;
use std::thread::JoinHandle;

/// Control messages for the interpreter thread. These are not BASIC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Run one interactive line.
    Line(String),
    /// Start the resident program.
    Run,
    Halt,
}

/// ## Interpreter thread
///
/// The runtime is built on the worker thread and never leaves it.
/// Lines arrive in order over an unbounded channel. While a program is
/// running the queue is polled between lines so interactive commands
/// interleave with it. The worker answers `Ready` after every line,
/// `Finished` when the program ends and `Halted` as its last word.
pub struct Worker {
    sender: Sender<Message>,
    events: Receiver<Event>,
    handle: JoinHandle<()>,
}

impl Worker {
    pub fn spawn<F>(build: F) -> std::io::Result<Worker>
    where
        F: FnOnce() -> Runtime + Send + 'static,
    {
        let (sender, messages) = unbounded();
        let (reply, events) = unbounded();
        let handle = std::thread::Builder::new()
            .name("interpreter".into())
            .spawn(move || serve(build(), messages, reply))?;
        Ok(Worker {
            sender,
            events,
            handle,
        })
    }

    pub fn sender(&self) -> Sender<Message> {
        self.sender.clone()
    }

    /// False once the interpreter thread has gone.
    pub fn send(&self, message: Message) -> bool {
        self.sender.send(message).is_ok()
    }

    pub fn events(&self) -> &Receiver<Event> {
        &self.events
    }

    pub fn join(self) {
        drop(self.sender);
        if self.handle.join().is_err() {
            log::error!("interpreter thread panicked");
        }
    }
}

fn serve(mut runtime: Runtime, messages: Receiver<Message>, reply: Sender<Event>) {
    loop {
        let message = match runtime.state() {
            State::Halted => break,
            State::RunningResident => match messages.try_recv() {
                Ok(message) => message,
                Err(TryRecvError::Empty) => {
                    match runtime.execute(1) {
                        Event::Finished => {
                            let _ = reply.send(Event::Finished);
                        }
                        Event::Halted => break,
                        _ => {}
                    }
                    continue;
                }
                Err(TryRecvError::Disconnected) => break,
            },
            _ => match messages.recv() {
                Ok(message) => message,
                Err(_) => break,
            },
        };
        debug!("worker: {:?}", message);
        match message {
            Message::Line(line) => match runtime.enter(&line) {
                Event::Halted => break,
                event => {
                    let _ = reply.send(event);
                }
            },
            Message::Run => runtime.run(),
            Message::Halt => runtime.halt(),
        }
    }
    let _ = reply.send(Event::Halted);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(program: &'static [u8]) -> Worker {
        Worker::spawn(move || {
            let mut runtime = Runtime::default();
            runtime.load_program(program).unwrap();
            runtime
        })
        .unwrap()
    }

    #[test]
    fn test_lines_in_order() {
        let w = worker(b"");
        assert!(w.send(Message::Line("A = 1".into())));
        assert!(w.send(Message::Line("A = A + 1".into())));
        assert_eq!(w.events().recv().unwrap(), Event::Ready);
        assert_eq!(w.events().recv().unwrap(), Event::Ready);
        w.send(Message::Halt);
        assert_eq!(w.events().recv().unwrap(), Event::Halted);
        w.join();
    }

    #[test]
    fn test_run_to_finish() {
        let w = worker(b"A = 1\nB = 2\n");
        w.send(Message::Run);
        assert_eq!(w.events().recv().unwrap(), Event::Finished);
        w.send(Message::Halt);
        assert_eq!(w.events().recv().unwrap(), Event::Halted);
        w.join();
    }

    #[test]
    fn test_halt_while_running() {
        let w = worker(b"L:\nGOTO L\n");
        w.send(Message::Run);
        w.send(Message::Halt);
        assert_eq!(w.events().recv().unwrap(), Event::Halted);
        w.join();
    }
}
