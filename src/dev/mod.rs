/*!
## Rust Device Module

The machine talks to the outside world through the collaborators in
this module: a text display, a disk, a speaker, a serial port and a
debugger. Each has a headless implementation so the interpreter can
run without a terminal.

*/

mod debugger;
mod disk;
mod display;
mod serial;
mod sound;

pub use debugger::{dump, Debugger, Resume, Tracer};
pub use disk::{Filesystem, VirtualDisk};
pub use display::{Capture, Cell, DialogStyle, Display, Position, Recording, Screen};
pub use display::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
pub use serial::SerialPort;
pub use sound::{Silent, Speaker};
