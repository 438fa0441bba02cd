/*!
## Rust Machine Module

The simulated 16-bit MikeOS machine. Program text and variables live in
64K of memory, commands run one line at a time against an `Env`.

*/

mod arg;
mod arglist;
mod colour;
mod command;
pub mod cp437;
mod env;
pub mod keyword;
mod memory;
mod runtime;
mod stack;
pub mod var;
mod worker;

pub use arg::Argument;
pub use arglist::ArgumentList;
pub use colour::{Palette, PalettePair};
pub use command::{Registry, Routine};
pub use env::{Env, ForVariable, POLL_INTERVAL};
pub use memory::{Memory, MEMORY_SIZE};
pub use runtime::{Event, Runtime, State};
pub use stack::Stack;
pub use var::Var;
pub use worker::{Message, Worker};
