//! # MikeOS BASIC
//!
//! The BASIC interpreter of MikeOS 4.7 running on a simulated 16-bit
//! machine with 64K of memory.
//!
//! Programs are plain text loaded at `0x8000` and executed a line at a
//! time. There are 26 numeric variables `A` to `Z` holding unsigned
//! 16-bit words and eight string variables `$1` to `$8`. Expressions
//! are evaluated strictly left to right.
//!
//! ```
//! use mikeos_basic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.load_program(b"A = 1\nA = A - 2\n").unwrap();
//! runtime.run();
//! assert_eq!(runtime.execute(100), Event::Finished);
//! assert_eq!(runtime.env().var.get_numeric('A').unwrap(), 65535);
//! ```
//!
//! Begin by opening a terminal and running the executable with the
//! name of a program. Without one you get a prompt where lines of
//! BASIC run immediately. `/RUN` starts the loaded program and `/EXIT`
//! leaves.

pub mod config;
pub mod dev;
pub mod lang;
pub mod mach;
