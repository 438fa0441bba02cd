//! ## Command registry
//!
//! Commands are plain functions grouped by what they touch. A line is
//! dispatched on the type of its first token: numeric and string
//! variables are assignments, words are looked up here.

use super::{ArgumentList, Env};
use crate::error;
use crate::lang::{Error, Token};
use log::trace;
use std::collections::HashMap;

mod builtin;
mod control;
mod data;
mod disk;
mod hardware;
mod key;
mod screen;
mod string;

type Result<T> = std::result::Result<T, Error>;

pub type Routine = fn(&mut ArgumentList, &mut Env) -> Result<()>;

const GROUPS: [&[(&str, Routine)]; 7] = [
    screen::COMMANDS,
    control::COMMANDS,
    disk::COMMANDS,
    string::COMMANDS,
    key::COMMANDS,
    hardware::COMMANDS,
    data::COMMANDS,
];

pub struct Registry {
    commands: HashMap<&'static str, Routine>,
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

impl Registry {
    pub fn new() -> Registry {
        let mut commands = HashMap::new();
        for group in GROUPS.iter() {
            for (name, routine) in group.iter() {
                trace!("REGISTER COMMAND: {}", name);
                commands.insert(*name, *routine);
            }
        }
        Registry { commands }
    }

    /// Run one command. Leading labels and comments are skipped.
    pub fn dispatch(&self, args: &mut ArgumentList, env: &mut Env) -> Result<()> {
        while args.has_non_semantic() {
            args.next();
        }
        match args.peek() {
            None => Ok(()),
            Some(Token::NumericVariable(_)) => builtin::assign(args, env),
            Some(Token::StringVariable(_)) => builtin::build_string(args, env),
            Some(Token::Word(_)) => {
                let word = args.get_word()?;
                match self.commands.get(word.as_str()) {
                    Some(routine) => routine(args, env),
                    None => Err(error!(SyntaxError; format!("Unknown command: \"{}\"", word))),
                }
            }
            Some(_) => Err(error!(SyntaxError; "Line does not contain a command or assignment")),
        }
    }
}
