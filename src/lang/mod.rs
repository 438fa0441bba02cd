/*!
# Rust Language Module

This Rust module provides lexical analysis of the MikeOS BASIC language.
A source line is split into words which are then classified into tokens.
Nothing is evaluated here; see the machine module for that.

*/

#[macro_use]
mod error;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{decode, lex, split};
pub use line::Line;
pub use token::{Token, TokenType};
