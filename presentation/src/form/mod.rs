//! Interactive form mode

pub mod command;
pub mod repl;
