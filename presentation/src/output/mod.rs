//! Report formatting for terminal output

pub mod console;
