pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{Result, TallyError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
