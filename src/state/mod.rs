//! Application state module

mod focus;
mod forms;

pub use focus::*;
pub use forms::*;
