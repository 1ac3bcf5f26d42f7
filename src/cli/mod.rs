//! Terminal front-end: parses typed commands, drives a `Game`, draws the board.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use render::{Highlight, render};
pub use session::Session;
