//! Rules engine for a chess variant with three extra pieces: the archer,
//! the wizard and the catapult.
//!
//! [`engine`] holds the board, the movement rules, move generation, threat
//! analysis and the undo-capable game controller. [`cli`] is a small text
//! front-end on top of it.

pub mod cli;
pub mod config;
pub mod engine;
