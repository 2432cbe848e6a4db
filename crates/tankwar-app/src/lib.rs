//! TANKWAR terminal application.
//!
//! Wires the simulation crates to a crossterm frontend and runs the
//! name prompt, map menu, match and results screens in a loop.

pub mod assets;
pub mod frontend;
pub mod game_loop;
pub mod terminal;

pub use tankwar_core as core;
