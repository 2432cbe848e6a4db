//! Core types and definitions for the TANKWAR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, layouts, state snapshots, events,
//! and constants. It has no dependency on the ECS or any frontend.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod state;
pub mod types;
