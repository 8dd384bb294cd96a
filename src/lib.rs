//! Fixed-tick grid snake: simulation engine plus a thin terminal front end.
//!
//! The engine ([`game::GameState`]) owns the whole session and is driven by
//! a [`scheduler::TickScheduler`] fed with monotonic timestamps, so it runs
//! headless in tests.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
