pub mod cell;
pub mod config;
pub mod cursor;
pub mod draw;
pub mod engine;
pub mod error;
pub mod events;
pub mod grid;
pub mod io;
pub mod rule;
pub mod session;
pub mod view;
