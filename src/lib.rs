//! # Canvas Connect Four
//!
//! Two-player Connect Four drawn on a mouse-driven terminal canvas. The board
//! is a pair of 42-bit occupancy bitboards checked against precomputed
//! winning-line masks.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: bitboards, win masks, board, game session
//! - [`ui`]: Presentation loop: geometry, drawing surface, canvas app
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed tracing subscriber
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
