#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod minefield;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod session;
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use minefield::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
pub use ui::*;
