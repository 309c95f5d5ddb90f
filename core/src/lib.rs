#![no_std]

extern crate alloc;

pub use board::*;
pub use error::*;
pub use model::*;
pub use selector::*;
pub use session::*;
pub use types::*;

mod board;
mod error;
mod model;
mod selector;
mod session;
mod types;

/// Number of category columns on a full board.
pub const BOARD_COLUMNS: Coord = 6;

/// Number of clue rows shown under every category.
pub const BOARD_ROWS: Coord = 5;

/// A category needs at least this many clues to be picked for a board.
pub const MIN_CLUES_PER_CATEGORY: u32 = BOARD_ROWS as u32;

/// How many category summaries are requested from the listing endpoint.
pub const DEFAULT_LISTING_COUNT: u32 = 100;
