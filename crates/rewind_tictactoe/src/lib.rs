//! Tic-tac-toe on an N×N board with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **Snapshots**: immutable boards with their outcome precomputed
//! - **Game**: a [`GameState`] value holding the history and a cursor
//! - **Views**: status line and move list for presentation layers
//! - **Invariants**: properties every reachable history satisfies
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let game = GameState::new(3)?
//!     .apply_move(0)
//!     .apply_move(1)
//!     .apply_move(4)
//!     .apply_move(2)
//!     .apply_move(8);
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winning_line(), Some(&[0, 4, 8][..]));
//!
//! // Go back two moves and play somewhere else: the old future is dropped.
//! let branch = game.jump_to(3)?.apply_move(6);
//! assert_eq!(branch.history().len(), 5);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{GameError, Move, MoveError};
pub use game::GameState;
pub use rules::{Win, detect_winner, is_draw, is_full, winning_lines};
pub use snapshot::Snapshot;
pub use types::{Board, MAX_SIZE, Player, Square};
pub use view::{GameStatus, MoveDescription};
