//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage and from the
//! history so the state machine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, detect_winner, winning_lines};
